//! ISO 8601 date/time recognition
//!
//! Accepts a calendar date, optionally followed by a time of day and a
//! zone designator:
//!
//! ```text
//! 2024-01-01
//! 2024-01-01T10:00
//! 2024-01-01 10:00:00.250
//! 2024-01-01T10:00:00Z
//! 2024-01-01T10:00:00+01:00
//! ```

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// ASCII digits only: `\d` would also admit other Unicode digit scripts.
static ISO8601_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([0-9]{4})-([0-9]{2})-([0-9]{2})(?:[T ]([0-9]{2}):([0-9]{2})(?::([0-9]{2})(?:[.,]([0-9]+))?)?(Z|z|[+-]([0-9]{2})(?::?([0-9]{2}))?)?)?$",
    )
    .expect("invalid ISO 8601 regex")
});

/// Whether `value` is a well-formed ISO 8601 date or date-time that
/// exists on the calendar.
pub fn is_iso8601(value: &str) -> bool {
    check(value).is_some()
}

fn check(value: &str) -> Option<()> {
    let caps = ISO8601_RE.captures(value)?;

    // Absent group: `Some(None)`. Present but unparseable: `None`, which
    // rejects the value instead of defaulting.
    let group = |i: usize| -> Option<Option<u32>> {
        match caps.get(i) {
            None => Some(None),
            Some(m) => m.as_str().parse().ok().map(Some),
        }
    };

    let year = i32::try_from(group(1)??).ok()?;
    NaiveDate::from_ymd_opt(year, group(2)??, group(3)??)?;

    match (group(4)?, group(5)?) {
        (Some(hour), Some(minute)) => {
            NaiveTime::from_hms_opt(hour, minute, group(6)?.unwrap_or(0))?;
        }
        (None, None) => {}
        _ => return None,
    }

    if let Some(fraction) = caps.get(7) {
        if !fraction.as_str().bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
    }

    if let Some(offset_hours) = group(9)? {
        if offset_hours > 23 || group(10)?.unwrap_or(0) > 59 {
            return None;
        }
    }

    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_forms() {
        for value in [
            "2024-01-01",
            "2024-01-01T10:00",
            "2024-01-01T10:00:00",
            "2024-01-01T10:00:00Z",
            "2024-01-01T10:00:00.123456Z",
            "2024-01-01T10:00:00,5",
            "2024-01-01 10:00:00",
            "2024-01-01T10:00:00+01:00",
            "2024-01-01T10:00:00-0530",
            "2024-01-01T10:00+02",
            "2024-02-29T23:59:59Z",
        ] {
            assert!(is_iso8601(value), "should accept {value:?}");
        }
    }

    #[test]
    fn rejects_malformed() {
        for value in [
            "",
            "yesterday",
            "2024/01/01",
            "01-01-2024",
            "2024-1-1",
            "2024-01-01T",
            "2024-01-01T10",
            "2024-01-01Z",
            "2024-01-01T10:00:00 Z",
            " 2024-01-01",
        ] {
            assert!(!is_iso8601(value), "should reject {value:?}");
        }
    }

    #[test]
    fn rejects_non_ascii_digits() {
        for value in [
            "٢٠٢٤-٠١-٠١",
            "2024-01-01T٩٩:٩٩",
            "2024-01-01T10:00:٩٩",
            "2024-01-01T10:00:00.٥",
            "2024-01-01T10:00+٩٩:٩٩",
            "２０２４-01-01",
        ] {
            assert!(!is_iso8601(value), "should reject {value:?}");
        }
    }

    #[test]
    fn rejects_impossible_values() {
        for value in [
            "2023-02-29",
            "2024-13-01",
            "2024-00-10",
            "2024-04-31",
            "2024-01-01T24:00:00",
            "2024-01-01T10:60",
            "2024-01-01T10:00:61",
            "2024-01-01T10:00:00+25:00",
            "2024-01-01T10:00:00+01:75",
        ] {
            assert!(!is_iso8601(value), "should reject {value:?}");
        }
    }
}
