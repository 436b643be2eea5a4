//! Note input pipeline: raw JSON → sanitized → validated
//!
//! `NoteInput` holds whatever the client sent. `sanitize()` strips markup
//! from every string field, then `validate()` checks every rule and
//! either yields `NoteFields` (safe to persist) or the full list of
//! violations.

use serde_json::Value;

use super::datetime::is_iso8601;
use super::sanitize::sanitize;
use super::validation::{ValidationError, ValidationErrors};

/// Maximum title length in characters (after sanitizing)
pub const MAX_TITLE_LEN: usize = 255;

/// A single field as received: absent, a string, or some other JSON type.
#[derive(Debug, Clone, PartialEq)]
enum RawField {
    Missing,
    Text(String),
    NotAString,
}

impl RawField {
    fn from_json(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Missing,
            Some(Value::String(s)) => Self::Text(s.clone()),
            Some(_) => Self::NotAString,
        }
    }

    fn sanitized(self) -> Self {
        match self {
            Self::Text(s) => Self::Text(sanitize(&s)),
            other => other,
        }
    }

    fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Untrusted note input as it arrived in a request body
#[derive(Debug, Clone, PartialEq)]
pub struct NoteInput {
    title: RawField,
    text: RawField,
    datetime: RawField,
}

impl NoteInput {
    /// Read the three fields out of a JSON body.
    ///
    /// Anything other than an object is treated as an object with every
    /// field missing.
    pub fn from_json(body: &Value) -> Self {
        let field = |name: &str| RawField::from_json(body.as_object().and_then(|o| o.get(name)));
        Self {
            title: field("title"),
            text: field("text"),
            datetime: field("datetime"),
        }
    }

    /// Build input from plain strings.
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        datetime: impl Into<String>,
    ) -> Self {
        Self {
            title: RawField::Text(title.into()),
            text: RawField::Text(text.into()),
            datetime: RawField::Text(datetime.into()),
        }
    }

    /// Strip markup and surrounding whitespace from every string field.
    pub fn sanitize(self) -> Self {
        Self {
            title: self.title.sanitized(),
            text: self.text.sanitized(),
            datetime: self.datetime.sanitized(),
        }
    }

    /// Check every rule, collecting all violations.
    pub fn validate(self) -> Result<NoteFields, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title_ok = self
            .title
            .as_str()
            .map(|t| (1..=MAX_TITLE_LEN).contains(&t.chars().count()))
            .unwrap_or(false);
        if !title_ok {
            errors.push(ValidationError::Title);
        }

        if self.text.as_str().is_none() {
            errors.push(ValidationError::Text);
        }

        if !self.datetime.as_str().map(is_iso8601).unwrap_or(false) {
            errors.push(ValidationError::Datetime);
        }

        match (self.title, self.text, self.datetime) {
            (RawField::Text(title), RawField::Text(text), RawField::Text(datetime))
                if errors.is_empty() =>
            {
                Ok(NoteFields {
                    title,
                    text,
                    datetime,
                })
            }
            _ => Err(errors),
        }
    }

    /// Sanitize then validate: the value that is validated is the value
    /// that would be stored.
    pub fn into_fields(self) -> Result<NoteFields, ValidationErrors> {
        self.sanitize().validate()
    }
}

/// Sanitized, validated note fields, ready for the gateway.
///
/// Only obtainable through `NoteInput::validate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFields {
    title: String,
    text: String,
    datetime: String,
}

impl NoteFields {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn datetime(&self) -> &str {
        &self.datetime
    }
}
