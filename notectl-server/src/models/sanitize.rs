//! Markup stripping for untrusted text fields
//!
//! `script` and `style` elements are removed together with their content,
//! comments are removed, and every other tag is removed while the text
//! between tags is kept. Passes repeat until nothing changes, so
//! fragments that reassemble into markup after one pass are caught and
//! the transform is idempotent.

use once_cell::sync::Lazy;
use regex::Regex;

/// Executable or styling elements, content included. An unclosed element
/// swallows the rest of the input.
static BLOCK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<(script|style)\b[^>]*>.*?(</(script|style)\s*>|$)")
        .expect("invalid block regex")
});

static COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?(-->|$)").expect("invalid comment regex"));

/// Any remaining open, close, doctype or processing-instruction tag. Only
/// a closed tag counts; a lone `<` is plain text.
static TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?[a-zA-Z!?][^<>]*>").expect("invalid tag regex"));

/// Remove markup, keeping plain text.
pub fn strip_markup(input: &str) -> String {
    let mut current = input.to_owned();
    loop {
        let next = strip_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn strip_once(input: &str) -> String {
    let without_blocks = BLOCK_RE.replace_all(input, "");
    let without_comments = COMMENT_RE.replace_all(&without_blocks, "");
    TAG_RE.replace_all(&without_comments, "").into_owned()
}

/// Full field transform applied to every incoming string: strip markup,
/// then trim surrounding whitespace.
pub fn sanitize(input: &str) -> String {
    strip_markup(input).trim().to_owned()
}
