//! Validation error types

use std::fmt;

/// A single violated rule on note input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Title missing, not a string, or outside 1..=255 characters
    Title,

    /// Text missing or not a string
    Text,

    /// Datetime missing, not a string, or not ISO 8601
    Datetime,

    /// Body could not be read as JSON
    MalformedBody,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title => write!(f, "Title must be a string of length 1 to 255 characters"),
            Self::Text => write!(f, "Text must be a string"),
            Self::Datetime => write!(f, "Datetime must be ISO 8601 date"),
            Self::MalformedBody => write!(f, "Request body must be valid JSON"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Accumulator for every violated rule in a request.
///
/// Rules are all evaluated; nothing short-circuits on the first failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(error: ValidationError) -> Self {
        Self(vec![error])
    }

    pub fn push(&mut self, error: ValidationError) {
        if !self.0.contains(&error) {
            self.0.push(error);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, error: ValidationError) -> bool {
        self.0.contains(&error)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Human-readable messages in the order the rules were checked
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(e: ValidationError) -> Self {
        Self::single(e)
    }
}
