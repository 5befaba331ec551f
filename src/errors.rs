//! # Error Types Module
//!
//! This module defines the error taxonomy shared by the extraction and
//! categorization components. Every variant is a recoverable precondition
//! reported upward to the caller; no condition in this system is fatal.

/// Errors surfaced by ingredient extraction and categorization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// Text supplied for extraction is blank; no extraction was performed
    EmptyInput,
    /// Categorization was requested before any extraction succeeded
    NothingExtracted,
    /// A member or index entry failed to compile into a match pattern
    Pattern(String),
    /// The reference dataset could not be read or is missing the
    /// ingredients column
    Dataset(String),
    /// A category table definition is invalid (e.g. duplicate names)
    Table(String),
}

impl std::fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractionError::EmptyInput => write!(f, "no recipe text supplied"),
            ExtractionError::NothingExtracted => write!(f, "no ingredients extracted yet"),
            ExtractionError::Pattern(msg) => write!(f, "pattern error: {msg}"),
            ExtractionError::Dataset(msg) => write!(f, "dataset error: {msg}"),
            ExtractionError::Table(msg) => write!(f, "category table error: {msg}"),
        }
    }
}

impl std::error::Error for ExtractionError {}

impl From<regex::Error> for ExtractionError {
    fn from(err: regex::Error) -> Self {
        ExtractionError::Pattern(err.to_string())
    }
}

impl From<csv::Error> for ExtractionError {
    fn from(err: csv::Error) -> Self {
        ExtractionError::Dataset(err.to_string())
    }
}
