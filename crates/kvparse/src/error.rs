use std::io;

use thiserror::Error;

/// A syntax or policy violation found while scanning, with the character
/// offset it was found at.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing key at offset {offset}")]
    MissingKey { offset: usize },

    #[error("missing assignment operator at offset {offset}")]
    MissingAssignmentOperator { offset: usize },

    #[error("missing value for key `{key}` at offset {offset}")]
    MissingValue { key: String, offset: usize },

    #[error("missing end quote for key `{key}` at offset {offset}")]
    MissingEndQuote { key: String, offset: usize },

    #[error("incomplete key value pair at offset {offset}")]
    IncompleteKeyValuePair { offset: usize },

    #[error("invalid key `{key}` at offset {offset}")]
    InvalidKey { key: String, offset: usize },
}

/// Fieldless discriminant of [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingKey,
    MissingAssignmentOperator,
    MissingValue,
    MissingEndQuote,
    IncompleteKeyValuePair,
    InvalidKey,
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::MissingKey { .. } => ErrorKind::MissingKey,
            ParseError::MissingAssignmentOperator { .. } => ErrorKind::MissingAssignmentOperator,
            ParseError::MissingValue { .. } => ErrorKind::MissingValue,
            ParseError::MissingEndQuote { .. } => ErrorKind::MissingEndQuote,
            ParseError::IncompleteKeyValuePair { .. } => ErrorKind::IncompleteKeyValuePair,
            ParseError::InvalidKey { .. } => ErrorKind::InvalidKey,
        }
    }

    /// Zero-based character index the error refers to.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::MissingKey { offset }
            | ParseError::MissingAssignmentOperator { offset }
            | ParseError::MissingValue { offset, .. }
            | ParseError::MissingEndQuote { offset, .. }
            | ParseError::IncompleteKeyValuePair { offset }
            | ParseError::InvalidKey { offset, .. } => *offset,
        }
    }

    /// The key being parsed when the error was raised, if the error carries one.
    pub fn key(&self) -> Option<&str> {
        match self {
            ParseError::MissingValue { key, .. }
            | ParseError::MissingEndQuote { key, .. }
            | ParseError::InvalidKey { key, .. } => Some(key),
            _ => None,
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ErrorKind::MissingKey => "missing key",
            ErrorKind::MissingAssignmentOperator => "missing assignment operator",
            ErrorKind::MissingValue => "missing value",
            ErrorKind::MissingEndQuote => "missing end quote",
            ErrorKind::IncompleteKeyValuePair => "incomplete key value pair",
            ErrorKind::InvalidKey => "invalid key",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[cfg(feature = "json")]
    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

pub type Result<T> = core::result::Result<T, Error>;
