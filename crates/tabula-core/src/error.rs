//! Error types for tabula-core

use thiserror::Error;

use crate::style::AttributeKind;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tabula-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed reference, range or column letters, or an index of 0
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Row index out of bounds
    #[error("Row index {0} out of bounds (max: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u32, u32),

    /// Unknown cell format index
    #[error("Invalid style index: {0}")]
    InvalidStyleIndex(u32),

    /// Unknown attribute id for the given attribute kind
    #[error("Invalid {kind} id: {id}")]
    InvalidAttributeId { kind: AttributeKind, id: u32 },

    /// Sheet index out of bounds
    #[error("Sheet index {0} out of bounds (count: {1})")]
    SheetOutOfBounds(usize, usize),

    /// Invalid sheet name
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// Duplicate sheet name
    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),
}

impl Error {
    /// Create a new format error with a message
    pub fn invalid_format<S: Into<String>>(msg: S) -> Self {
        Error::InvalidFormat(msg.into())
    }
}
