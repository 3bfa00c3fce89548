//! Formula error types

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur during formula parsing or evaluation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    /// Malformed range or reference inside a formula
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Error from the document model
    #[error(transparent)]
    Core(#[from] tabula_core::Error),

    /// Formula parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// A cell that must hold a number holds something else
    #[error("Invalid content in cell {reference}")]
    InvalidCellContent { reference: String },

    /// Unknown function
    #[error("Function not implemented: {0}")]
    NotImplemented(String),

    /// Evaluation re-entered a cell that is still being evaluated
    #[error("Circular reference detected at {0}")]
    CircularReference(String),

    /// Formula cells nested deeper than the evaluator allows
    #[error("Formula nesting deeper than {0} cells")]
    TooDeep(usize),

    /// No numeric values to aggregate
    #[error("No numeric values in range {0}")]
    EmptyRange(String),

    /// Integer result out of range
    #[error("Arithmetic overflow")]
    Overflow,
}

impl FormulaError {
    pub(crate) fn invalid_content<S: Into<String>>(reference: S) -> Self {
        FormulaError::InvalidCellContent {
            reference: reference.into(),
        }
    }
}
