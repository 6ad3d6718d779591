use thiserror::Error;

/// Raised when a marks submission is rejected before it reaches the store.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    Missing(&'static str),

    #[error("Field {0} must not be blank")]
    Blank(&'static str),

    #[error("Field {field} exceeds {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("Marks must be a finite, non-negative number (got {0})")]
    InvalidMarks(f64),
}
