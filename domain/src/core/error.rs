//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// The rules engine is total over well-formed input, so the only errors are
/// caller mistakes that would otherwise produce degenerate output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid argument: at least one query must be selected")]
    EmptySelection,

    #[error("Invalid argument: at least one judge must be selected")]
    NoJudgesSelected,

    #[error("Unknown judge: {0}")]
    UnknownJudge(String),
}

impl DomainError {
    /// Check if this error is an invalid-argument error raised by a caller
    /// passing an empty selection
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            DomainError::EmptySelection | DomainError::NoJudgesSelected
        )
    }
}
