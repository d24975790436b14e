//! Application error types

use postman_template_domain::DomainError;
use thiserror::Error;

use crate::ports::StoreError;
use crate::validation::ValidationIssue;

/// Errors that stop a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The template profile was rejected.
    #[error("configuration error: {0}")]
    Config(#[from] DomainError),

    /// The built documents are inconsistent; nothing was written.
    #[error("generated documents failed validation with {} error(s): {}", .0.len(), join(.0))]
    Validation(Vec<ValidationIssue>),

    /// Writing a document failed.
    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

fn join(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for application operations.
pub type GenerateResult<T> = Result<T, GenerateError>;
