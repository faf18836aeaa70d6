use std::path::PathBuf;

use thiserror::Error;

/// Custom error type for census operations.
#[derive(Debug, Error)]
pub enum CensusError {
    /// A field value violates a record invariant.
    #[error("Validation error: {0}")]
    Validation(String),

    /// On-disk data did not parse, or parsed into records that violate an
    /// invariant. Fatal at startup; reported and ignored on explicit save.
    #[error("Malformed collection data: {0}")]
    Malformed(String),

    /// Underlying I/O failure while reading or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file exists but filesystem permissions forbid the access.
    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// The interactive terminal could not be initialized.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl From<serde_json::Error> for CensusError {
    fn from(err: serde_json::Error) -> Self {
        CensusError::Malformed(err.to_string())
    }
}
