//! Backend error types
//!
//! Both variants are user-facing save-time validation failures; everything
//! else that can go wrong during a save is handled by policy (the value is
//! cleared) rather than surfaced as an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("{field} does not contain field 'file'")]
    MissingFileField { field: String },

    #[error("The base directory to upload file is not specified.")]
    UploadDirNotSpecified,
}

/// Result type for backend operations
pub type BackendResult<T> = Result<T, BackendError>;
