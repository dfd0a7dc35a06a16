//! Media directory abstraction
//!
//! This module defines the MediaDirectory trait that storage implementations
//! must provide. The configuration backend works against this trait and
//! never touches the filesystem directly.

use async_trait::async_trait;
use thiserror::Error;

/// Media directory operation errors
#[derive(Debug, Error)]
pub enum MediaDirError {
    #[error("Copy failed: {0}")]
    CopyFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid media path: {0}")]
    InvalidPath(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for media directory operations
pub type MediaResult<T> = Result<T, MediaDirError>;

/// Metadata of one file in the media directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    /// Size in bytes.
    pub size: u64,
}

/// Handle on the media directory.
///
/// Paths are media-root-relative with `/` separators. Implementations must
/// reject paths that would escape the media root.
#[async_trait]
pub trait MediaDirectory: Send + Sync {
    /// Copy a file from one media-relative path to another, creating parent
    /// directories of the destination as needed.
    async fn copy_file(&self, from: &str, to: &str) -> MediaResult<()>;

    /// Delete a file. Deleting a path that does not exist succeeds.
    async fn delete(&self, path: &str) -> MediaResult<()>;

    /// Stat a file. Returns `None` when the file does not exist.
    async fn stat(&self, path: &str) -> MediaResult<Option<FileStat>>;

    /// Media-root-relative form of a path. Absolute paths under the media
    /// root are stripped to their relative part; anything else is returned
    /// unchanged.
    fn relative_path(&self, path: &str) -> String;

    /// Public URL for a media-relative path.
    fn media_url(&self, path: &str) -> String;
}
