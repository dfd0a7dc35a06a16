//! Themecfg Storage Library
//!
//! This crate provides the media-directory abstraction consumed by the
//! file-valued configuration backend, plus a local filesystem
//! implementation.
//!
//! # Path format
//!
//! All paths handed to a [`MediaDirectory`] are relative to the media root
//! and use `/` separators. Paths must not contain `..` or a leading `/`.
//! Freshly uploaded files are staged under `tmp/theme/file/` (see the
//! `paths` module) until a configuration save commits them.

pub mod factory;
pub mod local;
pub mod paths;
pub mod traits;

// Re-export commonly used types
pub use factory::open_media_directory;
pub use local::LocalMediaDirectory;
pub use paths::tmp_media_path;
pub use traits::{FileStat, MediaDirError, MediaDirectory, MediaResult};
