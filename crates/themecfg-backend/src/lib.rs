//! Themecfg Backend Library
//!
//! This crate implements the file-valued configuration backend: the
//! save/load lifecycle hooks that move an uploaded file from its staging
//! area into the media directory and rebuild the display form of the value
//! for the admin UI.

pub mod error;
pub mod file;
pub mod lifecycle;
pub mod scope;

// Re-export commonly used types
pub use error::{BackendError, BackendResult};
pub use file::FileBackend;
pub use lifecycle::ValueBackend;
pub use scope::Scope;
