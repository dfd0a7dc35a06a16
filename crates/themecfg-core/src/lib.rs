//! Themecfg Core Library
//!
//! This crate provides the domain models shared across all themecfg
//! components: the configuration value shapes, field configuration, policy
//! constants, and environment-driven settings.

pub mod constants;
pub mod field;
pub mod settings;
pub mod value;

// Re-export commonly used types
pub use field::{FieldConfig, ScopedUploadDir, UploadDir};
pub use settings::MediaSettings;
pub use value::{FileValue, UploadDescriptor};
