//! Field configuration for file-valued settings.
//!
//! Each admin-configurable file field carries a small configuration record
//! describing where its uploads are committed. The `upload_dir` entry is
//! either a plain directory string or a structured descriptor requesting
//! scope-aware and media-relative resolution.

use serde::{Deserialize, Serialize};

/// Configuration of one file-valued field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Field identifier, used in validation messages.
    pub field: String,

    /// Destination directory specification for this field's uploads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_dir: Option<UploadDir>,
}

impl FieldConfig {
    pub fn new(field: impl Into<String>, upload_dir: UploadDir) -> Self {
        FieldConfig {
            field: field.into(),
            upload_dir: Some(upload_dir),
        }
    }
}

/// Upload directory specification: a plain path or a structured descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UploadDir {
    Plain(String),
    Scoped(ScopedUploadDir),
}

impl From<&str> for UploadDir {
    fn from(dir: &str) -> Self {
        UploadDir::Plain(dir.to_string())
    }
}

/// Structured upload directory descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopedUploadDir {
    /// Base directory value.
    pub value: String,

    /// Append scope path segments to the directory and prefix committed
    /// filenames with scope information.
    #[serde(default)]
    pub scope_info: bool,

    /// Re-resolve the directory relative to the media root.
    #[serde(default)]
    pub config: bool,
}

impl ScopedUploadDir {
    pub fn new(value: impl Into<String>) -> Self {
        ScopedUploadDir {
            value: value.into(),
            scope_info: false,
            config: false,
        }
    }

    pub fn with_scope_info(mut self) -> Self {
        self.scope_info = true;
        self
    }

    pub fn with_config(mut self) -> Self {
        self.config = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_dir_deserializes_from_plain_string() {
        let config: FieldConfig = serde_json::from_str(
            r#"{"field":"head_shortcut_icon","upload_dir":"favicon"}"#,
        )
        .unwrap();
        assert_eq!(
            config.upload_dir,
            Some(UploadDir::Plain("favicon".to_string()))
        );
    }

    #[test]
    fn test_upload_dir_deserializes_from_descriptor() {
        let config: FieldConfig = serde_json::from_str(
            r#"{"field":"logo","upload_dir":{"value":"logo","scope_info":true,"config":true}}"#,
        )
        .unwrap();
        match config.upload_dir {
            Some(UploadDir::Scoped(dir)) => {
                assert_eq!(dir.value, "logo");
                assert!(dir.scope_info);
                assert!(dir.config);
            }
            other => panic!("expected scoped upload dir, got {:?}", other),
        }
    }

    #[test]
    fn test_descriptor_flags_default_to_false() {
        let config: FieldConfig =
            serde_json::from_str(r#"{"field":"logo","upload_dir":{"value":"logo"}}"#).unwrap();
        match config.upload_dir {
            Some(UploadDir::Scoped(dir)) => {
                assert!(!dir.scope_info);
                assert!(!dir.config);
            }
            other => panic!("expected scoped upload dir, got {:?}", other),
        }
    }

    #[test]
    fn test_upload_dir_may_be_absent() {
        let config: FieldConfig = serde_json::from_str(r#"{"field":"logo"}"#).unwrap();
        assert!(config.upload_dir.is_none());
    }
}
