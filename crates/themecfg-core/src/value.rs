//! Value shapes for file-valued configuration fields.
//!
//! A field value moves between two forms during its lifecycle: the persisted
//! form is a plain filename string, while the form exchanged with the admin
//! UI is a collection of upload descriptors. The `FileValue` enum makes the
//! current form explicit instead of switching on the runtime shape of an
//! untyped map.

use serde::{Deserialize, Serialize};

/// Descriptor for one uploaded file as exchanged with the UI layer.
///
/// Incoming submissions carry `file` (and `exists` when the file was
/// committed in a prior save). Outgoing descriptors built after load always
/// carry `url`, `size`, and `exists = true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadDescriptor {
    /// Filename, relative to the field's upload directory.
    pub file: String,

    /// True when the file is already committed to permanent storage and
    /// must not be copied out of the staging area again.
    #[serde(default)]
    pub exists: bool,

    /// Public URL of the committed file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Size in bytes, 0 when the file could not be stat'ed.
    #[serde(default)]
    pub size: u64,
}

impl UploadDescriptor {
    /// Descriptor for a freshly staged upload awaiting its first save.
    pub fn staged(file: impl Into<String>) -> Self {
        UploadDescriptor {
            file: file.into(),
            exists: false,
            url: None,
            size: 0,
        }
    }

    /// Descriptor for a file that is already committed.
    pub fn existing(file: impl Into<String>) -> Self {
        UploadDescriptor {
            exists: true,
            ..UploadDescriptor::staged(file)
        }
    }
}

/// The value of a file-valued configuration field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FileValue {
    /// No value set; also the outcome of a failed commit.
    #[default]
    Empty,

    /// The persisted form: a plain filename, possibly scope-prefixed.
    Saved(String),

    /// The UI form: descriptors staged by an upload or produced after load.
    Uploads(Vec<UploadDescriptor>),
}

impl FileValue {
    /// The descriptor collection, or an empty slice for any other shape.
    pub fn uploads(&self) -> &[UploadDescriptor] {
        match self {
            FileValue::Uploads(descriptors) => descriptors,
            _ => &[],
        }
    }

    /// First upload descriptor, if the value is in descriptor form.
    pub fn first_upload(&self) -> Option<&UploadDescriptor> {
        self.uploads().first()
    }

    /// The persisted filename, if the value is in saved form.
    pub fn saved(&self) -> Option<&str> {
        match self {
            FileValue::Saved(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FileValue::Empty => true,
            FileValue::Saved(name) => name.is_empty(),
            FileValue::Uploads(descriptors) => descriptors.is_empty(),
        }
    }
}

impl From<Vec<UploadDescriptor>> for FileValue {
    fn from(descriptors: Vec<UploadDescriptor>) -> Self {
        FileValue::Uploads(descriptors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_upload_only_in_descriptor_form() {
        let value = FileValue::Uploads(vec![UploadDescriptor::staged("logo.png")]);
        assert_eq!(value.first_upload().unwrap().file, "logo.png");

        assert!(FileValue::Empty.first_upload().is_none());
        assert!(FileValue::Saved("logo.png".to_string()).first_upload().is_none());
    }

    #[test]
    fn test_uploads_is_defensive() {
        assert!(FileValue::Empty.uploads().is_empty());
        assert!(FileValue::Saved("x".to_string()).uploads().is_empty());
    }

    #[test]
    fn test_is_empty() {
        assert!(FileValue::Empty.is_empty());
        assert!(FileValue::Saved(String::new()).is_empty());
        assert!(FileValue::Uploads(vec![]).is_empty());
        assert!(!FileValue::Saved("logo.png".to_string()).is_empty());
    }

    #[test]
    fn test_descriptor_deserializes_from_ui_submission() {
        let descriptor: UploadDescriptor =
            serde_json::from_str(r#"{"file":"logo.png"}"#).unwrap();
        assert_eq!(descriptor.file, "logo.png");
        assert!(!descriptor.exists);
        assert_eq!(descriptor.size, 0);
        assert!(descriptor.url.is_none());
    }

    #[test]
    fn test_descriptor_serializes_without_empty_url() {
        let json = serde_json::to_string(&UploadDescriptor::staged("logo.png")).unwrap();
        assert!(!json.contains("url"));
    }
}
