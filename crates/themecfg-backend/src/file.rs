//! File-valued configuration backend.
//!
//! `FileBackend` owns the value of one file-valued field for the duration of
//! a save or load cycle. Before a save it commits the staged upload into the
//! field's upload directory and reduces the value to a plain filename; after
//! a load it expands the stored filename back into a display descriptor.

use crate::error::{BackendError, BackendResult};
use crate::lifecycle::ValueBackend;
use crate::scope::Scope;
use async_trait::async_trait;
use std::sync::Arc;
use themecfg_core::constants::ALLOWED_EXTENSIONS;
use themecfg_core::{FieldConfig, FileValue, UploadDescriptor, UploadDir};
use themecfg_storage::{tmp_media_path, MediaDirectory};

pub struct FileBackend {
    field_config: FieldConfig,
    scope: Scope,
    media: Arc<dyn MediaDirectory>,
    value: FileValue,
}

impl FileBackend {
    pub fn new(field_config: FieldConfig, scope: Scope, media: Arc<dyn MediaDirectory>) -> Self {
        FileBackend {
            field_config,
            scope,
            media,
            value: FileValue::Empty,
        }
    }

    pub fn value(&self) -> &FileValue {
        &self.value
    }

    pub fn set_value(&mut self, value: FileValue) {
        self.value = value;
    }

    /// Current descriptor collection, or an empty slice for any other value
    /// shape.
    pub fn uploads(&self) -> &[UploadDescriptor] {
        self.value.uploads()
    }

    pub fn field(&self) -> &str {
        &self.field_config.field
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Extensions accepted for uploads to this field.
    pub fn allowed_extensions() -> &'static [&'static str] {
        ALLOWED_EXTENSIONS
    }

    /// Destination directory for this field's uploads, derived from field
    /// configuration.
    pub fn upload_dir(&self) -> BackendResult<String> {
        match &self.field_config.upload_dir {
            None => Err(BackendError::UploadDirNotSpecified),
            Some(UploadDir::Plain(dir)) => Ok(dir.clone()),
            Some(UploadDir::Scoped(scoped)) => {
                let mut dir = scoped.value.clone();
                if scoped.scope_info {
                    dir = self.scope.append_to(&dir);
                }
                if scoped.config {
                    dir = self.media.relative_path(&dir);
                }
                Ok(dir)
            }
        }
    }

    /// Whether committed filenames for this field carry scope information.
    fn add_scope_info(&self) -> bool {
        matches!(
            &self.field_config.upload_dir,
            Some(UploadDir::Scoped(scoped)) if scoped.scope_info
        )
    }
}

#[async_trait]
impl ValueBackend for FileBackend {
    /// Commit the staged upload before the configuration value is persisted.
    ///
    /// The staged file is copied into the upload directory and removed from
    /// the staging area; the value collapses to the committed filename. A
    /// failed copy clears the value instead of surfacing an error.
    async fn before_save(&mut self) -> BackendResult<()> {
        let upload = match self.value.first_upload() {
            Some(descriptor) => descriptor.clone(),
            None => {
                return Err(BackendError::MissingFileField {
                    field: self.field_config.field.clone(),
                })
            }
        };

        if upload.exists {
            // Committed in a prior cycle; nothing to copy.
            self.value = FileValue::Saved(upload.file);
            return Ok(());
        }

        let filename = upload.file;
        let staged = tmp_media_path(&filename);
        let destination = format!("{}/{}", self.upload_dir()?, filename);

        match self.media.copy_file(&staged, &destination).await {
            Ok(()) => {
                if let Err(e) = self.media.delete(&staged).await {
                    tracing::warn!(path = %staged, error = %e, "Failed to remove staged upload");
                }

                let committed = if self.add_scope_info() {
                    self.scope.prepend_to(&filename)
                } else {
                    filename
                };
                self.value = FileValue::Saved(committed);
            }
            Err(e) => {
                tracing::warn!(
                    from = %staged,
                    to = %destination,
                    error = %e,
                    "Commit of staged upload failed, clearing value"
                );
                self.value = FileValue::Empty;
            }
        }

        Ok(())
    }

    /// Expand the stored filename into a display descriptor after load.
    async fn after_load(&mut self) -> BackendResult<()> {
        let name = match self.value.saved() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => return Ok(()),
        };

        let path = format!("{}/{}", self.upload_dir()?, name);
        let size = match self.media.stat(&path).await {
            Ok(Some(stat)) => stat.size,
            Ok(None) => 0,
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "Stat of committed file failed");
                0
            }
        };

        self.value = FileValue::Uploads(vec![UploadDescriptor {
            url: Some(self.media.media_url(&path)),
            file: name,
            size,
            exists: true,
        }]);

        Ok(())
    }
}
