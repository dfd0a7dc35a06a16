use crate::traits::{FileStat, MediaDirError, MediaDirectory, MediaResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Local filesystem media directory
#[derive(Clone)]
pub struct LocalMediaDirectory {
    base_path: PathBuf,
    base_url: String,
}

impl LocalMediaDirectory {
    /// Create a new LocalMediaDirectory instance
    ///
    /// # Arguments
    /// * `base_path` - Media root directory (e.g., "/var/lib/app/media")
    /// * `base_url` - Base URL under which the media root is served
    ///   (e.g., "http://localhost:3000/media")
    pub async fn new(base_path: impl Into<PathBuf>, base_url: String) -> MediaResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            MediaDirError::ConfigError(format!(
                "Failed to create media directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalMediaDirectory {
            base_path,
            base_url,
        })
    }

    /// Convert a media-relative path to a filesystem path.
    ///
    /// Rejects paths with traversal sequences that could escape the media
    /// root.
    fn resolve(&self, path: &str) -> MediaResult<PathBuf> {
        if path.is_empty()
            || path.starts_with('/')
            || path.split('/').any(|segment| segment == "..")
        {
            return Err(MediaDirError::InvalidPath(path.to_string()));
        }

        Ok(self.base_path.join(path))
    }

    /// Ensure parent directory exists
    async fn ensure_parent_dir(&self, path: &Path) -> MediaResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl MediaDirectory for LocalMediaDirectory {
    async fn copy_file(&self, from: &str, to: &str) -> MediaResult<()> {
        let from_path = self.resolve(from)?;
        let to_path = self.resolve(to)?;

        if !fs::try_exists(&from_path).await.unwrap_or(false) {
            return Err(MediaDirError::NotFound(from.to_string()));
        }

        self.ensure_parent_dir(&to_path).await?;

        let bytes = fs::copy(&from_path, &to_path).await.map_err(|e| {
            MediaDirError::CopyFailed(format!(
                "Failed to copy {} to {}: {}",
                from_path.display(),
                to_path.display(),
                e
            ))
        })?;

        tracing::info!(
            from = %from,
            to = %to,
            size_bytes = bytes,
            "Media file copied"
        );

        Ok(())
    }

    async fn delete(&self, path: &str) -> MediaResult<()> {
        let full_path = self.resolve(path)?;

        if !fs::try_exists(&full_path).await.unwrap_or(false) {
            return Ok(());
        }

        fs::remove_file(&full_path).await.map_err(|e| {
            MediaDirError::DeleteFailed(format!(
                "Failed to delete {}: {}",
                full_path.display(),
                e
            ))
        })?;

        tracing::info!(path = %path, "Media file deleted");

        Ok(())
    }

    async fn stat(&self, path: &str) -> MediaResult<Option<FileStat>> {
        let full_path = self.resolve(path)?;

        match fs::metadata(&full_path).await {
            Ok(meta) => Ok(Some(FileStat { size: meta.len() })),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn relative_path(&self, path: &str) -> String {
        Path::new(path)
            .strip_prefix(&self.base_path)
            .map(|relative| relative.to_string_lossy().into_owned())
            .unwrap_or_else(|_| path.trim_start_matches('/').to_string())
    }

    fn media_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}
