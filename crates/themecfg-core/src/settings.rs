//! Environment-driven settings.
//!
//! This module provides the settings needed to open the media directory that
//! backs file-valued configuration fields: where uploaded assets live on
//! disk and under which base URL they are served.

use std::env;

/// Media directory settings.
#[derive(Clone, Debug)]
pub struct MediaSettings {
    /// Filesystem root under which uploaded assets are stored.
    pub media_path: String,
    /// Base URL under which the media root is served.
    pub media_base_url: String,
}

impl MediaSettings {
    pub fn new(media_path: impl Into<String>, media_base_url: impl Into<String>) -> Self {
        MediaSettings {
            media_path: media_path.into(),
            media_base_url: media_base_url.into(),
        }
    }

    /// Load settings from the environment (`MEDIA_PATH`, `MEDIA_BASE_URL`),
    /// honoring a `.env` file when present.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let media_path = env::var("MEDIA_PATH").unwrap_or_else(|_| "media".to_string());
        let media_base_url = env::var("MEDIA_BASE_URL")
            .map_err(|_| anyhow::anyhow!("MEDIA_BASE_URL not configured"))?;

        if media_base_url.trim().is_empty() {
            return Err(anyhow::anyhow!("MEDIA_BASE_URL cannot be empty"));
        }

        Ok(MediaSettings {
            media_path,
            media_base_url,
        })
    }
}
