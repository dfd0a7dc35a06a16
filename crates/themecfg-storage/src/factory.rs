use crate::{LocalMediaDirectory, MediaDirectory, MediaResult};
use std::sync::Arc;
use themecfg_core::MediaSettings;

/// Open the media directory described by the given settings.
pub async fn open_media_directory(settings: &MediaSettings) -> MediaResult<Arc<dyn MediaDirectory>> {
    let media = LocalMediaDirectory::new(
        settings.media_path.clone(),
        settings.media_base_url.clone(),
    )
    .await?;
    Ok(Arc::new(media))
}
