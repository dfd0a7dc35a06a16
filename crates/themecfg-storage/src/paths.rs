//! Staging path layout for uploaded design files.
//!
//! Uploads land under `tmp/theme/file/{filename}` relative to the media root
//! and stay there until a configuration save commits them to the field's
//! upload directory.

use themecfg_core::constants::{FILE_STORAGE_DIR, TMP_STORAGE_PREFIX};

/// Media-relative staging path for a freshly uploaded file.
pub fn tmp_media_path(filename: &str) -> String {
    format!("{}/{}/{}", TMP_STORAGE_PREFIX, FILE_STORAGE_DIR, filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tmp_media_path_layout() {
        assert_eq!(tmp_media_path("logo.png"), "tmp/theme/file/logo.png");
    }
}
