//! Policy constants shared across themecfg crates.

/// File extensions accepted for uploaded design files.
///
/// This is a fixed policy list, not derived from configuration.
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "gif", "png"];

/// Directory under the media root where committed design files live.
pub const FILE_STORAGE_DIR: &str = "theme/file";

/// Directory under the media root where freshly uploaded files are staged
/// before a configuration save commits them.
pub const TMP_STORAGE_PREFIX: &str = "tmp";
