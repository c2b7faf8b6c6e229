//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::fs::naming::sanitize_path_component;
use crate::media::AlbumTarget;

/// Get the destination directory for an album.
pub fn get_album_folder(config: &Config, target: &AlbumTarget) -> Result<PathBuf> {
    let folder = sanitize_path_component(&target.folder_name(config.options.folder_naming))?;
    Ok(config.download_directory().join(folder))
}

/// Ensure a directory exists, creating it if necessary.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path).await?;
    Ok(())
}
