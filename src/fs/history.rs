//! Best-effort log of attempted album ids, kept for manual retries.

use std::path::Path;

use chrono::Utc;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::error::Result;

/// Log file name inside the download root.
pub const ALBUM_LOG_FILE: &str = "albums.log";

/// Append one `<timestamp>\t<album id>` line to the album log.
pub async fn record_album_attempt(download_root: &Path, album_id: &str) -> Result<()> {
    tokio::fs::create_dir_all(download_root).await?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(download_root.join(ALBUM_LOG_FILE))
        .await?;

    let line = format!("{}\t{}\n", Utc::now().format("%Y-%m-%dT%H:%M:%SZ"), album_id);
    file.write_all(line.as_bytes()).await?;
    file.flush().await?;

    Ok(())
}
