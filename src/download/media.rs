//! Media file downloading.

use std::path::Path;

use futures::StreamExt;
use tokio::fs::{self, File};
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::config::Config;
use crate::download::fetcher::MediaFetcher;
use crate::download::state::ItemOutcome;
use crate::error::{Error, Result};
use crate::fs::naming::{part_path, sanitize_filename, url_basename};
use crate::media::ItemDescriptor;
use crate::output::{
    create_download_bar, format_megabytes, print_error, print_skipped, print_success,
};

/// Minimum file size to show progress bar (20 MB).
const PROGRESS_THRESHOLD: u64 = 20 * 1024 * 1024;

/// Buffer between the response body and the file.
const WRITE_BUFFER_SIZE: usize = 128 * 1024;

/// Reconcile one item with the target directory.
///
/// An existing regular file with the item's name means it is skipped without
/// any request. Otherwise the body is streamed to a `.part` sibling and renamed
/// into place once complete; on failure no file is left at either path.
pub async fn download_item(
    fetcher: &dyn MediaFetcher,
    config: &Config,
    item: &ItemDescriptor,
    target_dir: &Path,
) -> ItemOutcome {
    let url = item.effective_url();

    let filename = match sanitize_filename(url_basename(url)) {
        Ok(name) => name,
        Err(e) => {
            print_error(&format!("Failed {}: {}", url, e));
            return ItemOutcome::Failed(e);
        }
    };
    let output_path = target_dir.join(&filename);

    if is_regular_file(&output_path).await {
        if config.options.show_skipped_downloads {
            print_skipped(&format!("Already downloaded: {}", url));
        }
        return ItemOutcome::Skipped;
    }

    tracing::debug!("Downloading {} to {}", url, output_path.display());

    match download_to(fetcher, config, url, &output_path).await {
        Ok(bytes) => {
            if config.options.show_downloads {
                print_success(&format!(
                    "Downloaded {} (size: {}MB)",
                    url,
                    format_megabytes(bytes)
                ));
            }
            ItemOutcome::Downloaded { bytes }
        }
        Err(e) => {
            print_error(&format!("Failed {}: {}", url, e));
            ItemOutcome::Failed(e)
        }
    }
}

async fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}

/// Fetch `url` into `output_path` through a temporary file.
async fn download_to(
    fetcher: &dyn MediaFetcher,
    config: &Config,
    url: &str,
    output_path: &Path,
) -> Result<u64> {
    let part = part_path(output_path);

    let result = match stream_to_file(fetcher, config, url, &part).await {
        Ok(bytes) => fs::rename(&part, output_path)
            .await
            .map(|()| bytes)
            .map_err(Error::from),
        Err(e) => Err(e),
    };

    if result.is_err() {
        if let Err(e) = fs::remove_file(&part).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("Could not remove {}: {}", part.display(), e);
            }
        }
    }

    result
}

/// Stream a response body to `path`, returning the bytes written.
async fn stream_to_file(
    fetcher: &dyn MediaFetcher,
    config: &Config,
    url: &str,
    path: &Path,
) -> Result<u64> {
    let media = fetcher.open(url).await?;

    let show_progress = config.options.show_downloads
        && media
            .content_length
            .map(|l| l > PROGRESS_THRESHOLD)
            .unwrap_or(false);
    let progress = show_progress.then(|| create_download_bar(media.content_length.unwrap_or(0)));

    let file = File::create(path).await?;
    let mut writer = BufWriter::with_capacity(WRITE_BUFFER_SIZE, file);
    let mut body = media.body;
    let mut written: u64 = 0;

    while let Some(chunk) = body.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) => {
                if let Some(pb) = &progress {
                    pb.abandon();
                }
                return Err(e);
            }
        };
        writer.write_all(&chunk).await?;
        written += chunk.len() as u64;

        if let Some(pb) = &progress {
            pb.set_position(written);
        }
    }

    writer.flush().await?;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    Ok(written)
}
