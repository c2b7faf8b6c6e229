//! Resolves albums and accounts into downloadable items.

use crate::api::source::AlbumSource;
use crate::api::types::{RemoteAlbum, RemoteAlbumSummary, RemoteImage};
use crate::error::{Error, Result};
use crate::media::item::{AlbumTarget, ItemDescriptor};

/// Resolve an album into its target metadata and items, in album order.
pub async fn resolve_album(
    source: &dyn AlbumSource,
    album_id: &str,
) -> Result<(AlbumTarget, Vec<ItemDescriptor>)> {
    let album = source.get_album(album_id).await?;
    tracing::debug!("Album {} has {} images", album_id, album.images.len());

    let items = album.images.iter().map(descriptor_for).collect();
    Ok((album_target(album_id, &album), items))
}

/// Resolve every public album of an account.
///
/// An account without public albums is reported as not found.
pub async fn resolve_account_albums(
    source: &dyn AlbumSource,
    account_name: &str,
) -> Result<Vec<AlbumTarget>> {
    let albums = source.get_account_albums(account_name).await?;

    if albums.is_empty() {
        return Err(Error::AccountNotFound(account_name.to_string()));
    }

    Ok(albums.iter().map(summary_target).collect())
}

/// Build the descriptor for one image, preferring its MP4 transcode.
pub fn descriptor_for(image: &RemoteImage) -> ItemDescriptor {
    let alternate = image
        .mp4
        .as_deref()
        .filter(|mp4| !mp4.trim().is_empty())
        .map(normalize_scheme);

    ItemDescriptor::new(normalize_scheme(&image.link), alternate)
}

/// Rewrite plain `http:` (and scheme-relative) URLs to `https:`.
pub fn normalize_scheme(url: &str) -> String {
    let url = url.trim();

    if url.get(..7).is_some_and(|p| p.eq_ignore_ascii_case("http://")) {
        format!("https://{}", &url[7..])
    } else if let Some(rest) = url.strip_prefix("//") {
        format!("https://{}", rest)
    } else {
        url.to_string()
    }
}

fn album_target(requested_id: &str, album: &RemoteAlbum) -> AlbumTarget {
    let id = if album.id.is_empty() {
        requested_id.to_string()
    } else {
        album.id.clone()
    };

    AlbumTarget {
        id,
        owner_display_name: album.account_url.clone(),
        title: album.title.clone(),
    }
}

fn summary_target(summary: &RemoteAlbumSummary) -> AlbumTarget {
    AlbumTarget {
        id: summary.id.clone(),
        owner_display_name: summary.account_url.clone(),
        title: summary.title.clone(),
    }
}
