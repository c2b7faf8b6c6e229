//! Remote album capability.

use async_trait::async_trait;

use crate::api::types::{RemoteAlbum, RemoteAlbumSummary};
use crate::error::Result;

/// What the downloader needs from the remote service.
///
/// Implementations report unknown or private albums as
/// [`Error::AlbumNotFound`](crate::Error::AlbumNotFound), unknown accounts as
/// [`Error::AccountNotFound`](crate::Error::AccountNotFound) and rejected
/// credentials as [`Error::Authentication`](crate::Error::Authentication).
#[async_trait]
pub trait AlbumSource: Send + Sync {
    /// Album metadata and its images in album order.
    async fn get_album(&self, album_id: &str) -> Result<RemoteAlbum>;

    /// Every public album of an account, in the order the service lists them.
    async fn get_account_albums(&self, account_name: &str) -> Result<Vec<RemoteAlbumSummary>>;
}
