//! Account download logic.

use crate::api::AlbumSource;
use crate::config::Config;
use crate::download::album::{download_album, download_known_album};
use crate::download::fetcher::MediaFetcher;
use crate::download::state::AccountSummary;
use crate::error::Result;
use crate::media::{resolve_account_albums, AlbumTarget};
use crate::output::{create_spinner, print_account_summary, print_error, print_info, print_warning};

/// Download every public album of an account, each into its own folder.
///
/// `filter` decides per album whether it is downloaded. When the name does
/// not resolve to an account it is retried as an album id, since the two
/// namespaces cannot be told apart without a lookup.
pub async fn download_account<F>(
    source: &dyn AlbumSource,
    fetcher: &dyn MediaFetcher,
    config: &Config,
    account_name: &str,
    mut filter: F,
) -> Result<AccountSummary>
where
    F: FnMut(&AlbumTarget) -> bool,
{
    print_info(&format!("Attempting to download account '{}'", account_name));

    let spinner = create_spinner(&format!("Listing albums of {}...", account_name));
    let resolved = resolve_account_albums(source, account_name).await;
    spinner.finish_and_clear();

    let albums = match resolved {
        Ok(albums) => albums,
        Err(e) if e.is_not_found() => {
            print_warning(&format!(
                "No such public account '{}'! Attempting as album...",
                account_name
            ));
            let result = download_album(source, fetcher, config, account_name).await?;

            let mut summary = AccountSummary::default();
            summary.add_album(&result);
            return Ok(summary);
        }
        Err(e) => return Err(e),
    };

    print_info(&format!(
        "Found {} public albums for account '{}'",
        albums.len(),
        account_name
    ));

    let mut summary = AccountSummary::default();

    for target in albums.iter().filter(|&album| filter(album)) {
        match download_known_album(source, fetcher, config, target).await {
            Ok(result) => summary.add_album(&result),
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                print_error(&format!("Failed to download album {}: {}", target.id, e));
                summary.mark_album_failed();
            }
        }
    }

    print_account_summary(&summary);
    Ok(summary)
}
