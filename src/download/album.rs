//! Album download logic.

use std::path::Path;

use crate::api::AlbumSource;
use crate::config::Config;
use crate::download::fetcher::MediaFetcher;
use crate::download::media::download_item;
use crate::download::state::RunResult;
use crate::error::Result;
use crate::fs::{ensure_dir, get_album_folder, record_album_attempt};
use crate::media::{resolve_album, AlbumTarget, ItemDescriptor};
use crate::output::{print_album_summary, print_info};

/// Reconcile `items` with `target_dir`, one item at a time, in order.
///
/// Only a failure to create `target_dir` is an error; every per-item problem
/// is counted in the returned result.
pub async fn fetch_album(
    fetcher: &dyn MediaFetcher,
    config: &Config,
    target_dir: &Path,
    items: &[ItemDescriptor],
) -> Result<RunResult> {
    ensure_dir(target_dir).await?;

    let mut result = RunResult::default();
    for item in items {
        let outcome = download_item(fetcher, config, item, target_dir).await;
        result.record(&outcome);
    }

    print_album_summary(&result);
    Ok(result)
}

/// Resolve and download one album into its own folder.
pub async fn download_album(
    source: &dyn AlbumSource,
    fetcher: &dyn MediaFetcher,
    config: &Config,
    album_id: &str,
) -> Result<RunResult> {
    download_known_album(source, fetcher, config, &AlbumTarget::from_id(album_id)).await
}

/// Download an album whose metadata is already (partly) known.
///
/// Owner and title of `known` take precedence over the fetched album's when
/// naming the folder.
pub async fn download_known_album(
    source: &dyn AlbumSource,
    fetcher: &dyn MediaFetcher,
    config: &Config,
    known: &AlbumTarget,
) -> Result<RunResult> {
    let album_id = known.id.as_str();
    print_info(&format!("Attempting to download album '{}'", album_id));

    if config.options.album_log {
        if let Err(e) = record_album_attempt(config.download_directory(), album_id).await {
            tracing::warn!("Could not record album {} in log: {}", album_id, e);
        }
    }

    let (fetched, items) = resolve_album(source, album_id).await?;
    print_info(&format!("Found {} images in album", items.len()));

    let target = known.clone().or_metadata_from(fetched);

    let target_dir = get_album_folder(config, &target)?;
    fetch_album(fetcher, config, &target_dir, &items).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::fetcher::tests::{FakeFetcher, FakeResponse};
    use crate::error::Error;
    use crate::fs::history::ALBUM_LOG_FILE;
    use crate::media::resolver::tests::FakeSource;
    use std::path::PathBuf;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MB: usize = 1_048_576;

    fn test_config(root: &Path) -> Config {
        let mut config = Config::default();
        config.options.download_directory = root.to_path_buf();
        config.options.show_downloads = false;
        config.options.show_skipped_downloads = false;
        config
    }

    fn items(urls: &[&str]) -> Vec<ItemDescriptor> {
        urls.iter()
            .map(|u| ItemDescriptor::new(u.to_string(), None))
            .collect()
    }

    #[tokio::test]
    async fn test_all_new_items_downloaded() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("AbC12");
        let fetcher = FakeFetcher::default()
            .body("https://i.imgur.com/1.jpg", MB)
            .body("https://i.imgur.com/2.jpg", 2 * MB)
            .body("https://i.imgur.com/3.jpg", MB / 2);

        let result = fetch_album(
            &fetcher,
            &test_config(root.path()),
            &dir,
            &items(&[
                "https://i.imgur.com/1.jpg",
                "https://i.imgur.com/2.jpg",
                "https://i.imgur.com/3.jpg",
            ]),
        )
        .await
        .unwrap();

        assert_eq!(
            result,
            RunResult {
                downloaded: 3,
                failed: 0,
                skipped: 0,
                total_bytes: (3 * MB + MB / 2) as u64,
            }
        );
        assert_eq!(result.total_megabytes(), 3.5);
        assert_eq!(
            fetcher.requested(),
            vec![
                "https://i.imgur.com/1.jpg",
                "https://i.imgur.com/2.jpg",
                "https://i.imgur.com/3.jpg",
            ]
        );
    }

    #[tokio::test]
    async fn test_present_item_is_skipped() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("AbC12");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("1.jpg"), b"already here").unwrap();

        let fetcher = FakeFetcher::default()
            .body("https://i.imgur.com/1.jpg", 100)
            .body("https://i.imgur.com/2.jpg", 200);

        let result = fetch_album(
            &fetcher,
            &test_config(root.path()),
            &dir,
            &items(&["https://i.imgur.com/1.jpg", "https://i.imgur.com/2.jpg"]),
        )
        .await
        .unwrap();

        assert_eq!(result.downloaded, 1);
        assert_eq!(result.failed, 0);
        assert_eq!(result.skipped, 1);
        assert_eq!(result.total_bytes, 200);
        assert_eq!(fetcher.requested(), vec!["https://i.imgur.com/2.jpg"]);
    }

    #[tokio::test]
    async fn test_http_error_counts_as_failed() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("AbC12");
        let fetcher = FakeFetcher::default()
            .body("https://i.imgur.com/1.jpg", 300)
            .respond("https://i.imgur.com/2.jpg", FakeResponse::Status(503))
            .body("https://i.imgur.com/3.jpg", 400);

        let result = fetch_album(
            &fetcher,
            &test_config(root.path()),
            &dir,
            &items(&[
                "https://i.imgur.com/1.jpg",
                "https://i.imgur.com/2.jpg",
                "https://i.imgur.com/3.jpg",
            ]),
        )
        .await
        .unwrap();

        assert_eq!(
            result,
            RunResult {
                downloaded: 2,
                failed: 1,
                skipped: 0,
                total_bytes: 700,
            }
        );
        assert!(!dir.join("2.jpg").exists());
    }

    #[tokio::test]
    async fn test_second_run_is_all_skips() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("AbC12");
        let config = test_config(root.path());
        let fetcher = FakeFetcher::default()
            .body("https://i.imgur.com/1.jpg", 10)
            .body("https://i.imgur.com/2.mp4", 20);
        let album = vec![
            ItemDescriptor::new("https://i.imgur.com/1.jpg".to_string(), None),
            ItemDescriptor::new(
                "https://i.imgur.com/2.gif".to_string(),
                Some("https://i.imgur.com/2.mp4".to_string()),
            ),
        ];

        let first = fetch_album(&fetcher, &config, &dir, &album).await.unwrap();
        assert_eq!(first.downloaded, 2);
        assert_eq!(first.failed, 0);

        let second = fetch_album(&fetcher, &config, &dir, &album).await.unwrap();
        assert_eq!(
            second,
            RunResult {
                downloaded: 0,
                failed: 0,
                skipped: 2,
                total_bytes: 0,
            }
        );
        assert_eq!(fetcher.requested().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_mid_stream_is_retried_next_run() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("AbC12");
        let config = test_config(root.path());
        let album = items(&["https://i.imgur.com/1.mp4"]);

        let broken = FakeFetcher::default().respond(
            "https://i.imgur.com/1.mp4",
            FakeResponse::Truncated(vec![vec![0u8; 4096]]),
        );
        let first = fetch_album(&broken, &config, &dir, &album).await.unwrap();
        assert_eq!(first.failed, 1);

        let healthy = FakeFetcher::default().body("https://i.imgur.com/1.mp4", 8192);
        let second = fetch_album(&healthy, &config, &dir, &album).await.unwrap();
        assert_eq!(second.downloaded, 1);
        assert_eq!(second.skipped, 0);
        assert_eq!(std::fs::metadata(dir.join("1.mp4")).unwrap().len(), 8192);
    }

    #[tokio::test]
    async fn test_counts_cover_every_item() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("mixed");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("c.png"), b"x").unwrap();

        let fetcher = FakeFetcher::default()
            .body("https://i.imgur.com/a.jpg", 1)
            .respond("https://i.imgur.com/b.jpg", FakeResponse::Status(404))
            .respond(
                "https://i.imgur.com/d.mp4",
                FakeResponse::Truncated(vec![vec![1u8; 10]]),
            );
        let album = items(&[
            "https://i.imgur.com/a.jpg",
            "https://i.imgur.com/b.jpg",
            "https://i.imgur.com/c.png",
            "https://i.imgur.com/d.mp4",
            "https://i.imgur.com/",
            "https://i.imgur.com/unknown.jpg",
        ]);

        let result = fetch_album(&fetcher, &test_config(root.path()), &dir, &album)
            .await
            .unwrap();

        assert_eq!(result.total_items(), album.len() as u64);
        assert_eq!(result.downloaded, 1);
        assert_eq!(result.skipped, 1);
        assert_eq!(result.failed, 4);
    }

    #[tokio::test]
    async fn test_directory_creation_failure_is_an_error() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("not-a-dir");
        std::fs::write(&blocker, b"file").unwrap();

        let fetcher = FakeFetcher::default();
        let result = fetch_album(
            &fetcher,
            &test_config(root.path()),
            &blocker.join("AbC12"),
            &items(&["https://i.imgur.com/1.jpg"]),
        )
        .await;

        assert!(matches!(result, Err(Error::Io(_))));
        assert!(fetcher.requested().is_empty());
    }

    #[tokio::test]
    async fn test_download_album_uses_normalized_mp4() {
        let root = tempfile::tempdir().unwrap();
        let config = test_config(root.path());
        let source = FakeSource::default().with_album(
            "AbC12",
            Some("Cats"),
            &[
                ("http://i.imgur.com/1.jpg", None),
                ("http://i.imgur.com/2.gif", Some("http://i.imgur.com/2.mp4")),
            ],
        );
        let fetcher = FakeFetcher::default()
            .body("https://i.imgur.com/1.jpg", 5)
            .body("https://i.imgur.com/2.mp4", 6);

        let result = download_album(&source, &fetcher, &config, "AbC12")
            .await
            .unwrap();

        assert_eq!(result.downloaded, 2);
        assert_eq!(
            fetcher.requested(),
            vec!["https://i.imgur.com/1.jpg", "https://i.imgur.com/2.mp4"]
        );

        let album_dir: PathBuf = root.path().join("AbC12");
        assert!(album_dir.join("1.jpg").is_file());
        assert!(album_dir.join("2.mp4").is_file());
        assert!(!album_dir.join("2.gif").exists());

        let log = std::fs::read_to_string(root.path().join(ALBUM_LOG_FILE)).unwrap();
        assert!(log.contains("AbC12"));
    }

    #[tokio::test]
    async fn test_download_unknown_album() {
        let root = tempfile::tempdir().unwrap();
        let config = test_config(root.path());
        let fetcher = FakeFetcher::default();

        let err = download_album(&FakeSource::default(), &fetcher, &config, "nope1")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::AlbumNotFound(_)));
        assert!(!root.path().join("nope1").exists());
    }

    #[tokio::test]
    async fn test_fetch_album_over_http() {
        let server = MockServer::start().await;
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("AbC12");

        Mock::given(method("GET"))
            .and(path("/1.jpg"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1u8; 1500]))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/2.jpg"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/3.jpg"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![3u8; 2500]))
            .mount(&server)
            .await;

        let fetcher = crate::download::HttpFetcher::new("test-agent").unwrap();
        let urls: Vec<String> = ["1.jpg", "2.jpg", "3.jpg"]
            .iter()
            .map(|name| format!("{}/{}", server.uri(), name))
            .collect();
        let album: Vec<ItemDescriptor> = urls
            .iter()
            .map(|u| ItemDescriptor::new(u.clone(), None))
            .collect();

        let result = fetch_album(&fetcher, &test_config(root.path()), &dir, &album)
            .await
            .unwrap();

        assert_eq!(result.downloaded, 2);
        assert_eq!(result.failed, 1);
        assert_eq!(result.total_bytes, 4000);
        assert!(!dir.join("2.jpg").exists());
        assert!(!dir.join(".2.jpg.part").exists());
    }
}
