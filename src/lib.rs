//! Imgur Downloader - download public Imgur albums to disk.
//!
//! This library resolves albums (or every public album of an account) through
//! an [`AlbumSource`] and reconciles their images with a local folder per album.
//!
//! # Features
//!
//! - Download single albums or whole accounts
//! - Prefers the MP4 transcode of animated GIFs
//! - Skips files that are already on disk
//! - Never leaves a truncated file behind
//!
//! # Example
//!
//! ```no_run
//! use imgur_downloader::{download_album, Config, HttpFetcher, ImgurApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.client.id = "0123456789abcde".to_string();
//!
//!     let api = ImgurApi::new(config.client.id.clone(), &config.options.user_agent)?;
//!     let fetcher = HttpFetcher::new(&config.options.user_agent)?;
//!
//!     let result = download_album(&api, &fetcher, &config, "AbC12").await?;
//!     println!("{} downloaded, {} skipped", result.downloaded, result.skipped);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;

// Re-exports for convenience
pub use api::{AlbumSource, ImgurApi};
pub use config::{Config, FolderNaming};
pub use download::{
    download_account, download_album, fetch_album, AccountSummary, HttpFetcher, MediaFetcher,
    RunResult,
};
pub use error::{Error, Result};
pub use media::{AlbumTarget, ItemDescriptor};
