//! Download module for content downloading.
//!
//! This module provides:
//! - Outcome tracking and folding
//! - Media byte sources
//! - Per-item reconcile and streaming to disk
//! - Album downloading
//! - Account downloading

pub mod account;
pub mod album;
pub mod fetcher;
pub mod media;
pub mod state;

pub use account::download_account;
pub use album::{download_album, download_known_album, fetch_album};
pub use fetcher::{HttpFetcher, MediaFetcher, MediaStream};
pub use media::download_item;
pub use state::{AccountSummary, ItemOutcome, RunResult, BYTES_PER_MB};
