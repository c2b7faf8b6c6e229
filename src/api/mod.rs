//! Imgur API module.
//!
//! This module provides:
//! - The `AlbumSource` capability the downloader resolves albums through
//! - HTTP client for the Imgur REST API
//! - API response types

pub mod client;
pub mod source;
pub mod types;

pub use client::ImgurApi;
pub use source::AlbumSource;
pub use types::*;
