//! Configuration module for the imgur-downloader.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Album folder naming modes
//! - Configuration and identifier validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{ClientConfig, Config, OptionsConfig};
pub use modes::FolderNaming;
pub use validation::{parse_album_id, parse_target, validate_config};
