//! Filesystem module.
//!
//! Provides:
//! - Album directory management
//! - Filename derivation and sanitization
//! - The attempted-albums log

pub mod history;
pub mod naming;
pub mod paths;

pub use history::record_album_attempt;
pub use naming::{part_path, sanitize_filename, sanitize_path_component, url_basename};
pub use paths::{ensure_dir, get_album_folder};
