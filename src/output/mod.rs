//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Progress bars
//! - Summary reporting

pub mod console;
pub mod progress;
pub mod stats;

pub use console::{
    print_banner, print_config_summary, print_error, print_info, print_skipped, print_success,
    print_warning,
};
pub use progress::{create_download_bar, create_spinner};
pub use stats::{
    format_account_summary, format_megabytes, format_run_summary, print_account_summary,
    print_album_summary,
};
