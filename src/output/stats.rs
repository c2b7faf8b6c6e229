//! Statistics reporting.

use console::style;

use crate::download::{AccountSummary, RunResult, BYTES_PER_MB};

/// Megabytes with two decimals.
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / BYTES_PER_MB)
}

/// The one-line summary of a fetch pass.
pub fn format_run_summary(result: &RunResult) -> String {
    format!(
        "Successfully downloaded {}/{} images, skipped {} (downloaded {}MB total)",
        result.downloaded,
        result.attempted(),
        result.skipped,
        format_megabytes(result.total_bytes)
    )
}

/// The one-line summary of an account run.
pub fn format_account_summary(summary: &AccountSummary) -> String {
    format!(
        "Parsed {} albums. {}",
        summary.albums_processed,
        format_run_summary(&summary.totals)
    )
}

/// Print the summary of one album.
pub fn print_album_summary(result: &RunResult) {
    let line = format_run_summary(result);
    if result.failed > 0 {
        println!("{}", style(line).yellow());
    } else {
        println!("{}", style(line).green());
    }
}

/// Print the summary across every album of an account.
pub fn print_account_summary(summary: &AccountSummary) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style(format_account_summary(summary)).bold());
    if summary.albums_failed > 0 {
        println!(
            "  Albums failed: {}",
            style(summary.albums_failed).red()
        );
    }
    println!("{}", style("═".repeat(50)).dim());
}
