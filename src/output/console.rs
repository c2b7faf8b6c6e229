//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print a skip notice.
pub fn print_skipped(message: &str) {
    println!("{} {}", style("SKIP").dim(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Imgur Downloader                                  ║
║     Public albums and accounts, straight to disk      ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(targets: &[String], folder_naming: &str, download_dir: &str) {
    println!();
    println!("{}", style("Configuration:").bold());
    if targets.is_empty() {
        println!("  Targets: (interactive)");
    } else {
        println!("  Targets: {}", targets.join(", "));
    }
    println!("  Folders: {}", folder_naming);
    println!("  Directory: {}", download_dir);
    println!();
}
