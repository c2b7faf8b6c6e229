//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, FolderNaming};

/// Imgur album downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "imgur-downloader",
    version,
    about = "Download public albums and accounts from Imgur",
    long_about = "Downloads every image of public Imgur albums into images/<album>/.\n\n\
                  Pass album ids or URLs as arguments, or run without arguments to be \
                  asked for an account name or album id. Files already on disk are skipped."
)]
pub struct Args {
    /// Album ids or album URLs to download.
    pub albums: Vec<String>,

    /// Base directory for downloads.
    #[arg(short = 'd', long = "directory")]
    pub download_directory: Option<PathBuf>,

    /// Imgur application client id.
    #[arg(long = "client-id", env = "IMGUR_CLIENT_ID")]
    pub client_id: Option<String>,

    /// Imgur application client secret.
    #[arg(long = "client-secret", env = "IMGUR_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,

    /// How album folders are named.
    #[arg(long, value_enum)]
    pub folders: Option<FolderNamingArg>,

    /// Path to configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Ask before downloading each album of an account.
    #[arg(long)]
    pub confirm: bool,

    /// Don't append attempted album ids to albums.log.
    #[arg(long)]
    pub no_album_log: bool,

    /// Hide per-file download and skip lines.
    #[arg(long, short)]
    pub quiet: bool,

    /// Show information about skipped downloads.
    #[arg(long)]
    pub show_skipped: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI folder naming argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FolderNamingArg {
    /// Bare album id.
    Id,
    /// Owner, title and id.
    Descriptive,
}

impl From<FolderNamingArg> for FolderNaming {
    fn from(arg: FolderNamingArg) -> Self {
        match arg {
            FolderNamingArg::Id => FolderNaming::Id,
            FolderNamingArg::Descriptive => FolderNaming::Descriptive,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(client_id) = &self.client_id {
            config.client.id = client_id.clone();
        }

        if let Some(secret) = &self.client_secret {
            config.client.secret = Some(secret.clone());
        }

        if let Some(dir) = &self.download_directory {
            config.options.download_directory = dir.clone();
        }

        if let Some(folders) = self.folders {
            config.options.folder_naming = folders.into();
        }

        // Boolean flags (only override if set to non-default)
        if self.no_album_log {
            config.options.album_log = false;
        }

        if self.quiet {
            config.options.show_downloads = false;
            config.options.show_skipped_downloads = false;
        }

        if self.show_skipped {
            config.options.show_skipped_downloads = true;
        }
    }
}
