//! Configuration structures and loading logic.

use crate::config::modes::FolderNaming;
use crate::error::{Error, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the working directory first.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Imgur application credentials, obtained from https://api.imgur.com/oauth2/addclient.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Application client ID, sent as `Authorization: Client-ID <id>`.
    #[serde(default)]
    pub id: String,

    /// Application client secret. Anonymous requests do not use it.
    #[serde(default)]
    pub secret: Option<String>,
}

/// Download options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Root directory under which one folder per album is created.
    #[serde(default = "default_download_directory")]
    pub download_directory: PathBuf,

    /// Album folder naming.
    #[serde(default)]
    pub folder_naming: FolderNaming,

    /// Whether to print a line per downloaded file.
    #[serde(default = "default_true")]
    pub show_downloads: bool,

    /// Whether to print a line per skipped file.
    #[serde(default = "default_true")]
    pub show_skipped_downloads: bool,

    /// Whether to append attempted album ids to `albums.log`.
    #[serde(default = "default_true")]
    pub album_log: bool,

    /// User agent for API and media requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            download_directory: default_download_directory(),
            folder_naming: FolderNaming::default(),
            show_downloads: true,
            show_skipped_downloads: true,
            album_log: true,
            user_agent: default_user_agent(),
        }
    }
}

fn default_download_directory() -> PathBuf {
    PathBuf::from("images")
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.toml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the effective download root.
    pub fn download_directory(&self) -> &Path {
        &self.options.download_directory
    }

    /// Resolve which config file to read.
    ///
    /// An explicit path always wins. Otherwise `config.toml` in the working
    /// directory is used when present, then the platform config directory.
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }

        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.exists() {
            return Some(local);
        }

        ProjectDirs::from("com", "imgur-downloader", "imgur-downloader")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }
}
