//! Album folder naming modes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How album directories below the download root are named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FolderNaming {
    /// Bare album id (default).
    #[default]
    Id,
    /// "{owner} - {title} ({id})".
    Descriptive,
}

impl fmt::Display for FolderNaming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolderNaming::Id => write!(f, "id"),
            FolderNaming::Descriptive => write!(f, "descriptive"),
        }
    }
}

impl FromStr for FolderNaming {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "id" => Ok(FolderNaming::Id),
            "descriptive" => Ok(FolderNaming::Descriptive),
            _ => Err(format!("Unknown folder naming: {}", s)),
        }
    }
}
