//! Downloadable item and album target representation.

use crate::config::FolderNaming;
use crate::fs::naming::url_basename;

/// Owner shown for albums uploaded without an account.
pub const ANONYMOUS_OWNER: &str = "Anonymous";

/// Title shown for albums without one.
pub const UNTITLED_ALBUM: &str = "Untitled";

/// One remote resource to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDescriptor {
    /// Generic direct link.
    pub primary_url: String,

    /// Smaller transcoded variant, preferred over `primary_url` when present.
    pub alternate_url: Option<String>,

    /// Basename of the effective URL.
    pub suggested_filename: String,
}

impl ItemDescriptor {
    /// Build a descriptor, deriving the filename from the effective URL.
    pub fn new(primary_url: String, alternate_url: Option<String>) -> Self {
        let effective = alternate_url.as_deref().unwrap_or(&primary_url);
        let suggested_filename = url_basename(effective).to_string();

        Self {
            primary_url,
            alternate_url,
            suggested_filename,
        }
    }

    /// The URL that is actually fetched.
    pub fn effective_url(&self) -> &str {
        self.alternate_url.as_deref().unwrap_or(&self.primary_url)
    }
}

/// An album as a download target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumTarget {
    pub id: String,
    pub owner_display_name: Option<String>,
    pub title: Option<String>,
}

impl AlbumTarget {
    /// A target known only by its id.
    pub fn from_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            owner_display_name: None,
            title: None,
        }
    }

    pub fn owner(&self) -> &str {
        non_blank(self.owner_display_name.as_deref()).unwrap_or(ANONYMOUS_OWNER)
    }

    pub fn title(&self) -> &str {
        non_blank(self.title.as_deref()).unwrap_or(UNTITLED_ALBUM)
    }

    /// Whether the service returned any owner or title.
    pub fn has_metadata(&self) -> bool {
        non_blank(self.owner_display_name.as_deref()).is_some()
            || non_blank(self.title.as_deref()).is_some()
    }

    /// Keep this target's id, taking owner and title from `other` where
    /// this one has none.
    pub fn or_metadata_from(self, other: AlbumTarget) -> Self {
        let owner_display_name = if non_blank(self.owner_display_name.as_deref()).is_some() {
            self.owner_display_name
        } else {
            other.owner_display_name
        };
        let title = if non_blank(self.title.as_deref()).is_some() {
            self.title
        } else {
            other.title
        };

        Self {
            id: self.id,
            owner_display_name,
            title,
        }
    }

    /// Unsanitized folder name for this album.
    pub fn folder_name(&self, naming: FolderNaming) -> String {
        match naming {
            FolderNaming::Descriptive if self.has_metadata() => {
                format!("{} - {} ({})", self.owner(), self.title(), self.id)
            }
            _ => self.id.clone(),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
