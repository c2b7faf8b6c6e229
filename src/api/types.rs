//! API response type definitions.

use serde::Deserialize;

/// Generic API response wrapper: `{ "data": ..., "success": bool, "status": u16 }`.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub success: bool,
    #[serde(default)]
    pub status: u16,
}

/// Error payload returned in `data` on failures.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorData {
    pub error: serde_json::Value,
}

impl ApiErrorData {
    /// Human readable message; the service sends either a string or an object.
    pub fn message(&self) -> String {
        match &self.error {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Object(map) => map
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| self.error.to_string()),
            other => other.to_string(),
        }
    }
}

/// Album with its images, from `/album/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteAlbum {
    pub id: String,
    pub title: Option<String>,
    /// Owner account name; absent for anonymous uploads.
    pub account_url: Option<String>,
    #[serde(default)]
    pub images: Vec<RemoteImage>,
}

/// A single image of an album.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteImage {
    /// Generic direct link.
    pub link: String,
    /// MP4 transcode, exposed for animated images.
    pub mp4: Option<String>,
}

/// Album metadata without images, from `/account/{name}/albums/{page}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteAlbumSummary {
    pub id: String,
    pub title: Option<String>,
    pub account_url: Option<String>,
}
