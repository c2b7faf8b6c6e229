//! Imgur API HTTP client.

use async_trait::async_trait;
use reqwest::{header, Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::api::source::AlbumSource;
use crate::api::types::*;
use crate::error::{Error, Result};

/// Imgur API base URL.
const API_BASE: &str = "https://api.imgur.com/3";

/// Upper bound on account album pages, 50 albums each.
const MAX_ACCOUNT_PAGES: u32 = 200;

/// Seconds to report when a 429 carries no `Retry-After`.
const DEFAULT_RETRY_AFTER: u64 = 60;

/// Characters of an unparsable body quoted in the error.
const BODY_EXCERPT_CHARS: usize = 500;

/// Imgur API client using anonymous application credentials.
pub struct ImgurApi {
    client: Client,
    client_id: String,
    base_url: String,
}

impl ImgurApi {
    /// Create a new API client.
    pub fn new(client_id: String, user_agent: &str) -> Result<Self> {
        Self::with_base_url(client_id, user_agent, API_BASE)
    }

    /// Create a client against a different API root.
    pub fn with_base_url(client_id: String, user_agent: &str, base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            client_id,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Make an authenticated GET request and map error statuses.
    ///
    /// `not_found` builds the error for 404s and for 403s that are not about
    /// the client credentials (private or hidden resources).
    async fn get<F>(&self, path: &str, not_found: F) -> Result<Response>
    where
        F: FnOnce() -> Error,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, format!("Client-ID {}", self.client_id))
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_RETRY_AFTER);
            return Err(Error::RateLimited(retry_after));
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiResponse<ApiErrorData>>(&body)
            .map(|r| r.data.message())
            .unwrap_or(body);

        match status {
            StatusCode::NOT_FOUND => Err(not_found()),
            StatusCode::UNAUTHORIZED => Err(Error::Authentication(format!(
                "HTTP {}: {}",
                status, message
            ))),
            StatusCode::FORBIDDEN if message.to_lowercase().contains("client") => Err(
                Error::Authentication(format!("HTTP {}: {}", status, message)),
            ),
            StatusCode::FORBIDDEN => {
                tracing::debug!("Access denied: {}", message);
                Err(not_found())
            }
            _ => Err(Error::Api(format!("HTTP {}: {}", status, message))),
        }
    }

    /// Decode the `{ data, success }` envelope.
    async fn parse<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
        let text = response.text().await?;
        tracing::debug!("{} response length: {} bytes", what, text.len());

        let api_response: ApiResponse<T> = serde_json::from_str(&text).map_err(|e| {
            Error::Api(format!(
                "Failed to parse {}: {} - Response: {}",
                what,
                e,
                excerpt(&text, BODY_EXCERPT_CHARS)
            ))
        })?;

        if !api_response.success {
            return Err(Error::Api(format!(
                "Failed to get {} (status {})",
                what, api_response.status
            )));
        }

        Ok(api_response.data)
    }
}

/// At most `max_chars` leading characters of `text`.
fn excerpt(text: &str, max_chars: usize) -> &str {
    text.char_indices()
        .nth(max_chars)
        .map_or(text, |(end, _)| &text[..end])
}

#[async_trait]
impl AlbumSource for ImgurApi {
    async fn get_album(&self, album_id: &str) -> Result<RemoteAlbum> {
        let path = format!("/album/{}", album_id);
        let response = self
            .get(&path, || Error::AlbumNotFound(album_id.to_string()))
            .await?;
        Self::parse(response, "album").await
    }

    async fn get_account_albums(&self, account_name: &str) -> Result<Vec<RemoteAlbumSummary>> {
        let mut albums = Vec::new();

        for page in 0..MAX_ACCOUNT_PAGES {
            let path = format!("/account/{}/albums/{}", account_name, page);
            let response = match self
                .get(&path, || Error::AccountNotFound(account_name.to_string()))
                .await
            {
                Ok(response) => response,
                // Only the first page decides whether the account exists.
                Err(e) if page > 0 && e.is_not_found() => {
                    tracing::debug!("Page {} of {} not found, stopping", page, account_name);
                    break;
                }
                Err(e) => return Err(e),
            };
            let batch: Vec<RemoteAlbumSummary> = Self::parse(response, "account albums").await?;

            if batch.is_empty() {
                break;
            }
            albums.extend(batch);
        }

        Ok(albums)
    }
}
