//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Album ids are short alphanumeric strings.
static ALBUM_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{5,10}$").expect("Invalid album id pattern"));

/// Minimum length for an application client id.
const MIN_CLIENT_ID_LENGTH: usize = 10;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_client_id(&config.client.id)?;

    if config.download_directory().as_os_str().is_empty() {
        return Err(Error::ConfigValidation {
            field: "download_directory".to_string(),
            message: "Download directory cannot be empty".to_string(),
        });
    }

    Ok(())
}

/// Validate the application client id.
pub fn validate_client_id(client_id: &str) -> Result<()> {
    if client_id.is_empty() {
        return Err(Error::MissingConfig(
            "client.id (register an application at https://api.imgur.com/oauth2/addclient)"
                .to_string(),
        ));
    }

    // Check for placeholder values
    let lower = client_id.to_lowercase();
    if lower.contains("replaceme") || lower.contains("your_client_id") {
        return Err(Error::ConfigValidation {
            field: "client.id".to_string(),
            message: "Client id appears to be a placeholder. Please provide your application's client id."
                .to_string(),
        });
    }

    if client_id.len() < MIN_CLIENT_ID_LENGTH {
        return Err(Error::ConfigValidation {
            field: "client.id".to_string(),
            message: format!(
                "Client id must be at least {} characters (got {})",
                MIN_CLIENT_ID_LENGTH,
                client_id.len()
            ),
        });
    }

    if !client_id.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(Error::ConfigValidation {
            field: "client.id".to_string(),
            message: "Client id may only contain letters and digits".to_string(),
        });
    }

    Ok(())
}

/// Extract an album id from a URL or direct id string.
///
/// Accepts `https://imgur.com/a/<id>`, `https://imgur.com/gallery/<id>` and
/// bare ids. Gallery slugs such as `cute-cats-AbC12` resolve to the trailing id.
pub fn parse_album_id(input: &str) -> Result<String> {
    let input = input.trim();

    if input.starts_with("http://") || input.starts_with("https://") {
        let url = url::Url::parse(input)?;
        let mut segments = url.path_segments().into_iter().flatten();

        while let Some(segment) = segments.next() {
            if segment == "a" || segment == "gallery" {
                if let Some(slug) = segments.next() {
                    let id = slug.rsplit('-').next().unwrap_or(slug);
                    if is_album_id(id) {
                        return Ok(id.to_string());
                    }
                }
            }
        }

        return Err(Error::ConfigValidation {
            field: "album_id".to_string(),
            message: format!("Could not extract album id from URL: {}", input),
        });
    }

    if is_album_id(input) {
        return Ok(input.to_string());
    }

    Err(Error::ConfigValidation {
        field: "album_id".to_string(),
        message: format!(
            "Invalid album id: '{}'. Must be alphanumeric or a valid Imgur album URL.",
            input
        ),
    })
}

/// Normalize an account-or-album identifier typed at the prompt.
///
/// Profile URLs (`https://imgur.com/user/<name>`) yield the account name and
/// album URLs yield the album id; anything else is returned trimmed.
pub fn parse_target(input: &str) -> Result<String> {
    let input = input.trim();

    if input.starts_with("http://") || input.starts_with("https://") {
        let url = url::Url::parse(input)?;
        let segments: Vec<&str> = url.path_segments().into_iter().flatten().collect();

        if let ["user", name, ..] = segments.as_slice() {
            if !name.is_empty() {
                return Ok(name.to_string());
            }
        }

        return parse_album_id(input);
    }

    if input.is_empty() {
        return Err(Error::MissingConfig(
            "account name or album id".to_string(),
        ));
    }

    Ok(input.to_string())
}

fn is_album_id(candidate: &str) -> bool {
    ALBUM_ID_PATTERN.is_match(candidate)
}
