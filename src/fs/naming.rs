//! Filename derivation and sanitization.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Suffix of in-progress downloads.
pub const PART_SUFFIX: &str = ".part";

/// Final path segment of a URL, ignoring any query string or fragment.
///
/// Returns an empty string when the path ends with `/`.
pub fn url_basename(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.rsplit('/').next().unwrap_or(path)
}

/// Validate a filename taken from a URL.
///
/// Names with path traversal, separators or characters that are reserved on
/// common filesystems are rejected rather than rewritten, so two different
/// URLs never map to the same local file.
pub fn sanitize_filename(name: &str) -> Result<String> {
    // Reject path traversal attempts
    if name == "." || name == ".." {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidFilename(format!(
            "Path separators not allowed in filename: '{}'",
            name
        )));
    }

    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed in filename: '{}'",
            name
        )));
    }

    if let Some(c) = name.chars().find(|&c| is_reserved(c)) {
        return Err(Error::InvalidFilename(format!(
            "Reserved character {:?} not allowed in filename: '{}'",
            c, name
        )));
    }

    if name.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Filename cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(name.to_string())
}

fn is_reserved(c: char) -> bool {
    matches!(c, ':' | '*' | '?' | '"' | '<' | '>' | '|') || c.is_control()
}

/// Sanitize a folder name into a single path component.
///
/// Separators are replaced rather than rejected, so album titles like
/// "before/after" stay usable.
pub fn sanitize_path_component(name: &str) -> Result<String> {
    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed: '{}'",
            name
        )));
    }

    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let sanitized = sanitized.trim().to_string();

    if sanitized.is_empty() {
        return Err(Error::InvalidFilename(
            "Path component cannot be empty or whitespace-only".to_string(),
        ));
    }

    if sanitized.chars().all(|c| c == '.') {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    Ok(sanitized)
}

/// Temporary sibling a download is streamed into before being renamed.
///
/// `abc.mp4` becomes `.abc.mp4.part`; no finished item can have that name.
pub fn part_path(final_path: &Path) -> PathBuf {
    let name = final_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    final_path.with_file_name(format!(".{}{}", name, PART_SUFFIX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_basename() {
        assert_eq!(url_basename("https://i.imgur.com/abc.jpg"), "abc.jpg");
        assert_eq!(url_basename("https://i.imgur.com/abc.jpg?1"), "abc.jpg");
        assert_eq!(url_basename("https://i.imgur.com/abc.mp4#t=2"), "abc.mp4");
        assert_eq!(url_basename("https://i.imgur.com/x/y/abc.png?a=b#c"), "abc.png");
        assert_eq!(url_basename("https://i.imgur.com/"), "");
        assert_eq!(url_basename("abc.gif"), "abc.gif");
    }

    #[test]
    fn test_sanitize_filename_valid() {
        assert_eq!(sanitize_filename("normal.jpg").unwrap(), "normal.jpg");
        assert_eq!(sanitize_filename("a_b.jpg").unwrap(), "a_b.jpg");
        assert_eq!(sanitize_filename("...jpg").unwrap(), "...jpg");
    }

    #[test]
    fn test_sanitize_filename_rejects_reserved_characters() {
        assert!(matches!(
            sanitize_filename("a:b.jpg"),
            Err(Error::InvalidFilename(_))
        ));
        assert!(sanitize_filename("file*with?special.mp4").is_err());
        assert!(sanitize_filename("tab\tname.jpg").is_err());
    }

    #[test]
    fn test_sanitize_filename_rejects() {
        assert!(sanitize_filename("..").is_err());
        assert!(sanitize_filename("path/to/file.jpg").is_err());
        assert!(sanitize_filename("path\\to\\file.jpg").is_err());
        assert!(sanitize_filename("file\0name.jpg").is_err());
        assert!(sanitize_filename("").is_err());
        assert!(sanitize_filename("   ").is_err());
    }

    #[test]
    fn test_sanitize_path_component() {
        assert_eq!(sanitize_path_component("AbC12").unwrap(), "AbC12");
        assert_eq!(
            sanitize_path_component("someone - before/after (AbC12)").unwrap(),
            "someone - before_after (AbC12)"
        );
        assert_eq!(
            sanitize_path_component("someone - Wait... what (AbC12)").unwrap(),
            "someone - Wait... what (AbC12)"
        );
        assert_eq!(sanitize_path_component("../evil").unwrap(), ".._evil");
    }

    #[test]
    fn test_sanitize_path_component_rejects() {
        assert!(sanitize_path_component("..").is_err());
        assert!(sanitize_path_component(" . ").is_err());
        assert!(sanitize_path_component("").is_err());
        assert!(sanitize_path_component("a\0b").is_err());
    }

    #[test]
    fn test_part_path() {
        assert_eq!(
            part_path(Path::new("images/AbC12/abc.mp4")),
            PathBuf::from("images/AbC12/.abc.mp4.part")
        );
    }
}
