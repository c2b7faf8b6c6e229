//! Interactive prompts.

use console::{style, Term};

use crate::error::Result;
use crate::media::AlbumTarget;

/// Ask for a single account-or-album identifier.
pub fn prompt_target() -> Result<String> {
    let term = Term::stdout();
    term.write_str(&format!(
        "{} ",
        style("Please pass in an account name or album id:").bold()
    ))?;
    Ok(term.read_line()?)
}

/// Ask whether an album of an account should be downloaded.
///
/// A read failure (no terminal) counts as the default answer, yes.
pub fn confirm_album(target: &AlbumTarget) -> bool {
    let term = Term::stdout();
    let question = format!(
        "Download '{}' by {} ({})? [Y/n] ",
        target.title(),
        target.owner(),
        target.id
    );

    if term.write_str(&question).is_err() {
        return true;
    }

    match term.read_line() {
        Ok(answer) => parse_yes_no(&answer, true),
        Err(e) => {
            tracing::debug!("Could not read confirmation: {}", e);
            true
        }
    }
}

/// Interpret a yes/no answer, falling back to `default` for anything else.
pub fn parse_yes_no(answer: &str, default: bool) -> bool {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    }
}
