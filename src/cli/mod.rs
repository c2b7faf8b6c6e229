//! Command-line interface: arguments and interactive prompts.

pub mod args;
pub mod prompt;

pub use args::{Args, FolderNamingArg};
pub use prompt::{confirm_album, prompt_target};
