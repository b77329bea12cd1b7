//! Error taxonomy surfaced to the user.
//!
//! Every failure a command can hit is converted locally into a single
//! `✗`-prefixed error line; nothing propagates past the dispatcher and the
//! session stays usable after any of them.

use thiserror::Error;

use crate::models::Line;

/// User-facing shell errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ShellError {
    /// Path resolution failed or the target is a file (`ls`, `tree`).
    #[error("Not a directory")]
    NotADirectory,
    /// Path resolution failed (`cat`).
    #[error("File not found")]
    FileNotFound,
    /// Expected a file, resolved a folder (`cat`).
    #[error("Is a directory")]
    IsADirectory,
    /// Target missing or not a folder (`cd`).
    #[error("No such directory")]
    NoSuchDirectory,
    /// First token did not match any registered command.
    #[error("Command not found: {0}")]
    CommandNotFound(String),
}

impl ShellError {
    /// Render as a single error line.
    pub fn to_line(&self) -> Line {
        Line::error(self.to_string())
    }
}
