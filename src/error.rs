//! Error types shared by the deck importer, the preferences store and the study session.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// The deck file is missing, unreadable or not valid UTF-8.
    #[error("Cannot open flashcard file '{}': {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write preferences to '{}': {source}", .path.display())]
    PreferencesIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Preferences JSON error: {0}")]
    PreferencesJson(#[from] serde_json::Error),
}

/// Actions rejected by the study session because they are disabled in its current state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("no card is currently shown")]
    NoCurrentCard,

    #[error("the answer is already revealed")]
    AlreadyRevealed,

    #[error("reveal the answer before grading")]
    NotRevealed,
}
