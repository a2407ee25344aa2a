//! Refusals reported by the session controller.
//!
//! None of these are fatal; the controller renders them into report lines.

use thiserror::Error;

/// Why a command was not carried out.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Refusal {
    #[error("Video does not exist")]
    VideoNotFound,

    #[error("Playlist does not exist")]
    PlaylistNotFound,

    #[error("A playlist with the same name already exists")]
    PlaylistExists,

    #[error("Video is currently flagged (reason: {reason})")]
    Flagged { reason: String },

    #[error("Video already added")]
    AlreadyAdded,

    #[error("Video is not in playlist")]
    NotInPlaylist,

    #[error("No video is currently playing")]
    NothingPlaying,

    #[error("Video is not paused")]
    NotPaused,

    #[error("Video is already flagged")]
    AlreadyFlagged,

    #[error("Video is not flagged")]
    NotFlagged,
}

/// A refusal bound to the action that was attempted, e.g. "add video to Fun".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Cannot {action}: {refusal}")]
pub struct CommandError {
    pub action: String,
    pub refusal: Refusal,
}

impl CommandError {
    pub fn new(action: impl Into<String>, refusal: Refusal) -> Self {
        Self {
            action: action.into(),
            refusal,
        }
    }
}
