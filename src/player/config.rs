//! Session configuration

use std::path::PathBuf;

/// Reason recorded when a video is flagged without one
pub const DEFAULT_FLAG_REASON: &str = "Not supplied";

/// Configuration for a player session
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    /// Catalog file loaded at startup
    pub catalog_path: PathBuf,

    /// Reason used by `flag_video` when none is given
    pub default_flag_reason: String,

    /// How `play_random_video` picks a video
    pub random_policy: RandomPolicy,
}

/// Sampling policy for random playback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RandomPolicy {
    /// Sample every video; a flagged pick reports "No videos available"
    #[default]
    AnyVideo,

    /// Sample only unflagged videos
    PlayableOnly,
}

impl PlayerConfig {
    /// Create a new session configuration
    pub fn new(catalog_path: PathBuf) -> Self {
        Self {
            catalog_path,
            default_flag_reason: DEFAULT_FLAG_REASON.to_string(),
            random_policy: RandomPolicy::default(),
        }
    }

    /// Set the reason used for flags given without one
    pub fn with_flag_reason(mut self, reason: impl Into<String>) -> Self {
        self.default_flag_reason = reason.into();
        self
    }

    /// Set random playback policy
    pub fn with_random_policy(mut self, policy: RandomPolicy) -> Self {
        self.random_policy = policy;
        self
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("data/videos.txt"))
    }
}
