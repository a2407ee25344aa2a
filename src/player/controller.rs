//! Session controller: playback state and playlists over a catalog

use super::config::{PlayerConfig, RandomPolicy};
use super::error::{CommandError, Refusal};
use super::report::Report;
use crate::catalog::Catalog;
use crate::model::Playlist;
use rand::Rng;
use std::collections::HashMap;

/// What the player is doing right now
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Stopped,

    Playing { video_id: String },

    Paused { video_id: String },
}

impl PlaybackState {
    /// The active video, playing or paused
    pub fn video_id(&self) -> Option<&str> {
        match self {
            PlaybackState::Stopped => None,
            PlaybackState::Playing { video_id } | PlaybackState::Paused { video_id } => {
                Some(video_id.as_str())
            }
        }
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, PlaybackState::Paused { .. })
    }
}

/// Single-session video player
///
/// Owns the playback state and the playlists; videos are only ever
/// referenced by ID and read through the `Catalog`.
pub struct VideoPlayer<C: Catalog> {
    pub(super) config: PlayerConfig,
    pub(super) catalog: C,
    /// Playlists keyed by `Playlist::key` of their name
    pub(super) playlists: HashMap<String, Playlist>,
    pub(super) playback: PlaybackState,
}

impl<C: Catalog> VideoPlayer<C> {
    /// Create a player over a loaded catalog
    pub fn new(config: PlayerConfig, catalog: C) -> Self {
        Self {
            config,
            catalog,
            playlists: HashMap::new(),
            playback: PlaybackState::Stopped,
        }
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    /// Look up a playlist by name, ignoring case
    pub fn playlist(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&Playlist::key(name))
    }

    /// Play a video, stopping whatever is active first
    pub fn play_video(&mut self, video_id: &str) -> Report {
        let (title, flag) = match self.catalog.get_video(video_id) {
            Some(video) => (video.title.clone(), video.flag.clone()),
            None => return CommandError::new("play video", Refusal::VideoNotFound).into(),
        };

        let mut report = self.stop_active();

        match flag {
            Some(reason) => {
                report.extend(CommandError::new("play video", Refusal::Flagged { reason }).into());
            }
            None => {
                log::debug!("Playing {}", video_id);
                self.playback = PlaybackState::Playing {
                    video_id: video_id.to_string(),
                };
                report.push(format!("Playing video: {}", title));
            }
        }

        report
    }

    pub fn stop_video(&mut self) -> Report {
        let report = self.stop_active();
        if report.is_empty() {
            return CommandError::new("stop video", Refusal::NothingPlaying).into();
        }
        report
    }

    /// Play a random video using the thread-local generator
    pub fn play_random_video(&mut self) -> Report {
        let mut rng = rand::rng();
        self.play_random_video_with(&mut rng)
    }

    /// Play a random video drawn from `rng`, following the configured `RandomPolicy`
    pub fn play_random_video_with<R: Rng>(&mut self, rng: &mut R) -> Report {
        let policy = self.config.random_policy;
        let mut candidates: Vec<(&str, bool)> = self
            .catalog
            .videos()
            .into_iter()
            .filter(|video| policy == RandomPolicy::AnyVideo || !video.is_flagged())
            .map(|video| (video.id.as_str(), video.is_flagged()))
            .collect();

        if candidates.is_empty() {
            return Report::line("No videos available");
        }

        // Catalog order is unspecified; sort so a seeded rng is reproducible
        candidates.sort_unstable();
        let (video_id, flagged) = candidates[rng.random_range(0..candidates.len())];
        if flagged {
            log::debug!("Random pick {} is flagged", video_id);
            return Report::line("No videos available");
        }

        let video_id = video_id.to_string();
        self.play_video(&video_id)
    }

    pub fn pause_video(&mut self) -> Report {
        match self.playback.clone() {
            PlaybackState::Stopped => {
                CommandError::new("pause video", Refusal::NothingPlaying).into()
            }
            PlaybackState::Paused { video_id } => {
                Report::line(format!("Video already paused: {}", self.title_of(&video_id)))
            }
            PlaybackState::Playing { video_id } => {
                log::debug!("Pausing {}", video_id);
                let report = Report::line(format!("Pausing video: {}", self.title_of(&video_id)));
                self.playback = PlaybackState::Paused { video_id };
                report
            }
        }
    }

    pub fn continue_video(&mut self) -> Report {
        match self.playback.clone() {
            PlaybackState::Stopped => {
                CommandError::new("continue video", Refusal::NothingPlaying).into()
            }
            PlaybackState::Playing { .. } => {
                CommandError::new("continue video", Refusal::NotPaused).into()
            }
            PlaybackState::Paused { video_id } => {
                log::debug!("Continuing {}", video_id);
                let report =
                    Report::line(format!("Continuing video: {}", self.title_of(&video_id)));
                self.playback = PlaybackState::Playing { video_id };
                report
            }
        }
    }

    pub fn show_playing(&self) -> Report {
        let Some(video) = self
            .playback
            .video_id()
            .and_then(|id| self.catalog.get_video(id))
        else {
            return Report::line("No video is currently playing");
        };

        if self.playback.is_paused() {
            Report::line(format!("Currently playing: {} - PAUSED", video))
        } else {
            Report::line(format!("Currently playing: {}", video))
        }
    }

    /// Stop the active video, if any. Empty report when nothing was active.
    pub(super) fn stop_active(&mut self) -> Report {
        let previous = std::mem::take(&mut self.playback);
        match previous.video_id() {
            Some(video_id) => {
                log::debug!("Stopping {}", video_id);
                Report::line(format!("Stopping video: {}", self.title_of(video_id)))
            }
            None => Report::new(),
        }
    }

    /// Title for a referenced video, falling back to its ID
    pub(super) fn title_of(&self, video_id: &str) -> String {
        self.catalog
            .get_video(video_id)
            .map(|video| video.title.clone())
            .unwrap_or_else(|| video_id.to_string())
    }
}
