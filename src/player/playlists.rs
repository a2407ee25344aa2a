//! Playlist commands
//!
//! Names are matched case-insensitively through `Playlist::key`; the
//! stored playlist keeps the casing it was created with. Messages echo
//! the name as the caller typed it.

use super::controller::VideoPlayer;
use super::error::{CommandError, Refusal};
use super::report::Report;
use crate::catalog::Catalog;
use crate::model::Playlist;

impl<C: Catalog> VideoPlayer<C> {
    pub fn create_playlist(&mut self, name: &str) -> Report {
        let key = Playlist::key(name);
        if self.playlists.contains_key(&key) {
            return CommandError::new("create playlist", Refusal::PlaylistExists).into();
        }

        log::debug!("Creating playlist {:?}", name);
        self.playlists.insert(key, Playlist::new(name.to_string()));
        Report::line(format!("Successfully created new playlist: {}", name))
    }

    pub fn add_to_playlist(&mut self, name: &str, video_id: &str) -> Report {
        let action = format!("add video to {}", name);
        let Some(playlist) = self.playlists.get_mut(&Playlist::key(name)) else {
            return CommandError::new(action, Refusal::PlaylistNotFound).into();
        };
        let Some(video) = self.catalog.get_video(video_id) else {
            return CommandError::new(action, Refusal::VideoNotFound).into();
        };

        if playlist.contains(video_id) {
            return CommandError::new(action, Refusal::AlreadyAdded).into();
        }
        if let Some(reason) = &video.flag {
            let refusal = Refusal::Flagged {
                reason: reason.clone(),
            };
            return CommandError::new(action, refusal).into();
        }

        log::debug!("Adding {} to playlist {:?}", video_id, playlist.name);
        playlist.add_video(video_id);
        Report::line(format!("Added video to {}: {}", name, video.title))
    }

    pub fn remove_from_playlist(&mut self, name: &str, video_id: &str) -> Report {
        let action = format!("remove video from {}", name);
        let Some(playlist) = self.playlists.get_mut(&Playlist::key(name)) else {
            return CommandError::new(action, Refusal::PlaylistNotFound).into();
        };
        let Some(video) = self.catalog.get_video(video_id) else {
            return CommandError::new(action, Refusal::VideoNotFound).into();
        };

        if !playlist.remove_video(video_id) {
            return CommandError::new(action, Refusal::NotInPlaylist).into();
        }

        log::debug!("Removed {} from playlist {:?}", video_id, playlist.name);
        Report::line(format!("Removed video from {}: {}", name, video.title))
    }

    pub fn clear_playlist(&mut self, name: &str) -> Report {
        let Some(playlist) = self.playlists.get_mut(&Playlist::key(name)) else {
            return CommandError::new(format!("clear playlist {}", name), Refusal::PlaylistNotFound)
                .into();
        };

        log::debug!("Clearing {} videos from playlist {:?}", playlist.len(), playlist.name);
        playlist.clear();
        Report::line(format!("Successfully removed all videos from {}", name))
    }

    pub fn delete_playlist(&mut self, name: &str) -> Report {
        match self.playlists.remove(&Playlist::key(name)) {
            Some(playlist) => {
                log::debug!("Deleted playlist {:?}", playlist.name);
                Report::line(format!("Deleted playlist: {}", name))
            }
            None => {
                CommandError::new(format!("delete playlist {}", name), Refusal::PlaylistNotFound)
                    .into()
            }
        }
    }

    /// All playlist names, sorted by their stored casing
    pub fn show_all_playlists(&self) -> Report {
        if self.playlists.is_empty() {
            return Report::line("No playlists exist yet");
        }

        let mut names: Vec<&str> = self.playlists.values().map(|p| p.name.as_str()).collect();
        names.sort_unstable();

        let mut report = Report::line("Showing all playlists:");
        for name in names {
            report.push(name);
        }
        report
    }

    pub fn show_playlist(&self, name: &str) -> Report {
        let Some(playlist) = self.playlist(name) else {
            return CommandError::new(format!("show playlist {}", name), Refusal::PlaylistNotFound)
                .into();
        };

        let mut report = Report::line(format!("Showing playlist: {}", name));
        if playlist.is_empty() {
            report.push("No videos here yet");
            return report;
        }

        for video_id in playlist.video_ids() {
            match self.catalog.get_video(video_id) {
                Some(video) => report.push(video.listing()),
                None => log::warn!("Playlist {:?} references unknown video {}", playlist.name, video_id),
            }
        }
        report
    }
}
