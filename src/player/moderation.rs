//! Flagging and unflagging videos

use super::controller::VideoPlayer;
use super::error::{CommandError, Refusal};
use super::report::Report;
use crate::catalog::Catalog;

impl<C: Catalog> VideoPlayer<C> {
    /// Flag a video, stopping it first if it is the active video.
    /// `None` records the configured default reason.
    pub fn flag_video(&mut self, video_id: &str, reason: Option<&str>) -> Report {
        let title = match self.catalog.get_video(video_id) {
            None => return CommandError::new("flag video", Refusal::VideoNotFound).into(),
            Some(video) if video.is_flagged() => {
                return CommandError::new("flag video", Refusal::AlreadyFlagged).into();
            }
            Some(video) => video.title.clone(),
        };

        let reason = reason
            .map(str::to_string)
            .unwrap_or_else(|| self.config.default_flag_reason.clone());

        let mut report = if self.playback.video_id() == Some(video_id) {
            self.stop_active()
        } else {
            Report::new()
        };

        log::debug!("Flagging {} (reason: {})", video_id, reason);
        self.catalog.set_flag(video_id, Some(reason.clone()));
        report.push(format!(
            "Successfully flagged video: {} (reason: {})",
            title, reason
        ));
        report
    }

    /// Clear the flag on a video
    pub fn allow_video(&mut self, video_id: &str) -> Report {
        let title = match self.catalog.get_video(video_id) {
            None => {
                return CommandError::new("remove flag from video", Refusal::VideoNotFound).into();
            }
            Some(video) if !video.is_flagged() => {
                return CommandError::new("remove flag from video", Refusal::NotFlagged).into();
            }
            Some(video) => video.title.clone(),
        };

        log::debug!("Removing flag from {}", video_id);
        self.catalog.set_flag(video_id, None);
        Report::line(format!("Successfully removed flag from video: {}", title))
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::Catalog;
    use crate::model::{Video, VideoLibrary};
    use crate::player::{PlayerConfig, Report, VideoPlayer};

    fn player() -> VideoPlayer<VideoLibrary> {
        let library = vec![
            Video::new("v1", "Amazing Cat", vec!["cat".to_string()]),
            Video::new("v2", "Boring Dog", vec!["dog".to_string()]),
        ]
        .into_iter()
        .collect();
        VideoPlayer::new(PlayerConfig::default(), library)
    }

    fn lines(report: &Report) -> Vec<&str> {
        report.lines().iter().map(String::as_str).collect()
    }

    #[test]
    fn test_flag_then_play() {
        let mut player = player();
        assert_eq!(
            lines(&player.flag_video("v1", Some("spam"))),
            ["Successfully flagged video: Amazing Cat (reason: spam)"]
        );
        assert_eq!(
            lines(&player.play_video("v1")),
            ["Cannot play video: Video is currently flagged (reason: spam)"]
        );
        assert!(player.playback().video_id().is_none());
    }

    #[test]
    fn test_flag_default_reason() {
        let mut player = player();
        assert_eq!(
            lines(&player.flag_video("v2", None)),
            ["Successfully flagged video: Boring Dog (reason: Not supplied)"]
        );

        let config = PlayerConfig::default().with_flag_reason("Unspecified");
        let mut custom = VideoPlayer::new(config, player.catalog().clone());
        assert_eq!(
            lines(&custom.flag_video("v1", None)),
            ["Successfully flagged video: Amazing Cat (reason: Unspecified)"]
        );
    }

    #[test]
    fn test_flag_stops_active_video() {
        let mut player = player();
        player.play_video("v1");
        player.pause_video();

        assert_eq!(
            lines(&player.flag_video("v1", Some("spam"))),
            [
                "Stopping video: Amazing Cat",
                "Successfully flagged video: Amazing Cat (reason: spam)",
            ]
        );
        assert!(player.playback().video_id().is_none());
    }

    #[test]
    fn test_flag_other_video_keeps_playing() {
        let mut player = player();
        player.play_video("v1");
        player.flag_video("v2", Some("spam"));
        assert_eq!(player.playback().video_id(), Some("v1"));
    }

    #[test]
    fn test_flag_refusals() {
        let mut player = player();
        assert_eq!(
            lines(&player.flag_video("nope", None)),
            ["Cannot flag video: Video does not exist"]
        );

        player.flag_video("v1", Some("spam"));
        assert_eq!(
            lines(&player.flag_video("v1", Some("other"))),
            ["Cannot flag video: Video is already flagged"]
        );
        assert_eq!(
            player.catalog().get_video("v1").unwrap().flag.as_deref(),
            Some("spam")
        );
    }

    #[test]
    fn test_allow_video() {
        let mut player = player();
        assert_eq!(
            lines(&player.allow_video("nope")),
            ["Cannot remove flag from video: Video does not exist"]
        );
        assert_eq!(
            lines(&player.allow_video("v1")),
            ["Cannot remove flag from video: Video is not flagged"]
        );

        player.flag_video("v1", Some("spam"));
        assert_eq!(
            lines(&player.allow_video("v1")),
            ["Successfully removed flag from video: Amazing Cat"]
        );
        assert_eq!(lines(&player.play_video("v1")), ["Playing video: Amazing Cat"]);
    }
}
