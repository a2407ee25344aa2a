//! Catalog listing and search commands

use super::controller::VideoPlayer;
use super::report::Report;
use crate::catalog::Catalog;
use crate::model::Video;

/// Result of a search: the report to show and the videos the
/// caller may pick from, numbered from 1 in report order
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub report: Report,
    candidates: Vec<String>,
}

impl SearchOutcome {
    /// Video IDs offered for selection
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Whether a selection prompt was shown
    pub fn has_results(&self) -> bool {
        !self.candidates.is_empty()
    }

    /// Candidate picked by a 1-based answer. Anything else is a "no".
    pub fn selection(&self, answer: &str) -> Option<&str> {
        let number: usize = answer.trim().parse().ok()?;
        let index = number.checked_sub(1)?;
        self.candidates.get(index).map(String::as_str)
    }
}

impl<C: Catalog> VideoPlayer<C> {
    /// Number of playable (unflagged) videos
    pub fn number_of_videos(&self) -> Report {
        let count = self
            .catalog
            .videos()
            .into_iter()
            .filter(|video| !video.is_flagged())
            .count();
        Report::line(format!("{} videos in the library", count))
    }

    pub fn show_all_videos(&self) -> Report {
        let mut report = Report::line("Here's a list of all available videos:");
        for video in self.sorted_videos() {
            report.push(video.listing());
        }
        report
    }

    /// Unflagged videos whose title contains `term`, ignoring case
    pub fn search_videos(&self, term: &str) -> SearchOutcome {
        self.search(term, |video| video.title_contains(term))
    }

    /// Unflagged videos carrying exactly `tag`, ignoring case
    pub fn search_videos_with_tag(&self, tag: &str) -> SearchOutcome {
        self.search(tag, |video| video.has_tag(tag))
    }

    /// Play the search result picked by `answer`
    ///
    /// Out-of-range or non-numeric answers play nothing and
    /// produce an empty report.
    pub fn play_selection(&mut self, outcome: &SearchOutcome, answer: &str) -> Report {
        match outcome.selection(answer) {
            Some(video_id) => self.play_video(video_id),
            None => {
                log::debug!("No search selection for answer {:?}", answer);
                Report::new()
            }
        }
    }

    fn search<F>(&self, query: &str, matches: F) -> SearchOutcome
    where
        F: Fn(&Video) -> bool,
    {
        let found: Vec<&Video> = self
            .sorted_videos()
            .into_iter()
            .filter(|video| !video.is_flagged() && matches(*video))
            .collect();

        log::debug!("Search {:?} matched {} videos", query, found.len());

        if found.is_empty() {
            return SearchOutcome {
                report: Report::line(format!("No search results for {}", query)),
                candidates: Vec::new(),
            };
        }

        let mut report = Report::line(format!("Here are the results for {}:", query));
        for (i, video) in found.iter().enumerate() {
            report.push(format!("  {}) {}", i + 1, video));
        }
        report.push("Would you like to play any of the above? If yes, specify the number of the video.");
        report.push("If your answer is not a valid number, we will assume it's a no.");

        SearchOutcome {
            report,
            candidates: found.iter().map(|video| video.id.clone()).collect(),
        }
    }

    /// All videos sorted by title, then ID
    fn sorted_videos(&self) -> Vec<&Video> {
        let mut videos = self.catalog.videos();
        videos.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
        videos
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::Catalog;
    use crate::model::{Video, VideoLibrary};
    use crate::player::{PlayerConfig, Report, VideoPlayer};

    fn player() -> VideoPlayer<VideoLibrary> {
        let library = vec![
            Video::new("v2", "Boring Dog", vec!["dog".to_string()]),
            Video::new("v1", "Amazing Cat", vec!["cat".to_string()]),
            Video::new("v3", "Another Cat", vec!["cat".to_string(), "funny".to_string()]),
        ]
        .into_iter()
        .collect();
        VideoPlayer::new(PlayerConfig::default(), library)
    }

    fn lines(report: &Report) -> Vec<&str> {
        report.lines().iter().map(String::as_str).collect()
    }

    #[test]
    fn test_number_of_videos_excludes_flagged() {
        let mut player = player();
        assert_eq!(lines(&player.number_of_videos()), ["3 videos in the library"]);

        player.catalog.set_flag("v3", Some("spam".to_string()));
        assert_eq!(lines(&player.number_of_videos()), ["2 videos in the library"]);
    }

    #[test]
    fn test_show_all_videos_sorted_by_title() {
        let mut player = player();
        player.catalog.set_flag("v2", Some("spam".to_string()));

        assert_eq!(
            lines(&player.show_all_videos()),
            [
                "Here's a list of all available videos:",
                "Amazing Cat (v1) [cat]",
                "Another Cat (v3) [cat funny]",
                "Boring Dog (v2) [dog] - FLAGGED (reason: spam)",
            ]
        );
    }

    #[test]
    fn test_search_by_title() {
        let player = player();
        let outcome = player.search_videos("CAT");

        assert_eq!(outcome.candidates(), &["v1".to_string(), "v3".to_string()]);
        assert_eq!(
            lines(&outcome.report),
            [
                "Here are the results for CAT:",
                "  1) Amazing Cat (v1) [cat]",
                "  2) Another Cat (v3) [cat funny]",
                "Would you like to play any of the above? If yes, specify the number of the video.",
                "If your answer is not a valid number, we will assume it's a no.",
            ]
        );
    }

    #[test]
    fn test_search_no_results() {
        let player = player();
        let outcome = player.search_videos("horse");

        assert!(!outcome.has_results());
        assert_eq!(lines(&outcome.report), ["No search results for horse"]);
    }

    #[test]
    fn test_search_excludes_flagged() {
        let mut player = player();
        player.catalog.set_flag("v1", Some("spam".to_string()));

        let outcome = player.search_videos_with_tag("cat");
        assert_eq!(outcome.candidates(), &["v3".to_string()]);
    }

    #[test]
    fn test_tag_search_is_exact_match() {
        let player = player();
        assert!(!player.search_videos_with_tag("ca").has_results());
        assert_eq!(
            player.search_videos_with_tag("FUNNY").candidates(),
            &["v3".to_string()]
        );
    }

    #[test]
    fn test_selection_parsing() {
        let player = player();
        let outcome = player.search_videos_with_tag("cat");

        assert_eq!(outcome.selection("1"), Some("v1"));
        assert_eq!(outcome.selection(" 2 "), Some("v3"));
        assert_eq!(outcome.selection("0"), None);
        assert_eq!(outcome.selection("3"), None);
        assert_eq!(outcome.selection("-1"), None);
        assert_eq!(outcome.selection("yes"), None);
        assert_eq!(outcome.selection(""), None);
    }

    #[test]
    fn test_play_selection() {
        let mut player = player();
        let outcome = player.search_videos_with_tag("cat");

        assert!(player.play_selection(&outcome, "9").is_empty());
        assert!(player.playback().video_id().is_none());

        assert_eq!(
            lines(&player.play_selection(&outcome, "2")),
            ["Playing video: Another Cat"]
        );
        assert_eq!(player.playback().video_id(), Some("v3"));
    }
}
