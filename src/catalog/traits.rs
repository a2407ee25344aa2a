//! Catalog trait definition

use crate::model::Video;

/// Read interface over the video catalog - lets the session controller
/// run against any store that can hand out videos and record flags
pub trait Catalog {
    /// All videos, in no particular order
    fn videos(&self) -> Vec<&Video>;

    /// Look up a video by ID
    fn get_video(&self, id: &str) -> Option<&Video>;

    /// Attach (Some) or clear (None) the moderation flag on a video.
    /// Returns false if the ID is unknown.
    fn set_flag(&mut self, id: &str, flag: Option<String>) -> bool;
}
