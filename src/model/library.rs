use super::Video;
use crate::catalog::Catalog;
use std::collections::HashMap;

/// In-memory video catalog, loaded once per session
#[derive(Debug, Clone)]
pub struct VideoLibrary {
    /// All videos indexed by their ID
    videos: HashMap<String, Video>,
}

impl VideoLibrary {
    /// Create a new empty library
    pub fn new() -> Self {
        Self {
            videos: HashMap::new(),
        }
    }

    /// Add a video to the library, replacing any video with the same ID
    pub fn add_video(&mut self, video: Video) {
        self.videos.insert(video.id.clone(), video);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.videos.contains_key(id)
    }

    /// Total number of videos, flagged or not
    pub fn video_count(&self) -> usize {
        self.videos.len()
    }
}

impl Default for VideoLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Video> for VideoLibrary {
    fn from_iter<I: IntoIterator<Item = Video>>(iter: I) -> Self {
        let mut library = Self::new();
        for video in iter {
            library.add_video(video);
        }
        library
    }
}

impl Catalog for VideoLibrary {
    fn videos(&self) -> Vec<&Video> {
        self.videos.values().collect()
    }

    fn get_video(&self, id: &str) -> Option<&Video> {
        self.videos.get(id)
    }

    fn set_flag(&mut self, id: &str, flag: Option<String>) -> bool {
        match self.videos.get_mut(id) {
            Some(video) => {
                video.flag = flag;
                true
            }
            None => false,
        }
    }
}
