use serde::{Deserialize, Serialize};

/// A named, ordered, duplicate-free list of video references
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist name, with the casing it was created with
    pub name: String,

    /// Video IDs in insertion order (references Video::id)
    video_ids: Vec<String>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: String) -> Self {
        Self {
            name,
            video_ids: Vec::new(),
        }
    }

    /// Normalized lookup key for a playlist name
    pub fn key(name: &str) -> String {
        name.to_uppercase()
    }

    /// Append a video. Returns false if it is already a member.
    pub fn add_video(&mut self, video_id: &str) -> bool {
        if self.contains(video_id) {
            return false;
        }
        self.video_ids.push(video_id.to_string());
        true
    }

    /// Remove a video. Returns false if it was not a member.
    pub fn remove_video(&mut self, video_id: &str) -> bool {
        match self.video_ids.iter().position(|id| id == video_id) {
            Some(index) => {
                self.video_ids.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, video_id: &str) -> bool {
        self.video_ids.iter().any(|id| id == video_id)
    }

    /// Remove every video, keeping the playlist itself
    pub fn clear(&mut self) {
        self.video_ids.clear();
    }

    /// Member video IDs in insertion order
    pub fn video_ids(&self) -> &[String] {
        &self.video_ids
    }

    /// Number of videos in this playlist
    pub fn len(&self) -> usize {
        self.video_ids.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.video_ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_rejects_duplicates() {
        let mut playlist = Playlist::new("Fun".to_string());
        assert!(playlist.add_video("v1"));
        assert!(playlist.add_video("v2"));
        assert!(!playlist.add_video("v1"));
        assert_eq!(playlist.video_ids(), &["v1".to_string(), "v2".to_string()]);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut playlist = Playlist::new("Fun".to_string());
        playlist.add_video("v1");
        playlist.add_video("v2");

        assert!(!playlist.remove_video("v3"));
        assert!(playlist.remove_video("v1"));
        assert_eq!(playlist.len(), 1);

        playlist.clear();
        assert!(playlist.is_empty());
        assert_eq!(playlist.name, "Fun");
    }

    #[test]
    fn test_key_ignores_case() {
        assert_eq!(Playlist::key("my_PLAYlist"), Playlist::key("MY_playlist"));
    }
}
