use serde::{Deserialize, Serialize};
use std::fmt;

/// A single video in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Unique identifier for this video
    pub id: String,

    /// Video title
    pub title: String,

    /// Tags in catalog order (e.g. "#cat")
    pub tags: Vec<String>,

    /// Moderation flag reason (None = playable)
    pub flag: Option<String>,
}

impl Video {
    /// Create an unflagged video
    pub fn new(id: impl Into<String>, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags,
            flag: None,
        }
    }

    /// Whether this video carries a moderation flag
    pub fn is_flagged(&self) -> bool {
        self.flag.is_some()
    }

    /// Case-insensitive exact tag membership
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }

    /// Case-insensitive substring match on the title
    pub fn title_contains(&self, term: &str) -> bool {
        self.title.to_uppercase().contains(&term.to_uppercase())
    }

    /// Listing line: the video followed by its flag annotation, if any
    pub fn listing(&self) -> String {
        match &self.flag {
            Some(reason) => format!("{} - FLAGGED (reason: {})", self, reason),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for Video {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.id, self.tags.join(" "))
    }
}
