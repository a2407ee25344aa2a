//! Catalog file (videos.txt) parser
//!
//! One video per line: `title | video_id | #tag1, #tag2`

use crate::model::Video;
use std::collections::HashSet;
use thiserror::Error;

/// Errors for lines that cannot become a catalog entry
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("line {line}: video title is empty")]
    EmptyTitle { line: usize },

    #[error("line {line}: video id is empty")]
    EmptyId { line: usize },

    #[error("line {line}: duplicate video id {id:?}")]
    DuplicateId { line: usize, id: String },
}

/// Parse catalog text into videos, in file order
pub fn parse_catalog(text: &str) -> Result<Vec<Video>, CatalogError> {
    let mut videos = Vec::new();
    let mut seen_ids = HashSet::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        if raw.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = raw.split('|').map(str::trim).collect();
        if fields.len() < 2 {
            log::warn!("Skipping catalog line {}: expected `title | id | tags`", line);
            continue;
        }

        let title = fields[0];
        let id = fields[1];
        if title.is_empty() {
            return Err(CatalogError::EmptyTitle { line });
        }
        if id.is_empty() {
            return Err(CatalogError::EmptyId { line });
        }
        if !seen_ids.insert(id.to_string()) {
            return Err(CatalogError::DuplicateId {
                line,
                id: id.to_string(),
            });
        }

        let tags = fields.get(2).map(|field| parse_tags(field)).unwrap_or_default();
        videos.push(Video::new(id, title, tags));
    }

    log::debug!("Parsed {} videos from catalog", videos.len());
    Ok(videos)
}

/// Split a comma separated tag field, dropping blanks and repeats
fn parse_tags(field: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    field
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .filter(|tag| seen.insert(tag.to_lowercase()))
        .map(str::to_string)
        .collect()
}
