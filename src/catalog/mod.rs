//! Video catalog loading
//!
//! Reads the catalog file once at startup and exposes the
//! catalog to the session controller through the `Catalog` trait.

mod parser;
mod traits;

pub use parser::{parse_catalog, CatalogError};
pub use traits::Catalog;

use crate::model::VideoLibrary;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Load a video library from a catalog file
///
/// # Arguments
/// * `path` - Path to the catalog file; a leading `~` is expanded
///
/// # Returns
/// A library with every video unflagged
pub fn load_catalog(path: &Path) -> Result<VideoLibrary> {
    let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).as_ref());
    log::info!("Loading video catalog from {:?}", expanded);

    let text = std::fs::read_to_string(&expanded)
        .with_context(|| format!("Failed to read video catalog: {:?}", expanded))?;
    let videos = parse_catalog(&text)
        .with_context(|| format!("Invalid video catalog: {:?}", expanded))?;

    let library: VideoLibrary = videos.into_iter().collect();
    log::info!("Loaded catalog: {} videos", library.video_count());

    Ok(library)
}
