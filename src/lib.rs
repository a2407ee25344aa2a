//! Video Player - in-memory video catalog browser
//!
//! This library tracks a catalog of videos, plays/pauses/stops a single
//! active video, manages named playlists, searches by title or tag, and
//! flags videos as unplayable.

pub mod catalog;
pub mod model;
pub mod player;
pub mod shell;

pub use catalog::{load_catalog, Catalog};
pub use player::{PlayerConfig, Report, VideoPlayer};
