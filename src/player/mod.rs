//! Session controller
//!
//! `VideoPlayer` holds the playback state and the user's playlists and
//! exposes one method per user command. Every method returns a `Report`;
//! invalid requests become report lines rather than errors.

mod browse;
mod config;
mod controller;
mod error;
mod moderation;
mod playlists;
mod report;

pub use browse::SearchOutcome;
pub use config::{PlayerConfig, RandomPolicy, DEFAULT_FLAG_REASON};
pub use controller::{PlaybackState, VideoPlayer};
pub use error::{CommandError, Refusal};
pub use report::Report;
