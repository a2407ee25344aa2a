//! Data model for the video catalog
//!
//! Plain data structures shared by the catalog loader, the
//! session controller and the shell.

mod library;
mod playlist;
mod video;

pub use library::VideoLibrary;
pub use playlist::Playlist;
pub use video::Video;
