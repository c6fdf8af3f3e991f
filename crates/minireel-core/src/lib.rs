//! Minireel Core - player state, playback engine and gesture logic for the video frontend
//!
//! Nothing in this crate touches the DOM. The frontend adapts the browser's
//! `<video>` element to [`playback::MediaSurface`] and drives the state
//! machines defined here from its event handlers.

pub mod autoplay;
pub mod catalog;
pub mod config;
pub mod controls;
pub mod error;
pub mod format;
pub mod gesture;
pub mod playback;
pub mod route;
pub mod store;

pub use catalog::{Catalog, Category, CategoryGroup, VideoItem};
pub use config::PlayerConfig;
pub use error::{PlayerError, Result};
pub use store::{PlayerMode, PlayerStore};
