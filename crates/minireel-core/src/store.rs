//! Process-wide player state: which video is loaded and how it is displayed
//!
//! The store is the single owner of the mode/video pairing. Views read it and
//! change it only through the named transitions below, which keep
//! `mode == Hidden` exactly when no video is loaded.

use serde::{Deserialize, Serialize};

use crate::catalog::VideoItem;
use crate::playback::PlaybackNotification;

/// Which surface the player is rendered on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerMode {
    #[default]
    Hidden,
    Fullscreen,
    Minimized,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerStore {
    current_video: Option<VideoItem>,
    mode: PlayerMode,
    is_playing: bool,
    current_time: f64,
    duration: f64,
    /// Bumped on every `set_video`, so re-selecting the same video reloads it
    session: u64,
}

impl PlayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_video(&self) -> Option<&VideoItem> {
        self.current_video.as_ref()
    }

    pub fn current_id(&self) -> Option<&str> {
        self.current_video.as_ref().map(|v| v.id.as_str())
    }

    pub fn mode(&self) -> PlayerMode {
        self.mode
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    /// Playback progress as a percentage, 0 while the duration is unknown
    pub fn progress_percent(&self) -> f64 {
        if self.duration > 0.0 {
            (self.current_time / self.duration * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        }
    }

    /// Whether opening `/watch/{id}` has to load the video (rather than
    /// find it already on screen)
    pub fn needs_video(&self, id: &str) -> bool {
        self.current_id() != Some(id) || self.mode != PlayerMode::Fullscreen
    }

    /// Load `video` and bring the player to full screen, whatever the prior mode
    pub fn set_video(&mut self, video: VideoItem) {
        tracing::debug!(id = %video.id, from = ?self.mode, "player: set_video");
        self.current_video = Some(video);
        self.mode = PlayerMode::Fullscreen;
        self.is_playing = false;
        self.current_time = 0.0;
        self.duration = 0.0;
        self.session += 1;
    }

    /// Full screen -> minimized. Ignored in any other mode.
    pub fn minimize(&mut self) {
        if self.mode == PlayerMode::Fullscreen {
            tracing::debug!("player: minimize");
            self.mode = PlayerMode::Minimized;
        }
    }

    /// Back to full screen. Ignored while hidden since there is nothing to show.
    pub fn maximize(&mut self) {
        if self.current_video.is_some() {
            tracing::debug!(from = ?self.mode, "player: maximize");
            self.mode = PlayerMode::Fullscreen;
        }
    }

    /// Drop the current video and hide the player
    pub fn close(&mut self) {
        tracing::debug!(from = ?self.mode, "player: close");
        self.current_video = None;
        self.mode = PlayerMode::Hidden;
        self.is_playing = false;
        self.current_time = 0.0;
        self.duration = 0.0;
    }

    pub fn set_is_playing(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    pub fn set_current_time(&mut self, time: f64) {
        self.current_time = time;
    }

    pub fn set_duration(&mut self, duration: f64) {
        self.duration = duration;
    }

    /// Mirror a playback notification. Only the playing/time/duration fields
    /// are touched; mode changes never come from the media element.
    pub fn apply(&mut self, notification: &PlaybackNotification) {
        match notification {
            PlaybackNotification::TimeChanged(t) => self.set_current_time(*t),
            PlaybackNotification::DurationChanged(d) => self.set_duration(*d),
            PlaybackNotification::PlayStateChanged(playing) => self.set_is_playing(*playing),
            PlaybackNotification::Ended | PlaybackNotification::Failed(_) => {
                self.set_is_playing(false)
            }
            PlaybackNotification::BufferingChanged(_) => {}
        }
    }
}
