//! Playback engine over a native media surface
//!
//! The engine owns at most one [`MediaSurface`], issues transport commands to
//! it, and turns the surface's events into [`PlaybackNotification`]s queued in
//! arrival order. Its owner drains the queue after every command or event and
//! decides what an end-of-stream or error means; the engine itself has no
//! policy for either.
//!
//! Seeking is optimistic: the mirrored time moves as soon as the command is
//! issued and is corrected by the next `timeupdate` from the surface.

use std::collections::VecDeque;

use crate::error::{PlayerError, Result};

/// Default step for the skip buttons, in seconds
pub const DEFAULT_SKIP_SECONDS: f64 = 10.0;

/// The slice of a media element the engine needs
pub trait MediaSurface {
    /// Ask the surface to start playing. The outcome arrives later as
    /// [`MediaEvent::Play`] or [`MediaEvent::PlayRejected`].
    fn request_play(&self);
    fn pause(&self);
    fn seek(&self, time: f64);
    fn current_time(&self) -> f64;
    /// May be NaN or infinite until metadata has loaded
    fn duration(&self) -> f64;
}

/// Raw events emitted by a media surface
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    TimeUpdate,
    DurationChange,
    LoadedMetadata,
    Play,
    Pause,
    Waiting,
    CanPlay,
    Ended,
    Error(String),
    /// A play request was refused, typically by an autoplay policy
    PlayRejected(String),
}

/// What the engine reports upward
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackNotification {
    TimeChanged(f64),
    DurationChanged(f64),
    PlayStateChanged(bool),
    BufferingChanged(bool),
    Ended,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaybackState {
    pub is_playing: bool,
    pub is_buffering: bool,
    /// Terminal until a source is attached again
    pub has_error: bool,
    pub current_time: f64,
    pub duration: f64,
}

#[derive(Debug)]
pub struct PlaybackEngine<S> {
    surface: Option<S>,
    state: PlaybackState,
    pending: VecDeque<PlaybackNotification>,
}

impl<S> Default for PlaybackEngine<S> {
    fn default() -> Self {
        Self {
            surface: None,
            state: PlaybackState::default(),
            pending: VecDeque::new(),
        }
    }
}

impl<S: MediaSurface> PlaybackEngine<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `surface`, replacing any previous one
    pub fn attach(&mut self, surface: S) {
        self.surface = Some(surface);
        self.reset();
    }

    pub fn detach(&mut self) -> Option<S> {
        self.reset();
        self.surface.take()
    }

    /// Forget everything about the previous source. Called when the attached
    /// surface is pointed at a new URL.
    /// A source that was playing reports `PlayStateChanged(false)`; the
    /// element fires no `pause` when its `src` changes.
    pub fn reset(&mut self) {
        tracing::info!("playback: state reset for new source");
        let was_playing = self.state.is_playing;
        self.state = PlaybackState::default();
        self.pending.clear();
        if was_playing {
            self.pending.push_back(PlaybackNotification::PlayStateChanged(false));
        }
    }

    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    fn attached(&self) -> Result<&S> {
        self.surface.as_ref().ok_or(PlayerError::NoSurface)
    }

    pub fn play(&mut self) -> Result<()> {
        let surface = self.attached()?;
        if self.state.has_error {
            return Err(PlayerError::Media("source failed to load".to_string()));
        }
        surface.request_play();
        Ok(())
    }

    pub fn pause(&mut self) -> Result<()> {
        self.attached()?.pause();
        if self.state.is_playing {
            self.state.is_playing = false;
            self.pending.push_back(PlaybackNotification::PlayStateChanged(false));
        }
        Ok(())
    }

    pub fn toggle_play(&mut self) -> Result<()> {
        if self.state.is_playing {
            self.pause()
        } else {
            self.play()
        }
    }

    /// Seek to `time`, clamped to `[0, duration]`. Returns the applied time.
    pub fn seek_to(&mut self, time: f64) -> Result<f64> {
        let surface = self.attached()?;
        let duration = surface.duration();
        let upper = if duration.is_finite() && duration > 0.0 { duration } else { 0.0 };
        let clamped = if time.is_nan() { 0.0 } else { time.clamp(0.0, upper) };

        surface.seek(clamped);
        self.state.current_time = clamped;
        self.pending.push_back(PlaybackNotification::TimeChanged(clamped));
        Ok(clamped)
    }

    pub fn skip_forward(&mut self, seconds: f64) -> Result<f64> {
        let now = self.attached()?.current_time();
        self.seek_to(now + seconds)
    }

    pub fn skip_backward(&mut self, seconds: f64) -> Result<f64> {
        let now = self.attached()?.current_time();
        self.seek_to(now - seconds)
    }

    /// Fold one surface event into the state. Events arriving with no
    /// surface attached belong to a torn-down element and are dropped.
    pub fn handle_event(&mut self, event: MediaEvent) {
        let Some(surface) = self.surface.as_ref() else {
            return;
        };

        let notification = match event {
            MediaEvent::TimeUpdate => {
                let time = surface.current_time();
                self.state.current_time = time;
                Some(PlaybackNotification::TimeChanged(time))
            }
            MediaEvent::DurationChange | MediaEvent::LoadedMetadata => {
                let duration = surface.duration();
                if duration.is_finite() {
                    self.state.duration = duration;
                    Some(PlaybackNotification::DurationChanged(duration))
                } else {
                    None
                }
            }
            MediaEvent::Play => {
                self.state.is_playing = true;
                Some(PlaybackNotification::PlayStateChanged(true))
            }
            MediaEvent::Pause => {
                self.state.is_playing = false;
                Some(PlaybackNotification::PlayStateChanged(false))
            }
            MediaEvent::Waiting => {
                self.state.is_buffering = true;
                Some(PlaybackNotification::BufferingChanged(true))
            }
            MediaEvent::CanPlay => {
                self.state.is_buffering = false;
                Some(PlaybackNotification::BufferingChanged(false))
            }
            MediaEvent::Ended => {
                self.state.is_playing = false;
                Some(PlaybackNotification::Ended)
            }
            MediaEvent::Error(message) => {
                tracing::warn!(%message, "playback: media error");
                self.state.has_error = true;
                self.state.is_playing = false;
                self.state.is_buffering = false;
                Some(PlaybackNotification::Failed(message))
            }
            MediaEvent::PlayRejected(reason) => {
                tracing::warn!(%reason, "playback: play request rejected");
                self.state.is_playing = false;
                Some(PlaybackNotification::PlayStateChanged(false))
            }
        };

        if let Some(n) = notification {
            self.pending.push_back(n);
        }
    }

    /// Hand over queued notifications, oldest first
    pub fn drain(&mut self) -> Vec<PlaybackNotification> {
        self.pending.drain(..).collect()
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::MediaSurface;

    /// In-memory surface recording the commands it receives
    #[derive(Clone, Default)]
    pub struct FakeSurface {
        pub time: Rc<Cell<f64>>,
        pub duration: Rc<Cell<f64>>,
        pub commands: Rc<RefCell<Vec<String>>>,
    }

    impl FakeSurface {
        pub fn with_duration(duration: f64) -> Self {
            let surface = Self::default();
            surface.duration.set(duration);
            surface
        }
    }

    impl MediaSurface for FakeSurface {
        fn request_play(&self) {
            self.commands.borrow_mut().push("play".to_string());
        }

        fn pause(&self) {
            self.commands.borrow_mut().push("pause".to_string());
        }

        fn seek(&self, time: f64) {
            self.time.set(time);
            self.commands.borrow_mut().push(format!("seek {}", time));
        }

        fn current_time(&self) -> f64 {
            self.time.get()
        }

        fn duration(&self) -> f64 {
            self.duration.get()
        }
    }
}
