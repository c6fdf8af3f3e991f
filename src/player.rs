//! Browser-side owner of the playback engine and its timers
//!
//! One `PlayerRuntime` exists per app. It is a bundle of arena handles, so it
//! is `Copy` and can be moved into every event handler and timer callback.
//! All notifications coming out of the engine go through [`PlayerRuntime::apply`]
//! in the order the engine queued them.

use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use leptos::prelude::*;
use minireel_core::autoplay::{dispatch_next, AutoplayCountdown, CountdownTick};
use minireel_core::controls::ControlsVisibility;
use minireel_core::playback::{MediaEvent, PlaybackEngine, PlaybackNotification};
use minireel_core::route::Route;
use minireel_core::{Catalog, PlayerError, VideoItem};
use web_sys::HtmlVideoElement;
use crate::app::PlayerContext;
use crate::media::{EventSink, HtmlVideoSurface};

type Engine = PlaybackEngine<HtmlVideoSurface>;

const COUNTDOWN_TICK_MS: u32 = 1000;

/// What the "Up next" overlay shows
#[derive(Debug, Clone, PartialEq)]
pub struct UpNext {
    pub video: VideoItem,
    pub remaining: u32,
    pub total: u32,
}

#[derive(Clone, Copy)]
pub struct PlayerRuntime {
    ctx: PlayerContext,
    engine: StoredValue<Engine, LocalStorage>,
    countdown: StoredValue<AutoplayCountdown<Interval>, LocalStorage>,
    controls: StoredValue<ControlsVisibility<Timeout>, LocalStorage>,
    pending_play: StoredValue<Option<Timeout>, LocalStorage>,
    pub controls_visible: RwSignal<bool>,
    pub buffering: RwSignal<bool>,
    /// Set once the current source failed to load
    pub failed: RwSignal<Option<String>>,
    pub up_next: RwSignal<Option<UpNext>>,
}

impl PlayerRuntime {
    pub fn new(ctx: PlayerContext) -> Self {
        let countdown_seconds = ctx.config.with_value(|c| c.countdown_seconds);
        Self {
            ctx,
            engine: StoredValue::new_local(Engine::new()),
            countdown: StoredValue::new_local(AutoplayCountdown::new(countdown_seconds)),
            controls: StoredValue::new_local(ControlsVisibility::new()),
            pending_play: StoredValue::new_local(None),
            controls_visible: RwSignal::new(true),
            buffering: RwSignal::new(false),
            failed: RwSignal::new(None),
            up_next: RwSignal::new(None),
        }
    }

    pub fn is_attached(self) -> bool {
        self.engine.try_with_value(|e| e.is_attached()).unwrap_or(false)
    }

    /// Hand the `<video>` element to the engine
    pub fn attach(self, video: HtmlVideoElement) {
        let sink: EventSink = Rc::new(move |event| self.dispatch(event));
        self.engine.update_value(|e| e.attach(HtmlVideoSurface::new(video, sink)));
        tracing::info!("player: media surface attached");
    }

    /// A new video (or none) became current
    pub fn load(self, video: Option<&VideoItem>) {
        self.countdown.update_value(|c| c.on_video_changed(video.map(|v| v.id.as_str())));
        self.sync_countdown();

        self.pending_play.set_value(None);
        self.failed.set(None);
        self.buffering.set(false);
        let notifications = self
            .engine
            .try_update_value(|e| {
                e.reset();
                match (e.surface(), video) {
                    (Some(surface), Some(v)) => surface.load_source(&v.video_url),
                    (Some(surface), None) => surface.unload(),
                    (None, _) => {}
                }
                e.drain()
            })
            .unwrap_or_default();
        self.apply(notifications);

        if let Some(v) = video {
            tracing::info!(id = %v.id, "player: source attached");
            let delay = self.ctx.config.with_value(|c| c.autoplay_delay_ms);
            let timer = Timeout::new(delay, move || {
                self.command(|e| e.play());
            });
            self.pending_play.set_value(Some(timer));
        }
    }

    /// Route one media event through the engine
    pub fn dispatch(self, event: MediaEvent) {
        let notifications = self
            .engine
            .try_update_value(|e| {
                e.handle_event(event);
                e.drain()
            })
            .unwrap_or_default();
        self.apply(notifications);
    }

    fn command<T>(self, f: impl FnOnce(&mut Engine) -> minireel_core::Result<T>) -> Option<T> {
        let (result, notifications) = self.engine.try_update_value(|e| {
            let result = f(e);
            (result, e.drain())
        })?;
        self.apply(notifications);

        match result {
            Ok(value) => Some(value),
            // Nothing on screen to control
            Err(PlayerError::NoSurface) => None,
            Err(e) => {
                tracing::debug!(error = %e, "player: command refused");
                None
            }
        }
    }

    fn apply(self, notifications: Vec<PlaybackNotification>) {
        if notifications.is_empty() {
            return;
        }
        self.ctx.store.update(|s| notifications.iter().for_each(|n| s.apply(n)));

        for notification in notifications {
            match notification {
                PlaybackNotification::BufferingChanged(buffering) => self.buffering.set(buffering),
                PlaybackNotification::PlayStateChanged(playing) => self.on_play_state(playing),
                PlaybackNotification::Ended => self.on_ended(),
                PlaybackNotification::Failed(message) => {
                    self.buffering.set(false);
                    self.failed.set(Some(message));
                    self.on_play_state(false);
                }
                PlaybackNotification::TimeChanged(_) | PlaybackNotification::DurationChanged(_) => {}
            }
        }
    }

    pub fn toggle_play(self) {
        self.command(|e| e.toggle_play());
        self.interact();
    }

    pub fn pause(self) {
        self.command(|e| e.pause());
    }

    pub fn seek(self, time: f64) {
        self.command(|e| e.seek_to(time));
        self.interact();
    }

    pub fn skip_forward(self) {
        let step = self.ctx.config.with_value(|c| c.skip_seconds);
        self.command(|e| e.skip_forward(step));
        self.interact();
    }

    pub fn skip_backward(self) {
        let step = self.ctx.config.with_value(|c| c.skip_seconds);
        self.command(|e| e.skip_backward(step));
        self.interact();
    }

    /// Stop playback and hide the player
    pub fn close(self) {
        self.pause();
        self.ctx.store.update(|s| s.close());
    }

    /// Pointer activity over the player: show the controls and restart the hide timer
    pub fn interact(self) {
        let playing = self.ctx.store.with_untracked(|s| s.is_playing());
        self.controls.update_value(|c| c.on_interaction(playing, || self.schedule_hide()));
        self.sync_controls();
    }

    fn on_play_state(self, playing: bool) {
        self.controls.update_value(|c| c.on_play_state(playing, || self.schedule_hide()));
        self.sync_controls();
    }

    fn schedule_hide(self) -> Timeout {
        let delay = self.ctx.config.with_value(|c| c.controls_hide_delay_ms);
        Timeout::new(delay, move || {
            self.controls.update_value(|c| c.on_hide_timer());
            self.sync_controls();
        })
    }

    fn sync_controls(self) {
        if let Some(visible) = self.controls.try_with_value(|c| c.is_visible()) {
            self.controls_visible.set(visible);
        }
    }

    fn on_ended(self) {
        let started = self.ctx.store.with_untracked(|store| {
            self.countdown.try_update_value(|c| {
                c.on_ended(store, Catalog::builtin(), || {
                    Interval::new(COUNTDOWN_TICK_MS, move || self.tick())
                })
            })
        });
        if started == Some(true) {
            self.sync_countdown();
        }
    }

    fn tick(self) {
        if let Some(CountdownTick::Dispatch(next)) = self.countdown.try_update_value(|c| c.tick()) {
            self.play_next(next);
        }
        self.sync_countdown();
    }

    pub fn play_now(self) {
        if let Some(next) = self.countdown.try_update_value(|c| c.play_now()).flatten() {
            self.play_next(next);
        }
        self.sync_countdown();
    }

    pub fn cancel_countdown(self) {
        self.countdown.update_value(|c| c.cancel());
        self.sync_countdown();
    }

    fn sync_countdown(self) {
        let up_next = self.countdown.try_with_value(|c| {
            c.next_video().map(|video| UpNext {
                video: video.clone(),
                remaining: c.remaining(),
                total: c.start_seconds(),
            })
        });
        self.up_next.set(up_next.flatten());
    }

    /// Chain to the next video. History is replaced so Back skips the one that finished.
    fn play_next(self, next: VideoItem) {
        if let Some(route) = self.ctx.store.try_update(|s| dispatch_next(s, next)) {
            self.ctx.router.replace(route);
        }
    }

    /// Mini player -> full screen on its watch route
    pub fn restore(self) {
        let Some(id) = self.ctx.store.with_untracked(|s| s.current_id().map(str::to_string)) else {
            return;
        };
        self.ctx.store.update(|s| s.maximize());
        self.ctx.router.push(Route::Watch(id));
    }

    /// A pick from the related sheet
    pub fn select(self, video: VideoItem) {
        let route = Route::Watch(video.id.clone());
        self.ctx.store.update(|s| s.set_video(video));
        self.ctx.router.push(route);
    }

    /// Drop every timer. Called when the player view is torn down.
    pub fn dispose(self) {
        self.countdown.try_update_value(|c| c.cancel());
        self.controls.try_update_value(|c| c.dispose());
        self.pending_play.try_update_value(|p| *p = None);
        self.engine.try_update_value(|e| e.detach());
    }
}
