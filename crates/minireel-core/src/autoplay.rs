//! "Up next" countdown shown when a video finishes in full screen
//!
//! The countdown owns the handle of the periodic timer that drives it. Any way
//! out of the counting state (cancel, completion, play-now, a different video
//! being loaded, or the owner being dropped) drops that handle, so a timer can
//! never tick against a view that is gone. `H` is whatever the host uses for a
//! cancel-on-drop timer; the browser build uses `gloo_timers::callback::Interval`.

use crate::catalog::{Catalog, VideoItem};
use crate::route::Route;
use crate::store::{PlayerMode, PlayerStore};

pub const DEFAULT_COUNTDOWN_SECONDS: u32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub enum CountdownState {
    Idle,
    Counting { next: VideoItem, remaining: u32 },
}

/// Result of one timer tick
#[derive(Debug, Clone, PartialEq)]
pub enum CountdownTick {
    /// Still counting, this many seconds left
    Counting(u32),
    /// Reached zero; play this video next
    Dispatch(VideoItem),
    /// Nothing was counting
    Idle,
}

pub struct AutoplayCountdown<H> {
    start_seconds: u32,
    state: CountdownState,
    /// Video the running countdown was started for
    started_for: Option<String>,
    timer: Option<H>,
}

impl<H> AutoplayCountdown<H> {
    pub fn new(start_seconds: u32) -> Self {
        Self {
            start_seconds: start_seconds.max(1),
            state: CountdownState::Idle,
            started_for: None,
            timer: None,
        }
    }

    pub fn start_seconds(&self) -> u32 {
        self.start_seconds
    }

    pub fn state(&self) -> &CountdownState {
        &self.state
    }

    pub fn is_counting(&self) -> bool {
        matches!(self.state, CountdownState::Counting { .. })
    }

    pub fn next_video(&self) -> Option<&VideoItem> {
        match &self.state {
            CountdownState::Counting { next, .. } => Some(next),
            CountdownState::Idle => None,
        }
    }

    pub fn remaining(&self) -> u32 {
        match self.state {
            CountdownState::Counting { remaining, .. } => remaining,
            CountdownState::Idle => 0,
        }
    }

    /// React to end-of-stream. Starts counting only when the player is full
    /// screen and the current video has a related follow-up; `schedule` is
    /// called to create the tick timer only in that case.
    pub fn on_ended(
        &mut self,
        store: &PlayerStore,
        catalog: &Catalog,
        schedule: impl FnOnce() -> H,
    ) -> bool {
        if store.mode() != PlayerMode::Fullscreen {
            return false;
        }
        let Some(current) = store.current_video() else {
            return false;
        };
        let Some(next) = catalog.next_after(current) else {
            return false;
        };

        self.stop();
        tracing::debug!(current = %current.id, next = %next.id, seconds = self.start_seconds, "autoplay: countdown started");
        self.started_for = Some(current.id.clone());
        self.state = CountdownState::Counting { next, remaining: self.start_seconds };
        self.timer = Some(schedule());
        true
    }

    /// One second elapsed
    pub fn tick(&mut self) -> CountdownTick {
        let CountdownState::Counting { remaining, .. } = &mut self.state else {
            return CountdownTick::Idle;
        };

        *remaining = remaining.saturating_sub(1);
        if *remaining > 0 {
            return CountdownTick::Counting(*remaining);
        }
        match self.finish() {
            Some(next) => CountdownTick::Dispatch(next),
            None => CountdownTick::Idle,
        }
    }

    /// Skip the rest of the countdown
    pub fn play_now(&mut self) -> Option<VideoItem> {
        self.finish()
    }

    pub fn cancel(&mut self) {
        if self.is_counting() {
            tracing::debug!("autoplay: countdown cancelled");
        }
        self.stop();
    }

    /// The store's current video changed. A countdown started for another
    /// video is abandoned.
    pub fn on_video_changed(&mut self, current_id: Option<&str>) {
        if self.is_counting() && self.started_for.as_deref() != current_id {
            tracing::debug!(?current_id, "autoplay: video changed, countdown reset");
            self.stop();
        }
    }

    fn finish(&mut self) -> Option<VideoItem> {
        let state = std::mem::replace(&mut self.state, CountdownState::Idle);
        self.stop();
        match state {
            CountdownState::Counting { next, .. } => {
                tracing::debug!(next = %next.id, "autoplay: dispatch");
                Some(next)
            }
            CountdownState::Idle => None,
        }
    }

    fn stop(&mut self) {
        self.state = CountdownState::Idle;
        self.started_for = None;
        self.timer = None;
    }
}

/// Load the chained video and return the route to show it on. The caller
/// navigates with history replacement so Back skips the finished video.
pub fn dispatch_next(store: &mut PlayerStore, next: VideoItem) -> Route {
    let route = Route::Watch(next.id.clone());
    store.set_video(next);
    route
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::catalog::{test_video, Category};

    /// Timer stand-in that counts how many handles were disposed
    struct Handle(Rc<Cell<u32>>);

    impl Drop for Handle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    struct Fixture {
        catalog: Catalog,
        store: PlayerStore,
        countdown: AutoplayCountdown<Handle>,
        disposed: Rc<Cell<u32>>,
    }

    impl Fixture {
        fn new() -> Self {
            let catalog = Catalog::new(vec![
                test_video("a", Category::Action),
                test_video("b", Category::Action),
                test_video("d", Category::Drama),
            ]);
            let mut store = PlayerStore::new();
            store.set_video(catalog.by_id("a").unwrap().clone());
            Self {
                catalog,
                store,
                countdown: AutoplayCountdown::new(DEFAULT_COUNTDOWN_SECONDS),
                disposed: Rc::new(Cell::new(0)),
            }
        }

        fn end(&mut self) -> bool {
            let disposed = self.disposed.clone();
            self.countdown.on_ended(&self.store, &self.catalog, move || Handle(disposed))
        }
    }

    #[test]
    fn test_end_of_stream_starts_countdown_for_related() {
        let mut fx = Fixture::new();
        assert!(fx.end());
        assert_eq!(fx.countdown.next_video().map(|v| v.id.as_str()), Some("b"));
        assert_eq!(fx.countdown.remaining(), 5);
    }

    #[test]
    fn test_cancel_keeps_video_and_disposes_timer() {
        let mut fx = Fixture::new();
        fx.end();
        assert_eq!(fx.countdown.tick(), CountdownTick::Counting(4));
        fx.countdown.cancel();
        assert_eq!(fx.countdown.state(), &CountdownState::Idle);
        assert_eq!(fx.store.current_id(), Some("a"));
        assert_eq!(fx.disposed.get(), 1);
        assert_eq!(fx.countdown.tick(), CountdownTick::Idle);
    }

    #[test]
    fn test_countdown_dispatches_exactly_once() {
        let mut fx = Fixture::new();
        fx.end();
        let session_before = fx.store.session();
        let mut dispatched = Vec::new();
        for _ in 0..10 {
            match fx.countdown.tick() {
                CountdownTick::Dispatch(next) => {
                    let route = dispatch_next(&mut fx.store, next);
                    dispatched.push(route);
                }
                CountdownTick::Counting(_) | CountdownTick::Idle => {}
            }
        }
        assert_eq!(dispatched, vec![Route::Watch("b".to_string())]);
        assert_eq!(fx.store.session(), session_before + 1);
        assert_eq!(fx.store.current_id(), Some("b"));
        assert_eq!(fx.store.mode(), PlayerMode::Fullscreen);
        assert_eq!(fx.disposed.get(), 1);
        assert!(!fx.countdown.is_counting());
    }

    #[test]
    fn test_ticks_count_down_from_start() {
        let mut fx = Fixture::new();
        fx.end();
        let ticks: Vec<CountdownTick> = (0..5).map(|_| fx.countdown.tick()).collect();
        assert_eq!(ticks[..4], [
            CountdownTick::Counting(4),
            CountdownTick::Counting(3),
            CountdownTick::Counting(2),
            CountdownTick::Counting(1),
        ]);
        assert!(matches!(&ticks[4], CountdownTick::Dispatch(v) if v.id == "b"));
    }

    #[test]
    fn test_play_now() {
        let mut fx = Fixture::new();
        fx.end();
        let next = fx.countdown.play_now().unwrap();
        assert_eq!(next.id, "b");
        assert_eq!(fx.disposed.get(), 1);
        assert!(fx.countdown.play_now().is_none());
    }

    #[test]
    fn test_no_countdown_when_minimized_or_without_related() {
        let mut fx = Fixture::new();
        fx.store.minimize();
        assert!(!fx.end());
        assert_eq!(fx.disposed.get(), 0, "timer must not be created");

        let mut fx = Fixture::new();
        let drama = fx.catalog.by_id("d").unwrap().clone();
        fx.store.set_video(drama);
        assert!(!fx.end());
        assert!(!fx.countdown.is_counting());
    }

    #[test]
    fn test_video_change_resets_countdown() {
        let mut fx = Fixture::new();
        fx.end();
        fx.countdown.on_video_changed(Some("a"));
        assert!(fx.countdown.is_counting());

        let drama = fx.catalog.by_id("d").unwrap().clone();
        fx.store.set_video(drama);
        fx.countdown.on_video_changed(fx.store.current_id());
        assert!(!fx.countdown.is_counting());
        assert_eq!(fx.disposed.get(), 1);

        fx.countdown.on_video_changed(None);
        assert_eq!(fx.disposed.get(), 1);
    }

    #[test]
    fn test_restart_disposes_previous_timer() {
        let mut fx = Fixture::new();
        fx.end();
        fx.end();
        assert_eq!(fx.disposed.get(), 1);
        assert_eq!(fx.countdown.remaining(), 5);
    }

    #[test]
    fn test_teardown_disposes_timer() {
        let mut fx = Fixture::new();
        fx.end();
        drop(fx.countdown);
        assert_eq!(fx.disposed.get(), 1);
    }
}
