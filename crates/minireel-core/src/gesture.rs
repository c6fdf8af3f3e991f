//! Vertical drag tracking and the release decision for swipe-to-dismiss surfaces
//!
//! A release commits when the drag went far enough OR moved fast enough;
//! either alone is sufficient. Anything else springs back to rest.

use serde::{Deserialize, Serialize};

use crate::store::{PlayerMode, PlayerStore};

/// A move older than this at release time no longer counts toward velocity
const VELOCITY_WINDOW_MS: f64 = 100.0;

/// Pointer travel before a press counts as a drag rather than a tap
pub const DEFAULT_SLOP_PX: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragThresholds {
    /// Downward travel that commits on its own
    pub distance_px: f64,
    /// Downward speed that commits on its own
    pub velocity_px_s: f64,
}

impl DragThresholds {
    /// Full-screen player -> minimized
    pub const PLAYER: DragThresholds = DragThresholds { distance_px: 100.0, velocity_px_s: 500.0 };
    /// Related-videos sheet -> closed
    pub const SHEET: DragThresholds = DragThresholds { distance_px: 50.0, velocity_px_s: 500.0 };

    pub fn decide(&self, release: DragRelease) -> DragOutcome {
        if release.offset_y > self.distance_px || release.velocity_y > self.velocity_px_s {
            DragOutcome::Commit
        } else {
            DragOutcome::SpringBack
        }
    }
}

/// Offset and velocity at the moment the pointer was let go. Positive is downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragRelease {
    pub offset_y: f64,
    pub velocity_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    Commit,
    SpringBack,
}

/// How far past its rest position a surface may be pulled
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragBounds {
    /// Pinned in place both ways; the drag only rubber-bands
    Pinned { elastic: f64 },
    /// Free to move down, rubber-bands when pulled up
    FreeBelow { elastic: f64 },
}

impl DragBounds {
    /// Where the surface is drawn for a raw pointer offset
    pub fn visual_offset(&self, offset_y: f64) -> f64 {
        match *self {
            DragBounds::Pinned { elastic } => offset_y * elastic,
            DragBounds::FreeBelow { elastic } => {
                if offset_y >= 0.0 { offset_y } else { offset_y * elastic }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Sample {
    y: f64,
    t_ms: f64,
}

/// Pointer samples for one drag gesture
///
/// A press only turns into a drag once the pointer has travelled more than
/// the slop distance. Until then the gesture is a tap and its release is
/// never judged against thresholds, whatever the jitter velocity.
#[derive(Debug, Clone)]
pub struct DragTracker {
    slop_px: f64,
    origin: Option<Sample>,
    prev: Option<Sample>,
    last: Option<Sample>,
    engaged: bool,
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::with_slop(DEFAULT_SLOP_PX)
    }
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slop(slop_px: f64) -> Self {
        Self {
            slop_px: slop_px.max(0.0),
            origin: None,
            prev: None,
            last: None,
            engaged: false,
        }
    }

    /// A press is held, drag or not
    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }

    /// The held press has moved past the slop
    pub fn is_dragging(&self) -> bool {
        self.engaged
    }

    pub fn press(&mut self, y: f64, t_ms: f64) {
        let sample = Sample { y, t_ms };
        self.origin = Some(sample);
        self.prev = None;
        self.last = Some(sample);
    }

    pub fn move_to(&mut self, y: f64, t_ms: f64) {
        if self.origin.is_none() {
            return;
        }
        self.prev = self.last;
        self.last = Some(Sample { y, t_ms });
        if self.offset().abs() > self.slop_px {
            self.engaged = true;
        }
    }

    /// Current offset from the press point, 0 when idle
    pub fn offset(&self) -> f64 {
        match (self.origin, self.last) {
            (Some(origin), Some(last)) => last.y - origin.y,
            _ => 0.0,
        }
    }

    fn velocity(&self, release_ms: f64) -> f64 {
        match (self.prev, self.last) {
            (Some(prev), Some(last)) if last.t_ms > prev.t_ms => {
                if release_ms - last.t_ms > VELOCITY_WINDOW_MS {
                    0.0
                } else {
                    (last.y - prev.y) / (last.t_ms - prev.t_ms) * 1000.0
                }
            }
            _ => 0.0,
        }
    }

    /// End the gesture. `None` if no press was recorded or it never became a drag.
    pub fn release(&mut self, t_ms: f64) -> Option<DragRelease> {
        self.origin?;
        if !self.engaged {
            self.cancel();
            return None;
        }
        let release = DragRelease {
            offset_y: self.offset(),
            velocity_y: self.velocity(t_ms),
        };
        self.cancel();
        Some(release)
    }

    pub fn cancel(&mut self) {
        self.origin = None;
        self.prev = None;
        self.last = None;
        self.engaged = false;
    }
}

/// Result of letting go of the full-screen player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerDragAction {
    /// The player was minimized; leave the watch route if we are on it
    Minimized { leave_watch_route: bool },
    SpringBack,
    /// The player was not full screen
    Ignored,
}

/// Apply a drag release on the full-screen player to the store
pub fn release_player_drag(
    store: &mut PlayerStore,
    thresholds: &DragThresholds,
    release: DragRelease,
    on_watch_route: bool,
) -> PlayerDragAction {
    if store.mode() != PlayerMode::Fullscreen {
        return PlayerDragAction::Ignored;
    }

    match thresholds.decide(release) {
        DragOutcome::Commit => {
            tracing::debug!(offset = release.offset_y, velocity = release.velocity_y, "gesture: minimize");
            store.minimize();
            PlayerDragAction::Minimized { leave_watch_route: on_watch_route }
        }
        DragOutcome::SpringBack => PlayerDragAction::SpringBack,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{test_video, Category};

    fn fullscreen_store() -> PlayerStore {
        let mut store = PlayerStore::new();
        store.set_video(test_video("a", Category::Action));
        store
    }

    fn release(offset_y: f64, velocity_y: f64) -> DragRelease {
        DragRelease { offset_y, velocity_y }
    }

    #[test]
    fn test_far_drag_minimizes() {
        let mut store = fullscreen_store();
        let action = release_player_drag(&mut store, &DragThresholds::PLAYER, release(120.0, 0.0), true);
        assert_eq!(action, PlayerDragAction::Minimized { leave_watch_route: true });
        assert_eq!(store.mode(), PlayerMode::Minimized);
    }

    #[test]
    fn test_fast_flick_minimizes() {
        let mut store = fullscreen_store();
        let action = release_player_drag(&mut store, &DragThresholds::PLAYER, release(30.0, 600.0), false);
        assert_eq!(action, PlayerDragAction::Minimized { leave_watch_route: false });
        assert_eq!(store.mode(), PlayerMode::Minimized);
    }

    #[test]
    fn test_short_slow_drag_springs_back() {
        let mut store = fullscreen_store();
        let action = release_player_drag(&mut store, &DragThresholds::PLAYER, release(30.0, 100.0), true);
        assert_eq!(action, PlayerDragAction::SpringBack);
        assert_eq!(store.mode(), PlayerMode::Fullscreen);
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        assert_eq!(DragThresholds::PLAYER.decide(release(100.0, 500.0)), DragOutcome::SpringBack);
        assert_eq!(DragThresholds::SHEET.decide(release(51.0, 0.0)), DragOutcome::Commit);
        assert_eq!(DragThresholds::SHEET.decide(release(50.0, 0.0)), DragOutcome::SpringBack);
    }

    #[test]
    fn test_substituted_thresholds() {
        let never = DragThresholds { distance_px: f64::INFINITY, velocity_px_s: f64::INFINITY };
        assert_eq!(never.decide(release(10_000.0, 10_000.0)), DragOutcome::SpringBack);
        let always = DragThresholds { distance_px: -1.0, velocity_px_s: f64::INFINITY };
        assert_eq!(always.decide(release(0.0, 0.0)), DragOutcome::Commit);
    }

    #[test]
    fn test_drag_ignored_when_not_fullscreen() {
        let mut store = fullscreen_store();
        store.minimize();
        let action = release_player_drag(&mut store, &DragThresholds::PLAYER, release(500.0, 0.0), true);
        assert_eq!(action, PlayerDragAction::Ignored);

        let mut hidden = PlayerStore::new();
        let action = release_player_drag(&mut hidden, &DragThresholds::PLAYER, release(500.0, 0.0), true);
        assert_eq!(action, PlayerDragAction::Ignored);
        assert_eq!(hidden.mode(), PlayerMode::Hidden);
    }

    #[test]
    fn test_tracker_offset_and_velocity() {
        let mut tracker = DragTracker::new();
        tracker.press(200.0, 0.0);
        tracker.move_to(210.0, 16.0);
        tracker.move_to(230.0, 32.0);
        assert_eq!(tracker.offset(), 30.0);

        let r = tracker.release(40.0).unwrap();
        assert_eq!(r.offset_y, 30.0);
        assert_eq!(r.velocity_y, 1250.0);
        assert!(!tracker.is_active());
        assert_eq!(DragThresholds::PLAYER.decide(r), DragOutcome::Commit);
    }

    #[test]
    fn test_tracker_velocity_decays_when_held() {
        let mut tracker = DragTracker::new();
        tracker.press(0.0, 0.0);
        tracker.move_to(30.0, 10.0);
        let r = tracker.release(500.0).unwrap();
        assert_eq!(r.velocity_y, 0.0);
        assert_eq!(DragThresholds::PLAYER.decide(r), DragOutcome::SpringBack);
    }

    #[test]
    fn test_tracker_ignores_moves_without_press() {
        let mut tracker = DragTracker::new();
        tracker.move_to(50.0, 10.0);
        assert_eq!(tracker.offset(), 0.0);
        assert!(tracker.release(20.0).is_none());
    }

    #[test]
    fn test_jittery_tap_is_not_a_drag() {
        let mut tracker = DragTracker::new();
        tracker.press(300.0, 1000.0);
        tracker.move_to(303.0, 1004.0);
        assert!(tracker.is_active());
        assert!(!tracker.is_dragging());

        // 3px over 4ms would read as 750px/s
        assert!(tracker.release(1006.0).is_none());
        assert!(!tracker.is_active());
    }

    #[test]
    fn test_drag_engages_past_slop_and_stays_engaged() {
        let mut tracker = DragTracker::with_slop(10.0);
        tracker.press(0.0, 0.0);
        tracker.move_to(8.0, 10.0);
        assert!(!tracker.is_dragging());
        tracker.move_to(12.0, 20.0);
        assert!(tracker.is_dragging());
        // coming back inside the slop does not turn it into a tap again
        tracker.move_to(2.0, 30.0);
        assert!(tracker.is_dragging());
        assert!(tracker.release(35.0).is_some());

        tracker.press(0.0, 100.0);
        assert!(!tracker.is_dragging(), "each press starts as a tap");
    }

    #[test]
    fn test_visual_offset() {
        let pinned = DragBounds::Pinned { elastic: 0.2 };
        assert_eq!(pinned.visual_offset(100.0), 20.0);
        let sheet = DragBounds::FreeBelow { elastic: 0.2 };
        assert_eq!(sheet.visual_offset(80.0), 80.0);
        assert_eq!(sheet.visual_offset(-50.0), -10.0);
    }
}
