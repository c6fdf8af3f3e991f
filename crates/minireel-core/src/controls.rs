//! Auto-hiding transport controls
//!
//! Controls are visible while paused. While playing they hide after a period
//! without interaction. The pending hide timer is held here and dropped on
//! every interaction, on pause and on teardown.

pub const DEFAULT_HIDE_DELAY_MS: u32 = 3000;

/// Position along the progress bar as a fraction in `[0, 1]`
pub fn progress_fraction(pointer_x: f64, bar_left: f64, bar_width: f64) -> f64 {
    if bar_width <= 0.0 {
        return 0.0;
    }
    ((pointer_x - bar_left) / bar_width).clamp(0.0, 1.0)
}

/// Seek target for a pointer on the progress bar, `None` while the duration is unknown
pub fn seek_target(pointer_x: f64, bar_left: f64, bar_width: f64, duration: f64) -> Option<f64> {
    (duration > 0.0).then(|| progress_fraction(pointer_x, bar_left, bar_width) * duration)
}

pub struct ControlsVisibility<H> {
    visible: bool,
    hide_timer: Option<H>,
}

impl<H> Default for ControlsVisibility<H> {
    fn default() -> Self {
        Self { visible: true, hide_timer: None }
    }
}

impl<H> ControlsVisibility<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn has_pending_hide(&self) -> bool {
        self.hide_timer.is_some()
    }

    /// Pointer or touch activity over the player
    pub fn on_interaction(&mut self, is_playing: bool, schedule_hide: impl FnOnce() -> H) {
        self.visible = true;
        self.hide_timer = None;
        if is_playing {
            self.hide_timer = Some(schedule_hide());
        }
    }

    pub fn on_play_state(&mut self, is_playing: bool, schedule_hide: impl FnOnce() -> H) {
        if is_playing {
            self.on_interaction(true, schedule_hide);
        } else {
            self.visible = true;
            self.hide_timer = None;
        }
    }

    /// The hide timer fired
    pub fn on_hide_timer(&mut self) {
        self.visible = false;
        self.hide_timer = None;
    }

    pub fn dispose(&mut self) {
        self.hide_timer = None;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    struct Handle(Rc<Cell<u32>>);

    impl Drop for Handle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_paused_controls_stay_visible() {
        let mut controls: ControlsVisibility<Handle> = ControlsVisibility::new();
        controls.on_interaction(false, || unreachable!("no timer while paused"));
        assert!(controls.is_visible());
        assert!(!controls.has_pending_hide());
    }

    #[test]
    fn test_hide_after_timer_while_playing() {
        let dropped = Rc::new(Cell::new(0));
        let mut controls = ControlsVisibility::new();
        controls.on_play_state(true, || Handle(dropped.clone()));
        assert!(controls.has_pending_hide());
        controls.on_hide_timer();
        assert!(!controls.is_visible());
        assert_eq!(dropped.get(), 1);

        controls.on_interaction(true, || Handle(dropped.clone()));
        assert!(controls.is_visible());
    }

    #[test]
    fn test_interaction_replaces_pending_timer() {
        let dropped = Rc::new(Cell::new(0));
        let mut controls = ControlsVisibility::new();
        controls.on_interaction(true, || Handle(dropped.clone()));
        controls.on_interaction(true, || Handle(dropped.clone()));
        assert_eq!(dropped.get(), 1);

        controls.on_play_state(false, || unreachable!());
        assert_eq!(dropped.get(), 2);
        assert!(controls.is_visible());
    }

    #[test]
    fn test_progress_bar_targets() {
        assert_eq!(progress_fraction(150.0, 100.0, 200.0), 0.25);
        assert_eq!(progress_fraction(50.0, 100.0, 200.0), 0.0);
        assert_eq!(progress_fraction(400.0, 100.0, 200.0), 1.0);
        assert_eq!(progress_fraction(150.0, 100.0, 0.0), 0.0);
        assert_eq!(seek_target(200.0, 100.0, 200.0, 120.0), Some(60.0));
        assert_eq!(seek_target(200.0, 100.0, 200.0, 0.0), None);
    }

    #[test]
    fn test_dispose_drops_timer() {
        let dropped = Rc::new(Cell::new(0));
        let mut controls = ControlsVisibility::new();
        controls.on_interaction(true, || Handle(dropped.clone()));
        controls.dispose();
        assert_eq!(dropped.get(), 1);
        assert!(!controls.has_pending_hide());
    }
}
