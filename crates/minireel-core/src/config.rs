//! Player tuning knobs
//!
//! Defaults match the shipped behavior. A host may override any subset by
//! deserializing a partial document; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::autoplay::DEFAULT_COUNTDOWN_SECONDS;
use crate::controls::DEFAULT_HIDE_DELAY_MS;
use crate::error::{PlayerError, Result};
use crate::gesture::{DragThresholds, DEFAULT_SLOP_PX};
use crate::playback::DEFAULT_SKIP_SECONDS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Full-screen player swipe-to-minimize
    pub player_drag: DragThresholds,
    /// Related-videos sheet swipe-to-close
    pub sheet_drag: DragThresholds,
    /// Fraction of the pointer travel applied to a pinned surface
    pub drag_elastic: f64,
    /// Travel before a press on a draggable surface stops being a tap
    pub drag_slop_px: f64,
    pub countdown_seconds: u32,
    pub skip_seconds: f64,
    pub controls_hide_delay_ms: u32,
    /// Delay before the first play request on a new source
    pub autoplay_delay_ms: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            player_drag: DragThresholds::PLAYER,
            sheet_drag: DragThresholds::SHEET,
            drag_elastic: 0.2,
            drag_slop_px: DEFAULT_SLOP_PX,
            countdown_seconds: DEFAULT_COUNTDOWN_SECONDS,
            skip_seconds: DEFAULT_SKIP_SECONDS,
            controls_hide_delay_ms: DEFAULT_HIDE_DELAY_MS,
            autoplay_delay_ms: 100,
        }
    }
}

impl PlayerConfig {
    pub fn validate(&self) -> Result<()> {
        for (name, t) in [("player_drag", &self.player_drag), ("sheet_drag", &self.sheet_drag)] {
            if !(t.distance_px > 0.0) || !(t.velocity_px_s > 0.0) {
                return Err(PlayerError::Config(format!("{} thresholds must be positive", name)));
            }
        }
        if !(0.0..=1.0).contains(&self.drag_elastic) {
            return Err(PlayerError::Config("drag_elastic must be within [0, 1]".to_string()));
        }
        if !(self.drag_slop_px >= 0.0) {
            return Err(PlayerError::Config("drag_slop_px must not be negative".to_string()));
        }
        if self.countdown_seconds == 0 {
            return Err(PlayerError::Config("countdown_seconds must be at least 1".to_string()));
        }
        if !(self.skip_seconds > 0.0) {
            return Err(PlayerError::Config("skip_seconds must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlayerConfig::default();
        assert_eq!(config.player_drag.distance_px, 100.0);
        assert_eq!(config.player_drag.velocity_px_s, 500.0);
        assert_eq!(config.sheet_drag.distance_px, 50.0);
        assert_eq!(config.countdown_seconds, 5);
        assert_eq!(config.skip_seconds, 10.0);
        assert_eq!(config.drag_slop_px, 4.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let config: PlayerConfig =
            serde_json::from_str(r#"{"countdown_seconds": 10, "sheet_drag": {"distance_px": 80, "velocity_px_s": 400}}"#)
                .unwrap();
        assert_eq!(config.countdown_seconds, 10);
        assert_eq!(config.sheet_drag.distance_px, 80.0);
        assert_eq!(config.player_drag, DragThresholds::PLAYER);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = PlayerConfig { countdown_seconds: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(PlayerError::Config(_))));

        let config = PlayerConfig { drag_elastic: 1.5, ..Default::default() };
        assert!(config.validate().is_err());

        let config = PlayerConfig { drag_slop_px: -1.0, ..Default::default() };
        assert!(config.validate().is_err());

        let config = PlayerConfig {
            player_drag: DragThresholds { distance_px: 0.0, velocity_px_s: 500.0 },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
