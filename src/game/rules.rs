//! Numeric rules of a game session

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::item::PlayArea;
use crate::error::{GameError, Result};

/// Scoring, timing and spawning constants for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    /// Countdown at the start of a session, in seconds
    pub initial_time_secs: u32,
    /// Items spawned per level
    pub items_per_level: usize,
    /// Seconds added when a level is cleared
    pub level_bonus_secs: u32,
    /// Points for a correct placement
    pub correct_points: u32,
    /// Points lost for a wrong placement (score clamps at zero)
    pub wrong_penalty: u32,
    /// Countdown tick period in milliseconds
    pub tick_interval_ms: u64,
    /// How long correct/wrong feedback stays visible, in milliseconds
    pub feedback_ms: u64,
    /// Delay between clearing a level and the next batch appearing, in milliseconds
    pub refill_delay_ms: u64,
    /// Region items are spawned in
    pub play_area: PlayArea,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            initial_time_secs: 180,
            items_per_level: 8,
            level_bonus_secs: 30,
            correct_points: 10,
            wrong_penalty: 5,
            tick_interval_ms: 1000,
            feedback_ms: 1000,
            refill_delay_ms: 1500,
            play_area: PlayArea::default(),
        }
    }
}

impl GameRules {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn feedback_duration(&self) -> Duration {
        Duration::from_millis(self.feedback_ms)
    }

    pub fn refill_delay(&self) -> Duration {
        Duration::from_millis(self.refill_delay_ms)
    }

    /// Reject rule sets that would break session invariants
    pub fn validate(&self) -> Result<()> {
        if self.initial_time_secs == 0 {
            return Err(GameError::InvalidRules(
                "initial_time_secs must be positive".into(),
            ));
        }
        if self.items_per_level == 0 {
            return Err(GameError::InvalidRules(
                "items_per_level must be positive".into(),
            ));
        }
        if self.tick_interval_ms == 0 {
            return Err(GameError::InvalidRules(
                "tick_interval_ms must be positive".into(),
            ));
        }
        let area = &self.play_area;
        if ![area.width, area.height, area.margin].iter().all(|v| v.is_finite()) || area.margin < 0.0 {
            return Err(GameError::InvalidRules(format!(
                "play area {}x{} with margin {} must be finite with a non-negative margin",
                area.width, area.height, area.margin
            )));
        }
        if area.width <= area.margin * 2.0 || area.height <= area.margin * 2.0 {
            return Err(GameError::InvalidRules(format!(
                "play area {}x{} leaves no room inside margin {}",
                area.width, area.height, area.margin
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_are_valid() {
        let rules = GameRules::default();
        assert!(rules.validate().is_ok());
        assert_eq!(rules.initial_time_secs, 180);
        assert_eq!(rules.items_per_level, 8);
        assert_eq!(rules.refill_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn test_zero_items_rejected() {
        let rules = GameRules {
            items_per_level: 0,
            ..GameRules::default()
        };
        assert!(matches!(rules.validate(), Err(GameError::InvalidRules(_))));
    }

    #[test]
    fn test_margin_too_large_rejected() {
        let mut rules = GameRules::default();
        rules.play_area.margin = 250.0;
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_non_finite_or_negative_area_rejected() {
        let bad_areas = [
            PlayArea { margin: f32::NAN, ..PlayArea::default() },
            PlayArea { width: f32::NAN, ..PlayArea::default() },
            PlayArea { height: f32::INFINITY, ..PlayArea::default() },
            PlayArea { margin: -10.0, ..PlayArea::default() },
        ];
        for area in bad_areas {
            let rules = GameRules {
                play_area: area,
                ..GameRules::default()
            };
            assert!(
                matches!(rules.validate(), Err(GameError::InvalidRules(_))),
                "{:?} accepted",
                area
            );
        }
    }

    #[test]
    fn test_zero_margin_accepted() {
        let mut rules = GameRules::default();
        rules.play_area.margin = 0.0;
        assert!(rules.validate().is_ok());
    }
}
