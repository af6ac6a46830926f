//! Data-driven game balance
//!
//! Every balance constant in one serializable struct. Defaults mirror
//! `crate::consts`; partial JSON overrides fill the rest from defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Generation ===
    /// Minimum distance between any two stars (real or decoy)
    pub min_separation: f32,
    /// Horizontal safe-zone margin on each side
    pub margin_x: f32,
    /// Vertical safe-zone margin on each side
    pub margin_y: f32,
    pub obstacle_radius_min: f32,
    pub obstacle_radius_max: f32,
    /// Candidate samples per star before giving up
    pub placement_attempts: u32,

    // === Interaction ===
    /// Pointer pick radius around a star
    pub touch_radius: f32,

    // === Attempt ===
    pub hints_per_level: u8,
    pub hint_penalty: u32,
    pub base_time_limit_ms: u64,
    pub time_limit_step_ms: u64,
    pub min_time_limit_ms: u64,
    pub time_bonus_per_second: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            min_separation: MIN_STAR_SEPARATION,
            margin_x: SAFE_MARGIN_X,
            margin_y: SAFE_MARGIN_Y,
            obstacle_radius_min: OBSTACLE_RADIUS_MIN,
            obstacle_radius_max: OBSTACLE_RADIUS_MAX,
            placement_attempts: PLACEMENT_ATTEMPTS,

            touch_radius: TOUCH_RADIUS,

            hints_per_level: HINTS_PER_LEVEL,
            hint_penalty: HINT_PENALTY,
            base_time_limit_ms: BASE_TIME_LIMIT_MS,
            time_limit_step_ms: TIME_LIMIT_STEP_MS,
            min_time_limit_ms: MIN_TIME_LIMIT_MS,
            time_bonus_per_second: TIME_BONUS_PER_SECOND,
        }
    }
}

impl Tuning {
    /// Parse and validate a (possibly partial) JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        // `!(x > 0.0)` also rejects NaN
        if !(self.min_separation > 0.0) {
            return Err(TuningError::NonPositive("min_separation"));
        }
        if !(self.touch_radius > 0.0) {
            return Err(TuningError::NonPositive("touch_radius"));
        }
        if !(self.obstacle_radius_min > 0.0) {
            return Err(TuningError::NonPositive("obstacle_radius_min"));
        }
        if self.placement_attempts == 0 {
            return Err(TuningError::NonPositive("placement_attempts"));
        }
        let margins_ok = (0.0..0.5).contains(&self.margin_x) && (0.0..0.5).contains(&self.margin_y);
        if !margins_ok {
            return Err(TuningError::EmptySafeZone {
                margin_x: self.margin_x,
                margin_y: self.margin_y,
            });
        }
        if !(self.obstacle_radius_min <= self.obstacle_radius_max) {
            return Err(TuningError::InvertedRadiusRange {
                min: self.obstacle_radius_min,
                max: self.obstacle_radius_max,
            });
        }
        Ok(())
    }

    /// Width and height of the safe placement zone
    pub fn safe_zone_size(&self) -> (f32, f32) {
        (1.0 - 2.0 * self.margin_x, 1.0 - 2.0 * self.margin_y)
    }

    /// Time allowed for a level, shrinking with the index down to a floor
    pub fn time_limit_ms(&self, level_index: u32) -> u64 {
        let reduction = u64::from(level_index.saturating_sub(1)).saturating_mul(self.time_limit_step_ms);
        self.base_time_limit_ms
            .saturating_sub(reduction)
            .max(self.min_time_limit_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.min_separation, 0.1);
        let (w, h) = tuning.safe_zone_size();
        assert!((w - 0.8).abs() < 1e-6);
        assert!((h - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning = Tuning::from_json(r#"{ "touch_radius": 0.05, "hints_per_level": 5 }"#).unwrap();
        assert_eq!(tuning.touch_radius, 0.05);
        assert_eq!(tuning.hints_per_level, 5);
        assert_eq!(tuning.min_separation, MIN_STAR_SEPARATION);
        assert_eq!(tuning.hint_penalty, HINT_PENALTY);
    }

    #[test]
    fn test_json_round_trip() {
        let tuning = Tuning::default();
        let json = tuning.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }

    #[test]
    fn test_invalid_tuning() {
        assert_eq!(
            Tuning::from_json(r#"{ "min_separation": 0.0 }"#).unwrap_err(),
            TuningError::NonPositive("min_separation")
        );
        assert!(matches!(
            Tuning::from_json(r#"{ "margin_x": 0.5 }"#),
            Err(TuningError::EmptySafeZone { .. })
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "obstacle_radius_min": 0.2, "obstacle_radius_max": 0.1 }"#),
            Err(TuningError::InvertedRadiusRange { .. })
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "placement_attempts": 0 }"#),
            Err(TuningError::NonPositive("placement_attempts"))
        ));
        assert!(matches!(Tuning::from_json("not json"), Err(TuningError::Json(_))));
    }

    #[test]
    fn test_time_limit_curve() {
        let tuning = Tuning::default();
        assert_eq!(tuning.time_limit_ms(1), 60_000);
        assert_eq!(tuning.time_limit_ms(2), 59_000);
        assert_eq!(tuning.time_limit_ms(46), 15_000);
        assert_eq!(tuning.time_limit_ms(500), 15_000);
        assert_eq!(tuning.time_limit_ms(u32::MAX), 15_000);
    }
}
