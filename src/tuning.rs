//! Game balance values
//!
//! Defaults match the classic feel; a page or the headless driver may hand in
//! JSON overrides. Missing fields fall back to the defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Rejected tuning input
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("disappearance_speed must be in (0, 1], got {0}")]
    DecayOutOfRange(f32),
    #[error("max_jump_height {max_jump_height} leaves no room above a spider of radius {radius}")]
    JumpTooLow { max_jump_height: f32, radius: f32 },
    #[error("leg span {leg_span} does not fit in a view {width} wide")]
    LegsTooWide { leg_span: f32, width: f32 },
}

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub spider_radius: f32,
    pub x_speed: f32,
    pub y_speed: f32,
    pub max_jump_height: f32,
    pub disappearance_speed: f32,

    // === Web generation ===
    pub web_rise_min: f32,
    pub web_rise_span: f32,

    // === Bounds ===
    /// Leg reach in multiples of the radius (horizontal wall check)
    pub leg_span_factor: f32,
    pub view_width: f32,
    pub view_height: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            spider_radius: SPIDER_RADIUS,
            x_speed: X_SPEED,
            y_speed: Y_SPEED,
            max_jump_height: MAX_JUMP_HEIGHT,
            disappearance_speed: DISAPPEARANCE_SPEED,

            web_rise_min: WEB_RISE_MIN,
            web_rise_span: WEB_RISE_SPAN,

            leg_span_factor: LEG_SPAN_FACTOR,
            view_width: VIEW_WIDTH,
            view_height: VIEW_HEIGHT,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning blob
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Half-width the legs occupy; the spider cannot push them past a wall
    #[inline]
    pub fn leg_span(&self) -> f32 {
        self.spider_radius * self.leg_span_factor
    }

    /// Upper bound (exclusive) of the vertical gap before a new web
    #[inline]
    pub fn max_web_gap(&self) -> f32 {
        self.max_jump_height - self.spider_radius * 2.0
    }

    /// Occupied ticks a fresh web survives
    pub fn web_lifetime_ticks(&self) -> u32 {
        (1.0 / self.disappearance_speed).round() as u32
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("spider_radius", self.spider_radius),
            ("x_speed", self.x_speed),
            ("y_speed", self.y_speed),
            ("web_rise_min", self.web_rise_min),
            ("leg_span_factor", self.leg_span_factor),
            ("view_width", self.view_width),
            ("view_height", self.view_height),
        ];
        for (field, value) in positive {
            // NaN fails this too
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if !(self.web_rise_span >= 0.0) {
            return Err(ConfigError::NotPositive {
                field: "web_rise_span",
                value: self.web_rise_span,
            });
        }
        if !(self.disappearance_speed > 0.0 && self.disappearance_speed <= 1.0) {
            return Err(ConfigError::DecayOutOfRange(self.disappearance_speed));
        }
        if !(self.max_web_gap() > 0.0) {
            return Err(ConfigError::JumpTooLow {
                max_jump_height: self.max_jump_height,
                radius: self.spider_radius,
            });
        }
        if self.leg_span() * 2.0 > self.view_width {
            return Err(ConfigError::LegsTooWide {
                leg_span: self.leg_span(),
                width: self.view_width,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.leg_span(), 40.0);
        assert_eq!(tuning.max_web_gap(), 70.0);
        assert_eq!(tuning.web_lifetime_ticks(), 100);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "x_speed": 6.0, "view_width": 400.0 }"#).unwrap();
        assert_eq!(tuning.x_speed, 6.0);
        assert_eq!(tuning.view_width, 400.0);
        assert_eq!(tuning.y_speed, Y_SPEED);
        assert_eq!(tuning.max_jump_height, MAX_JUMP_HEIGHT);
    }

    #[test]
    fn test_json_round_trip() {
        let tuning = Tuning::default();
        let json = tuning.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = Tuning::from_json(r#"{ "y_speed": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NotPositive { field: "y_speed", .. }));

        let err = Tuning::from_json(r#"{ "disappearance_speed": 1.5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::DecayOutOfRange(_)));

        let err = Tuning::from_json(r#"{ "max_jump_height": 10.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::JumpTooLow { .. }));

        let err = Tuning::from_json(r#"{ "view_width": 60.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::LegsTooWide { .. }));
    }
}
