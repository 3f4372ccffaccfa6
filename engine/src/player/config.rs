//! Movement configuration constants.
//!
//! All movement parameters are grouped here for easy tuning.
//! Metric units throughout (meters, seconds).

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Walk speed in meters per second
pub const MOVE_SPEED: f32 = 5.0;

/// Running multiplies the walk speed by this factor
pub const RUN_MULTIPLIER: f32 = 2.0;

/// Ground acceleration in m/s^2 (reaches walk or run speed within one 60 Hz frame)
pub const GROUND_ACCEL: f32 = 700.0;

/// Air acceleration in m/s^2
pub const AIR_ACCEL: f32 = 20.0;

/// Horizontal speed cap while grounded
pub const MAX_GROUND_SPEED: f32 = 12.0;

/// Horizontal speed cap while airborne
pub const MAX_AIR_SPEED: f32 = 11.0;

/// Multiplicative ground friction per 60 Hz frame while grounded
pub const GROUND_FRICTION: f32 = 0.8;

/// Multiplicative air friction per tick
pub const AIR_FRICTION: f32 = 0.999;

/// Horizontal speed below which ground friction stops the player outright
pub const STOP_SPEED: f32 = 0.05;

/// Gravity acceleration in m/s^2
pub const GRAVITY: f32 = 20.0;

/// Initial jump velocity in m/s
pub const JUMP_VELOCITY: f32 = 8.0;

/// Height of the flat ground plane
pub const GROUND_LEVEL: f32 = 0.0;

/// Coyote time duration in seconds.
/// Allows jumping shortly after leaving ground.
pub const COYOTE_TIME_MAX: f32 = 0.1;

/// Jump buffer duration in seconds.
/// A jump pressed this close to landing fires on touchdown.
pub const JUMP_BUFFER_MAX: f32 = 0.15;

/// Frame times above this are clamped before integration
pub const MAX_DELTA_TIME: f32 = 0.1;

/// Tuning for [`MovementController`](super::MovementController).
///
/// `Default` returns the constants above. Every field can be overridden
/// from the sandbox configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    // ========================================================================
    // Speeds
    // ========================================================================
    /// Walking speed (meters/second).
    pub move_speed: f32,

    /// Speed multiplier applied while running.
    pub run_multiplier: f32,

    /// Horizontal speed cap on the ground.
    pub max_ground_speed: f32,

    /// Horizontal speed cap in the air. Must stay below `max_ground_speed`.
    pub max_air_speed: f32,

    // ========================================================================
    // Acceleration and friction
    // ========================================================================
    /// Ground acceleration (m/s²).
    pub ground_accel: f32,

    /// Air acceleration (m/s²). Must stay below `ground_accel`.
    pub air_accel: f32,

    /// Velocity retained per 60 Hz frame on the ground.
    pub ground_friction: f32,

    /// Velocity retained per tick in the air.
    pub air_friction: f32,

    /// Ground speed that snaps to a full stop.
    pub stop_speed: f32,

    // ========================================================================
    // Vertical
    // ========================================================================
    /// Gravity acceleration (m/s²).
    pub gravity: f32,

    /// Initial vertical velocity of a jump (m/s).
    pub jump_velocity: f32,

    /// Height of the ground plane.
    pub ground_level: f32,

    // ========================================================================
    // Timers (seconds)
    // ========================================================================
    /// Grace window after leaving the ground during which a jump still fires.
    pub coyote_time_max: f32,

    /// Grace window before landing during which a jump press is remembered.
    pub jump_buffer_max: f32,

    /// Upper clamp for a single frame's delta time.
    pub max_delta_time: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            move_speed: MOVE_SPEED,
            run_multiplier: RUN_MULTIPLIER,
            max_ground_speed: MAX_GROUND_SPEED,
            max_air_speed: MAX_AIR_SPEED,
            ground_accel: GROUND_ACCEL,
            air_accel: AIR_ACCEL,
            ground_friction: GROUND_FRICTION,
            air_friction: AIR_FRICTION,
            stop_speed: STOP_SPEED,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            ground_level: GROUND_LEVEL,
            coyote_time_max: COYOTE_TIME_MAX,
            jump_buffer_max: JUMP_BUFFER_MAX,
            max_delta_time: MAX_DELTA_TIME,
        }
    }
}

impl MovementConfig {
    /// Target horizontal speed for the current running state.
    #[inline]
    pub fn wish_speed(&self, running: bool) -> f32 {
        if running {
            self.move_speed * self.run_multiplier
        } else {
            self.move_speed
        }
    }

    /// Check the relationships the controller relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("movement.move_speed", self.move_speed),
            ("movement.run_multiplier", self.run_multiplier),
            ("movement.max_ground_speed", self.max_ground_speed),
            ("movement.max_air_speed", self.max_air_speed),
            ("movement.ground_accel", self.ground_accel),
            ("movement.air_accel", self.air_accel),
            ("movement.gravity", self.gravity),
            ("movement.jump_velocity", self.jump_velocity),
            ("movement.max_delta_time", self.max_delta_time),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::invalid(field, format!("must be positive, got {value}")));
            }
        }

        let non_negative = [
            ("movement.stop_speed", self.stop_speed),
            ("movement.coyote_time_max", self.coyote_time_max),
            ("movement.jump_buffer_max", self.jump_buffer_max),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0) {
                return Err(ConfigError::invalid(field, format!("must not be negative, got {value}")));
            }
        }

        for (field, value) in [
            ("movement.ground_friction", self.ground_friction),
            ("movement.air_friction", self.air_friction),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::invalid(field, format!("must be in (0, 1], got {value}")));
            }
        }

        if self.air_accel >= self.ground_accel {
            return Err(ConfigError::invalid(
                "movement.air_accel",
                format!(
                    "must be below ground_accel ({} >= {})",
                    self.air_accel, self.ground_accel
                ),
            ));
        }
        if self.max_air_speed >= self.max_ground_speed {
            return Err(ConfigError::invalid(
                "movement.max_air_speed",
                format!(
                    "must be below max_ground_speed ({} >= {})",
                    self.max_air_speed, self.max_ground_speed
                ),
            ));
        }
        if !self.ground_level.is_finite() {
            return Err(ConfigError::invalid("movement.ground_level", "must be finite"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(MovementConfig::default().validate().is_ok());
    }

    #[test]
    fn test_air_slower_than_ground() {
        let config = MovementConfig::default();
        assert!(config.air_accel < config.ground_accel);
        assert!(config.max_air_speed < config.max_ground_speed);
    }

    #[test]
    fn test_wish_speed_running_doubles() {
        let config = MovementConfig::default();
        assert_eq!(config.wish_speed(false), 5.0);
        assert_eq!(config.wish_speed(true), 10.0);
    }

    #[test]
    fn test_rejects_air_accel_above_ground() {
        let config = MovementConfig {
            air_accel: 800.0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("movement.air_accel"));
    }

    #[test]
    fn test_rejects_air_speed_cap_above_ground() {
        let config = MovementConfig {
            max_air_speed: 20.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_friction_out_of_range() {
        let config = MovementConfig {
            ground_friction: 1.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = MovementConfig {
            air_friction: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_nan_speed() {
        let config = MovementConfig {
            move_speed: f32::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: MovementConfig = serde_json::from_str(r#"{ "move_speed": 7.5 }"#).unwrap();
        assert_eq!(config.move_speed, 7.5);
        assert_eq!(config.gravity, GRAVITY);
        assert_eq!(config.jump_buffer_max, JUMP_BUFFER_MAX);
    }
}
