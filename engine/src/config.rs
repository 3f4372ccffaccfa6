//! Sandbox Configuration
//!
//! Centralized tuning for movement, camera and editor. Every section is
//! `#[serde(default)]`, so a config file only needs the values it changes:
//!
//! ```json
//! {
//!   "movement": { "move_speed": 6.0, "air_accel": 30.0 },
//!   "camera": { "sensitivity": 0.15 },
//!   "editor": { "grid": { "snap_enabled": false } }
//! }
//! ```

use std::fs;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::{Orientation, RaycastConfig, DEFAULT_SENSITIVITY, DEFAULT_YAW};
use crate::error::ConfigError;
use crate::player::MovementConfig;
use crate::world::GridConfig;

/// Camera and look settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Mouse sensitivity in degrees per pixel
    pub sensitivity: f32,
    /// Starting yaw in degrees
    pub yaw: f32,
    /// Starting pitch in degrees
    pub pitch: f32,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Eye height above the feet (meters)
    pub eye_height: f32,
    /// Feet position at startup
    pub spawn_position: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            yaw: DEFAULT_YAW,
            pitch: 0.0,
            fov_degrees: 45.0,
            eye_height: 1.7,
            spawn_position: Vec3::new(0.0, 0.0, 5.0),
        }
    }
}

impl CameraConfig {
    /// Starting orientation described by this config.
    pub fn orientation(&self) -> Orientation {
        Orientation::from_angles(self.yaw, self.pitch).with_sensitivity(self.sensitivity)
    }

    /// Ray construction parameters for a window with the given aspect ratio.
    pub fn raycast(&self, aspect_ratio: f32) -> RaycastConfig {
        RaycastConfig {
            aspect_ratio,
            fov_degrees: self.fov_degrees,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.sensitivity > 0.0) {
            return Err(ConfigError::invalid(
                "camera.sensitivity",
                format!("must be positive, got {}", self.sensitivity),
            ));
        }
        if !(self.pitch >= -89.0 && self.pitch <= 89.0) {
            return Err(ConfigError::invalid(
                "camera.pitch",
                format!("must be within [-89, 89], got {}", self.pitch),
            ));
        }
        if !self.yaw.is_finite() {
            return Err(ConfigError::invalid("camera.yaw", "must be finite"));
        }
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(ConfigError::invalid(
                "camera.fov_degrees",
                format!("must be within (0, 180), got {}", self.fov_degrees),
            ));
        }
        if !(self.eye_height >= 0.0) {
            return Err(ConfigError::invalid(
                "camera.eye_height",
                format!("must not be negative, got {}", self.eye_height),
            ));
        }
        if !self.spawn_position.is_finite() {
            return Err(ConfigError::invalid("camera.spawn_position", "must be finite"));
        }
        Ok(())
    }
}

/// Editor placement settings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Placement grid and map bounds
    pub grid: GridConfig,
    /// Fraction by which `[` and `]` shrink or grow the selection
    pub resize_step: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            resize_step: 0.1,
        }
    }
}

impl EditorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid.validate()?;
        if !(self.resize_step > 0.0 && self.resize_step < 1.0) {
            return Err(ConfigError::invalid(
                "editor.resize_step",
                format!("must be within (0, 1), got {}", self.resize_step),
            ));
        }
        Ok(())
    }
}

/// Top-level sandbox configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    pub movement: MovementConfig,
    pub camera: CameraConfig,
    pub editor: EditorConfig,
}

impl SandboxConfig {
    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a JSON config string.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON (handy for writing a starter config).
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.movement.validate()?;
        self.camera.validate()?;
        self.editor.validate()?;
        Ok(())
    }
}
