//! Grid Configuration Module
//!
//! Contains grid and map configuration for editor placement.
//!
//! - 1 unit = 1 meter (SI units)
//! - map_size = 100.0 means bounds from -100m to +100m

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Grid and map configuration for world-space operations.
///
/// Controls grid snapping behavior and map boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Grid cell size in meters
    pub cell_size: f32,
    /// Map bounds (-map_size to +map_size on X and Z)
    pub map_size: f32,
    /// Grid snapping on/off
    pub snap_enabled: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: 1.0,
            map_size: 100.0,
            snap_enabled: true,
        }
    }
}

impl GridConfig {
    /// Snap a position to the grid if snapping is enabled.
    ///
    /// Only snaps X and Z coordinates; Y is preserved.
    pub fn snap_to_grid(&self, pos: Vec3) -> Vec3 {
        if !self.snap_enabled {
            return pos;
        }
        let grid_size = self.cell_size;
        Vec3::new(
            (pos.x / grid_size).round() * grid_size,
            pos.y, // Don't snap Y
            (pos.z / grid_size).round() * grid_size,
        )
    }

    /// Clamp a position to the map boundaries.
    ///
    /// Clamps X and Z to [-map_size, +map_size]; Y is preserved.
    pub fn clamp_to_map(&self, pos: Vec3) -> Vec3 {
        let bounds = self.map_size;
        Vec3::new(
            pos.x.clamp(-bounds, bounds),
            pos.y,
            pos.z.clamp(-bounds, bounds),
        )
    }

    /// Snap and clamp a position in one operation.
    pub fn snap_and_clamp(&self, pos: Vec3) -> Vec3 {
        self.clamp_to_map(self.snap_to_grid(pos))
    }

    /// Toggle snapping, returning the new state.
    pub fn toggle_snap(&mut self) -> bool {
        self.snap_enabled = !self.snap_enabled;
        self.snap_enabled
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cell_size > 0.0) {
            return Err(ConfigError::invalid(
                "editor.grid.cell_size",
                format!("must be positive, got {}", self.cell_size),
            ));
        }
        if !(self.map_size > 0.0) {
            return Err(ConfigError::invalid(
                "editor.grid.map_size",
                format!("must be positive, got {}", self.map_size),
            ));
        }
        Ok(())
    }
}

/// Snap a position to the default grid.
pub fn snap_to_grid(pos: Vec3) -> Vec3 {
    GridConfig::default().snap_to_grid(pos)
}

/// Clamp a position to the default map boundaries.
pub fn clamp_to_map(pos: Vec3) -> Vec3 {
    GridConfig::default().clamp_to_map(pos)
}
