//! World Module
//!
//! Contains world-space configuration and utilities. The sandbox world is a
//! flat ground plane bounded by the map size.

pub mod grid;

pub use grid::{clamp_to_map, snap_to_grid, GridConfig};
