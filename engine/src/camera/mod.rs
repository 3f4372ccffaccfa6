//! Camera Module
//!
//! Provides first-person orientation and raycasting functionality for the engine.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod orientation;
pub mod raycast;

pub use orientation::{
    Orientation, DEFAULT_SENSITIVITY, DEFAULT_YAW, PITCH_LIMIT_MAX, PITCH_LIMIT_MIN,
};
pub use raycast::{raycast_to_plane, Ray, RaycastConfig};
