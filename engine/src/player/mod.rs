//! Player Module
//!
//! Provides player character movement and control systems.
//!
//! # Components
//!
//! - [`MovementController`] - Ground/air movement with camera-relative WASD controls
//!   - Quake-style acceleration (air strafing), speed caps per state
//!   - Jump with coyote time, jump buffering and bunny-hopping
//!   - Fly (god) mode
//! - [`MovementConfig`] - Tuning parameters, loadable from the sandbox config

pub mod config;
pub mod movement_controller;

pub use config::{
    MovementConfig,
    AIR_ACCEL, AIR_FRICTION, COYOTE_TIME_MAX, GRAVITY, GROUND_ACCEL, GROUND_FRICTION,
    GROUND_LEVEL, JUMP_BUFFER_MAX, JUMP_VELOCITY, MAX_AIR_SPEED, MAX_DELTA_TIME,
    MAX_GROUND_SPEED, MOVE_SPEED, RUN_MULTIPLIER, STOP_SPEED,
};
pub use movement_controller::{JumpOutcome, MovementController, TickReport};
