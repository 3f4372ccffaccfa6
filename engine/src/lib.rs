//! Strafe Engine Library
//!
//! First-person movement with Quake-style air strafing, plus an in-world
//! object editor. Window-system agnostic: the `sandbox` binary feeds it
//! events from winit, tests drive it directly.
//!
//! # Modules
//!
//! - [`player`] - Movement controller (ground/air motion, jumps, fly mode)
//! - [`camera`] - First-person orientation and screen rays
//! - [`input`] - Platform-agnostic keyboard and mouse state
//! - [`physics`] - Ray-AABB picking
//! - [`world`] - Grid snapping and map bounds
//! - [`config`] - JSON configuration for all of the above
//! - [`game`] - Editor, input routing and the sandbox state
//!
//! # Example
//!
//! ```ignore
//! use strafe_engine::game::{InputEvent, InputRouter, SandboxState};
//! use strafe_engine::input::KeyCode;
//! use strafe_engine::SandboxConfig;
//!
//! let mut state = SandboxState::new(SandboxConfig::default());
//! let mut router = InputRouter::new();
//!
//! router.handle_event(&mut state, InputEvent::Key { key: KeyCode::W, pressed: true });
//! state.tick(1.0 / 60.0);
//! println!("feet at {:?}", state.controller().position());
//! ```

pub mod camera;
pub mod config;
pub mod error;
pub mod input;
pub mod physics;
pub mod player;
pub mod world;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

pub use camera::Orientation;
pub use config::{CameraConfig, EditorConfig, SandboxConfig};
pub use error::{ConfigError, UnknownObjectType};
pub use input::{KeyCode, MouseButton, MovementKeys};
pub use player::{JumpOutcome, MovementConfig, MovementController, TickReport};
pub use world::{clamp_to_map, snap_to_grid, GridConfig};
