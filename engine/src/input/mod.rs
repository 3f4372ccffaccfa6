//! Input Module
//!
//! Provides platform-agnostic input state for keyboard and mouse.
//! This module is decoupled from any specific windowing system (like winit);
//! the sandbox binary converts its events into these types.
//!
//! # Example
//!
//! ```rust,ignore
//! use strafe_engine::input::{KeyCode, MovementKeys, FpsMouseState};
//!
//! let mut keys = MovementKeys::new();
//! keys.handle_key(KeyCode::W, true); // W pressed
//!
//! let mut mouse = FpsMouseState::new();
//! mouse.set_captured(true);
//! mouse.accumulate_delta(4.0, -2.0);
//! mouse.apply_to(&mut orientation);
//! ```

pub mod keyboard;
pub mod mouse;
pub mod mouse_state;

pub use keyboard::{KeyCode, ModifierState, MovementKeys};
pub use mouse::{ButtonState, MouseButton, MouseState};
pub use mouse_state::FpsMouseState;
