//! Input Module
//!
//! Input events, action definitions, keyboard mapping and the router that
//! applies them to the sandbox.

pub mod actions;
pub mod keyboard;
pub mod router;

pub use actions::{AppCommand, InputAction, InputContext, InputEvent, InputMode, MovementKey};
pub use keyboard::map_key_to_action;
pub use router::InputRouter;
