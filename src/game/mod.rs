//! Game Module
//!
//! Sandbox systems that build on top of the engine: the object editor,
//! input routing and the per-frame state.

pub mod config;
pub mod editor;
pub mod input;
pub mod state;

pub use editor::{EditableObject, InventoryItem, ObjectShape, ObjectType, PlacementState, WorldEditor, INVENTORY};
pub use input::{AppCommand, InputAction, InputContext, InputEvent, InputMode, InputRouter};
pub use state::SandboxState;
