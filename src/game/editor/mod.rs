//! Editor Module
//!
//! In-world object editor: placed objects, selection, and the
//! inventory-driven placement workflow.

pub mod inventory;
pub mod object;
pub mod world_editor;

pub use inventory::{InventoryItem, INVENTORY};
pub use object::{BridgeParams, EditableObject, HouseParams, ObjectShape, ObjectType, TowerParams};
pub use world_editor::{PlacementState, WorldEditor};
