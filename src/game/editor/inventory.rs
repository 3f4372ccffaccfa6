//! Inventory Catalog
//!
//! The fixed list of placeable templates, one per number key.

use glam::Vec3;

use super::object::ObjectType;

/// A placeable template shown in the editor's inventory bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InventoryItem {
    pub object_type: ObjectType,
    /// Preview size when the item is picked
    pub default_size: Vec3,
}

impl InventoryItem {
    pub const fn new(object_type: ObjectType, default_size: Vec3) -> Self {
        Self {
            object_type,
            default_size,
        }
    }

    /// Template with the type's own default size.
    pub const fn of(object_type: ObjectType) -> Self {
        Self::new(object_type, object_type.default_size())
    }

    pub fn name(&self) -> &'static str {
        self.object_type.name()
    }
}

/// Slots 1-6 in order.
pub static INVENTORY: [InventoryItem; 6] = [
    InventoryItem::of(ObjectType::Wall),
    InventoryItem::of(ObjectType::Rectangle),
    InventoryItem::of(ObjectType::Cube),
    InventoryItem::of(ObjectType::House),
    InventoryItem::of(ObjectType::Tower),
    InventoryItem::of(ObjectType::Bridge),
];
