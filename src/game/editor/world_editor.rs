//! World Editor
//!
//! Owns the placed objects, the current selection and the two-phase
//! placement workflow:
//!
//! ```text
//! Idle --select_inventory_item--> Previewing --place_selected_item--> Idle
//!                                 Previewing --cancel_placement-----> Idle
//! ```
//!
//! Invalid operations (bad index, no selection, wrong variant for an
//! attribute) do nothing and report it through their return value.

use glam::Vec3;

use super::inventory::{InventoryItem, INVENTORY};
use super::object::{EditableObject, ObjectType};
use crate::camera::Ray;
use crate::physics::{pick_nearest, HitInfo};

/// Placement workflow state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PlacementState {
    #[default]
    Idle,
    /// An inventory item is picked and a ghost follows the cursor.
    Previewing {
        /// Index into the inventory catalog
        item: usize,
        position: Vec3,
        size: Vec3,
    },
}

/// In-world object editor.
#[derive(Debug, Clone, Default)]
pub struct WorldEditor {
    /// Placed objects in insertion order
    objects: Vec<EditableObject>,
    /// Selected object index; `None` iff `objects` is empty
    selected: Option<usize>,
    placement: PlacementState,
}

impl WorldEditor {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn objects(&self) -> &[EditableObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_object(&self) -> Option<&EditableObject> {
        self.selected.and_then(|index| self.objects.get(index))
    }

    fn selected_object_mut(&mut self) -> Option<&mut EditableObject> {
        self.selected.and_then(|index| self.objects.get_mut(index))
    }

    /// The fixed inventory catalog.
    pub fn inventory(&self) -> &'static [InventoryItem] {
        &INVENTORY
    }

    pub fn placement_state(&self) -> PlacementState {
        self.placement
    }

    pub fn is_placing(&self) -> bool {
        matches!(self.placement, PlacementState::Previewing { .. })
    }

    /// Inventory item pending placement.
    pub fn selected_inventory_item(&self) -> Option<&'static InventoryItem> {
        match self.placement {
            PlacementState::Previewing { item, .. } => INVENTORY.get(item),
            PlacementState::Idle => None,
        }
    }

    // ========================================================================
    // Object CRUD
    // ========================================================================

    /// Append a new object of `object_type` and select it.
    ///
    /// Returns the new object's index.
    pub fn add_object(&mut self, object_type: ObjectType, position: Vec3, size: Vec3) -> usize {
        self.objects.push(EditableObject::new(object_type, position, size));
        let index = self.objects.len() - 1;
        self.selected = Some(index);
        log::debug!("Added {} #{} at {:?}", object_type, index, position);
        index
    }

    /// [`add_object`](Self::add_object) with the type given by name.
    ///
    /// Unknown names add nothing and return `None`.
    pub fn add_object_named(&mut self, type_name: &str, position: Vec3, size: Vec3) -> Option<usize> {
        match type_name.parse::<ObjectType>() {
            Ok(object_type) => Some(self.add_object(object_type, position, size)),
            Err(err) => {
                log::debug!("add_object_named ignored: {err}");
                None
            }
        }
    }

    /// Remove the object at `index`. Out of range is a no-op.
    ///
    /// A selection past the new end is pulled back to the last object.
    pub fn remove_object(&mut self, index: usize) -> Option<EditableObject> {
        if index >= self.objects.len() {
            return None;
        }
        let removed = self.objects.remove(index);

        self.selected = match self.selected {
            _ if self.objects.is_empty() => None,
            Some(selected) if selected >= self.objects.len() => Some(self.objects.len() - 1),
            other => other,
        };

        log::info!("Removed {} #{}", removed.object_type(), index);
        Some(removed)
    }

    /// Remove the selected object, if any.
    pub fn remove_selected_object(&mut self) -> Option<EditableObject> {
        let index = self.selected?;
        self.remove_object(index)
    }

    /// Select the object at `index`. Out of range is a no-op.
    pub fn select_object(&mut self, index: usize) -> bool {
        if index < self.objects.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    /// Select the next object, wrapping around.
    pub fn select_next(&mut self) -> Option<usize> {
        let len = self.objects.len();
        if len == 0 {
            return None;
        }
        let next = self.selected.map_or(0, |index| (index + 1) % len);
        self.selected = Some(next);
        self.selected
    }

    /// Select the previous object, wrapping around.
    pub fn select_previous(&mut self) -> Option<usize> {
        let len = self.objects.len();
        if len == 0 {
            return None;
        }
        let previous = self.selected.map_or(len - 1, |index| (index + len - 1) % len);
        self.selected = Some(previous);
        self.selected
    }

    /// Move the selected object by `offset` (additive).
    pub fn move_selected_object(&mut self, offset: Vec3) -> bool {
        match self.selected_object_mut() {
            Some(object) => {
                object.position += offset;
                true
            }
            None => false,
        }
    }

    /// Replace the selected object's size.
    pub fn resize_selected_object(&mut self, new_size: Vec3) -> bool {
        match self.selected_object_mut() {
            Some(object) => {
                object.size = new_size;
                true
            }
            None => false,
        }
    }

    /// Scale the selected object's size uniformly by `factor`.
    pub fn scale_selected_object(&mut self, factor: f32) -> bool {
        let Some(size) = self.selected_object().map(|object| object.size) else {
            return false;
        };
        self.resize_selected_object(size * factor)
    }

    // ========================================================================
    // Attribute setters
    // ========================================================================

    pub fn set_selected_object_color(&mut self, color: Vec3) -> bool {
        match self.selected_object_mut() {
            Some(object) => {
                object.color = color.clamp(Vec3::ZERO, Vec3::ONE);
                true
            }
            None => false,
        }
    }

    /// Houses, towers and bridges only. Non-positive values are rejected.
    pub fn set_selected_object_wall_thickness(&mut self, thickness: f32) -> bool {
        if !(thickness > 0.0 && thickness.is_finite()) {
            return false;
        }
        self.selected_object_mut()
            .and_then(|object| object.shape_mut().wall_thickness_mut())
            .map(|value| *value = thickness)
            .is_some()
    }

    /// Houses and towers only. Negative values are rejected.
    pub fn set_selected_object_roof_height(&mut self, height: f32) -> bool {
        if !(height >= 0.0 && height.is_finite()) {
            return false;
        }
        self.selected_object_mut()
            .and_then(|object| object.shape_mut().roof_height_mut())
            .map(|value| *value = height)
            .is_some()
    }

    /// Houses and towers only.
    pub fn set_selected_object_window_count(&mut self, count: u32) -> bool {
        self.selected_object_mut()
            .and_then(|object| object.shape_mut().window_count_mut())
            .map(|value| *value = count)
            .is_some()
    }

    /// Houses only. Non-positive values are rejected.
    pub fn set_selected_object_door_width(&mut self, width: f32) -> bool {
        if !(width > 0.0 && width.is_finite()) {
            return false;
        }
        self.selected_object_mut()
            .and_then(|object| object.shape_mut().door_width_mut())
            .map(|value| *value = width)
            .is_some()
    }

    // ========================================================================
    // Placement workflow
    // ========================================================================

    /// Pick inventory slot `index` and start (or retarget) the preview.
    ///
    /// The preview starts at the origin with the item's default size.
    /// Out of range is a no-op.
    pub fn select_inventory_item(&mut self, index: usize) -> bool {
        let Some(item) = INVENTORY.get(index) else {
            return false;
        };
        self.placement = PlacementState::Previewing {
            item: index,
            position: Vec3::ZERO,
            size: item.default_size,
        };
        log::info!("Placing {}", item.name());
        true
    }

    /// Move the ghost. No-op while idle.
    pub fn update_preview(&mut self, new_position: Vec3) -> bool {
        match &mut self.placement {
            PlacementState::Previewing { position, .. } => {
                *position = new_position;
                true
            }
            PlacementState::Idle => false,
        }
    }

    /// Resize the ghost. No-op while idle.
    pub fn update_preview_size(&mut self, new_size: Vec3) -> bool {
        match &mut self.placement {
            PlacementState::Previewing { size, .. } => {
                *size = new_size;
                true
            }
            PlacementState::Idle => false,
        }
    }

    /// Ghost object for the pending item at the given transform.
    ///
    /// Does not touch the object list. `None` while idle.
    pub fn render_preview(&self, position: Vec3, size: Vec3) -> Option<EditableObject> {
        self.selected_inventory_item()
            .map(|item| EditableObject::new(item.object_type, position, size))
    }

    /// Ghost object at the stored preview transform.
    pub fn preview(&self) -> Option<EditableObject> {
        match self.placement {
            PlacementState::Previewing { position, size, .. } => self.render_preview(position, size),
            PlacementState::Idle => None,
        }
    }

    /// Commit the pending item at `position` with `size` and return to idle.
    ///
    /// Returns the new object's index, or `None` when not placing.
    pub fn place_selected_item(&mut self, position: Vec3, size: Vec3) -> Option<usize> {
        let object_type = self.selected_inventory_item()?.object_type;
        self.placement = PlacementState::Idle;
        let index = self.add_object(object_type, position, size);
        log::info!("Placed {} #{} at {:?}", object_type, index, position);
        Some(index)
    }

    /// Commit the pending item at the stored preview transform.
    pub fn place_at_preview(&mut self) -> Option<usize> {
        match self.placement {
            PlacementState::Previewing { position, size, .. } => {
                self.place_selected_item(position, size)
            }
            PlacementState::Idle => None,
        }
    }

    /// Leave the placement workflow without adding anything.
    pub fn cancel_placement(&mut self) -> bool {
        let was_placing = self.is_placing();
        self.placement = PlacementState::Idle;
        if was_placing {
            log::info!("Placement cancelled");
        }
        was_placing
    }

    // ========================================================================
    // Picking
    // ========================================================================

    /// Nearest object whose bounds the ray hits.
    pub fn pick_object(&self, ray: &Ray) -> Option<HitInfo> {
        pick_nearest(ray, self.objects.iter().map(EditableObject::bounds))
    }

    /// Select the nearest object under the ray. A miss keeps the selection.
    pub fn select_at_ray(&mut self, ray: &Ray) -> Option<usize> {
        let hit = self.pick_object(ray)?;
        self.selected = Some(hit.index);
        Some(hit.index)
    }
}
