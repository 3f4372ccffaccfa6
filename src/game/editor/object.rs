//! Editable Objects
//!
//! The closed set of object kinds the world editor can place. Every object is
//! an axis-aligned box centered on `position` with full extents `size`;
//! predefined structures (house, tower, bridge) carry extra shape parameters
//! for the renderer.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::UnknownObjectType;
use crate::physics::Aabb;

// ============================================================================
// OBJECT TYPE
// ============================================================================

/// Kind of an editable object. Fixed for the object's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectType {
    Wall,
    Rectangle,
    Cube,
    House,
    Tower,
    Bridge,
}

impl ObjectType {
    /// All object types in inventory order.
    pub const ALL: [ObjectType; 6] = [
        ObjectType::Wall,
        ObjectType::Rectangle,
        ObjectType::Cube,
        ObjectType::House,
        ObjectType::Tower,
        ObjectType::Bridge,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ObjectType::Wall => "Wall",
            ObjectType::Rectangle => "Rectangle",
            ObjectType::Cube => "Cube",
            ObjectType::House => "House",
            ObjectType::Tower => "Tower",
            ObjectType::Bridge => "Bridge",
        }
    }

    /// RGB color a freshly placed object of this type gets.
    pub fn default_color(self) -> Vec3 {
        match self {
            ObjectType::Wall => Vec3::new(0.8, 0.8, 0.8),
            ObjectType::Rectangle => Vec3::new(0.6, 0.8, 0.6),
            ObjectType::Cube => Vec3::new(0.2, 0.2, 1.0),
            ObjectType::House => Vec3::new(0.76, 0.6, 0.42),
            ObjectType::Tower => Vec3::new(0.55, 0.55, 0.6),
            ObjectType::Bridge => Vec3::new(0.5, 0.35, 0.2),
        }
    }

    /// Size used for the placement preview until the user changes it.
    pub const fn default_size(self) -> Vec3 {
        match self {
            ObjectType::Wall => Vec3::new(1.0, 2.0, 0.1),
            ObjectType::Rectangle => Vec3::new(2.0, 0.1, 2.0),
            ObjectType::Cube => Vec3::ONE,
            ObjectType::House => Vec3::new(4.0, 3.0, 4.0),
            ObjectType::Tower => Vec3::new(2.0, 6.0, 2.0),
            ObjectType::Bridge => Vec3::new(6.0, 0.5, 2.0),
        }
    }

    /// Whether this type carries structure parameters.
    pub fn is_predefined(self) -> bool {
        matches!(self, ObjectType::House | ObjectType::Tower | ObjectType::Bridge)
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ObjectType {
    type Err = UnknownObjectType;

    /// Case-insensitive match on the type name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ObjectType::ALL
            .into_iter()
            .find(|object_type| object_type.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownObjectType(s.to_string()))
    }
}

// ============================================================================
// SHAPE PARAMETERS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseParams {
    pub wall_thickness: f32,
    pub roof_height: f32,
    pub window_count: u32,
    pub door_width: f32,
}

impl Default for HouseParams {
    fn default() -> Self {
        Self {
            wall_thickness: 0.2,
            roof_height: 1.5,
            window_count: 4,
            door_width: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TowerParams {
    pub wall_thickness: f32,
    pub roof_height: f32,
    pub window_count: u32,
}

impl Default for TowerParams {
    fn default() -> Self {
        Self {
            wall_thickness: 0.3,
            roof_height: 2.0,
            window_count: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BridgeParams {
    /// Railing thickness
    pub wall_thickness: f32,
}

impl Default for BridgeParams {
    fn default() -> Self {
        Self { wall_thickness: 0.1 }
    }
}

/// Per-variant shape data. Plain primitives carry nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ObjectShape {
    Wall,
    Rectangle,
    Cube,
    House(HouseParams),
    Tower(TowerParams),
    Bridge(BridgeParams),
}

impl ObjectShape {
    /// Shape for `object_type` with default parameters.
    pub fn for_type(object_type: ObjectType) -> Self {
        match object_type {
            ObjectType::Wall => ObjectShape::Wall,
            ObjectType::Rectangle => ObjectShape::Rectangle,
            ObjectType::Cube => ObjectShape::Cube,
            ObjectType::House => ObjectShape::House(HouseParams::default()),
            ObjectType::Tower => ObjectShape::Tower(TowerParams::default()),
            ObjectType::Bridge => ObjectShape::Bridge(BridgeParams::default()),
        }
    }

    pub fn object_type(&self) -> ObjectType {
        match self {
            ObjectShape::Wall => ObjectType::Wall,
            ObjectShape::Rectangle => ObjectType::Rectangle,
            ObjectShape::Cube => ObjectType::Cube,
            ObjectShape::House(_) => ObjectType::House,
            ObjectShape::Tower(_) => ObjectType::Tower,
            ObjectShape::Bridge(_) => ObjectType::Bridge,
        }
    }

    pub fn wall_thickness(&self) -> Option<f32> {
        match self {
            ObjectShape::House(p) => Some(p.wall_thickness),
            ObjectShape::Tower(p) => Some(p.wall_thickness),
            ObjectShape::Bridge(p) => Some(p.wall_thickness),
            _ => None,
        }
    }

    pub fn roof_height(&self) -> Option<f32> {
        match self {
            ObjectShape::House(p) => Some(p.roof_height),
            ObjectShape::Tower(p) => Some(p.roof_height),
            _ => None,
        }
    }

    pub fn window_count(&self) -> Option<u32> {
        match self {
            ObjectShape::House(p) => Some(p.window_count),
            ObjectShape::Tower(p) => Some(p.window_count),
            _ => None,
        }
    }

    pub fn door_width(&self) -> Option<f32> {
        match self {
            ObjectShape::House(p) => Some(p.door_width),
            _ => None,
        }
    }

    pub(crate) fn wall_thickness_mut(&mut self) -> Option<&mut f32> {
        match self {
            ObjectShape::House(p) => Some(&mut p.wall_thickness),
            ObjectShape::Tower(p) => Some(&mut p.wall_thickness),
            ObjectShape::Bridge(p) => Some(&mut p.wall_thickness),
            _ => None,
        }
    }

    pub(crate) fn roof_height_mut(&mut self) -> Option<&mut f32> {
        match self {
            ObjectShape::House(p) => Some(&mut p.roof_height),
            ObjectShape::Tower(p) => Some(&mut p.roof_height),
            _ => None,
        }
    }

    pub(crate) fn window_count_mut(&mut self) -> Option<&mut u32> {
        match self {
            ObjectShape::House(p) => Some(&mut p.window_count),
            ObjectShape::Tower(p) => Some(&mut p.window_count),
            _ => None,
        }
    }

    pub(crate) fn door_width_mut(&mut self) -> Option<&mut f32> {
        match self {
            ObjectShape::House(p) => Some(&mut p.door_width),
            _ => None,
        }
    }
}

// ============================================================================
// EDITABLE OBJECT
// ============================================================================

/// An object placed in the world.
///
/// The shape (and therefore the type) is fixed at construction; position,
/// size and color are changed through the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditableObject {
    shape: ObjectShape,
    /// Box center in world space
    pub position: Vec3,
    /// Full box extents
    pub size: Vec3,
    /// RGB, each channel 0..1
    pub color: Vec3,
}

impl EditableObject {
    /// New object with the type's default parameters and color.
    pub fn new(object_type: ObjectType, position: Vec3, size: Vec3) -> Self {
        Self {
            shape: ObjectShape::for_type(object_type),
            position,
            size,
            color: object_type.default_color(),
        }
    }

    #[inline]
    pub fn object_type(&self) -> ObjectType {
        self.shape.object_type()
    }

    #[inline]
    pub fn shape(&self) -> &ObjectShape {
        &self.shape
    }

    #[inline]
    pub(crate) fn shape_mut(&mut self) -> &mut ObjectShape {
        &mut self.shape
    }

    /// World-space bounding box.
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.position, self.size)
    }
}
