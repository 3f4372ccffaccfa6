//! Collision detection module
//!
//! Ray picking against axis-aligned bounding boxes, used by the editor to
//! find the object under the cursor.
//!
//! # Ray-AABB Intersection
//!
//! The slab method is used for ray-AABB intersection, which finds the
//! intersection points by computing entry and exit times for each axis.
//!
//! # Example
//!
//! ```ignore
//! use strafe_engine::camera::Ray;
//! use strafe_engine::physics::{pick_nearest, Aabb};
//! use glam::Vec3;
//!
//! let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
//! let boxes = [Aabb::from_center_size(Vec3::ZERO, Vec3::splat(2.0))];
//!
//! if let Some(hit) = pick_nearest(&ray, boxes.iter().copied()) {
//!     println!("Hit box {} at distance {}", hit.index, hit.distance);
//! }
//! ```

use glam::Vec3;

use crate::camera::Ray;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Build a box from two arbitrary corners.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Box centered on `center` with full extents `size` (negative sizes are mirrored).
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size.abs() * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Distance along `ray` to the first intersection, if any.
    ///
    /// A ray that starts inside the box reports the exit distance.
    pub fn ray_intersect(&self, ray: &Ray) -> Option<f32> {
        ray_aabb_intersect(ray.origin, ray.direction, self.min, self.max)
    }
}

/// Result of picking the nearest box along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitInfo {
    /// Index of the hit box in the iteration order
    pub index: usize,
    /// Distance from ray origin to hit point
    pub distance: f32,
    /// World-space position where the ray entered the box
    pub position: Vec3,
}

/// Slab-method ray-AABB test.
///
/// # Returns
///
/// * `Some(t)` - Distance along the ray to the intersection point (t >= 0)
/// * `None` - No intersection or intersection is behind the ray origin
pub fn ray_aabb_intersect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    aabb_min: Vec3,
    aabb_max: Vec3,
) -> Option<f32> {
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;

    for axis in 0..3 {
        let origin = ray_origin[axis];
        let dir = ray_dir[axis];
        let (lo, hi) = (aabb_min[axis], aabb_max[axis]);

        if dir.abs() < 1e-10 {
            // Parallel to this slab: must already be between its planes
            if origin < lo || origin > hi {
                return None;
            }
            continue;
        }

        let inv = 1.0 / dir;
        let t1 = (lo - origin) * inv;
        let t2 = (hi - origin) * inv;
        t_min = t_min.max(t1.min(t2));
        t_max = t_max.min(t1.max(t2));
    }

    if t_max >= t_min && t_max >= 0.0 {
        if t_min >= 0.0 { Some(t_min) } else { Some(t_max) }
    } else {
        None
    }
}

/// Nearest box hit by `ray`, with its index in `boxes`.
pub fn pick_nearest(ray: &Ray, boxes: impl IntoIterator<Item = Aabb>) -> Option<HitInfo> {
    boxes
        .into_iter()
        .enumerate()
        .filter_map(|(index, aabb)| {
            aabb.ray_intersect(ray).map(|distance| HitInfo {
                index,
                distance,
                position: ray.at(distance),
            })
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Aabb {
        Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0))
    }

    #[test]
    fn test_ray_hits_aabb_from_front() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
        let t = unit_box().ray_intersect(&ray).unwrap();
        assert!((t - 4.0).abs() < 0.001, "Expected t=4.0, got t={}", t);
    }

    #[test]
    fn test_ray_misses_aabb() {
        let ray = Ray::new(Vec3::new(0.0, 5.0, -5.0), Vec3::Z);
        assert!(unit_box().ray_intersect(&ray).is_none());
    }

    #[test]
    fn test_ray_starts_inside_aabb() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let t = unit_box().ray_intersect(&ray).unwrap();
        // Should hit the exit face at z=1
        assert!((t - 1.0).abs() < 0.001, "Expected t=1.0, got t={}", t);
    }

    #[test]
    fn test_ray_aabb_behind_origin() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert!(unit_box().ray_intersect(&ray).is_none());
    }

    #[test]
    fn test_diagonal_ray_hits() {
        let ray = Ray::new(Vec3::new(-5.0, 5.0, 0.0), Vec3::new(1.0, -1.0, 0.0));
        assert!(unit_box().ray_intersect(&ray).is_some());
    }

    #[test]
    fn test_from_center_size() {
        let aabb = Aabb::from_center_size(Vec3::new(0.0, 1.0, 0.0), Vec3::new(2.0, -2.0, 4.0));
        assert_eq!(aabb.min, Vec3::new(-1.0, 0.0, -2.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 2.0, 2.0));
        assert_eq!(aabb.center(), Vec3::new(0.0, 1.0, 0.0));
        assert!(aabb.contains(Vec3::new(0.5, 1.5, -1.0)));
        assert!(!aabb.contains(Vec3::new(0.0, 3.0, 0.0)));
    }

    #[test]
    fn test_pick_nearest_prefers_closer_box() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);
        let far = Aabb::from_center_size(Vec3::new(0.0, 0.0, -5.0), Vec3::ONE);
        let near = Aabb::from_center_size(Vec3::new(0.0, 0.0, 2.0), Vec3::ONE);
        let off_axis = Aabb::from_center_size(Vec3::new(5.0, 0.0, 5.0), Vec3::ONE);

        let hit = pick_nearest(&ray, [far, near, off_axis]).unwrap();
        assert_eq!(hit.index, 1);
        assert!((hit.distance - 7.5).abs() < 0.001);
        assert!((hit.position.z - 2.5).abs() < 0.001);
    }

    #[test]
    fn test_pick_nearest_empty() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert!(pick_nearest(&ray, std::iter::empty()).is_none());
    }
}
