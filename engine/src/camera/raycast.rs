//! Raycast Module
//!
//! Provides raycasting functionality for the camera, primarily for
//! editor placement and object picking under the cursor.

use glam::{Vec2, Vec3};

use super::Orientation;

/// A ray in world space. `direction` is normalized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray, normalizing the direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at distance `t` along the ray.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Camera projection parameters needed to build rays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaycastConfig {
    /// Screen aspect ratio (width / height)
    pub aspect_ratio: f32,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
}

impl Default for RaycastConfig {
    fn default() -> Self {
        Self {
            aspect_ratio: 16.0 / 9.0,
            fov_degrees: 45.0,
        }
    }
}

impl RaycastConfig {
    /// Create a new raycast config with the given aspect ratio
    pub fn with_aspect(aspect_ratio: f32) -> Self {
        Self {
            aspect_ratio,
            ..Default::default()
        }
    }

    /// Ray from the eye through a point given in normalized device
    /// coordinates (-1..1 on both axes, +Y up).
    ///
    /// The screen center maps to the orientation's forward vector.
    pub fn screen_ray(&self, eye: Vec3, orientation: &Orientation, ndc: Vec2) -> Ray {
        let forward = orientation.forward();
        let right = orientation.right();
        let up = right.cross(forward).normalize();
        let half_fov_tan = (self.fov_degrees.to_radians() * 0.5).tan();

        let direction = forward
            + right * ndc.x * half_fov_tan * self.aspect_ratio
            + up * ndc.y * half_fov_tan;
        Ray::new(eye, direction)
    }
}

/// Intersect a ray with the horizontal plane `y = plane_height`.
///
/// # Returns
/// * `Some(Vec3)` - The intersection point on the plane
/// * `None` - If the ray is parallel to the plane or the plane is behind it
pub fn raycast_to_plane(ray: &Ray, plane_height: f32) -> Option<Vec3> {
    if ray.direction.y.abs() < 0.0001 {
        return None;
    }

    let t = (plane_height - ray.origin.y) / ray.direction.y;
    if t < 0.0 {
        return None;
    }

    Some(ray.at(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 0.001;

    #[test]
    fn test_center_ray_follows_forward() {
        let orientation = Orientation::from_angles(30.0, -20.0);
        let ray = RaycastConfig::default().screen_ray(Vec3::ZERO, &orientation, Vec2::ZERO);
        assert!((ray.direction - orientation.forward()).length() < EPS);
    }

    #[test]
    fn test_ray_direction_normalized() {
        let config = RaycastConfig::default();
        let orientation = Orientation::new();

        for x in [-1.0, -0.5, 0.0, 0.5, 1.0] {
            for y in [-1.0, -0.5, 0.0, 0.5, 1.0] {
                let ray = config.screen_ray(Vec3::Y, &orientation, Vec2::new(x, y));
                let len = ray.direction.length();
                assert!((len - 1.0).abs() < EPS, "Ray should be normalized, got length {}", len);
            }
        }
    }

    #[test]
    fn test_right_edge_ray_turns_right() {
        let config = RaycastConfig::default();
        let orientation = Orientation::new();
        let ray = config.screen_ray(Vec3::ZERO, &orientation, Vec2::new(1.0, 0.0));
        assert!(ray.direction.x > 0.0);
        assert!(ray.direction.z < 0.0);
    }

    #[test]
    fn test_looking_down_hits_ground() {
        let orientation = Orientation::from_angles(-90.0, -45.0);
        let eye = Vec3::new(0.0, 2.0, 0.0);
        let ray = RaycastConfig::default().screen_ray(eye, &orientation, Vec2::ZERO);

        let hit = raycast_to_plane(&ray, 0.0).unwrap();
        assert!(hit.y.abs() < EPS);
        assert!((hit.z + 2.0).abs() < EPS);
        assert!(hit.x.abs() < EPS);
    }

    #[test]
    fn test_parallel_and_behind_return_none() {
        let flat = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Z);
        assert!(raycast_to_plane(&flat, 0.0).is_none());

        let up = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Y);
        assert!(raycast_to_plane(&up, 0.0).is_none());
    }

    #[test]
    fn test_raycast_to_custom_plane() {
        let ray = Ray::new(Vec3::new(1.0, 10.0, 1.0), Vec3::NEG_Y);
        let hit = raycast_to_plane(&ray, 5.0).unwrap();
        assert!((hit - Vec3::new(1.0, 5.0, 1.0)).length() < EPS);
    }
}
