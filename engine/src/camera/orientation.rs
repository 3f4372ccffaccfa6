//! First-Person Orientation
//!
//! Yaw/pitch look state for the first-person camera. Mouse movement directly
//! rotates the view without requiring any button to be held down.
//!
//! Key features:
//! - Angles stored in degrees, direction vectors always derived from them
//! - Pitch clamped to ±89 degrees so the view never inverts
//! - Configurable sensitivity (default: 0.1 deg/pixel)
//! - NO smoothing - instant response

use glam::Vec3;

/// Lower pitch limit in degrees
pub const PITCH_LIMIT_MIN: f32 = -89.0;
/// Upper pitch limit in degrees
pub const PITCH_LIMIT_MAX: f32 = 89.0;

/// Default yaw in degrees (looking toward -Z)
pub const DEFAULT_YAW: f32 = -90.0;
/// Default mouse sensitivity in degrees per pixel
pub const DEFAULT_SENSITIVITY: f32 = 0.1;

/// Look direction of the player.
///
/// Only `yaw` and `pitch` are stored. `forward`, `right` and `up` are
/// recomputed on every call so they can never drift out of sync.
///
/// ## Coordinate System
/// - +X = right (at the default yaw)
/// - +Y = up
/// - yaw = -90° and pitch = 0° looks toward -Z
///
/// ## Usage
/// ```rust,ignore
/// let mut orientation = Orientation::new();
///
/// // In your input loop, pass raw mouse delta (in pixels)
/// orientation.apply_mouse_delta(mouse_dx, mouse_dy);
///
/// // Feed the movement controller
/// controller.update(delta_time, &orientation);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orientation {
    /// Horizontal angle (degrees) - unrestricted
    yaw: f32,
    /// Vertical angle (degrees) - clamped to [-89, 89]
    pitch: f32,
    /// Mouse sensitivity in degrees per pixel
    pub sensitivity: f32,
}

impl Default for Orientation {
    fn default() -> Self {
        Self {
            yaw: DEFAULT_YAW,
            pitch: 0.0,
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }
}

impl Orientation {
    /// Create an orientation looking toward -Z
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an orientation from angles in degrees (pitch is clamped)
    pub fn from_angles(yaw: f32, pitch: f32) -> Self {
        let mut orientation = Self::default();
        orientation.set_yaw(yaw);
        orientation.set_pitch(pitch);
        orientation
    }

    /// Builder-style sensitivity override
    pub fn with_sensitivity(mut self, sensitivity: f32) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Set the yaw angle directly (degrees). Non-finite values are ignored.
    #[inline]
    pub fn set_yaw(&mut self, yaw: f32) {
        if yaw.is_finite() {
            self.yaw = yaw;
        }
    }

    /// Set the pitch angle directly (degrees, clamped to limits)
    #[inline]
    pub fn set_pitch(&mut self, pitch: f32) {
        if pitch.is_finite() {
            self.pitch = pitch.clamp(PITCH_LIMIT_MIN, PITCH_LIMIT_MAX);
        }
    }

    /// Apply mouse movement delta to rotate the view
    ///
    /// # Arguments
    /// * `dx` - Mouse movement in X (pixels). Positive = look right (increase yaw)
    /// * `dy` - Mouse movement in Y (pixels). Positive = mouse moved down = look down
    pub fn apply_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.set_yaw(self.yaw + dx * self.sensitivity);
        // Screen Y grows downward, pitch grows upward
        self.set_pitch(self.pitch - dy * self.sensitivity);
    }

    /// Unit vector the player is looking along
    #[inline]
    pub fn forward(&self) -> Vec3 {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize()
    }

    /// `normalize(cross(forward, world_up))`
    #[inline]
    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    #[inline]
    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward()).normalize()
    }

    /// Forward direction flattened onto the ground plane
    #[inline]
    pub fn horizontal_forward(&self) -> Vec3 {
        let forward = self.forward();
        Vec3::new(forward.x, 0.0, forward.z).normalize_or_zero()
    }

    /// Right direction flattened onto the ground plane
    #[inline]
    pub fn horizontal_right(&self) -> Vec3 {
        let right = self.right();
        Vec3::new(right.x, 0.0, right.z).normalize_or_zero()
    }
}
