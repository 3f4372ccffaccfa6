//! Player Movement Controller
//!
//! Provides the first-person movement controller: ground and air motion,
//! jumping with coyote time and jump buffering, and a fly (god) mode.
//! Movement direction is relative to the [`Orientation`]'s facing direction.
//!
//! # Physics Model
//!
//! - Walk speed: 5.0 m/s (run: x2)
//! - Ground acceleration: 700 m/s^2, air acceleration: 20 m/s^2
//! - Quake-style acceleration: only the speed *along* the wish direction is
//!   capped, so turning while airborne (air strafing) gains speed
//! - Speed caps: 12 m/s on the ground, 11 m/s in the air
//! - Gravity 20 m/s^2, jump velocity 8 m/s (0.8 s airtime)
//!
//! # Usage
//!
//! ```rust,ignore
//! use strafe_engine::camera::Orientation;
//! use strafe_engine::input::KeyCode;
//! use strafe_engine::player::MovementController;
//!
//! let mut controller = MovementController::new();
//! let orientation = Orientation::new();
//!
//! // Input events
//! controller.keys_mut().handle_key(KeyCode::W, true);
//! controller.press_jump(&orientation);
//!
//! // Each frame:
//! let report = controller.update(delta_time, &orientation);
//! render_player_at(controller.position());
//! ```

use glam::Vec3;

use crate::camera::Orientation;
use crate::input::MovementKeys;

use super::config::MovementConfig;

/// Result of a jump key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    /// A jump started this press (grounded or within coyote time).
    Jumped,
    /// Airborne: the press is remembered and fires on landing.
    Buffered,
    /// Fly mode: Space means "fly up", not jump.
    Ignored,
}

/// What happened during one [`MovementController::update`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// The player touched down this tick.
    pub landed: bool,
    /// A buffered jump fired on landing this tick.
    pub jumped: bool,
}

/// First-person movement controller.
///
/// Owns the player's feet position, horizontal velocity, jump arc and
/// held movement keys. WASD movement is relative to the orientation's
/// facing direction projected onto the ground plane:
/// - W/S: Move forward/backward
/// - A/D: Strafe left/right
///
/// The ground is a flat plane at `config.ground_level`. The feet never go
/// below it.
#[derive(Debug, Clone)]
pub struct MovementController {
    /// Tuning parameters
    config: MovementConfig,

    /// Feet position in world space
    position: Vec3,

    /// Horizontal velocity (y is always zero)
    velocity: Vec3,

    /// Current vertical velocity in m/s (positive = upward)
    vertical_velocity: f32,

    /// Whether the player is standing on the ground
    is_grounded: bool,

    /// Whether a jump arc is in progress
    is_jumping: bool,

    /// Time remaining in which a jump still fires after leaving the ground
    coyote_time: f32,

    /// Time remaining in which an early jump press fires on landing
    jump_buffer_time: f32,

    /// Held movement keys
    keys: MovementKeys,

    /// Wish direction from the most recent movement update
    wish_dir: Vec3,

    /// Fly (god) mode: no gravity, Space/Shift move up/down
    fly_mode: bool,
}

impl Default for MovementController {
    fn default() -> Self {
        Self::with_config(MovementConfig::default())
    }
}

impl MovementController {
    /// Create a new movement controller with default settings, standing at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a movement controller with custom tuning.
    pub fn with_config(config: MovementConfig) -> Self {
        Self {
            config,
            position: Vec3::new(0.0, config.ground_level, 0.0),
            velocity: Vec3::ZERO,
            vertical_velocity: 0.0,
            is_grounded: true,
            is_jumping: false,
            coyote_time: config.coyote_time_max,
            jump_buffer_time: 0.0,
            keys: MovementKeys::default(),
            wish_dir: Vec3::ZERO,
            fly_mode: false,
        }
    }

    /// Builder-style spawn position. The position is lifted to the ground
    /// if it starts below it.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.teleport(position);
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    /// Feet position in world space.
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Horizontal velocity.
    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Get the horizontal speed (XZ plane only).
    #[inline]
    pub fn horizontal_speed(&self) -> f32 {
        self.velocity.length()
    }

    #[inline]
    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.is_grounded
    }

    #[inline]
    pub fn is_jumping(&self) -> bool {
        self.is_jumping
    }

    #[inline]
    pub fn coyote_time(&self) -> f32 {
        self.coyote_time
    }

    #[inline]
    pub fn jump_buffer_time(&self) -> f32 {
        self.jump_buffer_time
    }

    #[inline]
    pub fn is_fly_mode(&self) -> bool {
        self.fly_mode
    }

    #[inline]
    pub fn ground_level(&self) -> f32 {
        self.config.ground_level
    }

    /// Check if a jump press would start a jump right now.
    pub fn can_jump(&self) -> bool {
        !self.fly_mode && (self.is_grounded || self.coyote_time > 0.0)
    }

    #[inline]
    pub fn keys(&self) -> &MovementKeys {
        &self.keys
    }

    /// Held movement keys. Feed key events through
    /// [`MovementKeys::handle_key`].
    #[inline]
    pub fn keys_mut(&mut self) -> &mut MovementKeys {
        &mut self.keys
    }

    // ========================================================================
    // State changes
    // ========================================================================

    /// Move the player to `position` and stop all motion.
    ///
    /// Positions below the ground are lifted onto it.
    pub fn teleport(&mut self, position: Vec3) {
        self.position = position;
        self.velocity = Vec3::ZERO;
        self.vertical_velocity = 0.0;
        self.is_jumping = false;
        self.jump_buffer_time = 0.0;

        if self.fly_mode {
            self.position.y = self.position.y.max(self.config.ground_level);
        } else if self.position.y <= self.config.ground_level {
            self.land();
        } else {
            self.is_grounded = false;
            self.coyote_time = 0.0;
        }
    }

    /// Stop all motion and release every held key. Position is kept.
    pub fn reset(&mut self) {
        self.keys.reset();
        self.wish_dir = Vec3::ZERO;
        self.teleport(self.position);
    }

    /// Change the height of the ground plane.
    ///
    /// Lowering the ground under a grounded player starts a fall with the
    /// coyote timer running (walking off an edge). Raising it above the feet
    /// lifts the player onto it.
    pub fn set_ground_level(&mut self, ground_level: f32) {
        if !ground_level.is_finite() {
            return;
        }
        self.config.ground_level = ground_level;

        if self.position.y < ground_level {
            self.position.y = ground_level;
            if !self.fly_mode {
                self.land();
            }
        } else if self.is_grounded && self.position.y > ground_level {
            self.is_grounded = false;
            self.is_jumping = false;
            self.vertical_velocity = 0.0;
            self.coyote_time = self.config.coyote_time_max;
        }
    }

    /// Enable or disable fly (god) mode.
    ///
    /// Turning fly mode off in the air starts a fall.
    pub fn set_fly_mode(&mut self, enabled: bool) {
        if self.fly_mode == enabled {
            return;
        }
        self.fly_mode = enabled;
        self.vertical_velocity = 0.0;
        self.is_jumping = false;
        self.jump_buffer_time = 0.0;
        self.coyote_time = 0.0;

        if enabled {
            self.is_grounded = false;
        } else if self.position.y <= self.config.ground_level {
            self.land();
        }
        log::info!("Fly mode: {}", if enabled { "ON" } else { "OFF" });
    }

    /// Toggle fly mode, returning the new state.
    pub fn toggle_fly_mode(&mut self) -> bool {
        self.set_fly_mode(!self.fly_mode);
        self.fly_mode
    }

    // ========================================================================
    // Jump protocol
    // ========================================================================

    /// Handle a jump key press.
    ///
    /// - Grounded or within coyote time: jump now, carrying the current
    ///   wish direction into the horizontal velocity.
    /// - Airborne otherwise: arm the jump buffer.
    /// - Fly mode: ignored.
    pub fn press_jump(&mut self, orientation: &Orientation) -> JumpOutcome {
        if self.fly_mode {
            return JumpOutcome::Ignored;
        }

        if self.can_jump() {
            self.wish_dir = self.wish_direction(orientation);
            self.start_jump();
            log::debug!("Jump at {:?}", self.position);
            JumpOutcome::Jumped
        } else {
            self.jump_buffer_time = self.config.jump_buffer_max;
            log::debug!("Jump buffered ({:.2}s)", self.jump_buffer_time);
            JumpOutcome::Buffered
        }
    }

    fn start_jump(&mut self) {
        if self.wish_dir != Vec3::ZERO {
            let speed = self
                .config
                .wish_speed(self.keys.sprint)
                .max(self.horizontal_speed());
            self.velocity = self.wish_dir * speed;
        }
        self.vertical_velocity = self.config.jump_velocity;
        self.is_jumping = true;
        self.is_grounded = false;
        self.coyote_time = 0.0;
        self.jump_buffer_time = 0.0;
    }

    fn land(&mut self) {
        self.position.y = self.config.ground_level;
        self.vertical_velocity = 0.0;
        self.is_jumping = false;
        self.is_grounded = true;
        self.coyote_time = self.config.coyote_time_max;
    }

    // ========================================================================
    // Per-frame update
    // ========================================================================

    /// Clamp a frame time to `[0, max_delta_time]`. NaN becomes 0.
    #[inline]
    pub fn clamp_delta_time(&self, dt: f32) -> f32 {
        if dt.is_nan() {
            0.0
        } else {
            dt.clamp(0.0, self.config.max_delta_time)
        }
    }

    /// Advance the controller by one frame.
    ///
    /// Order: timers, horizontal movement, vertical arc and landing.
    pub fn update(&mut self, dt: f32, orientation: &Orientation) -> TickReport {
        let dt = self.clamp_delta_time(dt);

        if self.fly_mode {
            self.update_fly(dt, orientation);
            return TickReport::default();
        }

        self.jump_buffer_time = (self.jump_buffer_time - dt).max(0.0);
        if !self.is_grounded {
            self.coyote_time = (self.coyote_time - dt).max(0.0);
        }

        self.update_movement(dt, orientation);
        self.update_jump(dt)
    }

    /// Horizontal integration: friction, acceleration, speed clamp, then
    /// position.
    ///
    /// Ground friction runs every grounded tick, before acceleration, so
    /// momentum off the wish direction bleeds away after a turn.
    pub fn update_movement(&mut self, dt: f32, orientation: &Orientation) {
        let dt = self.clamp_delta_time(dt);
        self.wish_dir = self.wish_direction(orientation);
        let wish_speed = self.config.wish_speed(self.keys.sprint);

        if self.is_grounded {
            self.apply_ground_friction(dt);
            if self.wish_dir != Vec3::ZERO {
                self.accelerate(wish_speed, self.config.ground_accel, dt);
            }
            self.clamp_horizontal_speed(self.config.max_ground_speed);
        } else {
            if self.wish_dir != Vec3::ZERO {
                self.accelerate(wish_speed, self.config.air_accel, dt);
            }
            self.velocity *= self.config.air_friction;
            self.clamp_horizontal_speed(self.config.max_air_speed);
        }

        self.position += self.velocity * dt;
    }

    /// Vertical integration and landing.
    ///
    /// Uses the midpoint of the old and new vertical velocity, which
    /// reproduces `y(t) = v0*t - g*t^2/2` exactly for constant gravity.
    /// On touchdown a buffered jump fires immediately.
    pub fn update_jump(&mut self, dt: f32) -> TickReport {
        let dt = self.clamp_delta_time(dt);
        let mut report = TickReport::default();

        if self.is_grounded || self.fly_mode {
            return report;
        }

        let prev_vertical_velocity = self.vertical_velocity;
        self.vertical_velocity -= self.config.gravity * dt;
        let avg_velocity = (prev_vertical_velocity + self.vertical_velocity) * 0.5;
        self.position.y += avg_velocity * dt;

        if self.position.y <= self.config.ground_level {
            if self.vertical_velocity <= 0.0 {
                let buffered = self.jump_buffer_time > 0.0;
                self.land();
                report.landed = true;
                log::debug!("Landed at {:?}", self.position);

                if buffered {
                    self.start_jump();
                    report.jumped = true;
                    log::debug!("Buffered jump fired on landing");
                }
            } else {
                self.position.y = self.config.ground_level;
            }
        }

        report
    }

    fn update_fly(&mut self, dt: f32, orientation: &Orientation) {
        let mut direction = self.wish_direction(orientation);
        // Vertical intent is applied after horizontal normalization
        match self.keys.up_axis() {
            1 => direction.y = 1.0,
            -1 => direction.y = -1.0,
            _ => {}
        }

        let speed = self.config.move_speed;
        self.wish_dir = Vec3::new(direction.x, 0.0, direction.z);
        self.velocity = self.wish_dir * speed;
        self.vertical_velocity = direction.y * speed;

        self.position += direction * speed * dt;
        self.position.y = self.position.y.max(self.config.ground_level);
    }

    /// Normalized sum of the held intents, projected onto the ground plane.
    pub fn wish_direction(&self, orientation: &Orientation) -> Vec3 {
        let forward = orientation.horizontal_forward();
        let right = orientation.horizontal_right();

        let direction = forward * self.keys.forward_axis() as f32
            + right * self.keys.right_axis() as f32;
        direction.normalize_or_zero()
    }

    /// Quake-style acceleration toward `wish_speed` along the wish direction.
    fn accelerate(&mut self, wish_speed: f32, accel: f32, dt: f32) {
        let current_speed = self.velocity.dot(self.wish_dir);
        let add_speed = (wish_speed - current_speed).min(accel * dt);
        if add_speed > 0.0 {
            self.velocity += self.wish_dir * add_speed;
        }
    }

    fn apply_ground_friction(&mut self, dt: f32) {
        self.velocity *= self.config.ground_friction.powf(dt * 60.0);
        if self.horizontal_speed() < self.config.stop_speed {
            self.velocity = Vec3::ZERO;
        }
    }

    fn clamp_horizontal_speed(&mut self, max_speed: f32) {
        self.velocity = self.velocity.clamp_length_max(max_speed);
    }
}
