//! Sandbox State
//!
//! Everything one frame of the sandbox reads and writes: the player, the
//! view, the look accumulator and the object editor.

use glam::{Vec2, Vec3};

use super::editor::WorldEditor;
use crate::camera::{raycast_to_plane, Orientation, Ray};
use crate::config::{CameraConfig, EditorConfig, SandboxConfig};
use crate::input::FpsMouseState;
use crate::player::{JumpOutcome, MovementController, TickReport};

/// Complete simulation state, independent of any window.
#[derive(Debug, Clone)]
pub struct SandboxState {
    controller: MovementController,
    orientation: Orientation,
    look: FpsMouseState,
    editor: WorldEditor,
    config: SandboxConfig,
}

impl Default for SandboxState {
    fn default() -> Self {
        Self::new(SandboxConfig::default())
    }
}

impl SandboxState {
    /// Spawn the player per `config`, in play mode with the cursor captured.
    pub fn new(config: SandboxConfig) -> Self {
        let controller =
            MovementController::with_config(config.movement).with_position(config.camera.spawn_position);
        let mut look = FpsMouseState::new();
        look.set_captured(true);

        Self {
            controller,
            orientation: config.camera.orientation(),
            look,
            editor: WorldEditor::new(),
            config,
        }
    }

    /// Advance one frame: apply accumulated look, then move the player.
    pub fn tick(&mut self, dt: f32) -> TickReport {
        self.look.apply_to(&mut self.orientation);
        self.controller.update(dt, &self.orientation)
    }

    /// Deliver a jump press with the current view.
    pub fn press_jump(&mut self) -> JumpOutcome {
        self.controller.press_jump(&self.orientation)
    }

    /// Camera position: the player's feet raised by the eye height.
    pub fn eye_position(&self) -> Vec3 {
        self.controller.position() + Vec3::Y * self.config.camera.eye_height
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn controller(&self) -> &MovementController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut MovementController {
        &mut self.controller
    }

    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    pub fn orientation_mut(&mut self) -> &mut Orientation {
        &mut self.orientation
    }

    pub fn look(&self) -> &FpsMouseState {
        &self.look
    }

    pub fn look_mut(&mut self) -> &mut FpsMouseState {
        &mut self.look
    }

    pub fn set_cursor_captured(&mut self, captured: bool) {
        self.look.set_captured(captured);
    }

    pub fn editor(&self) -> &WorldEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut WorldEditor {
        &mut self.editor
    }

    pub fn config(&self) -> &SandboxConfig {
        &self.config
    }

    pub fn camera_config(&self) -> &CameraConfig {
        &self.config.camera
    }

    pub fn editor_config(&self) -> &EditorConfig {
        &self.config.editor
    }

    // ========================================================================
    // Editor helpers
    // ========================================================================

    /// World ray through a point on screen (NDC, y up).
    pub fn screen_ray(&self, ndc: Vec2, aspect_ratio: f32) -> Ray {
        self.config
            .camera
            .raycast(aspect_ratio)
            .screen_ray(self.eye_position(), &self.orientation, ndc)
    }

    /// Move the placement preview to where `ray` meets the ground.
    ///
    /// The hit point is snapped to the grid and clamped to the map, and the
    /// preview box is lifted so its base rests on the ground. Returns `false`
    /// when nothing is being placed or the ray misses the ground.
    pub fn preview_at_ray(&mut self, ray: &Ray) -> bool {
        let Some(preview) = self.editor.preview() else {
            return false;
        };
        let ground = self.controller.ground_level();
        let Some(hit) = raycast_to_plane(ray, ground) else {
            return false;
        };

        let mut position = self.config.editor.grid.snap_and_clamp(hit);
        position.y = ground + preview.size.y * 0.5;
        self.editor.update_preview(position)
    }

    /// Move the selected object by whole grid cells along `direction`.
    pub fn nudge_selection(&mut self, direction: Vec3) -> bool {
        let step = self.config.editor.grid.cell_size;
        self.editor.move_selected_object(direction * step)
    }

    /// Grow or shrink the selected object by one resize step.
    pub fn resize_selection(&mut self, grow: bool) -> bool {
        let step = self.config.editor.resize_step;
        let factor = if grow { 1.0 + step } else { 1.0 - step };
        self.editor.scale_selected_object(factor)
    }

    /// Toggle grid snapping, returning the new state.
    pub fn toggle_grid_snap(&mut self) -> bool {
        let enabled = self.config.editor.grid.toggle_snap();
        log::info!("Grid snap: {}", if enabled { "ON" } else { "OFF" });
        enabled
    }
}
