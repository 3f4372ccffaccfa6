//! Input Router
//!
//! Turns platform-agnostic input events into state changes. Owns the
//! current mode, the held modifiers and the cursor position; everything
//! else lives in [`SandboxState`].

use super::actions::{AppCommand, InputAction, InputContext, InputEvent, InputMode, MovementKey};
use super::keyboard::map_key_to_action;
use crate::camera::Ray;
use crate::game::state::SandboxState;
use crate::input::{KeyCode, ModifierState, MouseButton, MouseState};

/// Dispatches input events to the player or the editor.
#[derive(Debug, Clone, Default)]
pub struct InputRouter {
    mode: InputMode,
    modifiers: ModifierState,
    mouse: MouseState,
}

impl InputRouter {
    /// Router in play mode with no keys held.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn mouse(&self) -> &MouseState {
        &self.mouse
    }

    pub fn modifiers(&self) -> ModifierState {
        self.modifiers
    }

    /// Context used for key mapping.
    pub fn context(&self, state: &SandboxState) -> InputContext {
        InputContext {
            mode: self.mode,
            fly_mode: state.controller().is_fly_mode(),
            shift_held: self.modifiers.shift,
        }
    }

    /// Handle one event. Returns a command when the shell has to act.
    pub fn handle_event(&mut self, state: &mut SandboxState, event: InputEvent) -> Option<AppCommand> {
        match event {
            InputEvent::Key { key, pressed } => self.handle_key(state, key, pressed),
            InputEvent::MouseMotion { dx, dy } => {
                // Ignored unless captured, so editor-mode motion never turns the view
                state.look_mut().accumulate_delta(dx, dy);
                None
            }
            InputEvent::CursorMoved { x, y } => {
                self.mouse.set_position(x, y);
                if self.mode == InputMode::Editor {
                    if let Some(ray) = self.cursor_ray(state) {
                        state.preview_at_ray(&ray);
                    }
                }
                None
            }
            InputEvent::MouseButton { button, pressed } => {
                self.mouse.set_button(button, pressed);
                if self.mode == InputMode::Editor && button == MouseButton::Left && pressed {
                    if let Some(ray) = self.cursor_ray(state) {
                        state.editor_mut().select_at_ray(&ray);
                    }
                }
                None
            }
            InputEvent::Resized { width, height } => {
                self.mouse.set_window_size(width, height);
                None
            }
            InputEvent::FocusLost => {
                self.modifiers = ModifierState::default();
                state.controller_mut().keys_mut().reset();
                None
            }
        }
    }

    /// Switch modes. Held movement keys are released and the preview is
    /// dropped when leaving the editor.
    pub fn set_mode(&mut self, state: &mut SandboxState, mode: InputMode) -> Option<AppCommand> {
        if self.mode == mode {
            return None;
        }
        self.mode = mode;
        state.controller_mut().keys_mut().reset();

        match mode {
            InputMode::Play => {
                state.editor_mut().cancel_placement();
                state.set_cursor_captured(true);
                log::info!("Play mode");
                Some(AppCommand::CaptureCursor)
            }
            InputMode::Editor => {
                state.set_cursor_captured(false);
                log::info!("Editor mode");
                Some(AppCommand::ReleaseCursor)
            }
        }
    }

    fn handle_key(&mut self, state: &mut SandboxState, key: KeyCode, pressed: bool) -> Option<AppCommand> {
        self.modifiers.handle_key(key, pressed);
        let context = self.context(state);
        let action = map_key_to_action(key, pressed, &context)?;
        self.apply_action(state, action)
    }

    fn apply_action(&mut self, state: &mut SandboxState, action: InputAction) -> Option<AppCommand> {
        match action {
            InputAction::Movement(direction, pressed) => {
                let keys = state.controller_mut().keys_mut();
                match direction {
                    MovementKey::Forward => keys.forward = pressed,
                    MovementKey::Backward => keys.backward = pressed,
                    MovementKey::Left => keys.left = pressed,
                    MovementKey::Right => keys.right = pressed,
                }
            }
            InputAction::Jump => {
                state.press_jump();
            }
            InputAction::FlyUp(pressed) => state.controller_mut().keys_mut().up = pressed,
            InputAction::Run(pressed) => {
                state.controller_mut().keys_mut().handle_key(KeyCode::ShiftLeft, pressed);
            }
            InputAction::ToggleFlyMode => {
                state.controller_mut().toggle_fly_mode();
            }
            InputAction::ToggleEditor => return self.set_mode(state, self.mode.toggled()),
            InputAction::Exit => return Some(AppCommand::Exit),

            InputAction::SelectInventoryItem(slot) => {
                if state.editor_mut().select_inventory_item(slot) {
                    if let Some(ray) = self.cursor_ray(state) {
                        state.preview_at_ray(&ray);
                    }
                }
            }
            InputAction::PlaceItem => {
                state.editor_mut().place_at_preview();
            }
            InputAction::CancelPlacement => {
                state.editor_mut().cancel_placement();
            }
            InputAction::DeleteSelected => {
                state.editor_mut().remove_selected_object();
            }
            InputAction::NudgeSelection(direction) => {
                state.nudge_selection(direction);
            }
            InputAction::ResizeSelection(grow) => {
                state.resize_selection(grow);
            }
            InputAction::NextObject => {
                state.editor_mut().select_next();
            }
            InputAction::PreviousObject => {
                state.editor_mut().select_previous();
            }
            InputAction::ToggleGridSnap => {
                state.toggle_grid_snap();
            }
        }
        None
    }

    /// World ray under the cursor, if the cursor is inside the window.
    fn cursor_ray(&self, state: &SandboxState) -> Option<Ray> {
        let ndc = self.mouse.ndc()?;
        Some(state.screen_ray(ndc, self.mouse.aspect_ratio()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn key(router: &mut InputRouter, state: &mut SandboxState, key: KeyCode, pressed: bool) -> Option<AppCommand> {
        router.handle_event(state, InputEvent::Key { key, pressed })
    }

    fn tap(router: &mut InputRouter, state: &mut SandboxState, code: KeyCode) -> Option<AppCommand> {
        let command = key(router, state, code, true);
        key(router, state, code, false);
        command
    }

    #[test]
    fn test_movement_keys_reach_controller() {
        let mut state = SandboxState::default();
        let mut router = InputRouter::new();

        key(&mut router, &mut state, KeyCode::W, true);
        key(&mut router, &mut state, KeyCode::ShiftLeft, true);
        assert!(state.controller().keys().forward);
        assert!(state.controller().keys().sprint);
        assert!(router.modifiers().shift);

        key(&mut router, &mut state, KeyCode::W, false);
        assert!(!state.controller().keys().forward);
    }

    #[test]
    fn test_space_jumps() {
        let mut state = SandboxState::default();
        let mut router = InputRouter::new();

        key(&mut router, &mut state, KeyCode::Space, true);
        assert!(state.controller().is_jumping());
        assert!(!state.controller().keys().up);
    }

    #[test]
    fn test_shift_g_toggles_fly_mode() {
        let mut state = SandboxState::default();
        let mut router = InputRouter::new();

        tap(&mut router, &mut state, KeyCode::G);
        assert!(!state.controller().is_fly_mode());

        key(&mut router, &mut state, KeyCode::ShiftLeft, true);
        tap(&mut router, &mut state, KeyCode::G);
        assert!(state.controller().is_fly_mode());
    }

    #[test]
    fn test_tab_switches_modes_and_releases_keys() {
        let mut state = SandboxState::default();
        let mut router = InputRouter::new();

        key(&mut router, &mut state, KeyCode::W, true);
        let command = tap(&mut router, &mut state, KeyCode::Tab);
        assert_eq!(command, Some(AppCommand::ReleaseCursor));
        assert_eq!(router.mode(), InputMode::Editor);
        assert!(!state.controller().keys().any_pressed());
        assert!(!state.look().is_captured());

        // WASD is dead in the editor
        key(&mut router, &mut state, KeyCode::W, true);
        assert!(!state.controller().keys().forward);

        let command = tap(&mut router, &mut state, KeyCode::M);
        assert_eq!(command, Some(AppCommand::CaptureCursor));
        assert_eq!(router.mode(), InputMode::Play);
    }

    #[test]
    fn test_escape_exits() {
        let mut state = SandboxState::default();
        let mut router = InputRouter::new();
        assert_eq!(tap(&mut router, &mut state, KeyCode::Escape), Some(AppCommand::Exit));
    }

    #[test]
    fn test_mouse_motion_only_turns_view_in_play_mode() {
        let mut state = SandboxState::default();
        let mut router = InputRouter::new();

        router.handle_event(&mut state, InputEvent::MouseMotion { dx: 100.0, dy: 0.0 });
        assert_eq!(state.look().peek_delta(), (100.0, 0.0));

        tap(&mut router, &mut state, KeyCode::Tab);
        router.handle_event(&mut state, InputEvent::MouseMotion { dx: 100.0, dy: 0.0 });
        assert_eq!(state.look().peek_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_editor_place_and_delete() {
        let mut state = SandboxState::default();
        let mut router = InputRouter::new();
        tap(&mut router, &mut state, KeyCode::Tab);

        tap(&mut router, &mut state, KeyCode::Digit3);
        assert!(state.editor().is_placing());
        tap(&mut router, &mut state, KeyCode::P);
        assert_eq!(state.editor().len(), 1);
        assert_eq!(state.editor().selected_index(), Some(0));

        tap(&mut router, &mut state, KeyCode::ArrowRight);
        let position = state.editor().selected_object().map(|object| object.position);
        assert_eq!(position, Some(Vec3::X));

        tap(&mut router, &mut state, KeyCode::Delete);
        assert!(state.editor().is_empty());
    }

    #[test]
    fn test_leaving_editor_cancels_placement() {
        let mut state = SandboxState::default();
        let mut router = InputRouter::new();
        tap(&mut router, &mut state, KeyCode::Tab);
        tap(&mut router, &mut state, KeyCode::Digit1);
        tap(&mut router, &mut state, KeyCode::Tab);
        assert!(!state.editor().is_placing());
    }

    #[test]
    fn test_focus_lost_releases_everything() {
        let mut state = SandboxState::default();
        let mut router = InputRouter::new();
        key(&mut router, &mut state, KeyCode::W, true);
        key(&mut router, &mut state, KeyCode::ShiftLeft, true);

        router.handle_event(&mut state, InputEvent::FocusLost);
        assert!(!state.controller().keys().any_pressed());
        assert!(router.modifiers().is_empty());
    }
}
