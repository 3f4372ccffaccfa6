//! Keyboard Mapping
//!
//! Maps keyboard input to sandbox actions.

use glam::Vec3;

use super::actions::{InputAction, InputContext, InputMode, MovementKey};
use crate::input::KeyCode;

/// Map a keyboard key event to an InputAction
///
/// # Arguments
/// * `key` - The key code that was pressed/released
/// * `pressed` - Whether the key was pressed (true) or released (false)
/// * `context` - Current input context (mode, fly mode, shift)
///
/// # Returns
/// Optional InputAction if the key maps to an action
pub fn map_key_to_action(
    key: KeyCode,
    pressed: bool,
    context: &InputContext,
) -> Option<InputAction> {
    // Bindings shared by both modes
    match key {
        KeyCode::Escape if pressed => return Some(InputAction::Exit),
        KeyCode::Tab | KeyCode::M if pressed => return Some(InputAction::ToggleEditor),
        KeyCode::G if pressed && context.shift_held => return Some(InputAction::ToggleFlyMode),
        _ => {}
    }

    match context.mode {
        InputMode::Play => map_play_key(key, pressed, context),
        InputMode::Editor => map_editor_key(key, pressed),
    }
}

fn map_play_key(key: KeyCode, pressed: bool, context: &InputContext) -> Option<InputAction> {
    match key {
        // Movement
        KeyCode::W => Some(InputAction::Movement(MovementKey::Forward, pressed)),
        KeyCode::S => Some(InputAction::Movement(MovementKey::Backward, pressed)),
        KeyCode::A => Some(InputAction::Movement(MovementKey::Left, pressed)),
        KeyCode::D => Some(InputAction::Movement(MovementKey::Right, pressed)),

        KeyCode::Space => {
            if pressed && !context.fly_mode {
                Some(InputAction::Jump)
            } else {
                Some(InputAction::FlyUp(pressed))
            }
        }

        KeyCode::ShiftLeft => Some(InputAction::Run(pressed)),

        _ => None,
    }
}

fn map_editor_key(key: KeyCode, pressed: bool) -> Option<InputAction> {
    if !pressed {
        return None;
    }

    if let Some(slot) = key.digit_slot() {
        return Some(InputAction::SelectInventoryItem(slot));
    }

    match key {
        KeyCode::P => Some(InputAction::PlaceItem),
        KeyCode::X => Some(InputAction::CancelPlacement),
        KeyCode::Delete => Some(InputAction::DeleteSelected),
        KeyCode::G => Some(InputAction::ToggleGridSnap),

        // Nudge the selection one cell
        KeyCode::ArrowUp => Some(InputAction::NudgeSelection(Vec3::NEG_Z)),
        KeyCode::ArrowDown => Some(InputAction::NudgeSelection(Vec3::Z)),
        KeyCode::ArrowLeft => Some(InputAction::NudgeSelection(Vec3::NEG_X)),
        KeyCode::ArrowRight => Some(InputAction::NudgeSelection(Vec3::X)),
        KeyCode::PageUp => Some(InputAction::NudgeSelection(Vec3::Y)),
        KeyCode::PageDown => Some(InputAction::NudgeSelection(Vec3::NEG_Y)),

        KeyCode::BracketLeft => Some(InputAction::ResizeSelection(false)),
        KeyCode::BracketRight => Some(InputAction::ResizeSelection(true)),

        KeyCode::Comma => Some(InputAction::PreviousObject),
        KeyCode::Period => Some(InputAction::NextObject),

        _ => None,
    }
}
