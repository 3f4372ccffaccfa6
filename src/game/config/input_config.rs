//! Input Configuration
//!
//! Conversion from winit's key and button codes to the engine's own. Keys
//! the sandbox does not bind all become [`KeyCode::Unknown`].

use winit::event::MouseButton as WinitMouseButton;
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

use crate::input::{KeyCode, MouseButton};

/// Map a winit physical key to an engine key code.
pub fn from_physical_key(key: PhysicalKey) -> KeyCode {
    match key {
        PhysicalKey::Code(code) => from_winit_key(code),
        PhysicalKey::Unidentified(_) => KeyCode::Unknown,
    }
}

/// Map a winit key code to an engine key code.
pub fn from_winit_key(key: WinitKeyCode) -> KeyCode {
    match key {
        WinitKeyCode::KeyW => KeyCode::W,
        WinitKeyCode::KeyA => KeyCode::A,
        WinitKeyCode::KeyS => KeyCode::S,
        WinitKeyCode::KeyD => KeyCode::D,
        WinitKeyCode::Space => KeyCode::Space,
        WinitKeyCode::ShiftLeft => KeyCode::ShiftLeft,
        WinitKeyCode::ShiftRight => KeyCode::ShiftRight,

        WinitKeyCode::ArrowUp => KeyCode::ArrowUp,
        WinitKeyCode::ArrowDown => KeyCode::ArrowDown,
        WinitKeyCode::ArrowLeft => KeyCode::ArrowLeft,
        WinitKeyCode::ArrowRight => KeyCode::ArrowRight,

        WinitKeyCode::Digit1 => KeyCode::Digit1,
        WinitKeyCode::Digit2 => KeyCode::Digit2,
        WinitKeyCode::Digit3 => KeyCode::Digit3,
        WinitKeyCode::Digit4 => KeyCode::Digit4,
        WinitKeyCode::Digit5 => KeyCode::Digit5,
        WinitKeyCode::Digit6 => KeyCode::Digit6,

        WinitKeyCode::Escape => KeyCode::Escape,
        WinitKeyCode::Tab => KeyCode::Tab,
        WinitKeyCode::Delete => KeyCode::Delete,
        WinitKeyCode::PageUp => KeyCode::PageUp,
        WinitKeyCode::PageDown => KeyCode::PageDown,
        WinitKeyCode::ControlLeft => KeyCode::ControlLeft,
        WinitKeyCode::ControlRight => KeyCode::ControlRight,

        WinitKeyCode::KeyG => KeyCode::G,
        WinitKeyCode::KeyM => KeyCode::M,
        WinitKeyCode::KeyP => KeyCode::P,
        WinitKeyCode::KeyX => KeyCode::X,

        WinitKeyCode::BracketLeft => KeyCode::BracketLeft,
        WinitKeyCode::BracketRight => KeyCode::BracketRight,
        WinitKeyCode::Comma => KeyCode::Comma,
        WinitKeyCode::Period => KeyCode::Period,

        _ => KeyCode::Unknown,
    }
}

/// Map a winit mouse button to an engine mouse button.
pub fn from_winit_button(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Back => MouseButton::Other(3),
        WinitMouseButton::Forward => MouseButton::Other(4),
        WinitMouseButton::Other(id) => MouseButton::Other(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::NativeKeyCode;

    #[test]
    fn test_bound_keys_convert() {
        assert_eq!(from_winit_key(WinitKeyCode::KeyW), KeyCode::W);
        assert_eq!(from_winit_key(WinitKeyCode::Digit6), KeyCode::Digit6);
        assert_eq!(from_winit_key(WinitKeyCode::BracketRight), KeyCode::BracketRight);
        assert_eq!(
            from_physical_key(PhysicalKey::Code(WinitKeyCode::ShiftLeft)),
            KeyCode::ShiftLeft
        );
    }

    #[test]
    fn test_unbound_keys_are_unknown() {
        assert_eq!(from_winit_key(WinitKeyCode::KeyQ), KeyCode::Unknown);
        assert_eq!(from_winit_key(WinitKeyCode::Digit7), KeyCode::Unknown);
        assert_eq!(
            from_physical_key(PhysicalKey::Unidentified(NativeKeyCode::Unidentified)),
            KeyCode::Unknown
        );
    }

    #[test]
    fn test_buttons_convert() {
        assert_eq!(from_winit_button(WinitMouseButton::Left), MouseButton::Left);
        assert_eq!(from_winit_button(WinitMouseButton::Other(7)), MouseButton::Other(7));
    }
}
