//! Keyboard Input Module
//!
//! Contains keyboard state tracking for movement keys and modifiers.
//! Decoupled from winit to use generic key codes.

/// Generic key codes, independent of windowing system.
///
/// Only the keys the sandbox binds are named. Everything else arrives as
/// [`KeyCode::Unknown`] and is ignored by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Space,
    ShiftLeft,
    ShiftRight,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Number keys (inventory slots)
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,

    // Control keys
    Escape,
    Tab,
    Delete,
    PageUp,
    PageDown,
    ControlLeft,
    ControlRight,

    // Letter keys (mode and editor bindings)
    G,
    M,
    P,
    X,

    // Punctuation and brackets
    BracketLeft,
    BracketRight,
    Comma,
    Period,

    /// Catch-all for unhandled keys
    Unknown,
}

impl KeyCode {
    /// Inventory slot for digit keys 1-6 (zero based).
    pub fn digit_slot(self) -> Option<usize> {
        match self {
            KeyCode::Digit1 => Some(0),
            KeyCode::Digit2 => Some(1),
            KeyCode::Digit3 => Some(2),
            KeyCode::Digit4 => Some(3),
            KeyCode::Digit5 => Some(4),
            KeyCode::Digit6 => Some(5),
            _ => None,
        }
    }
}

/// Tracks the current state of movement keys.
///
/// This struct maintains which movement keys are currently pressed,
/// allowing smooth continuous movement when keys are held down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    /// W key - move forward
    pub forward: bool,
    /// S key - move backward
    pub backward: bool,
    /// A key - move left (strafe)
    pub left: bool,
    /// D key - move right (strafe)
    pub right: bool,
    /// Space - fly up (fly mode only; on foot Space is a jump press)
    pub up: bool,
    /// Left Shift - fly down (fly mode only)
    pub down: bool,
    /// Left Shift - run
    pub sprint: bool,
}

impl MovementKeys {
    /// Create a new movement keys state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update movement state based on key press/release.
    ///
    /// Shift drives both `sprint` and `down`; the controller reads whichever
    /// one applies to its current mode. Space only drives `up`, jump presses
    /// are delivered separately.
    ///
    /// Returns `true` if the key was a movement key and was handled,
    /// `false` otherwise.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::W => {
                self.forward = pressed;
                true
            }
            KeyCode::S => {
                self.backward = pressed;
                true
            }
            KeyCode::A => {
                self.left = pressed;
                true
            }
            KeyCode::D => {
                self.right = pressed;
                true
            }
            KeyCode::Space => {
                self.up = pressed;
                true
            }
            KeyCode::ShiftLeft => {
                self.sprint = pressed;
                self.down = pressed;
                true
            }
            _ => false,
        }
    }

    /// Check if any horizontal movement key is currently pressed.
    pub fn any_horizontal(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Check if any movement key is currently pressed.
    pub fn any_pressed(&self) -> bool {
        self.any_horizontal() || self.up || self.down
    }

    /// Check if sprint key is currently pressed.
    pub fn is_sprinting(&self) -> bool {
        self.sprint
    }

    /// Reset all movement keys to released state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Get the forward/backward movement direction (-1, 0, or 1).
    pub fn forward_axis(&self) -> i32 {
        (self.forward as i32) - (self.backward as i32)
    }

    /// Get the left/right movement direction (-1, 0, or 1).
    pub fn right_axis(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }

    /// Get the up/down movement direction (-1, 0, or 1).
    pub fn up_axis(&self) -> i32 {
        (self.up as i32) - (self.down as i32)
    }
}

/// State of keyboard modifier keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierState {
    pub shift: bool,
    pub ctrl: bool,
}

impl ModifierState {
    /// Create a new empty modifier state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a modifier key. Returns `true` if `key` is a modifier.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::ShiftLeft | KeyCode::ShiftRight => {
                self.shift = pressed;
                true
            }
            KeyCode::ControlLeft | KeyCode::ControlRight => {
                self.ctrl = pressed;
                true
            }
            _ => false,
        }
    }

    /// Check if no modifiers are pressed.
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.ctrl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys_default() {
        let keys = MovementKeys::new();
        assert!(!keys.any_pressed());
        assert_eq!(keys.forward_axis(), 0);
        assert_eq!(keys.right_axis(), 0);
        assert_eq!(keys.up_axis(), 0);
    }

    #[test]
    fn test_movement_keys_forward() {
        let mut keys = MovementKeys::new();
        assert!(keys.handle_key(KeyCode::W, true));
        assert!(keys.forward);
        assert!(keys.any_horizontal());
        assert_eq!(keys.forward_axis(), 1);
    }

    #[test]
    fn test_movement_axes() {
        let mut keys = MovementKeys::new();
        keys.handle_key(KeyCode::W, true);
        keys.handle_key(KeyCode::S, true);
        // Both pressed cancels out
        assert_eq!(keys.forward_axis(), 0);

        keys.handle_key(KeyCode::D, true);
        assert_eq!(keys.right_axis(), 1);

        keys.handle_key(KeyCode::Space, true);
        assert_eq!(keys.up_axis(), 1);
    }

    #[test]
    fn test_shift_drives_sprint_and_down() {
        let mut keys = MovementKeys::new();
        assert!(!keys.is_sprinting());

        keys.handle_key(KeyCode::ShiftLeft, true);
        assert!(keys.is_sprinting());
        assert_eq!(keys.up_axis(), -1);

        keys.handle_key(KeyCode::ShiftLeft, false);
        assert!(!keys.is_sprinting());
        assert!(!keys.down);
    }

    #[test]
    fn test_non_movement_key() {
        let mut keys = MovementKeys::new();
        assert!(!keys.handle_key(KeyCode::Escape, true));
        assert!(!keys.handle_key(KeyCode::ShiftRight, true));
        assert!(!keys.any_pressed());
    }

    #[test]
    fn test_digit_slots() {
        assert_eq!(KeyCode::Digit1.digit_slot(), Some(0));
        assert_eq!(KeyCode::Digit6.digit_slot(), Some(5));
        assert_eq!(KeyCode::P.digit_slot(), None);
    }

    #[test]
    fn test_modifier_tracking() {
        let mut modifiers = ModifierState::new();
        assert!(modifiers.is_empty());
        assert!(modifiers.handle_key(KeyCode::ShiftRight, true));
        assert!(modifiers.shift);
        assert!(!modifiers.handle_key(KeyCode::G, true));
        modifiers.handle_key(KeyCode::ShiftRight, false);
        assert!(modifiers.is_empty());
    }
}
