//! Mouse Input Module
//!
//! Contains cursor position and button tracking for the editor.
//! Decoupled from winit to use generic types.

use glam::Vec2;

/// Mouse button identifiers, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    /// Additional mouse buttons (button 4, 5, etc.)
    Other(u16),
}

/// State of all mouse buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub left: bool,
    pub middle: bool,
    pub right: bool,
}

impl ButtonState {
    /// Update button state for a specific button.
    pub fn set(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Left => self.left = pressed,
            MouseButton::Middle => self.middle = pressed,
            MouseButton::Right => self.right = pressed,
            MouseButton::Other(_) => {}
        }
    }

    /// Check if a specific button is pressed.
    pub fn is_pressed(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.left,
            MouseButton::Middle => self.middle,
            MouseButton::Right => self.right,
            MouseButton::Other(_) => false,
        }
    }
}

/// Cursor tracking for the released (editor) cursor.
///
/// Stores the last cursor position in window pixels together with the
/// window size so the position can be turned into normalized device
/// coordinates for ray picking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseState {
    /// Cursor position in pixels, origin top-left. `None` until the first move.
    position_pixels: Option<Vec2>,
    /// Window size in pixels.
    window_size: (u32, u32),
    /// Current button states.
    pub buttons: ButtonState,
}

impl Default for MouseState {
    fn default() -> Self {
        Self {
            position_pixels: None,
            window_size: (1280, 720),
            buttons: ButtonState::default(),
        }
    }
}

impl MouseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the cursor position from raw pixel coordinates.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position_pixels = Some(Vec2::new(x, y));
    }

    /// Record a window resize. Zero sizes (minimized windows) are ignored.
    pub fn set_window_size(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.window_size = (width, height);
        }
    }

    pub fn window_size(&self) -> (u32, u32) {
        self.window_size
    }

    /// Width over height of the window.
    pub fn aspect_ratio(&self) -> f32 {
        self.window_size.0 as f32 / self.window_size.1 as f32
    }

    pub fn position_pixels(&self) -> Option<Vec2> {
        self.position_pixels
    }

    /// Cursor position in normalized device coordinates.
    ///
    /// X runs -1 (left) to 1 (right), Y runs -1 (bottom) to 1 (top).
    pub fn ndc(&self) -> Option<Vec2> {
        let pixels = self.position_pixels?;
        let (width, height) = self.window_size;
        Some(Vec2::new(
            (2.0 * pixels.x / width as f32) - 1.0,
            1.0 - (2.0 * pixels.y / height as f32),
        ))
    }

    /// Handle a mouse button press/release event.
    pub fn set_button(&mut self, button: MouseButton, pressed: bool) {
        self.buttons.set(button, pressed);
    }

    /// Forget the cursor position (cursor captured or left the window).
    pub fn clear_position(&mut self) {
        self.position_pixels = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_state_set() {
        let mut buttons = ButtonState::default();
        buttons.set(MouseButton::Left, true);
        assert!(buttons.left);
        assert!(buttons.is_pressed(MouseButton::Left));
        assert!(!buttons.is_pressed(MouseButton::Right));
        assert!(!buttons.is_pressed(MouseButton::Other(4)));
    }

    #[test]
    fn test_ndc_center_and_corners() {
        let mut mouse = MouseState::new();
        assert!(mouse.ndc().is_none());

        mouse.set_window_size(200, 100);
        mouse.set_position(100.0, 50.0);
        let center = mouse.ndc().unwrap();
        assert!(center.x.abs() < 0.001);
        assert!(center.y.abs() < 0.001);

        mouse.set_position(0.0, 0.0);
        let top_left = mouse.ndc().unwrap();
        assert!((top_left.x + 1.0).abs() < 0.001);
        assert!((top_left.y - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_zero_window_size_ignored() {
        let mut mouse = MouseState::new();
        mouse.set_window_size(800, 600);
        mouse.set_window_size(0, 0);
        assert_eq!(mouse.window_size(), (800, 600));
        assert!((mouse.aspect_ratio() - 800.0 / 600.0).abs() < 0.001);
    }

    #[test]
    fn test_clear_position() {
        let mut mouse = MouseState::new();
        mouse.set_position(10.0, 10.0);
        mouse.clear_position();
        assert!(mouse.position_pixels().is_none());
    }
}
