//! FPS-style Mouse State Tracker
//!
//! Handles captured mouse input with delta accumulation for first-person look.
//! Raw mouse deltas accumulate between frames and are applied to an
//! [`Orientation`] once per tick.

use crate::camera::Orientation;

/// FPS-style mouse state tracker with delta accumulation.
///
/// - **Delta accumulation**: Raw mouse deltas accumulate until consumed
/// - **Cursor capture tracking**: Motion is only recorded while captured
/// - **Atomic consumption**: `consume_delta()` returns accumulated delta and resets it
///
/// # Example
///
/// ```rust,ignore
/// let mut mouse = FpsMouseState::new();
/// mouse.set_captured(true);
///
/// // In event loop: accumulate raw mouse motion
/// mouse.accumulate_delta(10.0, -5.0);
/// mouse.accumulate_delta(3.0, 2.0);
///
/// // Before the movement update
/// mouse.apply_to(&mut orientation);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FpsMouseState {
    /// Accumulated horizontal delta since last consume.
    delta_x: f32,
    /// Accumulated vertical delta since last consume.
    delta_y: f32,
    /// Whether the cursor is currently captured (hidden and confined).
    cursor_captured: bool,
}

impl FpsMouseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate raw mouse motion delta. Ignored while the cursor is free.
    #[inline]
    pub fn accumulate_delta(&mut self, dx: f32, dy: f32) {
        if self.cursor_captured && dx.is_finite() && dy.is_finite() {
            self.delta_x += dx;
            self.delta_y += dy;
        }
    }

    /// Consume the accumulated delta, returning it and resetting to zero.
    #[inline]
    pub fn consume_delta(&mut self) -> (f32, f32) {
        let delta = (self.delta_x, self.delta_y);
        self.delta_x = 0.0;
        self.delta_y = 0.0;
        delta
    }

    /// Consume the accumulated delta and rotate `orientation` by it.
    pub fn apply_to(&mut self, orientation: &mut Orientation) {
        let (dx, dy) = self.consume_delta();
        if dx != 0.0 || dy != 0.0 {
            orientation.apply_mouse_delta(dx, dy);
        }
    }

    /// Set whether the cursor is captured.
    #[inline]
    pub fn set_captured(&mut self, captured: bool) {
        self.cursor_captured = captured;
        // Stale motion from before a mode switch would snap the view
        if !captured {
            self.delta_x = 0.0;
            self.delta_y = 0.0;
        }
    }

    #[inline]
    pub fn is_captured(&self) -> bool {
        self.cursor_captured
    }

    /// Get the current accumulated delta without consuming it.
    #[inline]
    pub fn peek_delta(&self) -> (f32, f32) {
        (self.delta_x, self.delta_y)
    }
}
