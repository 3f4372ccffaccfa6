//! Input Actions
//!
//! Defines input events, high-level actions, and the context used to map
//! one to the other.

use glam::Vec3;

use crate::input::{KeyCode, MouseButton};

/// Which half of the sandbox receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// First-person movement, cursor captured
    #[default]
    Play,
    /// Object editing, cursor free
    Editor,
}

impl InputMode {
    pub fn toggled(self) -> Self {
        match self {
            InputMode::Play => InputMode::Editor,
            InputMode::Editor => InputMode::Play,
        }
    }
}

/// Platform-agnostic input event, converted from the windowing system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key { key: KeyCode, pressed: bool },
    /// Raw relative mouse motion in pixels
    MouseMotion { dx: f32, dy: f32 },
    /// Cursor position in window pixels, origin top-left
    CursorMoved { x: f32, y: f32 },
    MouseButton { button: MouseButton, pressed: bool },
    Resized { width: u32, height: u32 },
    /// The window lost keyboard focus; releases are never delivered
    FocusLost,
}

/// Request from the router to the application shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Hide and confine the cursor (entering play mode)
    CaptureCursor,
    /// Show and free the cursor (entering editor mode)
    ReleaseCursor,
    /// Close the application
    Exit,
}

/// Horizontal movement keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementKey {
    Forward,
    Backward,
    Left,
    Right,
}

/// High-level input action
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    /// Movement key pressed/released
    Movement(MovementKey, bool),
    /// Jump key pressed on foot
    Jump,
    /// Fly-up key state (Space in fly mode, and every Space release)
    FlyUp(bool),
    /// Run key state; doubles as fly-down in fly mode
    Run(bool),
    ToggleFlyMode,
    ToggleEditor,
    Exit,

    // Editor
    /// Pick inventory slot (0-5)
    SelectInventoryItem(usize),
    /// Commit the pending item at the preview
    PlaceItem,
    CancelPlacement,
    DeleteSelected,
    /// Move the selection by one grid cell along this axis
    NudgeSelection(Vec3),
    /// Grow (`true`) or shrink the selection by one resize step
    ResizeSelection(bool),
    NextObject,
    PreviousObject,
    ToggleGridSnap,
}

/// Context for input handling (what modes are active)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputContext {
    pub mode: InputMode,
    pub fly_mode: bool,
    pub shift_held: bool,
}

impl InputContext {
    pub fn is_editor(&self) -> bool {
        self.mode == InputMode::Editor
    }
}
