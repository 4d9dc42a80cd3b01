//! Mouse event types.

use crate::input::KeyModifiers;

/// Mouse button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button.
    Left,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Right,
    /// One wheel step up.
    WheelUp,
    /// One wheel step down.
    WheelDown,
}

/// Kind of mouse event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseEventKind {
    /// Button pressed (including wheel steps).
    Press,
    /// Pointer moved, with or without a button held.
    Move,
    /// Button released.
    Release,
}

/// A mouse event in absolute screen cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub button: MouseButton,
    /// X position (column).
    pub x: i32,
    /// Y position (row).
    pub y: i32,
    /// Event time in milliseconds; only differences matter.
    pub time: u32,
    pub modifiers: KeyModifiers,
}

impl MouseEvent {
    #[must_use]
    pub fn new(kind: MouseEventKind, button: MouseButton, x: i32, y: i32) -> Self {
        Self {
            kind,
            button,
            x,
            y,
            time: 0,
            modifiers: KeyModifiers::empty(),
        }
    }

    /// Create a press event.
    #[must_use]
    pub fn press(button: MouseButton, x: i32, y: i32) -> Self {
        Self::new(MouseEventKind::Press, button, x, y)
    }

    /// Create a move event with the left button held.
    #[must_use]
    pub fn drag(x: i32, y: i32) -> Self {
        Self::new(MouseEventKind::Move, MouseButton::Left, x, y)
    }

    /// Create a release event.
    #[must_use]
    pub fn release(button: MouseButton, x: i32, y: i32) -> Self {
        Self::new(MouseEventKind::Release, button, x, y)
    }

    #[must_use]
    pub fn at_time(mut self, time: u32) -> Self {
        self.time = time;
        self
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Check if this is a wheel step.
    #[must_use]
    pub fn is_wheel(&self) -> bool {
        matches!(self.button, MouseButton::WheelUp | MouseButton::WheelDown)
    }
}
