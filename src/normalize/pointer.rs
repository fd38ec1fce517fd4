//! Pointer-facing types shared by mouse and touch delivery.

/// Mouse button, decoded from the host's numeric button index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Other(u8),
}

impl MouseButton {
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => MouseButton::Left,
            1 => MouseButton::Middle,
            2 => MouseButton::Right,
            other => MouseButton::Other(other),
        }
    }

    pub fn index(&self) -> u8 {
        match self {
            MouseButton::Left => 0,
            MouseButton::Middle => 1,
            MouseButton::Right => 2,
            MouseButton::Other(index) => *index,
        }
    }
}

/// One touch point as delivered by the host, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub viewport_x: f32,
    pub viewport_y: f32,
}

/// Whether the host should run its default action for the event it just
/// delivered. Context-menu and touch gestures are always suppressed so the
/// canvas never scrolls, zooms, or pops a menu under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultBehavior {
    Allow,
    Prevent,
}
