//! Dispatch hub: ordered subscriber list plus broadcast fan-out.
//!
//! Normalized input facts are modeled as [`InputEvent`] variants and delivered
//! through [`InputSubscriber`], a trait with one default-empty method per
//! event kind. A subscriber overrides only the handlers it cares about; there
//! is no runtime probing for handler presence and skipping an event costs an
//! empty default call.

pub mod dispatch;
pub mod subscriber;

pub use dispatch::{EventHub, SubscriberRef, Subscription};
pub use subscriber::InputSubscriber;

use crate::gamepad::AxisMotion;
use crate::normalize::MouseButton;

/// One normalized input fact.
///
/// Coordinates are canvas-internal pixels, already scale-corrected and
/// clamped. Gamepad facts come out of the per-tick diff pass.
#[derive(Debug, Clone)]
pub enum InputEvent {
    KeyDown { key: String },
    KeyUp { key: String },
    MouseMove { x: i32, y: i32 },
    MouseDown { x: i32, y: i32, button: MouseButton },
    MouseUp { x: i32, y: i32, button: MouseButton },
    MouseClick { x: i32, y: i32, button: MouseButton },
    MouseEnter { x: i32, y: i32 },
    TouchStart { x: i32, y: i32 },
    TouchMove { x: i32, y: i32 },
    TouchEnd { x: i32, y: i32 },
    GamepadConnected,
    GamepadButton { index: usize },
    GamepadAxis { motion: AxisMotion },
}

impl InputEvent {
    /// Event name for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            InputEvent::KeyDown { .. } => "key_down",
            InputEvent::KeyUp { .. } => "key_up",
            InputEvent::MouseMove { .. } => "mouse_move",
            InputEvent::MouseDown { .. } => "mouse_down",
            InputEvent::MouseUp { .. } => "mouse_up",
            InputEvent::MouseClick { .. } => "mouse_click",
            InputEvent::MouseEnter { .. } => "mouse_enter",
            InputEvent::TouchStart { .. } => "touch_start",
            InputEvent::TouchMove { .. } => "touch_move",
            InputEvent::TouchEnd { .. } => "touch_end",
            InputEvent::GamepadConnected => "gamepad_connected",
            InputEvent::GamepadButton { .. } => "gamepad_button",
            InputEvent::GamepadAxis { .. } => "gamepad_axis",
        }
    }

    /// Invokes the subscriber method matching this event.
    pub(crate) fn deliver(&self, subscriber: &mut dyn InputSubscriber) {
        match self {
            InputEvent::KeyDown { key } => subscriber.on_key_down(key),
            InputEvent::KeyUp { key } => subscriber.on_key_up(key),
            InputEvent::MouseMove { x, y } => subscriber.on_mouse_move(*x, *y),
            InputEvent::MouseDown { x, y, button } => subscriber.on_mouse_down(*x, *y, *button),
            InputEvent::MouseUp { x, y, button } => subscriber.on_mouse_up(*x, *y, *button),
            InputEvent::MouseClick { x, y, button } => subscriber.on_mouse_click(*x, *y, *button),
            InputEvent::MouseEnter { x, y } => subscriber.on_mouse_enter(*x, *y),
            InputEvent::TouchStart { x, y } => subscriber.on_touch_start(*x, *y),
            InputEvent::TouchMove { x, y } => subscriber.on_touch_move(*x, *y),
            InputEvent::TouchEnd { x, y } => subscriber.on_touch_end(*x, *y),
            InputEvent::GamepadConnected => subscriber.on_gamepad_connected(),
            InputEvent::GamepadButton { index } => subscriber.on_gamepad_button(*index),
            InputEvent::GamepadAxis { motion } => subscriber.on_gamepad_axis(motion),
        }
    }
}
