//! Subscriber trait with one default-empty handler per event kind.

use crate::gamepad::AxisMotion;
use crate::normalize::MouseButton;

/// Receives broadcast input facts.
///
/// Every handler has a no-op default, so implementors override only the
/// event kinds they handle. Coordinates are canvas-internal pixels.
#[allow(unused_variables)]
pub trait InputSubscriber {
    fn on_key_down(&mut self, key: &str) {}
    fn on_key_up(&mut self, key: &str) {}

    fn on_mouse_move(&mut self, x: i32, y: i32) {}
    fn on_mouse_down(&mut self, x: i32, y: i32, button: MouseButton) {}
    fn on_mouse_up(&mut self, x: i32, y: i32, button: MouseButton) {}
    /// The host's native click gesture; never synthesized from down/up pairs.
    fn on_mouse_click(&mut self, x: i32, y: i32, button: MouseButton) {}
    fn on_mouse_enter(&mut self, x: i32, y: i32) {}

    fn on_touch_start(&mut self, x: i32, y: i32) {}
    fn on_touch_move(&mut self, x: i32, y: i32) {}
    fn on_touch_end(&mut self, x: i32, y: i32) {}

    fn on_gamepad_connected(&mut self) {}
    /// Edge-triggered: fires once per down-transition of `index`.
    fn on_gamepad_button(&mut self, index: usize) {}
    /// Fires at most once per poll tick, carrying all four tracked values.
    fn on_gamepad_axis(&mut self, motion: &AxisMotion) {}
}
