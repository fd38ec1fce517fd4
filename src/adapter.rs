//! The canvas input adapter: the single facade hosts drive.
//!
//! Raw keyboard/mouse/touch events are delivered synchronously by the host
//! through the methods below, normalized, and broadcast immediately. Gamepad
//! state is pulled instead: the caller ticks [`CanvasInput::update`] once per
//! frame and the diff pass synthesizes discrete facts from consecutive polls.
//! One logical thread of control; no locking, no queuing, no reentrancy
//! guard.

use std::rc::Rc;

use tracing::{debug, trace};

use crate::config::InputSettings;
use crate::gamepad::{GamepadDiffer, GamepadSource};
use crate::hub::{EventHub, InputEvent, SubscriberRef, Subscription};
use crate::normalize::{
    map_to_canvas, DefaultBehavior, KeyTable, MouseButton, SurfaceGeometry, TouchPoint,
};

/// Normalizes host input into a single subscriber event stream.
pub struct CanvasInput {
    hub: EventHub,
    keys: KeyTable,
    differ: GamepadDiffer,
    geometry: Rc<dyn SurfaceGeometry>,
    gamepad: Option<Box<dyn GamepadSource>>,
}

impl CanvasInput {
    pub fn new(geometry: Rc<dyn SurfaceGeometry>, settings: InputSettings) -> Self {
        debug!("Creating canvas input adapter with settings: {:?}", settings);
        Self {
            hub: EventHub::new(),
            keys: KeyTable::new(),
            differ: GamepadDiffer::new(settings.dead_zone, settings.axis_threshold),
            geometry,
            gamepad: None,
        }
    }

    /// Attaches a gamepad backend. Without one, `update` is a no-op.
    pub fn with_gamepad(mut self, source: Box<dyn GamepadSource>) -> Self {
        self.gamepad = Some(source);
        self
    }

    // --- subscriptions -----------------------------------------------------

    pub fn subscribe(&self, subscriber: SubscriberRef) -> Subscription {
        self.hub.subscribe(subscriber)
    }

    pub fn unsubscribe(&self, subscriber: &SubscriberRef) {
        self.hub.unsubscribe(subscriber)
    }

    pub fn subscriber_count(&self) -> usize {
        self.hub.len()
    }

    // --- keyboard ----------------------------------------------------------

    /// Key-down delivery. Repeated downs for an already-held key (OS
    /// key-repeat) still broadcast.
    pub fn key_down(&mut self, key: &str) {
        self.keys.press(key);
        self.hub.broadcast(&InputEvent::KeyDown {
            key: key.to_owned(),
        });
    }

    pub fn key_up(&mut self, key: &str) {
        self.keys.release(key);
        self.hub.broadcast(&InputEvent::KeyUp {
            key: key.to_owned(),
        });
    }

    pub fn is_key_down(&self, key: &str) -> bool {
        self.keys.is_down(key)
    }

    // --- mouse -------------------------------------------------------------

    pub fn mouse_move(&mut self, viewport_x: f32, viewport_y: f32) {
        let (x, y) = self.map(viewport_x, viewport_y);
        self.hub.broadcast(&InputEvent::MouseMove { x, y });
    }

    pub fn mouse_down(&mut self, viewport_x: f32, viewport_y: f32, button: MouseButton) {
        let (x, y) = self.map(viewport_x, viewport_y);
        self.hub.broadcast(&InputEvent::MouseDown { x, y, button });
    }

    pub fn mouse_up(&mut self, viewport_x: f32, viewport_y: f32, button: MouseButton) {
        let (x, y) = self.map(viewport_x, viewport_y);
        self.hub.broadcast(&InputEvent::MouseUp { x, y, button });
    }

    /// The host's native click gesture, broadcast as its own fact.
    pub fn mouse_click(&mut self, viewport_x: f32, viewport_y: f32, button: MouseButton) {
        let (x, y) = self.map(viewport_x, viewport_y);
        self.hub.broadcast(&InputEvent::MouseClick { x, y, button });
    }

    pub fn mouse_enter(&mut self, viewport_x: f32, viewport_y: f32) {
        let (x, y) = self.map(viewport_x, viewport_y);
        self.hub.broadcast(&InputEvent::MouseEnter { x, y });
    }

    /// The context menu never opens over the canvas.
    pub fn context_menu(&mut self) -> DefaultBehavior {
        DefaultBehavior::Prevent
    }

    // --- touch -------------------------------------------------------------

    /// Touch-start delivery with the active touch list.
    pub fn touch_start(&mut self, touches: &[TouchPoint]) -> DefaultBehavior {
        self.touch_phase(touches, |x, y| InputEvent::TouchStart { x, y })
    }

    /// Touch-move delivery with the active touch list.
    pub fn touch_move(&mut self, touches: &[TouchPoint]) -> DefaultBehavior {
        self.touch_phase(touches, |x, y| InputEvent::TouchMove { x, y })
    }

    /// Touch-end delivery with the changed touch list.
    pub fn touch_end(&mut self, touches: &[TouchPoint]) -> DefaultBehavior {
        self.touch_phase(touches, |x, y| InputEvent::TouchEnd { x, y })
    }

    /// Only the first touch point is tracked; an empty list drops the event
    /// silently. Default scrolling/zooming is always suppressed.
    fn touch_phase(
        &mut self,
        touches: &[TouchPoint],
        make: impl Fn(i32, i32) -> InputEvent,
    ) -> DefaultBehavior {
        match touches.first() {
            Some(point) => {
                let (x, y) = self.map(point.viewport_x, point.viewport_y);
                self.hub.broadcast(&make(x, y));
            }
            None => trace!("Touch event without touch points dropped"),
        }
        DefaultBehavior::Prevent
    }

    // --- gamepad -----------------------------------------------------------

    /// One gamepad tick, expected once per frame.
    ///
    /// Drains the backend's connect signal, polls the first connected
    /// device, and broadcasts the diff pass results: the axis fact first,
    /// then one fact per fresh button press. No backend or an empty poll is
    /// a safe no-op. Calling this more or less often than once per frame is
    /// the caller's business; there is no internal rate limiting.
    pub fn update(&mut self) {
        let Some(source) = self.gamepad.as_mut() else {
            return;
        };

        if source.take_connected() {
            self.hub.broadcast(&InputEvent::GamepadConnected);
        }

        let Some(snapshot) = source.poll() else {
            return;
        };

        let outcome = self.differ.diff(&snapshot);
        if let Some(motion) = outcome.axis {
            self.hub.broadcast(&InputEvent::GamepadAxis { motion });
        }
        for index in outcome.pressed {
            self.hub.broadcast(&InputEvent::GamepadButton { index });
        }
    }

    /// Push-style connect path for hosts that deliver the one-shot signal
    /// themselves, independent of the polling tick.
    pub fn notify_gamepad_connected(&mut self) {
        self.hub.broadcast(&InputEvent::GamepadConnected);
    }

    // --- lifecycle ---------------------------------------------------------

    /// Drops all subscribers and transient input state. Idempotent; a
    /// subsequent `update` diffs against the never-polled baseline.
    pub fn teardown(&mut self) {
        self.hub.clear();
        self.keys.clear();
        self.differ.reset();
        debug!("Canvas input adapter torn down");
    }

    fn map(&self, viewport_x: f32, viewport_y: f32) -> (i32, i32) {
        let rect = self.geometry.bounding_rect();
        let (width, height) = self.geometry.internal_size();
        map_to_canvas(viewport_x, viewport_y, &rect, width, height)
    }
}
