//! Canvas input abstraction.
//!
//! Normalizes keyboard, mouse, touch, and gamepad input into a single
//! publisher-subscriber event stream, with automatic conversion from viewport
//! pixels to canvas-internal pixels.
//!
//! The host environment is kept behind two injected collaborators: a
//! [`SurfaceGeometry`] supplying the canvas box and internal resolution, and
//! an optional [`GamepadSource`] supplying polled device state. Keyboard,
//! mouse, and touch events are pushed into [`CanvasInput`] as they arrive;
//! gamepad facts are synthesized by diffing consecutive polls on each
//! [`CanvasInput::update`] tick.
//!
//! ```no_run
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use canvas_input::{
//!     CanvasInput, CanvasRect, InputSettings, InputSubscriber, SurfaceGeometry,
//! };
//!
//! struct Surface;
//! impl SurfaceGeometry for Surface {
//!     fn bounding_rect(&self) -> CanvasRect {
//!         CanvasRect { left: 0.0, top: 0.0, width: 400.0, height: 300.0 }
//!     }
//!     fn internal_size(&self) -> (u32, u32) {
//!         (800, 600)
//!     }
//! }
//!
//! struct Player;
//! impl InputSubscriber for Player {
//!     fn on_key_down(&mut self, key: &str) {
//!         println!("pressed {key}");
//!     }
//! }
//!
//! let mut input = CanvasInput::new(Rc::new(Surface), InputSettings::default());
//! let _handle = input.subscribe(Rc::new(RefCell::new(Player)));
//! input.key_down("KeyW");
//! input.update(); // once per frame
//! ```

pub mod adapter;
pub mod config;
pub mod gamepad;
pub mod hub;
pub mod normalize;

pub use adapter::CanvasInput;
pub use config::{ConfigError, InputSettings};
pub use gamepad::{
    AxisMotion, GamepadDiffer, GamepadSnapshot, GamepadSource, GilrsSource, SourceError,
    StickVector,
};
pub use hub::{EventHub, InputEvent, InputSubscriber, SubscriberRef, Subscription};
pub use normalize::{
    map_to_canvas, CanvasRect, DefaultBehavior, KeyTable, MouseButton, SurfaceGeometry, TouchPoint,
};
