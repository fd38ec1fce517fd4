//! Input normalization: viewport-to-canvas coordinate mapping and the small
//! pieces of per-device state the adapter keeps between host events.
//!
//! Everything here is host-agnostic. The host environment is represented by
//! the [`SurfaceGeometry`] collaborator, so the mapping logic can be exercised
//! with synthetic geometry in tests.

pub mod coords;
pub mod keyboard;
pub mod pointer;

pub use coords::{map_to_canvas, CanvasRect, SurfaceGeometry};
pub use keyboard::KeyTable;
pub use pointer::{DefaultBehavior, MouseButton, TouchPoint};
