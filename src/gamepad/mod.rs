//! Gamepad polling and frame-to-frame differencing.
//!
//! Gamepads are not event-driven: the host exposes a polled state array that
//! the caller samples once per frame via the adapter's `update()` tick. This
//! module turns consecutive snapshots into discrete facts - edge-triggered
//! button presses and threshold-gated axis motion - and provides a production
//! backend over gilrs plus the [`GamepadSource`] seam tests mock out.

pub mod differ;
pub mod gilrs_source;

pub use differ::{DiffOutcome, GamepadDiffer};
pub use gilrs_source::{GilrsSource, SourceError};

/// Dead zone reported to subscribers alongside axis facts. Informational
/// only: raw axis values always pass through and consumers decide whether to
/// honor it.
pub const DEFAULT_DEAD_ZONE: f32 = 0.3;

/// Minimum absolute per-axis delta between polls for stick motion to count
/// as significant.
pub const DEFAULT_AXIS_THRESHOLD: f32 = 0.1;

/// Number of tracked axes: left-stick x/y, right-stick x/y.
pub const TRACKED_AXES: usize = 4;

/// One polled device state.
///
/// `buttons` holds pressed flags in standard-mapping order; `axes` holds
/// values in `[-1, 1]` with indices 0..4 = left-stick x/y, right-stick x/y.
/// Axes the device does not report read as 0.0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GamepadSnapshot {
    pub buttons: Vec<bool>,
    pub axes: Vec<f32>,
}

/// One stick's displacement.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StickVector {
    pub x: f32,
    pub y: f32,
}

/// Axis motion fact: all four tracked values at the poll that crossed the
/// significance threshold, plus the informational dead zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisMotion {
    pub left: StickVector,
    pub right: StickVector,
    pub dead_zone: f32,
}

/// Host gamepad collaborator.
///
/// A source reports the first connected device only; additional controllers
/// are ignored. `poll` returning `None` (no backend support, nothing
/// connected) makes the adapter's tick a safe no-op.
pub trait GamepadSource {
    /// Samples the current state of the first connected device.
    fn poll(&mut self) -> Option<GamepadSnapshot>;

    /// Drains the host's one-shot "device connected" signal, if any arrived
    /// since the last call.
    fn take_connected(&mut self) -> bool {
        false
    }
}
