//! Production gamepad backend over gilrs.
//!
//! Wraps a `Gilrs` context in a small statum state machine: the source is
//! created in `Detecting`, selects the first connected device, and polls in
//! `Polling`. Only the first device is tracked; events from any other
//! controller are ignored.

use chrono::Local;
use gilrs::{Axis, Button, Event, EventType, GamepadId, Gilrs};
use statum::{machine, state};
use tracing::{debug, info, warn};

use crate::gamepad::{GamepadSnapshot, GamepadSource};

/// Gamepad backend errors.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to initialize gamepad backend: {0}")]
    InitializationError(String),
}

/// Pressed-flag order matching the standard gamepad mapping, so button
/// indices line up with what canvas consumers expect.
const BUTTON_ORDER: [Button; 17] = [
    Button::South,
    Button::East,
    Button::West,
    Button::North,
    Button::LeftTrigger,
    Button::RightTrigger,
    Button::LeftTrigger2,
    Button::RightTrigger2,
    Button::Select,
    Button::Start,
    Button::LeftThumb,
    Button::RightThumb,
    Button::DPadUp,
    Button::DPadDown,
    Button::DPadLeft,
    Button::DPadRight,
    Button::Mode,
];

#[state]
#[derive(Debug, Clone)]
pub enum SourceState {
    Detecting,
    Polling,
}

#[machine]
#[derive(Debug)]
pub struct GilrsSource<S: SourceState> {
    gilrs: Gilrs,
    active_gamepad: Option<GamepadId>,
    connected: bool,
}

impl GilrsSource<Detecting> {
    pub fn create() -> Result<Self, SourceError> {
        info!("Initializing gilrs gamepad backend");
        let gilrs = Gilrs::new().map_err(|e| {
            warn!("Failed to initialize gilrs: {}", e);
            SourceError::InitializationError(e.to_string())
        })?;

        Ok(Self::new(gilrs, None, false))
    }

    /// Selects the first connected device, if any, and transitions to the
    /// polling state. No device is not an error: the source polls in idle
    /// mode until one shows up.
    pub fn initialize(mut self) -> GilrsSource<Polling> {
        match self.gilrs.gamepads().next() {
            Some((id, gamepad)) => {
                info!("Selected gamepad: {} ({})", gamepad.name(), id);
                self.active_gamepad = Some(id);
                self.connected = true;
            }
            None => warn!("No gamepad connected, polling in idle mode"),
        }

        self.transition()
    }
}

impl GilrsSource<Polling> {
    /// Drains pending gilrs events to keep cached device state current and
    /// to track connect/disconnect transitions for the active slot.
    fn pump_events(&mut self) {
        while let Some(Event { id, event, .. }) = self.gilrs.next_event() {
            match event {
                EventType::Connected => {
                    info!(
                        "Gamepad connected: {} at {}",
                        id,
                        Local::now().format("%H:%M:%S%.3f")
                    );
                    if self.active_gamepad.is_none() {
                        self.active_gamepad = Some(id);
                    }
                    if self.active_gamepad == Some(id) {
                        self.connected = true;
                    }
                }
                EventType::Disconnected => {
                    warn!("Gamepad disconnected: {}", id);
                    if self.active_gamepad == Some(id) {
                        self.active_gamepad = None;
                    }
                }
                other => debug!("Ignoring gilrs event: {:?}", other),
            }
        }
    }
}

impl GamepadSource for GilrsSource<Polling> {
    fn poll(&mut self) -> Option<GamepadSnapshot> {
        self.pump_events();

        if self.active_gamepad.is_none() {
            self.active_gamepad = self.gilrs.gamepads().next().map(|(id, _)| id);
        }

        let id = self.active_gamepad?;
        let gamepad = self.gilrs.connected_gamepad(id)?;

        let buttons = BUTTON_ORDER
            .iter()
            .map(|button| gamepad.is_pressed(*button))
            .collect();
        let axes = vec![
            gamepad.value(Axis::LeftStickX),
            gamepad.value(Axis::LeftStickY),
            gamepad.value(Axis::RightStickX),
            gamepad.value(Axis::RightStickY),
        ];

        Some(GamepadSnapshot { buttons, axes })
    }

    fn take_connected(&mut self) -> bool {
        std::mem::take(&mut self.connected)
    }
}
