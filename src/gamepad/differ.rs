//! Frame-to-frame gamepad state differencing.

use tracing::debug;

use crate::gamepad::{AxisMotion, GamepadSnapshot, StickVector, TRACKED_AXES};

/// Facts synthesized by one diff pass.
#[derive(Debug, Clone, Default)]
pub struct DiffOutcome {
    /// Present when any tracked axis moved by more than the threshold.
    pub axis: Option<AxisMotion>,
    /// Button indices that transitioned up -> down this poll.
    pub pressed: Vec<usize>,
}

/// Compares consecutive polls and synthesizes discrete input facts.
///
/// Button facts are edge-triggered: emitted exactly once per down-transition,
/// never while held, never on release. Axis facts are level-triggered but
/// rate-limited to once per poll: a single fact carrying all four tracked
/// values is emitted when any one of them moved by more than the threshold
/// since the previous poll.
///
/// The first poll after construction or [`reset`](Self::reset) diffs against
/// an all-released, centered baseline, so buttons already held at startup
/// fire once.
#[derive(Debug)]
pub struct GamepadDiffer {
    prev_buttons: Vec<bool>,
    prev_axes: [f32; TRACKED_AXES],
    dead_zone: f32,
    axis_threshold: f32,
}

impl GamepadDiffer {
    pub fn new(dead_zone: f32, axis_threshold: f32) -> Self {
        Self {
            prev_buttons: Vec::new(),
            prev_axes: [0.0; TRACKED_AXES],
            dead_zone,
            axis_threshold,
        }
    }

    /// Diffs `snapshot` against the previous poll and retains it as the new
    /// baseline.
    pub fn diff(&mut self, snapshot: &GamepadSnapshot) -> DiffOutcome {
        let mut current = [0.0f32; TRACKED_AXES];
        for (index, value) in current.iter_mut().enumerate() {
            *value = snapshot.axes.get(index).copied().unwrap_or(0.0);
        }

        let moved = current
            .iter()
            .zip(self.prev_axes.iter())
            .any(|(now, before)| (now - before).abs() > self.axis_threshold);

        let axis = if moved {
            let motion = AxisMotion {
                left: StickVector {
                    x: current[0],
                    y: current[1],
                },
                right: StickVector {
                    x: current[2],
                    y: current[3],
                },
                dead_zone: self.dead_zone,
            };
            debug!("Axis motion detected: {:?}", motion);
            Some(motion)
        } else {
            None
        };

        let mut pressed = Vec::new();
        for (index, &down) in snapshot.buttons.iter().enumerate() {
            let was_down = self.prev_buttons.get(index).copied().unwrap_or(false);
            if down && !was_down {
                debug!("Button {} pressed", index);
                pressed.push(index);
            }
        }

        self.prev_axes = current;
        self.prev_buttons.clear();
        self.prev_buttons.extend_from_slice(&snapshot.buttons);

        DiffOutcome { axis, pressed }
    }

    /// Returns to the never-polled baseline.
    pub fn reset(&mut self) {
        self.prev_buttons.clear();
        self.prev_axes = [0.0; TRACKED_AXES];
    }
}
