//! Hand tracking across slider frames.

use crate::motion::{Motion, detect_motion};
use crate::segment::{Segment, find_segments};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Left and right stick X values derived from slider gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StickX {
    pub left_x: u8,
    pub right_x: u8,
}

impl StickX {
    pub const CENTERED: StickX = StickX {
        left_x: 128,
        right_x: 128,
    };
}

impl Default for StickX {
    fn default() -> Self {
        Self::CENTERED
    }
}

/// Keeps the previous frame's hands so each new bitmap can be compared
/// against it.
///
/// One hand steers both sticks: moving right pushes the right stick to 255,
/// moving left pushes the left stick to 0. With two hands, the first (left)
/// hand drives the left stick and the second drives the right one. A change
/// in hand count, or more than two hands, recenters everything.
#[derive(Debug, Clone, Default)]
pub struct HandTracker {
    previous: Vec<Segment>,
}

impl HandTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands seen in the last frame.
    pub fn hands(&self) -> &[Segment] {
        &self.previous
    }

    pub fn reset(&mut self) {
        self.previous.clear();
    }

    pub fn update(&mut self, bits: u32) -> StickX {
        let hands = find_segments(bits);
        let sticks = map_hands(&self.previous, &hands);
        debug!(
            bits = %format_args!("{bits:08x}"),
            hands = hands.len(),
            left_x = sticks.left_x,
            right_x = sticks.right_x,
            "slider hands"
        );
        self.previous = hands;
        sticks
    }
}

fn map_hands(previous: &[Segment], current: &[Segment]) -> StickX {
    if previous.len() != current.len() {
        return StickX::CENTERED;
    }
    match (previous, current) {
        ([old], [new]) => match detect_motion(old, new) {
            Motion::Rightward => StickX {
                left_x: 128,
                right_x: 255,
            },
            Motion::Leftward => StickX {
                left_x: 0,
                right_x: 128,
            },
            Motion::Still => StickX::CENTERED,
        },
        ([old_left, old_right], [new_left, new_right]) => StickX {
            left_x: detect_motion(old_left, new_left).axis_value(),
            right_x: detect_motion(old_right, new_right).axis_value(),
        },
        _ => StickX::CENTERED,
    }
}
