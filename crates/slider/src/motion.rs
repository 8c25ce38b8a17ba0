//! Frame-to-frame motion of one hand.

use crate::segment::Segment;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Direction a hand moved between two frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Motion {
    /// Towards the right edge (lower bit indices).
    Rightward,
    /// Towards the left edge (higher bit indices).
    Leftward,
    #[default]
    Still,
}

impl Motion {
    /// `+1` rightward, `-1` leftward, `0` still.
    pub fn signum(self) -> i8 {
        match self {
            Motion::Rightward => 1,
            Motion::Leftward => -1,
            Motion::Still => 0,
        }
    }

    /// Stick value for this motion: full right, full left, or centre.
    pub fn axis_value(self) -> u8 {
        match self {
            Motion::Rightward => 255,
            Motion::Leftward => 0,
            Motion::Still => 128,
        }
    }
}

/// Compare centres as `old - new` in bit indices: a positive difference
/// means the hand moved to lower bits, i.e. rightwards.
pub fn detect_motion(old: &Segment, new: &Segment) -> Motion {
    match old.doubled_center().cmp(&new.doubled_center()) {
        Ordering::Greater => Motion::Rightward,
        Ordering::Less => Motion::Leftward,
        Ordering::Equal => Motion::Still,
    }
}
