//! In-memory gamepad state shared by both frame layouts

use crate::types::{DPadDirection, MAX_BUTTONS};
use serde::{Deserialize, Serialize};

/// Resting value of every stick and D-pad axis.
pub const AXIS_CENTER: u8 = 0x80;

/// Bias applied to each packed byte by [`PadState::set_all_axes_from_packed`].
pub const PACKED_AXIS_BIAS: u8 = 0x80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StickAxis {
    LeftX,
    LeftY,
    RightX,
    RightY,
}

/// Clamp a requested axis value; anything outside `0..=255` recenters.
pub fn clamp_axis(value: i32) -> u8 {
    u8::try_from(value).unwrap_or(AXIS_CENTER)
}

/// Complete gamepad state. Both the compass code and the D-pad X/Y pair are
/// kept in step, so either frame layout can be encoded from the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PadState {
    buttons: u16,
    dpad: DPadDirection,
    dpad_x: u8,
    dpad_y: u8,
    left_x: u8,
    left_y: u8,
    right_x: u8,
    right_y: u8,
}

impl Default for PadState {
    fn default() -> Self {
        Self {
            buttons: 0,
            dpad: DPadDirection::Centered,
            dpad_x: AXIS_CENTER,
            dpad_y: AXIS_CENTER,
            left_x: AXIS_CENTER,
            left_y: AXIS_CENTER,
            right_x: AXIS_CENTER,
            right_y: AXIS_CENTER,
        }
    }
}

impl PadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buttons(&self) -> u16 {
        self.buttons
    }

    pub fn is_pressed(&self, id: u8) -> bool {
        button_bit(id).is_some_and(|bit| self.buttons & bit != 0)
    }

    pub fn dpad(&self) -> DPadDirection {
        self.dpad
    }

    /// D-pad as an independent `(x, y)` axis pair.
    pub fn dpad_axes(&self) -> (u8, u8) {
        (self.dpad_x, self.dpad_y)
    }

    pub fn axis(&self, axis: StickAxis) -> u8 {
        match axis {
            StickAxis::LeftX => self.left_x,
            StickAxis::LeftY => self.left_y,
            StickAxis::RightX => self.right_x,
            StickAxis::RightY => self.right_y,
        }
    }

    /// Set a button bit. Returns `false` for ids the mask cannot carry.
    pub fn press(&mut self, id: u8) -> bool {
        match button_bit(id) {
            Some(bit) => {
                self.buttons |= bit;
                true
            }
            None => false,
        }
    }

    /// Clear a button bit. Returns `false` for ids the mask cannot carry.
    pub fn release(&mut self, id: u8) -> bool {
        match button_bit(id) {
            Some(bit) => {
                self.buttons &= !bit;
                true
            }
            None => false,
        }
    }

    pub fn release_all(&mut self) {
        self.buttons = 0;
    }

    pub fn set_buttons(&mut self, mask: u16) {
        self.buttons = mask;
    }

    pub fn set_axis(&mut self, axis: StickAxis, value: i32) {
        let value = clamp_axis(value);
        match axis {
            StickAxis::LeftX => self.left_x = value,
            StickAxis::LeftY => self.left_y = value,
            StickAxis::RightX => self.right_x = value,
            StickAxis::RightY => self.right_y = value,
        }
    }

    /// Set the D-pad from a compass code (`0..=7`, `15` = center).
    pub fn set_dpad(&mut self, code: i32) {
        let dir = DPadDirection::from_code(code);
        let (x, y) = dir.axes();
        self.dpad = dir;
        self.dpad_x = x;
        self.dpad_y = y;
    }

    pub fn set_dpad_x(&mut self, value: i32) {
        self.dpad_x = clamp_axis(value);
        self.dpad = DPadDirection::from_axes(self.dpad_x, self.dpad_y);
    }

    pub fn set_dpad_y(&mut self, value: i32) {
        self.dpad_y = clamp_axis(value);
        self.dpad = DPadDirection::from_axes(self.dpad_x, self.dpad_y);
    }

    /// Unpack `RY RX LY LX` (most significant byte first) into the four stick
    /// axes, flipping the top bit of each byte on the way in.
    pub fn set_all_axes_from_packed(&mut self, word: u32) {
        let [ry, rx, ly, lx] = word.to_be_bytes();
        self.right_y = ry ^ PACKED_AXIS_BIAS;
        self.right_x = rx ^ PACKED_AXIS_BIAS;
        self.left_y = ly ^ PACKED_AXIS_BIAS;
        self.left_x = lx ^ PACKED_AXIS_BIAS;
    }
}

fn button_bit(id: u8) -> Option<u16> {
    (id < MAX_BUTTONS).then(|| 1u16 << id)
}
