//! DualShock-style report frame.
//!
//! Layout (14 bytes, multi-byte fields little-endian):
//! - Byte 0: start marker (`0x02`)
//! - Byte 1: length (`0x0B`)
//! - Byte 2: sub-id (`0x02`, gamepad report)
//! - Byte 3-4: button mask
//! - Byte 5-6: D-pad X, D-pad Y (`0`/`128`/`255`)
//! - Byte 7-10: left X, left Y, right X, right Y
//! - Byte 11-12: L2, R2 analog trigger (full while the button bit is held)
//! - Byte 13: end marker (`0x03`)

use crate::frame::markers;
use crate::state::{PadState, StickAxis};
use crate::types::Ds4Button;

pub const FRAME_LEN: usize = 14;
pub const LENGTH: u8 = 0x0B;

pub const TRIGGER_RELEASED: u8 = 0x00;
pub const TRIGGER_PULLED: u8 = 0xFF;

fn trigger(state: &PadState, button: Ds4Button) -> u8 {
    if state.is_pressed(button.id()) {
        TRIGGER_PULLED
    } else {
        TRIGGER_RELEASED
    }
}

pub fn encode(state: &PadState) -> [u8; FRAME_LEN] {
    let [btn_lo, btn_hi] = state.buttons().to_le_bytes();
    let (dpad_x, dpad_y) = state.dpad_axes();
    [
        markers::START,
        LENGTH,
        markers::SUB_ID_GAMEPAD,
        btn_lo,
        btn_hi,
        dpad_x,
        dpad_y,
        state.axis(StickAxis::LeftX),
        state.axis(StickAxis::LeftY),
        state.axis(StickAxis::RightX),
        state.axis(StickAxis::RightY),
        trigger(state, Ds4Button::L2),
        trigger(state, Ds4Button::R2),
        markers::END,
    ]
}
