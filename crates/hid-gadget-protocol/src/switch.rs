//! Switch-style report frame.
//!
//! Layout (12 bytes, multi-byte fields little-endian):
//! - Byte 0: start marker (`0x02`)
//! - Byte 1: length (`0x09`)
//! - Byte 2: sub-id (`0x02`, gamepad report)
//! - Byte 3-4: button mask
//! - Byte 5: hat (compass code `0..=7`, `0x0F` centered)
//! - Byte 6-9: left X, left Y, right X, right Y
//! - Byte 10: reserved (0)
//! - Byte 11: end marker (`0x03`)

use crate::frame::markers;
use crate::state::{PadState, StickAxis};

pub const FRAME_LEN: usize = 12;
pub const LENGTH: u8 = 0x09;

pub fn encode(state: &PadState) -> [u8; FRAME_LEN] {
    let [btn_lo, btn_hi] = state.buttons().to_le_bytes();
    [
        markers::START,
        LENGTH,
        markers::SUB_ID_GAMEPAD,
        btn_lo,
        btn_hi,
        state.dpad().code(),
        state.axis(StickAxis::LeftX),
        state.axis(StickAxis::LeftY),
        state.axis(StickAxis::RightX),
        state.axis(StickAxis::RightY),
        0x00,
        markers::END,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SwitchButton;

    #[test]
    fn test_encode_neutral() {
        let out = encode(&PadState::new());
        assert_eq!(
            out,
            [0x02, 0x09, 0x02, 0x00, 0x00, 0x0F, 0x80, 0x80, 0x80, 0x80, 0x00, 0x03]
        );
    }

    #[test]
    fn test_encode_buttons_little_endian() {
        let mut state = PadState::new();
        state.press(SwitchButton::A.id());
        state.press(SwitchButton::Capture.id());
        let out = encode(&state);
        assert_eq!(out[3], 0x04);
        assert_eq!(out[4], 0x20);
    }

    #[test]
    fn test_encode_hat_and_axes() {
        let mut state = PadState::new();
        state.set_dpad(6);
        state.set_axis(StickAxis::LeftX, 0);
        state.set_axis(StickAxis::RightY, 255);
        let out = encode(&state);
        assert_eq!(out[5], 6);
        assert_eq!(out[6], 0);
        assert_eq!(out[9], 255);
    }
}
