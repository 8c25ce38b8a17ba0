//! Framing shared by both gadget variants.
//!
//! Every frame is `START, LENGTH, SUB_ID, payload.., END`. `LENGTH` counts the
//! sub-id and the payload, so the gadget firmware can resynchronise on `START`.

use crate::state::PadState;
use crate::{ds4, switch};
use serde::{Deserialize, Serialize};

pub mod markers {
    pub const START: u8 = 0x02;
    pub const SUB_ID_GAMEPAD: u8 = 0x02;
    pub const END: u8 = 0x03;
}

/// Largest frame either variant emits.
pub const MAX_FRAME_LEN: usize = ds4::FRAME_LEN;

/// Which gadget firmware sits at the other end of the link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsoleKind {
    #[default]
    Switch,
    #[serde(rename = "ps4", alias = "ds4", alias = "dual_shock4")]
    DualShock4,
}

impl ConsoleKind {
    pub const fn frame_len(self) -> usize {
        match self {
            ConsoleKind::Switch => switch::FRAME_LEN,
            ConsoleKind::DualShock4 => ds4::FRAME_LEN,
        }
    }

    pub fn encode(self, state: &PadState) -> Frame {
        match self {
            ConsoleKind::Switch => Frame::Switch(switch::encode(state)),
            ConsoleKind::DualShock4 => Frame::DualShock4(ds4::encode(state)),
        }
    }
}

/// One fully-formed report frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Switch([u8; switch::FRAME_LEN]),
    DualShock4([u8; ds4::FRAME_LEN]),
}

impl Frame {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Frame::Switch(bytes) => bytes,
            Frame::DualShock4(bytes) => bytes,
        }
    }

    pub fn console(&self) -> ConsoleKind {
        match self {
            Frame::Switch(_) => ConsoleKind::Switch,
            Frame::DualShock4(_) => ConsoleKind::DualShock4,
        }
    }

    /// Space-separated lowercase hex, as the replay tool prints frames.
    pub fn to_hex(&self) -> String {
        to_hex(self.as_bytes())
    }
}

/// Format raw frame bytes the way [`Frame::to_hex`] does.
pub fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_lengths() {
        let state = PadState::new();
        for console in [ConsoleKind::Switch, ConsoleKind::DualShock4] {
            let frame = console.encode(&state);
            assert_eq!(frame.as_bytes().len(), console.frame_len());
            assert_eq!(frame.console(), console);
            assert!(frame.as_bytes().len() <= MAX_FRAME_LEN);
        }
    }

    #[test]
    fn test_frame_envelope() {
        let state = PadState::new();
        for console in [ConsoleKind::Switch, ConsoleKind::DualShock4] {
            let frame = console.encode(&state);
            let bytes = frame.as_bytes();
            assert_eq!(bytes.first(), Some(&markers::START));
            assert_eq!(bytes.get(2), Some(&markers::SUB_ID_GAMEPAD));
            assert_eq!(bytes.last(), Some(&markers::END));
            assert_eq!(
                bytes.get(1).map(|&len| usize::from(len)),
                Some(bytes.len() - 3),
                "length byte counts sub-id through last payload byte"
            );
        }
    }

    #[test]
    fn test_hex_matches_frame() {
        let frame = ConsoleKind::Switch.encode(&PadState::new());
        assert_eq!(frame.to_hex(), to_hex(frame.as_bytes()));
        assert_eq!(to_hex(&[0x02, 0xff]), "02 ff");
        assert_eq!(to_hex(&[]), "");
    }

    #[test]
    fn test_console_serde_aliases() -> Result<(), Box<dyn std::error::Error>> {
        let kind: ConsoleKind = serde_json::from_str("\"ps4\"")?;
        assert_eq!(kind, ConsoleKind::DualShock4);
        let kind: ConsoleKind = serde_json::from_str("\"switch\"")?;
        assert_eq!(kind, ConsoleKind::Switch);
        let kind: ConsoleKind = serde_json::from_str("\"ds4\"")?;
        assert_eq!(kind, ConsoleKind::DualShock4);
        assert_eq!(serde_json::to_string(&ConsoleKind::DualShock4)?, "\"ps4\"");
        Ok(())
    }
}
