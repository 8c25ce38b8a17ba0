//! Gamepad report frames for serial USB-HID gadgets
//!
//! The gadget (a microcontroller presenting itself to the console as a real
//! gamepad) reads fixed-length frames from a serial link and replays them as
//! HID input reports. This crate owns the in-memory gamepad state and the two
//! wire layouts:
//!
//! ## Features
//! - Switch-style frame: 16-bit buttons, compass hat, four stick axes
//! - DualShock-style frame: 16-bit buttons, independent D-pad X/Y axes,
//!   four stick axes, L2/R2 analog trigger bytes
//! - [`Gamepad`] monitor: every mutation re-encodes and flushes the whole
//!   frame under one lock
//! - [`ByteSink`] seam with an `io::Write` adapter and a recording mock

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod ds4;
pub mod frame;
pub mod gamepad;
pub mod sink;
pub mod state;
pub mod switch;
pub mod types;

pub use frame::{ConsoleKind, Frame, MAX_FRAME_LEN, to_hex};
pub use gamepad::Gamepad;
pub use sink::{ByteSink, WriteSink};
pub use state::{AXIS_CENTER, PadState, StickAxis, clamp_axis};
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GadgetError {
    #[error("Gadget link disconnected: {0}")]
    Disconnected(std::io::Error),

    #[error("Transport error: {0}")]
    Transport(std::io::Error),
}

pub type GadgetResult<T> = Result<T, GadgetError>;

impl From<std::io::Error> for GadgetError {
    fn from(e: std::io::Error) -> Self {
        use std::io::ErrorKind;
        match e.kind() {
            ErrorKind::NotConnected | ErrorKind::BrokenPipe | ErrorKind::ConnectionReset => {
                GadgetError::Disconnected(e)
            }
            _ => GadgetError::Transport(e),
        }
    }
}

impl GadgetError {
    pub fn is_disconnect(&self) -> bool {
        matches!(self, GadgetError::Disconnected(_))
    }
}

/// Serial speed the gadget firmware listens at.
pub const DEFAULT_BAUD_RATE: u32 = 2_000_000;
