//! Touch slider gesture decoding
//!
//! A slider strip reports its touched cells as a 32-bit presence bitmap, bit
//! 31 being the leftmost cell. [`find_segments`] splits the bitmap into
//! contacts ("hands"), tolerating short gaps inside one contact.
//! [`detect_motion`] compares a hand across two frames, and [`HandTracker`]
//! turns the result into digital stick positions.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod hands;
pub mod motion;
pub mod segment;

pub use hands::{HandTracker, StickX};
pub use motion::{Motion, detect_motion};
pub use segment::{DEBOUNCE_GAP, SLIDER_BITS, Segment, find_segments};
