//! Gamepad monitor: the only way to mutate state that reaches the wire.
//!
//! Each mutator takes the lock, applies the change, re-encodes the whole frame
//! and writes it to the sink before releasing the lock. Two callers can never
//! interleave their writes, and the last frame on the wire always matches the
//! last committed state. A failed write leaves the state committed; the next
//! mutation or [`Gamepad::reflush`] sends it again.

use crate::frame::{ConsoleKind, Frame};
use crate::sink::ByteSink;
use crate::state::{PadState, StickAxis};
use crate::GadgetResult;
use parking_lot::Mutex;
use tracing::{trace, warn};

struct Inner<S> {
    state: PadState,
    frame: Frame,
    sink: S,
}

pub struct Gamepad<S: ByteSink> {
    console: ConsoleKind,
    inner: Mutex<Inner<S>>,
}

impl<S: ByteSink> Gamepad<S> {
    /// Create a gamepad in the neutral state. Nothing is written until the
    /// first mutation or an explicit [`Gamepad::begin`].
    pub fn new(console: ConsoleKind, sink: S) -> Self {
        let state = PadState::new();
        Self {
            console,
            inner: Mutex::new(Inner {
                state,
                frame: console.encode(&state),
                sink,
            }),
        }
    }

    pub fn console(&self) -> ConsoleKind {
        self.console
    }

    /// Reset to neutral and transmit.
    pub fn begin(&self) -> GadgetResult<()> {
        self.commit(|state| *state = PadState::new())
    }

    pub fn press_button(&self, id: u8) -> GadgetResult<()> {
        self.commit(|state| {
            if !state.press(id) {
                warn!(id, "ignoring press of unmapped button");
            }
        })
    }

    pub fn release_button(&self, id: u8) -> GadgetResult<()> {
        self.commit(|state| {
            if !state.release(id) {
                warn!(id, "ignoring release of unmapped button");
            }
        })
    }

    pub fn release_all(&self) -> GadgetResult<()> {
        self.commit(PadState::release_all)
    }

    /// Replace the whole button mask.
    pub fn set_buttons(&self, mask: u16) -> GadgetResult<()> {
        self.commit(|state| state.set_buttons(mask))
    }

    /// Values outside `0..=255` recenter the axis.
    pub fn set_axis(&self, axis: StickAxis, value: i32) -> GadgetResult<()> {
        self.commit(|state| state.set_axis(axis, value))
    }

    /// Compass code `0..=7`, or `15` for center. Other codes center.
    pub fn set_dpad(&self, code: i32) -> GadgetResult<()> {
        self.commit(|state| state.set_dpad(code))
    }

    /// Set several stick axes in one frame. Same clamping as
    /// [`Gamepad::set_axis`].
    pub fn set_axes(&self, axes: &[(StickAxis, i32)]) -> GadgetResult<()> {
        self.commit(|state| {
            for &(axis, value) in axes {
                state.set_axis(axis, value);
            }
        })
    }

    pub fn set_dpad_x_axis(&self, value: i32) -> GadgetResult<()> {
        self.commit(|state| state.set_dpad_x(value))
    }

    pub fn set_dpad_y_axis(&self, value: i32) -> GadgetResult<()> {
        self.commit(|state| state.set_dpad_y(value))
    }

    /// Unpack `RY RX LY LX` with the `0x80` bias; see
    /// [`PadState::set_all_axes_from_packed`].
    pub fn set_all_axes_from_packed(&self, word: u32) -> GadgetResult<()> {
        self.commit(|state| state.set_all_axes_from_packed(word))
    }

    /// Resend the current frame without changing state.
    pub fn reflush(&self) -> GadgetResult<()> {
        self.commit(|_| {})
    }

    /// Copy of the last committed state.
    pub fn snapshot(&self) -> PadState {
        self.inner.lock().state
    }

    /// Copy of the frame encoded from the last committed state.
    pub fn frame(&self) -> Frame {
        self.inner.lock().frame
    }

    pub fn into_sink(self) -> S {
        self.inner.into_inner().sink
    }

    fn commit(&self, mutate: impl FnOnce(&mut PadState)) -> GadgetResult<()> {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        mutate(&mut inner.state);
        inner.frame = self.console.encode(&inner.state);

        inner.sink.write_frame(inner.frame.as_bytes())?;
        trace!(frame = %inner.frame.to_hex(), "frame sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::mock::RecordingSink;
    use crate::types::{DPadDirection, SwitchButton};

    fn switch_pad() -> (Gamepad<RecordingSink>, RecordingSink) {
        let sink = RecordingSink::new();
        (Gamepad::new(ConsoleKind::Switch, sink.clone()), sink)
    }

    #[test]
    fn test_new_writes_nothing() {
        let (_pad, sink) = switch_pad();
        assert_eq!(sink.frame_count(), 0);
    }

    #[test]
    fn test_begin_sends_neutral_frame() -> Result<(), Box<dyn std::error::Error>> {
        let (pad, sink) = switch_pad();
        pad.press_button(SwitchButton::A.id())?;
        pad.begin()?;
        assert_eq!(pad.snapshot(), PadState::new());
        assert_eq!(
            sink.last_frame(),
            Some(vec![0x02, 0x09, 0x02, 0, 0, 0x0F, 0x80, 0x80, 0x80, 0x80, 0, 0x03])
        );
        Ok(())
    }

    #[test]
    fn test_every_mutation_flushes_full_frame() -> Result<(), Box<dyn std::error::Error>> {
        let (pad, sink) = switch_pad();
        pad.press_button(SwitchButton::B.id())?;
        pad.set_axis(StickAxis::LeftX, 0)?;
        pad.set_dpad(4)?;
        pad.release_all()?;

        let frames = sink.frames();
        assert_eq!(frames.len(), 4);
        assert!(frames.iter().all(|f| f.len() == ConsoleKind::Switch.frame_len()));
        assert_eq!(frames.last().map(|f| f.as_slice()), Some(pad.frame().as_bytes()));
        Ok(())
    }

    #[test]
    fn test_press_then_release_restores_mask() -> Result<(), Box<dyn std::error::Error>> {
        let (pad, _sink) = switch_pad();
        pad.press_button(SwitchButton::Y.id())?;
        let before = pad.snapshot().buttons();
        pad.press_button(SwitchButton::Home.id())?;
        pad.release_button(SwitchButton::Home.id())?;
        assert_eq!(pad.snapshot().buttons(), before);
        Ok(())
    }

    #[test]
    fn test_failed_write_keeps_state() -> Result<(), Box<dyn std::error::Error>> {
        let (pad, sink) = switch_pad();
        sink.disconnect();
        let result = pad.press_button(SwitchButton::X.id());
        assert!(matches!(result, Err(ref e) if e.is_disconnect()));
        assert!(pad.snapshot().is_pressed(SwitchButton::X.id()));
        assert_eq!(sink.frame_count(), 0);

        sink.reconnect();
        pad.reflush()?;
        assert_eq!(sink.frame_count(), 1);
        assert_eq!(sink.last_frame().and_then(|f| f.get(3).copied()), Some(0x08));
        Ok(())
    }

    #[test]
    fn test_set_axes_is_one_frame() -> Result<(), Box<dyn std::error::Error>> {
        let (pad, sink) = switch_pad();
        pad.set_axes(&[(StickAxis::LeftX, 0), (StickAxis::RightX, 255)])?;
        assert_eq!(sink.frame_count(), 1);
        assert_eq!(
            sink.last_frame().and_then(|f| f.get(6..10).map(<[u8]>::to_vec)),
            Some(vec![0x00, 0x80, 0xFF, 0x80])
        );

        sink.disconnect();
        assert!(pad.set_axes(&[(StickAxis::LeftX, 128), (StickAxis::RightX, 300)]).is_err());
        let state = pad.snapshot();
        assert_eq!(state.axis(StickAxis::LeftX), 128);
        assert_eq!(state.axis(StickAxis::RightX), 128);
        Ok(())
    }

    #[test]
    fn test_dpad_axis_mode() -> Result<(), Box<dyn std::error::Error>> {
        let (pad, _sink) = switch_pad();
        pad.set_dpad_x_axis(0)?;
        pad.set_dpad_y_axis(255)?;
        assert_eq!(pad.snapshot().dpad(), DPadDirection::DownLeft);
        pad.set_dpad_x_axis(128)?;
        pad.set_dpad_y_axis(128)?;
        assert_eq!(pad.snapshot().dpad(), DPadDirection::Centered);
        Ok(())
    }

    #[test]
    fn test_concurrent_mutations_never_interleave() -> Result<(), Box<dyn std::error::Error>> {
        use std::sync::Arc;

        let sink = RecordingSink::new();
        let pad = Arc::new(Gamepad::new(ConsoleKind::DualShock4, sink.clone()));
        let handles: Vec<_> = (0u8..4)
            .map(|id| {
                let pad = Arc::clone(&pad);
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        let _pressed = pad.press_button(id);
                        let _released = pad.release_button(id);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().map_err(|_| "worker panicked")?;
        }

        let frames = sink.frames();
        assert_eq!(frames.len(), 400);
        assert!(frames.iter().all(|f| f.len() == ConsoleKind::DualShock4.frame_len()));
        assert_eq!(pad.snapshot().buttons(), 0);
        Ok(())
    }
}
