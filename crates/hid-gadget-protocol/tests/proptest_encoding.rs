//! Property-based tests for frame byte layout.
//!
//! Uses proptest with 500 cases to verify that state fields land at the
//! documented offsets of both frame layouts.

use padtouch_hid_gadget_protocol::{ConsoleKind, Ds4Button, PadState, StickAxis, ds4, switch};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Bytes 3–4 carry the button mask little-endian in both layouts.
    #[test]
    fn prop_buttons_at_bytes_3_4(mask in any::<u16>()) {
        let mut state = PadState::new();
        state.set_buttons(mask);
        for console in [ConsoleKind::Switch, ConsoleKind::DualShock4] {
            let frame = console.encode(&state);
            let expected = mask.to_le_bytes();
            prop_assert_eq!(frame.as_bytes().get(3..5), Some(&expected[..]));
        }
    }

    /// Switch bytes 6–9 carry LX, LY, RX, RY.
    #[test]
    fn prop_switch_axes(lx in any::<u8>(), ly in any::<u8>(), rx in any::<u8>(), ry in any::<u8>()) {
        let mut state = PadState::new();
        state.set_axis(StickAxis::LeftX, i32::from(lx));
        state.set_axis(StickAxis::LeftY, i32::from(ly));
        state.set_axis(StickAxis::RightX, i32::from(rx));
        state.set_axis(StickAxis::RightY, i32::from(ry));
        let out = switch::encode(&state);
        let expected = [lx, ly, rx, ry];
        prop_assert_eq!(out.get(6..10), Some(&expected[..]));
    }

    /// DualShock bytes 7–10 carry LX, LY, RX, RY and bytes 5–6 the D-pad pair.
    #[test]
    fn prop_ds4_axes(lx in any::<u8>(), ry in any::<u8>(), dx in any::<u8>(), dy in any::<u8>()) {
        let mut state = PadState::new();
        state.set_axis(StickAxis::LeftX, i32::from(lx));
        state.set_axis(StickAxis::RightY, i32::from(ry));
        state.set_dpad_x(i32::from(dx));
        state.set_dpad_y(i32::from(dy));
        let out = ds4::encode(&state);
        let expected = [dx, dy];
        prop_assert_eq!(out.get(5..7), Some(&expected[..]));
        prop_assert_eq!(out.get(7), Some(&lx));
        prop_assert_eq!(out.get(10), Some(&ry));
    }

    /// DualShock trigger bytes mirror the L2/R2 bits for any mask.
    #[test]
    fn prop_ds4_triggers_mirror_bits(mask in any::<u16>()) {
        let mut state = PadState::new();
        state.set_buttons(mask);
        let out = ds4::encode(&state);
        let l2 = mask & (1 << Ds4Button::L2.id()) != 0;
        let r2 = mask & (1 << Ds4Button::R2.id()) != 0;
        prop_assert_eq!(out.get(11) == Some(&0xFF), l2);
        prop_assert_eq!(out.get(12) == Some(&0xFF), r2);
    }

    /// Switch hat byte is always a valid compass code or 0x0F.
    #[test]
    fn prop_switch_hat_valid(code in any::<i32>(), x in any::<u8>(), use_axes in any::<bool>()) {
        let mut state = PadState::new();
        if use_axes {
            state.set_dpad_x(i32::from(x));
        } else {
            state.set_dpad(code);
        }
        let out = switch::encode(&state);
        let hat = out.get(5).copied().unwrap_or(0xFF);
        prop_assert!(hat <= 7 || hat == 0x0F, "hat {} out of range", hat);
    }
}
