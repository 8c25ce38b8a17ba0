//! Property-based tests for the router: any touch sequence that ends with
//! every finger lifted leaves the gamepad neutral.

use padtouch_hid_gadget_protocol::sink::mock::RecordingSink;
use padtouch_hid_gadget_protocol::{AXIS_CENTER, ConsoleKind, DPadDirection, StickAxis};
use padtouch_router::{Preset, SliderMode, TouchEvent, TouchRouter};
use proptest::prelude::*;

fn event_strategy() -> impl Strategy<Value = TouchEvent> {
    let id = 0i64..6;
    let x = -50i32..2000;
    let y = -50i32..1130;
    prop_oneof![
        (id.clone(), x.clone(), y.clone()).prop_map(|(id, x, y)| TouchEvent::Down { id, x, y }),
        (id.clone(), x, y).prop_map(|(id, x, y)| TouchEvent::Move { id, x, y }),
        id.prop_map(|id| TouchEvent::Up { id }),
    ]
}

fn mode_strategy() -> impl Strategy<Value = SliderMode> {
    prop_oneof![Just(SliderMode::Dedicated), Just(SliderMode::Normal)]
}

fn console_strategy() -> impl Strategy<Value = ConsoleKind> {
    prop_oneof![Just(ConsoleKind::Switch), Just(ConsoleKind::DualShock4)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_lifting_all_fingers_restores_neutral(
        console in console_strategy(),
        mode in mode_strategy(),
        events in prop::collection::vec(event_strategy(), 0..80),
    ) {
        let mut layout = Preset::ProjectDiva.layout(console, 1920, 1080);
        layout.slider_mode = mode;
        let sink = RecordingSink::new();
        let mut router = TouchRouter::from_layout(&layout, sink.clone())
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        for event in events {
            router.handle(event);
        }
        for id in 0..6 {
            router.finger_up(id);
        }

        let state = router.gamepad().snapshot();
        prop_assert_eq!(router.active_fingers(), 0);
        prop_assert_eq!(state.buttons(), 0);
        prop_assert_eq!(state.dpad(), DPadDirection::Centered);
        for axis in [StickAxis::LeftX, StickAxis::LeftY, StickAxis::RightX, StickAxis::RightY] {
            prop_assert_eq!(state.axis(axis), AXIS_CENTER);
        }
        prop_assert_eq!(router.failed_writes(), 0);
    }
}
