//! Exercise every button and D-pad direction on the gadget

use anyhow::{Context, Result};
use padtouch_hid_gadget_protocol::{
    ByteSink, ConsoleKind, DPadDirection, Ds4Button, GadgetResult, Gamepad, SwitchButton,
};
use std::time::Duration;
use tracing::info;

use crate::commands::SelftestArgs;
use crate::output;
use crate::sink;

/// Frames written by one pass of [`run_pass`].
pub const FRAMES_PER_PASS: usize = 27;

pub fn execute(args: &SelftestArgs, json: bool) -> Result<()> {
    let console: ConsoleKind = args.console.into();
    let sink = sink::open(
        args.link.port.as_deref(),
        args.link.baud,
        args.link.output.as_deref(),
    )?;
    let gamepad = Gamepad::new(console, sink);
    let delay = Duration::from_millis(args.delay_ms);

    for pass in 1..=args.repeat {
        info!(pass, repeat = args.repeat, ?console, "selftest pass");
        run_pass(&gamepad, delay).with_context(|| format!("selftest pass {pass} failed"))?;
    }

    output::print_selftest_done(console, args.repeat, json);
    Ok(())
}

fn button_ids(console: ConsoleKind) -> Vec<u8> {
    match console {
        ConsoleKind::Switch => SwitchButton::ALL.iter().map(|b| b.id()).collect(),
        ConsoleKind::DualShock4 => Ds4Button::ALL.iter().map(|b| b.id()).collect(),
    }
}

/// Press and hold each button in turn, release, press all at once, release,
/// then walk the D-pad round the compass and recenter.
pub fn run_pass<S: ByteSink>(pad: &Gamepad<S>, delay: Duration) -> GadgetResult<()> {
    let ids = button_ids(pad.console());
    let all = ids.iter().fold(0u16, |mask, &id| mask | (1 << id));
    let hold = delay.saturating_mul(10);

    pad.begin()?;
    for id in ids {
        pad.press_button(id)?;
        std::thread::sleep(delay);
    }
    std::thread::sleep(hold);
    pad.release_all()?;
    std::thread::sleep(hold);
    pad.set_buttons(all)?;
    std::thread::sleep(hold);
    pad.release_all()?;
    std::thread::sleep(hold);

    for dir in DPadDirection::COMPASS {
        pad.set_dpad(i32::from(dir.code()))?;
        std::thread::sleep(delay.saturating_mul(5));
    }
    pad.set_dpad(i32::from(DPadDirection::Centered.code()))
}
