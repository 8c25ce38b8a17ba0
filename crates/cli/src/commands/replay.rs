//! Replay a touch script through a layout onto the gadget link

use anyhow::{Context, Result};
use padtouch_router::{LayoutConfig, Preset, ScriptLine, TouchRouter, parse_script};
use padtouch_hid_gadget_protocol::{ByteSink, ConsoleKind};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

use crate::commands::ReplayArgs;
use crate::error::CliError;
use crate::output;
use crate::sink;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    pub events: usize,
    pub actions: usize,
    pub waited_ms: u64,
    pub failed_writes: u64,
}

pub fn execute(args: &ReplayArgs, json: bool) -> Result<()> {
    let layout = resolve_layout(args)?;

    let text = std::fs::read_to_string(&args.script)
        .with_context(|| format!("reading touch script {}", args.script.display()))?;
    let script = parse_script(&text).map_err(|source| CliError::Script {
        path: args.script.clone(),
        source,
    })?;
    info!(lines = script.len(), console = ?layout.console, slider = ?layout.slider_mode, "replaying");

    let sink = sink::open(
        args.link.port.as_deref(),
        args.link.baud,
        args.link.output.as_deref(),
    )?;
    let mut router = TouchRouter::from_layout(&layout, sink).map_err(CliError::from)?;
    let summary = run(&mut router, &script, args.realtime);

    output::print_replay_summary(&summary, json);
    if summary.failed_writes > 0 {
        return Err(CliError::LinkLost {
            failed: summary.failed_writes,
        }
        .into());
    }
    Ok(())
}

fn resolve_layout(args: &ReplayArgs) -> Result<LayoutConfig, CliError> {
    let mut layout = match &args.layout {
        Some(path) => LayoutConfig::load(path)?,
        None => {
            if args.screen.width <= 0 || args.screen.height <= 0 {
                return Err(CliError::InvalidArguments(format!(
                    "screen size must be positive, got {}x{}",
                    args.screen.width, args.screen.height
                )));
            }
            let console: ConsoleKind = args.console.map(Into::into).unwrap_or_default();
            Preset::ProjectDiva.layout(console, args.screen.width, args.screen.height)
        }
    };
    if let Some(console) = args.console {
        layout.console = console.into();
    }
    if let Some(slider) = args.slider {
        layout.slider_mode = slider.into();
    }
    Ok(layout)
}

/// Feed every script line through `router`, then lift any fingers the
/// script left down.
pub fn run<S: ByteSink>(router: &mut TouchRouter<S>, script: &[ScriptLine], realtime: bool) -> ReplaySummary {
    let mut summary = ReplaySummary::default();
    router.begin();

    for line in script {
        match *line {
            ScriptLine::Touch(event) => {
                summary.events += 1;
                let routed = router.handle(event);
                if !routed.is_idle() {
                    summary.actions += 1;
                }
                debug!(?event, ?routed, "event");
            }
            ScriptLine::Wait(delay) => {
                summary.waited_ms = summary
                    .waited_ms
                    .saturating_add(u64::try_from(delay.as_millis()).unwrap_or(u64::MAX));
                if realtime {
                    std::thread::sleep(delay.min(Duration::from_secs(60)));
                }
            }
        }
    }

    if router.active_fingers() > 0 {
        info!(fingers = router.active_fingers(), "lifting fingers left down by the script");
        router.release_all();
    }
    summary.failed_writes = router.failed_writes();
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use padtouch_hid_gadget_protocol::sink::mock::RecordingSink;

    #[test]
    fn test_run_counts_and_cleans_up() -> Result<(), Box<dyn std::error::Error>> {
        let layout = Preset::ProjectDiva.layout(ConsoleKind::Switch, 1920, 1080);
        let sink = RecordingSink::new();
        let mut router = TouchRouter::from_layout(&layout, sink.clone())?;
        let script = parse_script("down 1 1700 900\nwait 5\ndown 2 30 300\nmove 2 31 300\n")?;

        let summary = run(&mut router, &script, false);
        assert_eq!(
            summary,
            ReplaySummary {
                events: 3,
                actions: 2,
                waited_ms: 5,
                failed_writes: 0,
            }
        );
        assert_eq!(router.active_fingers(), 0);
        assert_eq!(router.gamepad().snapshot().buttons(), 0);
        // begin, A down, slider down, release A, release slider
        assert_eq!(sink.frame_count(), 5);
        Ok(())
    }

    #[test]
    fn test_run_reports_failed_writes() -> Result<(), Box<dyn std::error::Error>> {
        let layout = Preset::ProjectDiva.layout(ConsoleKind::Switch, 1920, 1080);
        let sink = RecordingSink::new();
        sink.disconnect();
        let mut router = TouchRouter::from_layout(&layout, sink)?;
        let script = parse_script("down 1 1700 900\nup 1\n")?;
        let summary = run(&mut router, &script, false);
        assert_eq!(summary.failed_writes, 3);
        Ok(())
    }
}
