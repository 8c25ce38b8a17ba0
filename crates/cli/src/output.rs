//! Output formatting for CLI responses
//!
//! Hex frames may already be going to stdout, so human-readable summaries
//! are written to stderr. JSON goes to stdout for scripting.

use anyhow::Error;
use colored::*;
use padtouch_hid_gadget_protocol::ConsoleKind;
use serde_json::json;

use crate::commands::replay::ReplaySummary;
use crate::error::CliError;

fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("Failed to format output as JSON: {}", e),
    }
}

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let chain: Vec<String> = error.chain().skip(1).map(ToString::to_string).collect();
    print_json(&json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": error_type_name(error),
            "causes": chain,
        }
    }));
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

pub fn print_replay_summary(summary: &ReplaySummary, json: bool) {
    if json {
        print_json(&json!({
            "success": summary.failed_writes == 0,
            "replay": summary,
        }));
        return;
    }

    let mark = if summary.failed_writes == 0 {
        "✓".green()
    } else {
        "⚠".yellow()
    };
    eprintln!(
        "{} {} events, {} routed actions, {} ms of waits",
        mark,
        summary.events.to_string().bold(),
        summary.actions.to_string().bold(),
        summary.waited_ms
    );
    if summary.failed_writes > 0 {
        eprintln!(
            "  {} {} frame writes failed",
            "Warning:".yellow(),
            summary.failed_writes
        );
    }
}

pub fn print_selftest_done(console: ConsoleKind, passes: u32, json: bool) {
    let console = match console {
        ConsoleKind::Switch => "switch",
        ConsoleKind::DualShock4 => "ps4",
    };
    if json {
        print_json(&json!({
            "success": true,
            "selftest": { "console": console, "passes": passes },
        }));
    } else {
        eprintln!(
            "{} selftest finished: {} pass(es) on the {} gadget",
            "✓".green(),
            passes,
            console.bold()
        );
    }
}

fn error_type_name(error: &Error) -> &'static str {
    match error.downcast_ref::<CliError>() {
        Some(CliError::PortUnavailable { .. }) => "PortUnavailable",
        Some(CliError::InvalidArguments(_)) => "InvalidArguments",
        Some(CliError::Layout(_)) => "Layout",
        Some(CliError::Script { .. }) => "Script",
        Some(CliError::LinkLost { .. }) => "LinkLost",
        Some(CliError::Io(_)) => "Io",
        None => "Other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_type_name_downcasts() {
        let err = Error::from(CliError::LinkLost { failed: 3 });
        assert_eq!(error_type_name(&err), "LinkLost");
        assert_eq!(error_type_name(&anyhow::anyhow!("plain")), "Other");
    }

    #[test]
    fn test_error_type_name_through_context() {
        let err = Error::from(CliError::InvalidArguments("bad".to_string())).context("while parsing");
        assert_eq!(error_type_name(&err), "InvalidArguments");
    }
}
