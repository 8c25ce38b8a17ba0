//! padtouchctl - drive a serial HID gamepad gadget from touch layouts
//!
//! Prints the built-in touchscreen layouts, replays recorded touch scripts
//! through the router onto a serial port (or a capture file, or hex on
//! stdout), and exercises a freshly flashed gadget.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod commands;
mod completion;
mod error;
mod output;
mod sink;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{LayoutArgs, ReplayArgs, SelftestArgs};
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "padtouchctl")]
#[command(about = "Turn touchscreen input into gamepad frames for a serial HID gadget")]
#[command(version)]
#[command(long_about = "
padtouchctl drives a microcontroller that presents itself to a console as a
Switch-style or DualShock-style gamepad. Touch layouts map screen regions to
buttons, the D-pad and a 32-cell slider; every state change is sent to the
gadget as one complete frame over a serial link.

Use --json for machine-readable summaries.
")]
struct Cli {
    #[arg(
        long,
        global = true,
        help = "Output in JSON format for machine parsing"
    )]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a built-in touch layout
    Layout(LayoutArgs),

    /// Replay a touch script through a layout
    Replay(ReplayArgs),

    /// Press every button and sweep the D-pad on the gadget
    Selftest(SelftestArgs),

    /// Generate shell completion scripts
    Completion {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "padtouchctl={log_level},padtouch_router={log_level},\
                     padtouch_touch_grid={log_level},padtouch_slider={log_level},\
                     padtouch_hid_gadget_protocol={log_level}"
                )
                .into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match execute_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.json {
                output::print_error_json(&e);
            } else {
                output::print_error_human(&e);
            }
            ExitCode::from(exit_code(&e))
        }
    }
}

fn exit_code(error: &anyhow::Error) -> u8 {
    error
        .downcast_ref::<CliError>()
        .map_or(1, CliError::exit_code)
}

fn execute_command(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Layout(args) => commands::layout::execute(args),
        Commands::Replay(args) => commands::replay::execute(args, cli.json),
        Commands::Selftest(args) => commands::selftest::execute(args, cli.json),
        Commands::Completion { shell } => {
            completion::generate_completion(*shell);
            Ok(())
        }
    }
}
