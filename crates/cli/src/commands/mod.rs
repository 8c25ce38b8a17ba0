//! Command implementations for padtouchctl

pub mod layout;
pub mod replay;
pub mod selftest;

use clap::{Args, ValueEnum};
use padtouch_hid_gadget_protocol::{ConsoleKind, DEFAULT_BAUD_RATE};
use padtouch_router::SliderMode;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConsoleArg {
    /// Switch-style gadget
    Switch,
    /// DualShock 4 style gadget
    #[value(alias = "ds4")]
    Ps4,
}

impl From<ConsoleArg> for ConsoleKind {
    fn from(arg: ConsoleArg) -> Self {
        match arg {
            ConsoleArg::Switch => ConsoleKind::Switch,
            ConsoleArg::Ps4 => ConsoleKind::DualShock4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SliderArg {
    /// Pack the slider bitmap into the stick axes
    #[value(alias = "d")]
    Dedicated,
    /// Map slider swipes to left/right stick X
    #[value(alias = "n")]
    Normal,
}

impl From<SliderArg> for SliderMode {
    fn from(arg: SliderArg) -> Self {
        match arg {
            SliderArg::Dedicated => SliderMode::Dedicated,
            SliderArg::Normal => SliderMode::Normal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FormatArg {
    #[default]
    Yaml,
    Json,
}

#[derive(Debug, Clone, Args)]
pub struct ScreenArgs {
    /// Screen width in pixels
    #[arg(long, default_value_t = 1920)]
    pub width: i32,

    /// Screen height in pixels
    #[arg(long, default_value_t = 1080)]
    pub height: i32,
}

#[derive(Debug, Clone, Args)]
pub struct LinkArgs {
    /// Serial device of the gadget (e.g. /dev/ttyUSB0)
    #[arg(short, long, env = "PADTOUCH_PORT", conflicts_with = "output")]
    pub port: Option<String>,

    /// Serial speed
    #[arg(long, default_value_t = DEFAULT_BAUD_RATE)]
    pub baud: u32,

    /// Write raw frames to this file instead of a serial port
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
pub struct LayoutArgs {
    /// Built-in layout to print
    #[arg(long, default_value = "project-diva")]
    pub preset: String,

    #[arg(short, long, value_enum, default_value_t = ConsoleArg::Switch)]
    pub console: ConsoleArg,

    #[command(flatten)]
    pub screen: ScreenArgs,

    #[arg(short, long, value_enum, default_value_t = FormatArg::Yaml)]
    pub format: FormatArg,
}

#[derive(Debug, Clone, Args)]
pub struct ReplayArgs {
    /// Touch script: `down|move|up <id> <x> <y>` and `wait <ms>`, one per line
    pub script: PathBuf,

    /// Layout file (.yaml/.yml/.json); defaults to the project-diva preset
    #[arg(short, long)]
    pub layout: Option<PathBuf>,

    /// Console kind; overrides the layout file
    #[arg(short, long, value_enum)]
    pub console: Option<ConsoleArg>,

    /// Slider mode; overrides the layout file
    #[arg(short, long, value_enum)]
    pub slider: Option<SliderArg>,

    #[command(flatten)]
    pub screen: ScreenArgs,

    #[command(flatten)]
    pub link: LinkArgs,

    /// Honour `wait` lines in the script
    #[arg(long)]
    pub realtime: bool,
}

#[derive(Debug, Clone, Args)]
pub struct SelftestArgs {
    #[arg(short, long, value_enum, default_value_t = ConsoleArg::Switch)]
    pub console: ConsoleArg,

    #[command(flatten)]
    pub link: LinkArgs,

    /// Pause between steps, in milliseconds
    #[arg(long, default_value_t = 100)]
    pub delay_ms: u64,

    /// Number of passes through the sequence
    #[arg(long, default_value_t = 1)]
    pub repeat: u32,
}
