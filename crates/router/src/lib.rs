//! Touch-to-gamepad routing
//!
//! Ties the pieces together: a [`LayoutConfig`] describes the touch areas and
//! what each cell does, [`TouchRouter`] feeds finger events through a
//! [`padtouch_touch_grid::FingerTracker`] and applies the resulting edges to a
//! [`padtouch_hid_gadget_protocol::Gamepad`].
//!
//! ## Features
//! - YAML/JSON layout files and built-in presets
//! - Button, D-pad and slider cell roles
//! - Dedicated (packed bitmap) and gesture slider modes
//! - Plain-text touch scripts for replaying sessions

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod layout;
pub mod preset;
pub mod router;
pub mod script;

pub use layout::{AreaConfig, LayoutConfig, SliderMode};
pub use preset::Preset;
pub use router::TouchRouter;
pub use script::{ScriptLine, TouchEvent, parse_script};

use padtouch_touch_grid::GridError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid area '{area}': {source}")]
    Grid {
        area: String,
        #[source]
        source: GridError,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Unsupported layout file extension: {0}")]
    UnknownFormat(String),

    #[error("Layout declares more than one slider area ('{first}' and '{second}')")]
    DuplicateSlider { first: String, second: String },

    #[error("Slider area '{area}' has {cells} cells; at most {max} fit the presence bitmap")]
    SliderTooWide { area: String, cells: usize, max: usize },

    #[error("Layout has no touch areas")]
    NoAreas,
}

pub type LayoutResult<T> = Result<T, LayoutError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {reason}")]
pub struct ScriptError {
    pub line: usize,
    pub reason: String,
}
