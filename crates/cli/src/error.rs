//! Error types for padtouchctl

use padtouch_router::{LayoutError, ScriptError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Cannot open serial port {port} at {baud} baud: {source}")]
    PortUnavailable {
        port: String,
        baud: u32,
        #[source]
        source: serialport::Error,
    },

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Invalid layout: {0}")]
    Layout(#[from] LayoutError),

    #[error("Invalid touch script {}: {source}", path.display())]
    Script {
        path: PathBuf,
        #[source]
        source: ScriptError,
    },

    #[error("Gadget link lost after {failed} failed writes")]
    LinkLost { failed: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::PortUnavailable { .. } | CliError::LinkLost { .. } => 2,
            CliError::InvalidArguments(_) => 3,
            CliError::Layout(_) | CliError::Script { .. } => 4,
            CliError::Io(_) => 1,
        }
    }
}
