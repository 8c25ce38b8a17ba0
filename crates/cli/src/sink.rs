//! Where frames go: a serial port, a raw capture file, or hex on stdout.

use padtouch_hid_gadget_protocol::{ByteSink, WriteSink, to_hex};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::error::CliError;

/// Writes each frame as one line of space-separated hex.
pub struct HexSink<W> {
    out: W,
}

impl<W: Write + Send> HexSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write + Send> ByteSink for HexSink<W> {
    fn write_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        writeln!(self.out, "{}", to_hex(frame))?;
        self.out.flush()
    }
}

/// Open the sink chosen on the command line. A port wins over an output
/// file; with neither, frames are printed to stdout.
pub fn open(port: Option<&str>, baud: u32, output: Option<&Path>) -> Result<Box<dyn ByteSink>, CliError> {
    if let Some(port) = port {
        let serial = serialport::new(port, baud)
            .timeout(Duration::from_millis(100))
            .open()
            .map_err(|source| CliError::PortUnavailable {
                port: port.to_string(),
                baud,
                source,
            })?;
        info!(port, baud, "serial port open");
        return Ok(Box::new(WriteSink::new(serial)));
    }

    if let Some(path) = output {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        info!(path = %path.display(), "writing raw frames to file");
        return Ok(Box::new(WriteSink::new(BufWriter::new(file))));
    }

    Ok(Box::new(HexSink::new(io::stdout())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_sink_line_per_frame() -> Result<(), Box<dyn std::error::Error>> {
        let mut sink = HexSink::new(Vec::new());
        sink.write_frame(&[0x02, 0x09, 0xff])?;
        sink.write_frame(&[0x03])?;
        assert_eq!(String::from_utf8(sink.out)?, "02 09 ff\n03\n");
        Ok(())
    }

    #[test]
    fn test_output_file_gets_raw_bytes() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested").join("frames.bin");
        {
            let mut sink = open(None, 0, Some(&path))?;
            sink.write_frame(&[0x02, 0x03])?;
        }
        assert_eq!(std::fs::read(&path)?, vec![0x02, 0x03]);
        Ok(())
    }

    #[test]
    fn test_missing_port_is_reported() {
        let result = open(Some("/dev/padtouch-does-not-exist"), 2_000_000, None);
        assert!(matches!(result, Err(CliError::PortUnavailable { .. })));
    }
}
