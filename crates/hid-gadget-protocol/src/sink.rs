//! Byte-sink abstraction for the serial link to the gadget.

use std::io::{self, Write};

/// Accepts whole frames, in order. No acknowledgement is read back.
///
/// Implementations must be `Send`; the [`crate::Gamepad`] monitor serialises
/// calls, so they need not be `Sync`.
pub trait ByteSink: Send {
    fn write_frame(&mut self, frame: &[u8]) -> io::Result<()>;
}

impl<S: ByteSink + ?Sized> ByteSink for Box<S> {
    fn write_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        (**self).write_frame(frame)
    }
}

/// Adapts any `io::Write` (serial port, file, stdout) into a [`ByteSink`].
/// Each frame is written in full and flushed before returning.
#[derive(Debug)]
pub struct WriteSink<W> {
    inner: W,
}

impl<W: Write + Send> WriteSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write + Send> ByteSink for WriteSink<W> {
    fn write_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        self.inner.write_all(frame)?;
        self.inner.flush()
    }
}

pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    /// Records every frame. Clones share the same history, so a test can keep
    /// a handle after moving the sink into a gamepad.
    #[derive(Debug, Clone)]
    pub struct RecordingSink {
        frames: Arc<Mutex<Vec<Vec<u8>>>>,
        connected: Arc<AtomicBool>,
    }

    impl Default for RecordingSink {
        fn default() -> Self {
            Self::new()
        }
    }

    impl RecordingSink {
        pub fn new() -> Self {
            Self {
                frames: Arc::new(Mutex::new(Vec::new())),
                connected: Arc::new(AtomicBool::new(true)),
            }
        }

        pub fn frames(&self) -> Vec<Vec<u8>> {
            let frames = self.frames.lock().unwrap_or_else(|e| e.into_inner());
            frames.clone()
        }

        pub fn last_frame(&self) -> Option<Vec<u8>> {
            let frames = self.frames.lock().unwrap_or_else(|e| e.into_inner());
            frames.last().cloned()
        }

        pub fn frame_count(&self) -> usize {
            let frames = self.frames.lock().unwrap_or_else(|e| e.into_inner());
            frames.len()
        }

        pub fn clear(&self) {
            let mut frames = self.frames.lock().unwrap_or_else(|e| e.into_inner());
            frames.clear();
        }

        pub fn disconnect(&self) {
            self.connected.store(false, Ordering::SeqCst);
        }

        pub fn reconnect(&self) {
            self.connected.store(true, Ordering::SeqCst);
        }
    }

    impl ByteSink for RecordingSink {
        fn write_frame(&mut self, frame: &[u8]) -> io::Result<()> {
            if !self.connected.load(Ordering::SeqCst) {
                return Err(io::Error::new(
                    io::ErrorKind::BrokenPipe,
                    "recording sink disconnected",
                ));
            }
            let mut frames = self.frames.lock().unwrap_or_else(|e| e.into_inner());
            frames.push(frame.to_vec());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::RecordingSink;
    use super::*;

    #[test]
    fn test_write_sink_writes_whole_frame() -> Result<(), Box<dyn std::error::Error>> {
        let mut sink = WriteSink::new(Vec::new());
        sink.write_frame(&[1, 2, 3])?;
        sink.write_frame(&[4])?;
        assert_eq!(sink.into_inner(), vec![1, 2, 3, 4]);
        Ok(())
    }

    #[test]
    fn test_recording_sink_history_shared() -> Result<(), Box<dyn std::error::Error>> {
        let handle = RecordingSink::new();
        let mut boxed: Box<dyn ByteSink> = Box::new(handle.clone());
        boxed.write_frame(&[0xAA])?;
        assert_eq!(handle.frames(), vec![vec![0xAA]]);
        Ok(())
    }

    #[test]
    fn test_recording_sink_disconnect() {
        let handle = RecordingSink::new();
        let mut sink = handle.clone();
        handle.disconnect();
        assert!(sink.write_frame(&[1]).is_err());
        assert_eq!(handle.frame_count(), 0);
        handle.reconnect();
        assert!(sink.write_frame(&[1]).is_ok());
        assert_eq!(handle.frame_count(), 1);
    }
}
