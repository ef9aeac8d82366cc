//! Byte stream sink for hosts.

use std::io::{self, Write};

use crate::sink::SampleSink;

/// Writes every sample as one unsigned byte (`sample + 128`), the raw 8-bit
/// format most audio players accept.
///
/// Writing stops at the first I/O error, which is kept and returned by
/// [`IoSink::finish`].
#[derive(Debug)]
pub struct IoSink<W: Write> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: Write> IoSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// Flushes the writer and returns it, or the first error encountered.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> SampleSink for IoSink<W> {
    fn write_sample(&mut self, sample: i8) {
        if self.error.is_some() {
            return;
        }
        let byte = (sample as u8).wrapping_add(128);
        if let Err(error) = self.writer.write_all(&[byte]) {
            log::error!("sample output failed: {error}");
            self.error = Some(error);
        }
    }
}
