// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{self, Write};

/// Wraps the sink. While display is off every write is accepted and discarded, so
/// code writing through the gate does not have to know about the display toggle.
#[derive(Debug)]
pub struct DisplayGate<'a, W: Write> {
    sink: &'a mut W,
    enabled: bool,
}

impl<'a, W: Write> DisplayGate<'a, W> {
    pub fn new(sink: &'a mut W, enabled: bool) -> Self { Self { sink, enabled } }

    #[must_use]
    pub fn is_enabled(&self) -> bool { self.enabled }

    /// Shorthand for `write_all(text.as_bytes())`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails.
    pub fn print(&mut self, text: &str) -> io::Result<()> { self.write_all(text.as_bytes()) }
}

impl<W: Write> Write for DisplayGate<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.enabled {
            self.sink.write(buf)
        } else {
            Ok(buf.len())
        }
    }

    fn flush(&mut self) -> io::Result<()> { self.sink.flush() }
}
