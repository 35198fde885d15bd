// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CRLF, CURSOR_BACK, DisplayGate, Engine};
use smallvec::SmallVec;
use std::io::{self, Write};

impl<W: Write> Engine<W> {
    /// Tab: complete the line against the registered command names, treating the
    /// whole line as a prefix.
    ///
    /// - One match: the line becomes the full name with the cursor at the end.
    /// - Several matches: they are listed on a fresh line, then the prompt and the
    ///   unchanged line are redrawn.
    /// - No match, or an empty line: nothing happens.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails.
    pub fn complete(&mut self) -> io::Result<()> {
        if self.line.is_empty() {
            return Ok(());
        }

        let matches: SmallVec<[&str; 8]> =
            self.registry.matching_prefix(self.line.as_bytes()).collect();
        let mut out = DisplayGate::new(&mut self.sink, self.display);

        match matches.as_slice() {
            [] => {}
            [name] => {
                self.line.replace(name.as_bytes());
                write!(out, "\r{}", self.config.prompt)?;
                out.write_all(self.line.as_bytes())?;
            }
            names => {
                out.print(CRLF)?;
                for name in names {
                    write!(out, "{name}  ")?;
                }
                out.print(CRLF)?;
                out.print(&self.config.prompt)?;
                out.write_all(self.line.as_bytes())?;
                for _ in 0..self.line.tail_len() {
                    out.print(CURSOR_BACK)?;
                }
            }
        }

        tracing::trace!(message = "tab completion", matches = matches.len());
        Ok(())
    }
}
