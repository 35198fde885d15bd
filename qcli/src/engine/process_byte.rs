// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ByteOutcome, CLEAR_LINE, CURSOR_BACK, CURSOR_FORWARD, DELETE_CHAR, DeleteOutcome,
            Direction, DisplayGate, ERASE_LAST_CHAR, Engine, INSERT_CHAR, InputAction,
            InsertOutcome};
use std::io::{self, Write};

impl<W: Write> Engine<W> {
    /// Feed one byte of terminal input. Every transition, including the dispatch of an
    /// accepted line, completes before this returns, and the sink is flushed.
    ///
    /// # Errors
    ///
    /// Only sink failures are returned. Parse errors, unknown commands, and handler
    /// errors are reported on screen and in the returned [`ByteOutcome`].
    pub fn process_byte(&mut self, byte: u8) -> io::Result<ByteOutcome> {
        let outcome = match self.input.step(byte) {
            InputAction::Nothing => ByteOutcome::Editing,
            InputAction::Insert(byte) => {
                self.insert(byte)?;
                ByteOutcome::Editing
            }
            InputAction::Erase => {
                self.erase()?;
                ByteOutcome::Editing
            }
            InputAction::Move(direction) => {
                self.navigate(direction)?;
                ByteOutcome::Editing
            }
            InputAction::Tab => {
                self.complete()?;
                ByteOutcome::Editing
            }
            InputAction::Enter => ByteOutcome::Accepted(self.accept_line()?),
        };
        self.sink.flush()?;
        Ok(outcome)
    }

    /// Feed every byte of `bytes`, and collect the outcome of each accepted line.
    ///
    /// # Errors
    ///
    /// Stops at the first sink failure.
    pub fn process_bytes(&mut self, bytes: &[u8]) -> io::Result<Vec<ByteOutcome>> {
        let mut accepted = Vec::new();
        for byte in bytes {
            let outcome = self.process_byte(*byte)?;
            if outcome.is_accepted() {
                accepted.push(outcome);
            }
        }
        Ok(accepted)
    }

    fn insert(&mut self, byte: u8) -> io::Result<()> {
        let mut out = DisplayGate::new(&mut self.sink, self.display);
        match self.line.insert(byte) {
            InsertOutcome::Full => return Ok(()),
            InsertOutcome::Appended => {}
            InsertOutcome::Inserted => out.print(INSERT_CHAR)?,
        }
        out.write_all(&[byte])
    }

    fn erase(&mut self) -> io::Result<()> {
        let mut out = DisplayGate::new(&mut self.sink, self.display);
        match self.line.delete_before_cursor() {
            DeleteOutcome::Nothing => Ok(()),
            DeleteOutcome::ErasedAtEnd => out.print(ERASE_LAST_CHAR),
            DeleteOutcome::ErasedMidLine => {
                out.print(CURSOR_BACK)?;
                out.print(DELETE_CHAR)
            }
        }
    }

    fn navigate(&mut self, direction: Direction) -> io::Result<()> {
        let mut out = DisplayGate::new(&mut self.sink, self.display);
        match direction {
            Direction::Left => {
                if self.line.move_left() {
                    out.print(CURSOR_BACK)?;
                }
            }
            Direction::Right => {
                if self.line.move_right() {
                    out.print(CURSOR_FORWARD)?;
                }
            }
            Direction::Up => {
                let Some(entry) = self.history.recall_prev() else {
                    return Ok(());
                };
                self.line.replace(entry);
                out.print(CLEAR_LINE)?;
                out.print(&self.config.prompt)?;
                out.write_all(self.line.as_bytes())?;
            }
            Direction::Down => {
                match self.history.recall_next() {
                    Some(entry) => self.line.replace(entry),
                    None => self.line.clear(),
                }
                out.print(CLEAR_LINE)?;
                out.print(&self.config.prompt)?;
                out.write_all(self.line.as_bytes())?;
            }
        }
        Ok(())
    }
}
