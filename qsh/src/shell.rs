// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use r3bl_qcli::{Args, ByteOutcome, CommandResult, Engine, EngineConfig, ExecError,
                RegistryError};
use std::io::{self, Write};

/// Thin facade over [`Engine`] with the vocabulary of a command shell: commands are
/// added and deleted, lines are executed, and bytes are fed in from a terminal.
#[derive(Debug)]
pub struct Shell<W: Write> {
    engine: Engine<W>,
}

impl<W: Write> Shell<W> {
    #[must_use]
    pub fn new(config: EngineConfig, sink: W) -> Self {
        Self {
            engine: Engine::new(config, sink),
        }
    }

    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateName`] if `name` is taken.
    pub fn cmd_add<F>(
        &mut self,
        name: &str,
        handler: F,
        usage: &str,
    ) -> Result<(), RegistryError>
    where
        F: FnMut(&Args<'_>, &mut dyn Write) -> CommandResult + Send + 'static,
    {
        self.engine.register(name, handler, usage)
    }

    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if there is no such command.
    pub fn cmd_del(&mut self, name: &str) -> Result<(), RegistryError> {
        self.engine.unregister(name).map(drop)
    }

    /// Run one complete line without the prompt or the history.
    ///
    /// # Errors
    ///
    /// See [`Engine::execute_line`].
    pub fn exec_line(&mut self, line: &str) -> Result<(), ExecError> {
        self.engine.execute_line(line)
    }

    /// Clear the screen, then print the banner and the prompt.
    ///
    /// # Errors
    ///
    /// Returns the sink's error.
    pub fn title(&mut self) -> io::Result<()> { self.engine.show_title() }

    /// # Errors
    ///
    /// Returns the sink's error.
    pub fn feed(&mut self, byte: u8) -> io::Result<ByteOutcome> {
        self.engine.process_byte(byte)
    }

    pub fn engine(&self) -> &Engine<W> { &self.engine }

    pub fn engine_mut(&mut self) -> &mut Engine<W> { &mut self.engine }
}
