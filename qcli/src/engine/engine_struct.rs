// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Args, BuiltinCommand, CLEAR_SCREEN, CRLF, Command, CommandHandler, CommandKind,
            CommandRegistry, CommandResult, DisplayGate, EngineConfig, HistoryStore,
            InputStateMachine, KeyMap, LineBuffer, RegistryError};
use std::io::{self, Write};

/// One interactive session. The engine owns its sink and all of its state, and does
/// no I/O other than writing to the sink. It is driven by exactly one caller at a time:
///
/// - [`Engine::process_byte`] for raw terminal input.
/// - [`Engine::execute_line`] to run a complete line without echo, prompt or history.
///
/// Commands can be registered and unregistered at any time between calls.
pub struct Engine<W: Write> {
    pub(crate) sink: W,
    pub(crate) config: EngineConfig,
    pub(crate) registry: CommandRegistry,
    pub(crate) line: LineBuffer,
    pub(crate) history: HistoryStore,
    pub(crate) input: InputStateMachine,
    pub(crate) display: bool,
}

impl<W: Write> Engine<W> {
    /// Build an engine from `config`, with the built-ins `?`, `clear`, `hs` and (unless
    /// [`EngineConfig::display_toggle`] is [`None`]) the display toggle registered.
    /// Nothing is written to the sink, see [`Engine::show_title`].
    pub fn new(config: EngineConfig, sink: W) -> Self {
        let config = config.validated();
        let mut engine = Self {
            sink,
            registry: CommandRegistry::new(),
            line: LineBuffer::new(config.line_capacity),
            history: HistoryStore::new(config.history_capacity, config.line_capacity),
            input: InputStateMachine::new(KeyMap::from_kind(config.key_map)),
            display: true,
            config,
        };
        engine.register_builtins();
        engine
    }

    fn register_builtins(&mut self) {
        let toggle_name = self.config.display_toggle.clone();
        let builtins = [
            (BuiltinCommand::Help, Some(BuiltinCommand::Help.default_name().to_string())),
            (BuiltinCommand::Clear, Some(BuiltinCommand::Clear.default_name().to_string())),
            (BuiltinCommand::History, Some(BuiltinCommand::History.default_name().to_string())),
            (BuiltinCommand::DisplayToggle, toggle_name),
        ];
        for (builtin, name) in builtins {
            let Some(name) = name else { continue };
            if let Err(error) =
                self.registry.register(&name, CommandKind::Builtin(builtin), builtin.usage())
            {
                tracing::warn!(message = "built-in not registered", builtin = %builtin, error = %error);
            }
        }
    }

    /// Clear the screen, print the banner (if any) and the prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails.
    pub fn show_title(&mut self) -> io::Result<()> {
        let mut out = DisplayGate::new(&mut self.sink, self.display);
        out.print(CLEAR_SCREEN)?;
        if let Some(banner) = &self.config.banner {
            write!(out, "{banner}{CRLF}")?;
        }
        out.print(&self.config.prompt)?;
        out.flush()
    }

    /// Register a closure as a command.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateName`] if `name` is taken.
    pub fn register<F>(
        &mut self,
        name: &str,
        handler: F,
        usage: impl Into<String>,
    ) -> Result<(), RegistryError>
    where
        F: FnMut(&Args<'_>, &mut dyn Write) -> CommandResult + Send + 'static,
    {
        self.register_handler(name, handler, usage)
    }

    /// Register any [`CommandHandler`] implementation as a command.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateName`] if `name` is taken.
    pub fn register_handler(
        &mut self,
        name: &str,
        handler: impl CommandHandler + Send + 'static,
        usage: impl Into<String>,
    ) -> Result<(), RegistryError> {
        self.registry
            .register(name, CommandKind::Handler(Box::new(handler)), usage)
    }

    /// Remove a command (built-ins included) and hand its registration record back.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if there is no such command.
    pub fn unregister(&mut self, name: &str) -> Result<Command, RegistryError> {
        self.registry.remove(name)
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Command> { self.registry.find(name) }

    #[must_use]
    pub fn registry(&self) -> &CommandRegistry { &self.registry }

    #[must_use]
    pub fn line(&self) -> &LineBuffer { &self.line }

    #[must_use]
    pub fn history(&self) -> &HistoryStore { &self.history }

    #[must_use]
    pub fn input(&self) -> &InputStateMachine { &self.input }

    #[must_use]
    pub fn config(&self) -> &EngineConfig { &self.config }

    #[must_use]
    pub fn is_display_enabled(&self) -> bool { self.display }

    pub fn set_display_enabled(&mut self, enabled: bool) { self.display = enabled; }

    #[must_use]
    pub fn sink(&self) -> &W { &self.sink }

    pub fn sink_mut(&mut self) -> &mut W { &mut self.sink }

    pub fn into_sink(self) -> W { self.sink }

    /// Empty the line buffer and put the history recall back on the newest entry.
    pub fn reset_line(&mut self) {
        self.line.clear();
        self.history.reset_recall();
    }
}

impl<W: Write> std::fmt::Debug for Engine<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .field("line", &self.line)
            .field("history", &self.history)
            .field("input", &self.input)
            .field("display", &self.display)
            .finish_non_exhaustive()
    }
}
