// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Command, CommandKind, RegistryError};

/// Ordered collection of [`Command`]s with unique names. Iteration, lookup, help and
/// tab completion all follow insertion order.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateName`] if `name` is already registered, in
    /// which case the registry is unchanged.
    pub fn register(
        &mut self,
        name: &str,
        kind: CommandKind,
        usage: impl Into<String>,
    ) -> Result<(), RegistryError> {
        if self.contains(name) {
            tracing::warn!(message = "duplicate command registration", name = %name);
            return Err(RegistryError::DuplicateName(name.to_string()));
        }
        self.commands.push(Command::new(name, kind, usage));
        tracing::debug!(message = "command registered", name = %name, count = self.len());
        Ok(())
    }

    /// Unlink the command called `name` and hand it back.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if there is no such command.
    pub fn remove(&mut self, name: &str) -> Result<Command, RegistryError> {
        let Some(index) = self.position(name) else {
            return Err(RegistryError::NotFound(name.to_string()));
        };
        let command = self.commands.remove(index);
        tracing::debug!(message = "command removed", name = %name, count = self.len());
        Ok(command)
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|command| command.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Command> {
        self.commands.iter_mut().find(|command| command.name() == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool { self.position(name).is_some() }

    pub fn iter(&self) -> impl Iterator<Item = &Command> { self.commands.iter() }

    pub fn names(&self) -> impl Iterator<Item = &str> { self.iter().map(Command::name) }

    /// Names that start with `prefix`. Only the first `prefix.len()` bytes of each name
    /// are compared.
    pub fn matching_prefix(&self, prefix: &[u8]) -> impl Iterator<Item = &str> {
        self.names().filter(move |name| name.as_bytes().starts_with(prefix))
    }

    /// Length of the longest registered name.
    #[must_use]
    pub fn widest_name(&self) -> usize { self.names().map(str::len).max().unwrap_or(0) }

    #[must_use]
    pub fn len(&self) -> usize { self.commands.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    fn position(&self, name: &str) -> Option<usize> {
        self.commands.iter().position(|command| command.name() == name)
    }
}
