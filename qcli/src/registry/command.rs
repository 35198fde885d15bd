// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Args, BuiltinCommand, CommandResult};
use smallstr::SmallString;
use std::{fmt, io::Write};

pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;

/// Command names are short, so they are kept inline.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

/// A callable command. Anything written to `out` is shown on the terminal, unless
/// display is turned off, in which case it is discarded.
///
/// There is a blanket implementation for closures, so most callers never implement
/// this trait by hand:
///
/// ```
/// use r3bl_qcli::{Args, CommandHandler, CommandResult};
/// use std::io::Write;
///
/// fn assert_handler(_: impl CommandHandler) {}
/// assert_handler(|_args: &Args<'_>, out: &mut dyn Write| -> CommandResult {
///     let _ = out.write_all(b"ok");
///     Ok(())
/// });
/// ```
pub trait CommandHandler {
    fn run(&mut self, args: &Args<'_>, out: &mut dyn Write) -> CommandResult;
}

impl<F> CommandHandler for F
where
    F: FnMut(&Args<'_>, &mut dyn Write) -> CommandResult,
{
    fn run(&mut self, args: &Args<'_>, out: &mut dyn Write) -> CommandResult {
        self(args, out)
    }
}

pub type BoxedCommandHandler = Box<dyn CommandHandler + Send>;

/// Built-ins need access to engine state, so the engine runs them itself instead of
/// going through a [`CommandHandler`].
pub enum CommandKind {
    Builtin(BuiltinCommand),
    Handler(BoxedCommandHandler),
}

impl fmt::Debug for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandKind::Builtin(builtin) => f.debug_tuple("Builtin").field(builtin).finish(),
            CommandKind::Handler(_) => f.write_str("Handler(..)"),
        }
    }
}

/// One registration record.
#[derive(Debug)]
pub struct Command {
    name: InlineString,
    kind: CommandKind,
    usage: String,
}

impl Command {
    pub fn new(name: &str, kind: CommandKind, usage: impl Into<String>) -> Self {
        Self {
            name: InlineString::from(name),
            kind,
            usage: usage.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str { &self.name }

    #[must_use]
    pub fn usage(&self) -> &str { &self.usage }

    #[must_use]
    pub fn kind(&self) -> &CommandKind { &self.kind }

    pub fn kind_mut(&mut self) -> &mut CommandKind { &mut self.kind }

    #[must_use]
    pub fn builtin(&self) -> Option<BuiltinCommand> {
        match self.kind {
            CommandKind::Builtin(builtin) => Some(builtin),
            CommandKind::Handler(_) => None,
        }
    }
}
