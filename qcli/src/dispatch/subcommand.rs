// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Helpers for handlers that implement a command tree, eg: `config set <key> <value>`
//! or `config debug on`, without any changes to the engine. A handler owns a static
//! table of [`SubcommandEntry`]s and hands its arguments to [`dispatch_table`]. A
//! subcommand handler can do the same with a table of its own for a third level.

use crate::{Args, CommandError, CommandResult, CRLF};
use std::io::{self, Write};

pub type SubcommandFn = fn(&Args<'_>, &mut dyn Write) -> CommandResult;

/// Upper bound for [`SubcommandEntry::max_args`] meaning "no limit".
pub const ARGS_UNBOUNDED: usize = usize::MAX;

#[derive(Debug, Clone, Copy)]
pub struct SubcommandEntry {
    pub name: &'static str,
    pub handler: SubcommandFn,
    pub usage: &'static str,
    /// Fewest arguments after the subcommand name.
    pub min_args: usize,
    /// Most arguments after the subcommand name.
    pub max_args: usize,
}

impl SubcommandEntry {
    pub const fn new(name: &'static str, handler: SubcommandFn, usage: &'static str) -> Self {
        Self {
            name,
            handler,
            usage,
            min_args: 0,
            max_args: ARGS_UNBOUNDED,
        }
    }

    #[must_use]
    pub const fn with_arg_bounds(mut self, min_args: usize, max_args: usize) -> Self {
        self.min_args = min_args;
        self.max_args = max_args;
        self
    }
}

/// Match token `1` of `args` against `table` and run the entry's handler with the
/// arguments shifted by one, so that the handler sees the subcommand name as token
/// `0`.
///
/// # Errors
///
/// - [`CommandError::Param`] if there is no token `1`.
/// - [`CommandError::ParamUnknown`] if no entry is called that.
/// - [`CommandError::ParamLess`] / [`CommandError::ParamMore`] if the number of
///   arguments after the subcommand name is outside the entry's bounds.
/// - Whatever the entry's handler returns.
pub fn dispatch_table(
    args: &Args<'_>,
    table: &[SubcommandEntry],
    out: &mut dyn Write,
) -> CommandResult {
    let Some(name) = args.get(1) else {
        return Err(CommandError::Param);
    };
    let Some(entry) = table.iter().find(|entry| entry.name == name) else {
        return Err(CommandError::ParamUnknown);
    };

    let arg_count = args.len() - 2;
    if arg_count < entry.min_args {
        return Err(CommandError::ParamLess);
    }
    if arg_count > entry.max_args {
        return Err(CommandError::ParamMore);
    }

    (entry.handler)(&args.shifted(), out)
}

/// Print ` -name  usage` for every entry of `table`.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_table_help(table: &[SubcommandEntry], out: &mut dyn Write) -> io::Result<()> {
    for entry in table {
        write!(out, " -{}  {}{CRLF}", entry.name, entry.usage)?;
    }
    Ok(())
}
