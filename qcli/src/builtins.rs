// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Commands every [`crate::Engine`] registers on construction. They are owned by the
//! engine instance (there is no global state), and are run by the engine itself since
//! they read or change engine state.

use crate::{Args, CommandError, CommandRegistry, CommandResult, HistoryStore, CRLF};
use std::io::{self, Write};
use strum_macros::{Display, EnumIter};
use textwrap::{Options, WordSeparator, wrap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum BuiltinCommand {
    /// `?`: print every command name with its usage text.
    Help,
    /// `clear`: clear the screen.
    Clear,
    /// `hs`: print the history, newest first. Running it is never recorded.
    History,
    /// `echo on|off`: turn all screen output on or off. Commands keep running while
    /// output is off.
    DisplayToggle,
}

impl BuiltinCommand {
    #[must_use]
    pub const fn default_name(self) -> &'static str {
        match self {
            BuiltinCommand::Help => "?",
            BuiltinCommand::Clear => "clear",
            BuiltinCommand::History => "hs",
            BuiltinCommand::DisplayToggle => crate::DEFAULT_DISPLAY_TOGGLE_NAME,
        }
    }

    #[must_use]
    pub const fn usage(self) -> &'static str {
        match self {
            BuiltinCommand::Help => "help",
            BuiltinCommand::Clear => "clear screen",
            BuiltinCommand::History => "show history",
            BuiltinCommand::DisplayToggle => "echo off or on",
        }
    }
}

/// Narrowest the name column of the help table gets.
pub const HELP_NAME_COLUMN_MIN_WIDTH: usize = 9;

const HELP_HEADER: &str = "  Commands       Usage \r\n ----------     -------\r\n";

/// Print the help table.
///
/// ```text
///   Commands       Usage
///  ----------     -------
///  .?             - help
///  .clear         - clear screen
/// ```
///
/// The name column is as wide as the widest name. Usage text is wrapped at
/// `wrap_width` columns, and continuation lines are indented to the usage column.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_help(
    registry: &CommandRegistry,
    wrap_width: usize,
    out: &mut dyn Write,
) -> io::Result<()> {
    out.write_all(HELP_HEADER.as_bytes())?;

    let name_width = registry.widest_name().max(HELP_NAME_COLUMN_MIN_WIDTH);
    let indent = " ".repeat(2 + name_width + 7);
    let options = Options::new(wrap_width.max(1)).word_separator(WordSeparator::AsciiSpace);

    for command in registry.iter() {
        write!(out, " .{:<name_width$}     - ", command.name())?;
        let lines = wrap(command.usage(), &options);
        let mut lines = lines.iter();
        if let Some(first) = lines.next() {
            out.write_all(first.as_bytes())?;
        }
        out.write_all(CRLF.as_bytes())?;
        for line in lines {
            write!(out, "{indent}{line}{CRLF}")?;
        }
    }

    Ok(())
}

/// Print the history newest first, numbered from 1.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_history(history: &HistoryStore, out: &mut dyn Write) -> io::Result<()> {
    for (index, line) in history.iter_newest_first().enumerate() {
        write!(out, "{:2}: {}{CRLF}", index + 1, String::from_utf8_lossy(line))?;
    }
    Ok(())
}

pub const DISPLAY_TOGGLE_USAGE: &str = " echo on/off\r\n";

/// Run the display toggle. With no argument its usage is printed.
///
/// # Errors
///
/// - [`CommandError::ParamUnknown`] if the argument is neither `on` nor `off`.
/// - [`CommandError::ParamMore`] if there is more than one argument.
/// - [`CommandError::Param`] if the usage could not be written.
pub fn run_display_toggle(
    args: &Args<'_>,
    display: &mut bool,
    out: &mut dyn Write,
) -> CommandResult {
    match (args.len(), args.get(1)) {
        (2, Some("on")) => *display = true,
        (2, Some("off")) => *display = false,
        (2, _) => return Err(CommandError::ParamUnknown),
        (0 | 1, _) => out
            .write_all(DISPLAY_TOGGLE_USAGE.as_bytes())
            .map_err(|_| CommandError::Param)?,
        _ => return Err(CommandError::ParamMore),
    }
    Ok(())
}
