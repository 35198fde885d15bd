// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Args, BuiltinCommand, Command, CommandKind, CommandRegistry, CommandResult, DisplayGate,
            HistoryStore, CLEAR_SCREEN, run_display_toggle, write_help, write_history};
use std::io::{self, Write};

pub const NOT_FOUND_DIAGNOSTIC: &str = " #! command not found !\r\n";
pub const PARSE_ERROR_DIAGNOSTIC: &str = " #! parse error !\r\n";

/// The parts of the engine a command can see or change. The fields are borrowed
/// separately so that the line being dispatched can stay borrowed by the [`Args`].
#[derive(Debug)]
pub struct DispatchContext<'a, W: Write> {
    pub registry: &'a mut CommandRegistry,
    pub history: &'a HistoryStore,
    pub display: &'a mut bool,
    pub sink: &'a mut W,
    pub help_wrap_width: usize,
}

/// Look up token `0` of `args` and run the command. Returns [`None`] if there is no
/// such command. Output goes through a [`DisplayGate`], so nothing reaches the sink
/// while display is off, but the command still runs.
///
/// # Errors
///
/// Returns an error if a built-in fails to write to the sink. Handlers report their
/// own write failures through their [`CommandResult`].
pub fn run_command<W: Write>(
    context: &mut DispatchContext<'_, W>,
    args: &Args<'_>,
) -> io::Result<Option<CommandResult>> {
    let Some(name) = args.command_name() else {
        return Ok(None);
    };
    let Some(builtin) = context.registry.find(name).map(Command::builtin) else {
        return Ok(None);
    };

    let display = *context.display;
    let mut out = DisplayGate::new(context.sink, display);

    let result = match builtin {
        Some(BuiltinCommand::Help) => {
            write_help(context.registry, context.help_wrap_width, &mut out)?;
            Ok(())
        }
        Some(BuiltinCommand::Clear) => {
            out.print(CLEAR_SCREEN)?;
            Ok(())
        }
        Some(BuiltinCommand::History) => {
            write_history(context.history, &mut out)?;
            Ok(())
        }
        Some(BuiltinCommand::DisplayToggle) => run_display_toggle(args, context.display, &mut out),
        None => match context.registry.find_mut(name).map(Command::kind_mut) {
            Some(CommandKind::Handler(handler)) => handler.run(args, &mut out),
            _ => return Ok(None),
        },
    };

    tracing::debug!(message = "command dispatched", name = %name, result = ?result);
    Ok(Some(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CommandError, tokenize};
    use pretty_assertions::assert_eq;

    struct Fixture {
        registry: CommandRegistry,
        history: HistoryStore,
        display: bool,
        sink: Vec<u8>,
    }

    impl Fixture {
        fn new() -> Self {
            let mut registry = CommandRegistry::new();
            registry
                .register("clear", CommandKind::Builtin(BuiltinCommand::Clear), "clear screen")
                .unwrap();
            registry
                .register("echo", CommandKind::Builtin(BuiltinCommand::DisplayToggle), "")
                .unwrap();
            registry
                .register(
                    "count",
                    CommandKind::Handler(Box::new(|args: &Args<'_>, out: &mut dyn Write| -> CommandResult {
                        write!(out, "{}", args.len()).map_err(|_| CommandError::Param)?;
                        if args.len() > 2 { Err(CommandError::ParamMore) } else { Ok(()) }
                    })),
                    "",
                )
                .unwrap();
            Self {
                registry,
                history: HistoryStore::new(4, 16),
                display: true,
                sink: Vec::new(),
            }
        }

        fn run(&mut self, line: &str) -> Option<CommandResult> {
            let args = tokenize(line.as_bytes(), 10, 60).unwrap();
            let mut context = DispatchContext {
                registry: &mut self.registry,
                history: &self.history,
                display: &mut self.display,
                sink: &mut self.sink,
                help_wrap_width: 80,
            };
            run_command(&mut context, &args).unwrap()
        }
    }

    #[test]
    fn test_not_found() {
        let mut fixture = Fixture::new();
        assert_eq!(fixture.run("nope a"), None);
        assert!(fixture.sink.is_empty());
    }

    #[test]
    fn test_handler_result_is_returned() {
        let mut fixture = Fixture::new();
        assert_eq!(fixture.run("count a"), Some(Ok(())));
        assert_eq!(fixture.run("count a b"), Some(Err(CommandError::ParamMore)));
        assert_eq!(fixture.sink, b"23");
    }

    #[test]
    fn test_display_off_still_runs_commands() {
        let mut fixture = Fixture::new();
        assert_eq!(fixture.run("echo off"), Some(Ok(())));
        assert!(!fixture.display);

        assert_eq!(fixture.run("count a b"), Some(Err(CommandError::ParamMore)));
        assert_eq!(fixture.run("clear"), Some(Ok(())));
        assert!(fixture.sink.is_empty());

        assert_eq!(fixture.run("echo on"), Some(Ok(())));
        fixture.run("clear");
        assert_eq!(fixture.sink, CLEAR_SCREEN.as_bytes());
    }
}
