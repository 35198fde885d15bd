// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{BuiltinCommand, CRLF, Command, DispatchContext, DisplayGate, Engine, ExecError,
            InlineString, LineOutcome, NOT_FOUND_DIAGNOSTIC, PARSE_ERROR_DIAGNOSTIC, run_command,
            tokenize};
use std::io::{self, Write};

impl<W: Write> Engine<W> {
    /// Enter: record, tokenize and dispatch the line, print the diagnostic for any
    /// error, then start over with an empty line and a fresh prompt.
    ///
    /// The line and the recall state are reset before a sink error is returned, so a
    /// failed write never leaves the accepted line behind to be submitted again.
    pub(crate) fn accept_line(&mut self) -> io::Result<LineOutcome> {
        if self.line.is_empty() {
            let mut out = DisplayGate::new(&mut self.sink, self.display);
            out.print(CRLF)?;
            out.print(&self.config.prompt)?;
            return Ok(LineOutcome::Empty);
        }

        let accepted = self.line.take();
        let result = self.dispatch_accepted(&accepted);
        self.line.recycle(accepted);
        self.history.reset_recall();
        let outcome = result?;

        let mut out = DisplayGate::new(&mut self.sink, self.display);
        if !matches!(outcome, LineOutcome::ParseError(_)) {
            out.print(CRLF)?;
        }
        out.print(&self.config.prompt)?;

        Ok(outcome)
    }

    fn dispatch_accepted(&mut self, accepted: &[u8]) -> io::Result<LineOutcome> {
        let Self {
            sink,
            config,
            registry,
            history,
            display,
            ..
        } = self;

        DisplayGate::new(&mut *sink, *display).print(CRLF)?;

        let args = match tokenize(accepted, config.max_tokens, config.line_capacity) {
            Ok(args) => args,
            Err(error) => {
                tracing::warn!(
                    message = "parse error",
                    line = %String::from_utf8_lossy(accepted),
                    error = %error
                );
                DisplayGate::new(sink, *display).print(PARSE_ERROR_DIAGNOSTIC)?;
                return Ok(LineOutcome::ParseError(error));
            }
        };

        let name = InlineString::from(args.command_name().unwrap_or_default());
        tracing::debug!(message = "line accepted", line = ?args.as_slice());

        // Running `hs` is never recorded.
        let is_history_builtin =
            registry.find(&name).and_then(Command::builtin) == Some(BuiltinCommand::History);
        if !is_history_builtin {
            history.record(accepted);
        }

        let mut context = DispatchContext {
            registry,
            history,
            display,
            sink,
            help_wrap_width: config.help_wrap_width,
        };
        let result = run_command(&mut context, &args)?;
        let mut out = DisplayGate::new(context.sink, *context.display);
        match result {
            None => {
                tracing::warn!(message = "command not found", name = %name);
                out.print(NOT_FOUND_DIAGNOSTIC)?;
                Ok(LineOutcome::NotFound(name))
            }
            Some(result) => {
                if let Err(error) = result {
                    out.print(&error.diagnostic())?;
                }
                Ok(LineOutcome::Dispatched {
                    command: name,
                    result,
                })
            }
        }
    }

    /// Run a complete line without going through the line editor. There is no echo,
    /// no prompt and no diagnostic, the line is not recorded in the history, and the
    /// line buffer is left as it is. Output written by the command itself still goes
    /// through the display toggle.
    ///
    /// # Errors
    ///
    /// - [`ExecError::Parse`] if the line can not be tokenized.
    /// - [`ExecError::NotFound`] if the command is not registered.
    /// - [`ExecError::Command`] if the command returns an error.
    /// - [`ExecError::IO`] if the sink fails.
    pub fn execute_line(&mut self, text: &str) -> Result<(), ExecError> {
        let args = tokenize(text.as_bytes(), self.config.max_tokens, self.config.line_capacity)?;
        tracing::debug!(message = "executing line", line = ?args.as_slice());

        let mut context = DispatchContext {
            registry: &mut self.registry,
            history: &self.history,
            display: &mut self.display,
            sink: &mut self.sink,
            help_wrap_width: self.config.help_wrap_width,
        };
        let result = run_command(&mut context, &args)?;
        self.sink.flush()?;

        match result {
            None => Err(ExecError::NotFound(
                args.command_name().unwrap_or_default().to_string(),
            )),
            Some(result) => Ok(result?),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Args, ByteOutcome, CommandError, Engine, EngineConfig, ExecError, LineOutcome,
                ParseError, test_fixtures::SinkMock};
    use pretty_assertions::assert_eq;
    use std::{io::Write,
              sync::{Arc, Mutex}};

    fn engine() -> (Engine<SinkMock>, SinkMock) {
        let sink = SinkMock::default();
        let mut engine = Engine::new(EngineConfig::default(), sink.clone());
        engine
            .register(
                "add",
                |args, out| {
                    let (Some(a), Some(b)) = (args.get(1), args.get(2)) else {
                        return Err(CommandError::ParamLess);
                    };
                    let (Ok(a), Ok(b)) = (a.parse::<i32>(), b.parse::<i32>()) else {
                        return Err(CommandError::ParamType);
                    };
                    write!(out, " {}\r\n", a + b).map_err(|_| CommandError::Param)
                },
                "add two numbers",
            )
            .unwrap();
        (engine, sink)
    }

    fn accepted(engine: &mut Engine<SinkMock>, line: &str) -> LineOutcome {
        let mut bytes = line.as_bytes().to_vec();
        bytes.push(b'\r');
        match engine.process_bytes(&bytes).unwrap().pop() {
            Some(ByteOutcome::Accepted(outcome)) => outcome,
            other => panic!("line was not accepted: {other:?}"),
        }
    }

    #[test]
    fn test_successful_dispatch_output() {
        let (mut engine, sink) = engine();
        let outcome = accepted(&mut engine, "add 2 3");
        assert_eq!(outcome, LineOutcome::Dispatched { command: "add".into(), result: Ok(()) });
        assert_eq!(sink.get_copy_of_buffer_as_string(), "add 2 3\r\n 5\r\n\r\n\\>$ ");
        assert!(engine.line().is_empty());
    }

    #[test]
    fn test_handler_error_prints_diagnostic() {
        let (mut engine, sink) = engine();
        let outcome = accepted(&mut engine, "add 2 x");
        assert_eq!(
            outcome,
            LineOutcome::Dispatched { command: "add".into(), result: Err(CommandError::ParamType) }
        );
        assert_eq!(
            sink.get_copy_of_buffer_as_string(),
            "add 2 x\r\n #! wrong parameter type !\r\n\r\n\\>$ "
        );
    }

    #[test]
    fn test_not_found_and_parse_error() {
        let (mut engine, sink) = engine();
        assert_eq!(accepted(&mut engine, "nope"), LineOutcome::NotFound("nope".into()));
        assert!(sink.get_copy_of_buffer_as_string().ends_with(" #! command not found !\r\n\r\n\\>$ "));

        sink.clear();
        assert_eq!(accepted(&mut engine, "   "), LineOutcome::ParseError(ParseError::Empty));
        assert_eq!(sink.get_copy_of_buffer_as_string(), "   \r\n #! parse error !\r\n\\>$ ");
        assert!(engine.line().is_empty());
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_empty_enter_redraws_prompt() {
        let (mut engine, sink) = engine();
        assert_eq!(accepted(&mut engine, ""), LineOutcome::Empty);
        assert_eq!(sink.get_copy_of_buffer_as_string(), "\r\n\\>$ ");
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_history_builtin_is_not_recorded() {
        let (mut engine, sink) = engine();
        accepted(&mut engine, "add 1 1");
        accepted(&mut engine, "hs");
        accepted(&mut engine, "hs");
        assert_eq!(engine.history().len(), 1);
        assert!(sink.get_copy_of_buffer_as_string().contains(" 1: add 1 1\r\n"));
    }

    #[test]
    fn test_display_toggle_hides_output_but_runs_commands() {
        let (mut engine, sink) = engine();
        let calls = Arc::new(Mutex::new(0));
        let calls_clone = calls.clone();
        engine
            .register(
                "tick",
                move |_, out| {
                    *calls_clone.lock().unwrap() += 1;
                    out.write_all(b"tick").map_err(|_| CommandError::Param)
                },
                "",
            )
            .unwrap();

        accepted(&mut engine, "echo off");
        assert!(!engine.is_display_enabled());
        sink.clear();

        accepted(&mut engine, "tick");
        accepted(&mut engine, "add 1");
        accepted(&mut engine, "nope");
        assert_eq!(*calls.lock().unwrap(), 1);
        assert!(sink.get_copy_of_buffer_as_string().is_empty());

        accepted(&mut engine, "echo on");
        assert!(engine.is_display_enabled());
        assert!(sink.get_copy_of_buffer_as_string().ends_with("\r\n\\>$ "));
    }

    #[test]
    fn test_sink_failure_after_dispatch_still_resets_line() {
        let (mut engine, sink) = engine();
        let calls = Arc::new(Mutex::new(0));
        let calls_clone = calls.clone();
        let sink_clone = sink.clone();
        engine
            .register(
                "boom",
                move |_, _| {
                    *calls_clone.lock().unwrap() += 1;
                    sink_clone.set_fail_writes(true);
                    Err(CommandError::ParamLess)
                },
                "",
            )
            .unwrap();

        engine.process_bytes(b"boom").unwrap();
        assert!(engine.process_byte(b'\r').is_err());
        assert!(engine.line().is_empty());
        assert_eq!(engine.history().recall_depth(), 0);
        assert_eq!(engine.history().most_recent(), Some(&b"boom"[..]));

        sink.set_fail_writes(false);
        assert_eq!(
            engine.process_byte(b'\r').unwrap(),
            ByteOutcome::Accepted(LineOutcome::Empty)
        );
        assert_eq!(*calls.lock().unwrap(), 1);

        engine.process_bytes(b"x").unwrap();
        assert_eq!(engine.line().as_bytes(), b"x");
    }

    #[test]
    fn test_execute_line() {
        let (mut engine, sink) = engine();
        engine.process_bytes(b"partial").unwrap();
        sink.clear();

        engine.execute_line("add 40 2").unwrap();
        assert_eq!(sink.get_copy_of_buffer_as_string(), " 42\r\n");
        assert_eq!(engine.line().as_bytes(), b"partial");
        assert!(engine.history().is_empty());

        assert!(matches!(
            engine.execute_line("add 1"),
            Err(ExecError::Command(CommandError::ParamLess))
        ));
        assert!(matches!(engine.execute_line("nope"), Err(ExecError::NotFound(name)) if name == "nope"));
        assert!(matches!(
            engine.execute_line("  "),
            Err(ExecError::Parse(ParseError::Empty))
        ));
        // No diagnostics are printed.
        assert_eq!(sink.get_copy_of_buffer_as_string(), " 42\r\n");
    }

    #[test]
    fn test_execute_line_passes_tokens() {
        let (mut engine, _sink) = engine();
        let seen = Arc::new(Mutex::new(Vec::<String>::new()));
        let seen_clone = seen.clone();
        engine
            .register(
                "foo",
                move |args: &Args<'_>, _: &mut dyn Write| {
                    let mut seen = seen_clone.lock().unwrap();
                    seen.extend(args.iter().map(ToString::to_string));
                    Ok(())
                },
                "",
            )
            .unwrap();

        engine.execute_line("foo a b").unwrap();
        assert_eq!(*seen.lock().unwrap(), vec!["foo", "a", "b"]);
    }
}
