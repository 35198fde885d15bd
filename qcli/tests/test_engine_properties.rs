// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End to end behavior of the engine, driven only through its public API.

use pretty_assertions::assert_eq;
use r3bl_qcli::{Args, CommandError, CommandResult, Engine, EngineConfig,
                KeyMapKind, LineOutcome, ParseError, RegistryError, SubcommandEntry,
                dispatch_table, test_fixtures::SinkMock};
use std::{io::Write,
          sync::{Arc, Mutex}};

pub mod fixtures {
    use pretty_assertions::assert_eq;
    use r3bl_qcli::{Args, ByteOutcome, CommandResult, Engine, EngineConfig, LineOutcome,
                    test_fixtures::SinkMock};
    use std::io::Write;

    pub fn new_engine(config: EngineConfig) -> (Engine<SinkMock>, SinkMock) {
        let sink = SinkMock::default();
        (Engine::new(config, sink.clone()), sink)
    }

    pub fn noop(_: &Args<'_>, _: &mut dyn Write) -> CommandResult { Ok(()) }

    /// Type `line`, press Enter, and return what happened to the line.
    pub fn submit(engine: &mut Engine<SinkMock>, line: &str) -> LineOutcome {
        type_bytes(engine, line.as_bytes());
        match engine.process_byte(b'\r').unwrap() {
            ByteOutcome::Accepted(outcome) => outcome,
            ByteOutcome::Editing => panic!("Enter did not accept the line"),
        }
    }

    pub fn type_bytes(engine: &mut Engine<SinkMock>, bytes: &[u8]) {
        for byte in bytes {
            assert_eq!(engine.process_byte(*byte).unwrap(), ByteOutcome::Editing);
        }
    }

    pub fn line(engine: &Engine<SinkMock>) -> String {
        String::from_utf8(engine.line().as_bytes().to_vec()).unwrap()
    }
}

use fixtures::*;

const UP: &[u8] = b"\x1b[A";
const DOWN: &[u8] = b"\x1b[B";
const LEFT: &[u8] = b"\x1b[D";

#[test]
fn test_handler_receives_all_tokens() {
    let (mut engine, _sink) = new_engine(EngineConfig::default());
    let seen = Arc::new(Mutex::new(Vec::<Vec<String>>::new()));
    let seen_clone = seen.clone();
    engine
        .register(
            "foo",
            move |args, _| {
                seen_clone
                    .lock()
                    .unwrap()
                    .push(args.iter().map(str::to_string).collect());
                Ok(())
            },
            "",
        )
        .unwrap();

    engine.execute_line("foo a b").unwrap();
    submit(&mut engine, "foo  a   b");

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    for tokens in seen.iter() {
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens, &vec!["foo", "a", "b"]);
    }
}

#[test]
fn test_duplicate_registration_keeps_registry_size() {
    let (mut engine, _sink) = new_engine(EngineConfig::default());
    engine.register("foo", noop, "").unwrap();
    let size = engine.registry().len();
    assert_eq!(
        engine.register("foo", noop, ""),
        Err(RegistryError::DuplicateName("foo".into()))
    );
    assert_eq!(engine.registry().len(), size);
}

#[test]
fn test_line_capacity_caps_inserts() {
    let (mut engine, sink) = new_engine(EngineConfig::default().with_line_capacity(75));
    type_bytes(&mut engine, &[b'x'; 75]);
    sink.clear();

    type_bytes(&mut engine, b"y");
    assert_eq!(engine.line().len(), 75);
    assert_eq!(engine.line().cursor(), 75);
    assert!(sink.get_copy_of_buffer().is_empty());

    // A full line is still a valid line.
    assert_eq!(
        submit(&mut engine, ""),
        LineOutcome::NotFound("x".repeat(75).as_str().into())
    );
}

#[test]
fn test_identical_lines_are_recorded_once() {
    let (mut engine, _sink) = new_engine(EngineConfig::default());
    engine.register("ls", noop, "").unwrap();
    submit(&mut engine, "ls");
    submit(&mut engine, "ls");
    assert_eq!(engine.history().len(), 1);
}

#[test]
fn test_tab_lists_several_matches() {
    let (mut engine, sink) = new_engine(EngineConfig::default());
    engine.register("test", noop, "").unwrap();
    engine.register("test2", noop, "").unwrap();
    type_bytes(&mut engine, b"te\t");
    assert_eq!(line(&engine), "te");
    let output = sink.get_copy_of_buffer_as_string();
    assert!(output.contains("test  test2  "), "{output:?}");
}

#[test]
fn test_tab_completes_single_match() {
    let (mut engine, _sink) = new_engine(EngineConfig::default());
    engine.register("config", noop, "").unwrap();
    type_bytes(&mut engine, b"conf\t");
    assert_eq!(line(&engine), "config");
    assert_eq!(engine.line().cursor(), 6);
}

#[test]
fn test_history_recall_sequence() {
    let (mut engine, _sink) = new_engine(EngineConfig::default());
    for name in ["A", "B", "C"] {
        engine.register(name, noop, "").unwrap();
        submit(&mut engine, name);
    }

    type_bytes(&mut engine, UP);
    assert_eq!(line(&engine), "C");
    type_bytes(&mut engine, UP);
    assert_eq!(line(&engine), "B");
    type_bytes(&mut engine, DOWN);
    assert_eq!(line(&engine), "C");
    type_bytes(&mut engine, DOWN);
    assert_eq!(line(&engine), "");
    assert_eq!(engine.line().cursor(), 0);
}

#[test]
fn test_recalled_line_can_be_edited_and_submitted() {
    let (mut engine, sink) = new_engine(EngineConfig::default());
    engine.register("cmd", noop, "").unwrap();
    submit(&mut engine, "cmd one");
    sink.clear();

    type_bytes(&mut engine, UP);
    assert_eq!(sink.get_copy_of_buffer_as_string(), "\r\x1b[K\\>$ cmd one");
    assert_eq!(engine.line().cursor(), 7);

    type_bytes(&mut engine, b"\x08\x08\x08two");
    assert_eq!(
        submit(&mut engine, ""),
        LineOutcome::Dispatched { command: "cmd".into(), result: Ok(()) }
    );
    assert_eq!(engine.history().most_recent(), Some(&b"cmd two"[..]));
    assert_eq!(engine.history().recall_depth(), 0);
}

#[test]
fn test_history_ring_wraps() {
    let (mut engine, _sink) = new_engine(EngineConfig::default().with_history_capacity(3));
    engine.register("c", noop, "").unwrap();
    for index in 0..5 {
        submit(&mut engine, &format!("c {index}"));
    }
    assert_eq!(engine.history().len(), 3);

    for expected in ["c 4", "c 3", "c 2"] {
        type_bytes(&mut engine, UP);
        assert_eq!(line(&engine), expected);
    }
    // Oldest entry reached.
    type_bytes(&mut engine, UP);
    assert_eq!(line(&engine), "c 2");
}

#[test]
fn test_cursor_left() {
    let (mut engine, _sink) = new_engine(EngineConfig::default());
    type_bytes(&mut engine, b"ab");
    type_bytes(&mut engine, LEFT);
    assert_eq!(engine.line().cursor(), 1);
    assert_eq!(line(&engine), "ab");

    type_bytes(&mut engine, LEFT);
    type_bytes(&mut engine, LEFT);
    assert_eq!(engine.line().cursor(), 0);
    assert_eq!(line(&engine), "ab");
}

#[test]
fn test_all_space_line_is_a_parse_error() {
    let (mut engine, sink) = new_engine(EngineConfig::default());
    assert_eq!(submit(&mut engine, "    "), LineOutcome::ParseError(ParseError::Empty));
    assert!(engine.line().is_empty());
    assert!(engine.history().is_empty());
    assert!(sink.get_copy_of_buffer_as_string().contains(" #! parse error !"));
}

#[test]
fn test_too_many_tokens_is_a_parse_error() {
    let (mut engine, _sink) = new_engine(EngineConfig::default().with_max_tokens(2));
    engine.register("a", noop, "").unwrap();
    assert_eq!(
        submit(&mut engine, "a b c"),
        LineOutcome::ParseError(ParseError::TooManyTokens { max: 2 })
    );
    assert!(engine.line().is_empty());
}

#[test]
fn test_legacy_console_key_map() {
    let (mut engine, _sink) =
        new_engine(EngineConfig::default().with_key_map(KeyMapKind::LegacyConsole));
    engine.register("A", noop, "").unwrap();
    submit(&mut engine, "A");

    type_bytes(&mut engine, b"\xe0H");
    assert_eq!(line(&engine), "A");
    type_bytes(&mut engine, b"\xe0K");
    assert_eq!(engine.line().cursor(), 0);

    // The ANSI sequence is just text for this key map.
    type_bytes(&mut engine, b"\x1b[D");
    assert_eq!(engine.line().len(), 4);
}

#[test]
fn test_subcommand_tree_through_engine() {
    fn list(_: &Args<'_>, out: &mut dyn Write) -> CommandResult {
        out.write_all(b"listed").map_err(|_| CommandError::Param)
    }
    const TABLE: &[SubcommandEntry] =
        &[SubcommandEntry::new("list", list, "list things").with_arg_bounds(0, 0)];

    let (mut engine, sink) = new_engine(EngineConfig::default());
    engine.register("things", |args, out| dispatch_table(args, TABLE, out), "").unwrap();

    engine.execute_line("things list").unwrap();
    assert_eq!(sink.get_copy_of_buffer_as_string(), "listed");

    assert_eq!(
        submit(&mut engine, "things nope"),
        LineOutcome::Dispatched {
            command: "things".into(),
            result: Err(CommandError::ParamUnknown),
        }
    );
    assert!(sink.get_copy_of_buffer_as_string().contains(" #! unrecognized parameter !"));
}

#[test]
fn test_sink_failure_is_propagated_and_engine_recovers() {
    let (mut engine, sink) = new_engine(EngineConfig::default());
    sink.set_fail_writes(true);
    assert!(engine.process_byte(b'a').is_err());

    sink.set_fail_writes(false);
    type_bytes(&mut engine, b"b");
    assert_eq!(line(&engine), "ab");
}

#[test]
fn test_engine_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<Engine<SinkMock>>();
}
