// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Demo commands for `qsh`. They exercise every way a handler can report a parameter
//! error, and [`r3bl_qcli::dispatch_table`] at two and three levels of nesting.

use crate::Shell;
use r3bl_qcli::{ARGS_UNBOUNDED, Args, CRLF, CommandError, CommandResult, RegistryError,
                SubcommandEntry, dispatch_table, print_table_help};
use std::io::Write;

/// Result code returned when a demo command can't write its output.
pub const WRITE_FAILED_CODE: i32 = -100;

fn say(out: &mut dyn Write, text: &str) -> CommandResult {
    write!(out, "{text}{CRLF}").map_err(|_| CommandError::Other(WRITE_FAILED_CODE))
}

/// Register every demo command with `shell`.
///
/// # Errors
///
/// Returns [`RegistryError::DuplicateName`] if one of the names is already taken.
pub fn register_all<W: Write>(shell: &mut Shell<W>) -> Result<(), RegistryError> {
    shell.cmd_add("cmd1", cmd1, "cmd_1 callback")?;
    shell.cmd_add("cmd2", cmd2, "cmd_2 callback, try: cmd2 test <str>")?;
    shell.cmd_add("test", test, "argument table demo, try: test t1 a b")?;
    shell.cmd_add("config", config, "config get|set|list|debug")?;
    shell.cmd_add("net", net, "net connect|disconnect|status")?;
    Ok(())
}

/// Takes no arguments.
pub fn cmd1(args: &Args<'_>, out: &mut dyn Write) -> CommandResult {
    if args.len() > 1 {
        return Err(CommandError::Param);
    }
    say(out, " cmd_1 callback...")
}

pub fn cmd2(args: &Args<'_>, out: &mut dyn Write) -> CommandResult {
    match args.len() {
        1 => say(out, " -test <str>"),
        3 if args.is(1, "test") => {
            let value = args.get(2).unwrap_or_default();
            say(out, &format!(" str: {value}"))
        }
        3 => Err(CommandError::ParamType),
        _ => Err(CommandError::Param),
    }
}

// test.

const TEST_TABLE: &[SubcommandEntry] = &[
    SubcommandEntry::new("t1", test_arg_table, "print the arguments of t1"),
    SubcommandEntry::new("t2", test_arg_table, "print the arguments of t2"),
];

pub fn test(args: &Args<'_>, out: &mut dyn Write) -> CommandResult {
    if args.len() == 1 {
        return print_table_help(TEST_TABLE, out)
            .map_err(|_| CommandError::Other(WRITE_FAILED_CODE));
    }
    dispatch_table(args, TEST_TABLE, out)
}

/// `args` starts at the subcommand name, eg: `t1 a b`.
fn test_arg_table(args: &Args<'_>, out: &mut dyn Write) -> CommandResult {
    let Some(name) = args.command_name() else {
        return Err(CommandError::Param);
    };
    if args.len() == 1 {
        return say(out, &format!("arg {name} no args"));
    }
    for (index, arg) in args.iter().enumerate().skip(1) {
        say(out, &format!("arg {name} argv[{index}]: {arg}"))?;
    }
    Ok(())
}

// config.

pub const CONFIG_KEYS: &[&str] = &["prompt", "echo", "debug"];

const CONFIG_TABLE: &[SubcommandEntry] = &[
    SubcommandEntry::new("get", config_get, "get <key>").with_arg_bounds(0, 1),
    SubcommandEntry::new("set", config_set, "set <key> <value>").with_arg_bounds(0, 2),
    SubcommandEntry::new("list", config_list, "list keys").with_arg_bounds(0, 0),
    SubcommandEntry::new("debug", config_debug, "debug on|off").with_arg_bounds(0, 1),
];

const CONFIG_DEBUG_TABLE: &[SubcommandEntry] = &[
    SubcommandEntry::new("on", config_debug_on, "enable debug mode").with_arg_bounds(0, 0),
    SubcommandEntry::new("off", config_debug_off, "disable debug mode")
        .with_arg_bounds(0, 0),
];

pub fn config(args: &Args<'_>, out: &mut dyn Write) -> CommandResult {
    if args.len() == 1 {
        return say(out, "Config commands: get, set, list, debug");
    }
    dispatch_table(args, CONFIG_TABLE, out)
}

fn config_get(args: &Args<'_>, out: &mut dyn Write) -> CommandResult {
    match args.get(1) {
        None => say(out, "Usage: config get <key>"),
        Some(key) => say(out, &format!("Getting config: {key}")),
    }
}

fn config_set(args: &Args<'_>, out: &mut dyn Write) -> CommandResult {
    match (args.get(1), args.get(2)) {
        (Some(key), Some(value)) => say(out, &format!("Setting {key} = {value}")),
        _ => say(out, "Usage: config set <key> <value>"),
    }
}

fn config_list(_args: &Args<'_>, out: &mut dyn Write) -> CommandResult {
    say(out, "Config keys:")?;
    for key in CONFIG_KEYS {
        say(out, &format!("  {key}"))?;
    }
    Ok(())
}

/// Third level: `config debug on|off`.
fn config_debug(args: &Args<'_>, out: &mut dyn Write) -> CommandResult {
    let Some(mode) = args.get(1) else {
        say(out, "Debug mode management: on, off")?;
        return say(out, "Usage: config debug on|off");
    };
    dispatch_table(args, CONFIG_DEBUG_TABLE, out).or_else(|error| match error {
        CommandError::ParamUnknown => {
            say(out, &format!("Unknown debug command: {mode} (use 'on' or 'off')"))?;
            Err(CommandError::Param)
        }
        other => Err(other),
    })
}

fn config_debug_on(_args: &Args<'_>, out: &mut dyn Write) -> CommandResult {
    say(out, "Debug mode enabled")
}

fn config_debug_off(_args: &Args<'_>, out: &mut dyn Write) -> CommandResult {
    say(out, "Debug mode disabled")
}

// net.

const NET_TABLE: &[SubcommandEntry] = &[
    SubcommandEntry::new("connect", net_connect, "connect <host:port>").with_arg_bounds(0, 1),
    SubcommandEntry::new("disconnect", net_disconnect, "disconnect").with_arg_bounds(0, 0),
    SubcommandEntry::new("status", net_status, "connection status")
        .with_arg_bounds(0, ARGS_UNBOUNDED),
];

pub fn net(args: &Args<'_>, out: &mut dyn Write) -> CommandResult {
    if args.len() == 1 {
        return say(out, "Network commands: connect, disconnect, status");
    }
    dispatch_table(args, NET_TABLE, out)
}

fn net_connect(args: &Args<'_>, out: &mut dyn Write) -> CommandResult {
    match args.get(1) {
        None => say(out, "Usage: net connect <host:port>"),
        Some(host) => say(out, &format!("Connecting to {host}...")),
    }
}

fn net_disconnect(_args: &Args<'_>, out: &mut dyn Write) -> CommandResult {
    say(out, "Disconnecting...")
}

fn net_status(_args: &Args<'_>, out: &mut dyn Write) -> CommandResult {
    say(out, "Network status:")?;
    say(out, "  connected: no")?;
    say(out, "  host: none")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use r3bl_qcli::{EngineConfig, ExecError, test_fixtures::SinkMock};
    use test_case::test_case;

    fn new_shell() -> (Shell<SinkMock>, SinkMock) {
        let sink = SinkMock::default();
        let mut shell = Shell::new(EngineConfig::default(), sink.clone());
        register_all(&mut shell).unwrap();
        (shell, sink)
    }

    fn run(line: &str) -> (Result<(), ExecError>, String) {
        let (mut shell, sink) = new_shell();
        let result = shell.exec_line(line);
        (result, sink.get_copy_of_buffer_as_string())
    }

    #[test_case("cmd1", " cmd_1 callback...\r\n")]
    #[test_case("cmd2", " -test <str>\r\n")]
    #[test_case("cmd2 test hello", " str: hello\r\n")]
    #[test_case("test t1", "arg t1 no args\r\n")]
    #[test_case("test t2 a b", "arg t2 argv[1]: a\r\narg t2 argv[2]: b\r\n")]
    #[test_case("test", " -t1  print the arguments of t1\r\n -t2  print the arguments of t2\r\n")]
    #[test_case("config", "Config commands: get, set, list, debug\r\n")]
    #[test_case("config get", "Usage: config get <key>\r\n")]
    #[test_case("config get prompt", "Getting config: prompt\r\n")]
    #[test_case("config set prompt", "Usage: config set <key> <value>\r\n")]
    #[test_case("config set prompt >", "Setting prompt = >\r\n")]
    #[test_case("config list", "Config keys:\r\n  prompt\r\n  echo\r\n  debug\r\n")]
    #[test_case("config debug", "Debug mode management: on, off\r\nUsage: config debug on|off\r\n")]
    #[test_case("config debug on", "Debug mode enabled\r\n")]
    #[test_case("config debug off", "Debug mode disabled\r\n")]
    #[test_case("net", "Network commands: connect, disconnect, status\r\n")]
    #[test_case("net connect", "Usage: net connect <host:port>\r\n")]
    #[test_case("net connect 10.0.0.1:80", "Connecting to 10.0.0.1:80...\r\n")]
    #[test_case("net disconnect", "Disconnecting...\r\n")]
    #[test_case("net status", "Network status:\r\n  connected: no\r\n  host: none\r\n")]
    fn test_successful_commands(line: &str, expected: &str) {
        let (result, output) = run(line);
        assert!(result.is_ok(), "{line}: {result:?}");
        assert_eq!(output, expected);
    }

    #[test_case("cmd1 extra", CommandError::Param)]
    #[test_case("cmd2 test", CommandError::Param)]
    #[test_case("cmd2 other x", CommandError::ParamType)]
    #[test_case("test t3", CommandError::ParamUnknown)]
    #[test_case("config bogus", CommandError::ParamUnknown)]
    #[test_case("config list more", CommandError::ParamMore)]
    #[test_case("config debug on now", CommandError::ParamMore)]
    #[test_case("config debug maybe", CommandError::Param)]
    #[test_case("net disconnect now", CommandError::ParamMore)]
    fn test_parameter_errors(line: &str, expected: CommandError) {
        let (result, _output) = run(line);
        assert!(
            matches!(result, Err(ExecError::Command(error)) if error == expected),
            "{line}: {result:?}"
        );
    }

    #[test]
    fn test_unknown_debug_mode_prints_hint() {
        let (_result, output) = run("config debug maybe");
        assert_eq!(output, "Unknown debug command: maybe (use 'on' or 'off')\r\n");
    }

    #[test]
    fn test_register_all_twice_is_refused() {
        let (mut shell, _sink) = new_shell();
        assert_eq!(
            register_all(&mut shell),
            Err(RegistryError::DuplicateName("cmd1".into()))
        );
    }

    #[test]
    fn test_help_lists_demo_commands() {
        let (result, output) = run("?");
        assert!(result.is_ok());
        for name in ["cmd1", "cmd2", "test", "config", "net"] {
            assert!(output.contains(&format!(" .{name}")), "{output}");
        }
    }
}
