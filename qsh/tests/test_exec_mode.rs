// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Runs the `qsh` binary with `--exec`, which never touches raw mode.

use pretty_assertions::assert_eq;
use std::process::{Command, Output};

fn qsh(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_qsh"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_exec_lines_in_order() {
    let output = qsh(&["-e", "cmd1", "-e", "cmd2 test hi"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        " cmd_1 callback...\r\n str: hi\r\n"
    );
}

#[test]
fn test_exec_stops_at_first_failure() {
    let output = qsh(&["-e", "nope", "-e", "cmd1"]);
    assert_eq!(output.status.code(), Some(127));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("nope"));
}

#[test]
fn test_exec_command_error_exit_code() {
    let output = qsh(&["--exec", "config list extra"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_exec_with_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("qsh.json");
    std::fs::write(&path, r#"{ "line_capacity": 4 }"#).unwrap();

    let output = qsh(&["--config", &path.to_string_lossy(), "-e", "cmd2 test hi"]);
    assert_eq!(output.status.code(), Some(2));
}
