// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use miette::IntoDiagnostic;
use r3bl_qcli::{TracingConfig, try_initialize_logging_global};
use r3bl_qsh::{CLIArg, RawModeGuard, Shell, exec_exit_code, register_all,
               run_session, spawn_input_thread};
use std::{io::{stdin, stdout},
          process::ExitCode,
          sync::atomic::AtomicBool};

fn main() -> miette::Result<ExitCode> {
    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.global_options.enable_logging;
    if enable_logging {
        let log_file = cli_arg.global_options.log_file.clone();
        try_initialize_logging_global(TracingConfig::new_file(log_file))?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let config = cli_arg.try_into_engine_config()?;
    let mut shell = Shell::new(config, stdout());
    register_all(&mut shell)?;

    let exit_code = if cli_arg.exec.is_empty() {
        run_interactive(&mut shell)?
    } else {
        run_exec_lines(&mut shell, &cli_arg.exec)
    };

    if enable_logging {
        tracing::debug!(message = "Stop logging...");
    }

    Ok(exit_code)
}

/// Stops at the first line that fails.
fn run_exec_lines(shell: &mut Shell<std::io::Stdout>, lines: &[String]) -> ExitCode {
    for line in lines {
        if let Err(error) = shell.exec_line(line) {
            let code = exec_exit_code(&error);
            tracing::debug!(message = "Exec line failed", line = %line, code = code);
            eprintln!("{:?}", miette::Report::new(error));
            return ExitCode::from(code);
        }
    }
    ExitCode::SUCCESS
}

fn run_interactive(shell: &mut Shell<std::io::Stdout>) -> miette::Result<ExitCode> {
    let _raw_mode = RawModeGuard::new().into_diagnostic()?;
    let (input, _input_thread) = spawn_input_thread(stdin());
    let stop = AtomicBool::new(false);

    let end = run_session(shell, &input, &stop).into_diagnostic()?;
    tracing::debug!(message = "Session ended", end = ?end);

    // The input thread is left blocked on stdin, so it is not joined.
    Ok(ExitCode::SUCCESS)
}
