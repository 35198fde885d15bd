// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words qcli qsh

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

//! # r3bl_qsh
//!
//! `qsh` is an interactive shell that puts a [`r3bl_qcli::Engine`] on a real terminal.
//! The terminal is switched to raw mode, a dedicated thread reads bytes from stdin and
//! sends them over a channel ([`spawn_input_thread`]), and [`run_session`] feeds them
//! into the engine until `Ctrl+C` is pressed or stdin closes.
//!
//! With `--exec`, lines are run through [`r3bl_qcli::Engine::execute_line`] instead and
//! the process exit code is derived from the first failure ([`exec_exit_code`]).
//!
//! The commands registered by [`register_all`] are demos of the dispatch helpers in
//! [`r3bl_qcli::dispatch`], including a three level subcommand tree (`config debug
//! on`).

// Attach.
pub mod clap_config;
pub mod sample_commands;
pub mod shell;
pub mod terminal;

// Re-export.
pub use clap_config::*;
pub use sample_commands::*;
pub use shell::*;
pub use terminal::*;
