// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// cspell:words qcli

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

//! # r3bl_qcli
//!
//! A byte-driven line editing command engine for resource constrained terminals. The
//! caller feeds raw bytes from a terminal, one at a time, into [`Engine::process_byte`]
//! and the engine takes care of the rest:
//!
//! 1. An escape sequence state machine ([`InputStateMachine`]) that turns bytes into
//!    editing actions. Directional key codes come from a [`KeyMap`] that is resolved
//!    once when the [`Engine`] is constructed.
//! 2. A fixed capacity, cursor aware [`LineBuffer`]. Inserts beyond capacity are
//!    silently refused.
//! 3. A circular [`HistoryStore`] with Up / Down recall.
//! 4. Prefix based tab completion over the [`CommandRegistry`].
//! 5. An in-place [`tokenize`]r whose token view ([`Args`]) borrows the line it was
//!    made from.
//! 6. Dispatch to registered [`CommandHandler`]s, with the handler's [`CommandError`]
//!    translated into a diagnostic.
//!
//! All terminal output goes to the sink, which is any [`std::io::Write`] implementation
//! owned by the [`Engine`]. The engine never does raw I/O on its own.
//!
//! For scripted use, [`Engine::execute_line`] runs a complete line without touching
//! the line buffer, the history, or the prompt.
//!
//! # Example
//!
//! ```
//! use r3bl_qcli::{CommandError, Engine, EngineConfig, ExecError, test_fixtures::SinkMock};
//! use std::io::Write;
//!
//! let sink = SinkMock::default();
//! let mut engine = Engine::new(EngineConfig::default(), sink.clone());
//! engine
//!     .register(
//!         "greet",
//!         |args, out| {
//!             let Some(name) = args.get(1) else {
//!                 return Err(CommandError::ParamLess);
//!             };
//!             write!(out, "hello {name}\r\n").map_err(|_| CommandError::Param)
//!         },
//!         "say hello",
//!     )
//!     .unwrap();
//!
//! for byte in b"greet world\r" {
//!     engine.process_byte(*byte).unwrap();
//! }
//! assert!(sink.get_copy_of_buffer_as_string().contains("hello world"));
//! assert!(matches!(
//!     engine.execute_line("greet"),
//!     Err(ExecError::Command(CommandError::ParamLess))
//! ));
//! ```

// Attach.
pub mod ansi;
pub mod builtins;
pub mod config;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod history;
pub mod input;
pub mod line_buffer;
pub mod log;
pub mod registry;
#[cfg(any(test, feature = "test_fixtures"))]
pub mod test_fixtures;
pub mod tokenizer;

// Re-export.
pub use ansi::*;
pub use builtins::*;
pub use config::*;
pub use dispatch::*;
pub use engine::*;
pub use error::*;
pub use history::*;
pub use input::*;
pub use line_buffer::*;
pub use log::*;
pub use registry::*;
pub use tokenizer::*;
