// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Structured logging setup for programs that embed an [`crate::Engine`]. The engine
//! itself only emits [`tracing`] events and never installs a subscriber.
//!
//! An interactive session owns the terminal, so a shell will usually log to a file
//! only, with [`WriterConfig::File`].

// Attach.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
