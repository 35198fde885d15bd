// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod command_runner;
pub mod display_gate;
pub mod subcommand;

// Re-export.
pub use command_runner::*;
pub use display_gate::*;
pub use subcommand::*;
