// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod command;
pub mod command_registry;

// Re-export.
pub use command::*;
pub use command_registry::*;
