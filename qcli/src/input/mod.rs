// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod key_map;
pub mod state_machine;

// Re-export.
pub use key_map::*;
pub use state_machine::*;
