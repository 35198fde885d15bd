// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod accept_line;
pub mod completion;
pub mod engine_struct;
pub mod outcome;
pub mod process_byte;

// Re-export.
pub use engine_struct::*;
pub use outcome::*;
