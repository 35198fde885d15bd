// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixtures for testing code that drives an [`crate::Engine`], in this crate and in
//! crates that depend on it.

// Attach.
pub mod sink_mock;

// Re-export.
pub use sink_mock::*;
