// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CommandResult, InlineString, ParseError};

/// Returned by [`crate::Engine::process_byte`]. The engine only distinguishes "still
/// editing" from "a line was accepted", it has no notion of being cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ByteOutcome {
    Editing,
    Accepted(LineOutcome),
}

/// What happened to a line accepted with Enter. None of these are fatal, the engine
/// is back to editing an empty line in every case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Enter on an empty line.
    Empty,
    /// The command ran, with this result.
    Dispatched {
        command: InlineString,
        result: CommandResult,
    },
    NotFound(InlineString),
    ParseError(ParseError),
}

impl ByteOutcome {
    #[must_use]
    pub fn is_accepted(&self) -> bool { matches!(self, ByteOutcome::Accepted(_)) }
}
