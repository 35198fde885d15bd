// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error taxonomy for the engine. Every one of these is recovered locally by the
//! interactive path, which prints a diagnostic (when display is enabled) and goes back
//! to editing. They only surface as [`Err`] values from the registry API and from
//! [`crate::Engine::execute_line`].

use std::io;

/// Result type returned by every command handler. `Ok(())` is result code `0`.
pub type CommandResult = Result<(), CommandError>;

/// Registration conflicts and lookups of names that are not registered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum RegistryError {
    #[error("command `{0}` is already registered")]
    #[diagnostic(
        code(r3bl_qcli::registry::duplicate_name),
        help("Unregister the existing command first, or pick a different name.")
    )]
    DuplicateName(String),

    #[error("command `{0}` is not registered")]
    #[diagnostic(code(r3bl_qcli::registry::not_found))]
    NotFound(String),
}

/// Problems found while splitting a line into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ParseError {
    /// The line is empty or contains only spaces.
    #[error("line is empty")]
    #[diagnostic(code(r3bl_qcli::parse::empty))]
    Empty,

    #[error("line is {len} bytes long, the maximum is {max}")]
    #[diagnostic(code(r3bl_qcli::parse::too_long))]
    TooLong { len: usize, max: usize },

    #[error("line has more than {max} tokens")]
    #[diagnostic(code(r3bl_qcli::parse::too_many_tokens))]
    TooManyTokens { max: usize },

    #[error("line is not valid UTF-8")]
    #[diagnostic(code(r3bl_qcli::parse::invalid_utf8))]
    InvalidUtf8,
}

/// Parameter errors reported by command handlers. Each variant has a fixed signed
/// result code, see [`CommandError::code`].
///
/// | code | variant |
/// |------|---------|
/// | -1   | [`CommandError::Param`] |
/// | -2   | [`CommandError::ParamLess`] |
/// | -3   | [`CommandError::ParamMore`] |
/// | -4   | [`CommandError::ParamType`] |
/// | -5   | [`CommandError::ParamUnknown`] |
/// | any other non zero | [`CommandError::Other`] |
///
/// `Other(0)` is still an error, so its code is reported as
/// [`CommandError::CODE_UNKNOWN`] rather than the success code `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error, miette::Diagnostic)]
pub enum CommandError {
    #[error("parameter error")]
    #[diagnostic(code(r3bl_qcli::command::param))]
    Param,

    #[error("too few parameters")]
    #[diagnostic(code(r3bl_qcli::command::param_less))]
    ParamLess,

    #[error("too many parameters")]
    #[diagnostic(code(r3bl_qcli::command::param_more))]
    ParamMore,

    #[error("wrong parameter type")]
    #[diagnostic(code(r3bl_qcli::command::param_type))]
    ParamType,

    #[error("unrecognized parameter")]
    #[diagnostic(code(r3bl_qcli::command::param_unknown))]
    ParamUnknown,

    #[error("unknown error")]
    #[diagnostic(code(r3bl_qcli::command::other))]
    Other(i32),
}

impl CommandError {
    pub const CODE_PARAM: i32 = -1;
    pub const CODE_PARAM_LESS: i32 = -2;
    pub const CODE_PARAM_MORE: i32 = -3;
    pub const CODE_PARAM_TYPE: i32 = -4;
    pub const CODE_PARAM_UNKNOWN: i32 = -5;
    /// Code of [`CommandError::Other`] when it carries `0`.
    pub const CODE_UNKNOWN: i32 = -6;

    /// The signed result code of this error.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            CommandError::Param => Self::CODE_PARAM,
            CommandError::ParamLess => Self::CODE_PARAM_LESS,
            CommandError::ParamMore => Self::CODE_PARAM_MORE,
            CommandError::ParamType => Self::CODE_PARAM_TYPE,
            CommandError::ParamUnknown => Self::CODE_PARAM_UNKNOWN,
            CommandError::Other(0) => Self::CODE_UNKNOWN,
            CommandError::Other(code) => code,
        }
    }

    /// Map a signed result code to an error. `0` is success, so it maps to [`None`].
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => None,
            Self::CODE_PARAM => Some(CommandError::Param),
            Self::CODE_PARAM_LESS => Some(CommandError::ParamLess),
            Self::CODE_PARAM_MORE => Some(CommandError::ParamMore),
            Self::CODE_PARAM_TYPE => Some(CommandError::ParamType),
            Self::CODE_PARAM_UNKNOWN => Some(CommandError::ParamUnknown),
            other => Some(CommandError::Other(other)),
        }
    }

    /// The line the interactive path prints for this error, eg: ` #! too few
    /// parameters !`.
    #[must_use]
    pub fn diagnostic(self) -> String { format!(" #! {self} !\r\n") }
}

/// Convert a signed result code (the convention used by handlers ported from C style
/// command tables) into a [`CommandResult`].
///
/// # Errors
///
/// Returns the [`CommandError`] for every non zero code.
pub const fn result_from_code(code: i32) -> CommandResult {
    match CommandError::from_code(code) {
        None => Ok(()),
        Some(error) => Err(error),
    }
}

/// The signed result code of a [`CommandResult`].
#[must_use]
pub const fn code_from_result(result: &CommandResult) -> i32 {
    match result {
        Ok(()) => 0,
        Err(error) => error.code(),
    }
}

/// Outcome of [`crate::Engine::execute_line`] when the line did not run successfully.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ExecError {
    #[error("command not found: `{0}`")]
    #[diagnostic(code(r3bl_qcli::exec::not_found))]
    NotFound(String),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Command(#[from] CommandError),

    /// The sink failed while a built-in command was writing to it.
    #[error(transparent)]
    #[diagnostic(code(r3bl_qcli::exec::io))]
    IO(#[from] io::Error),
}
