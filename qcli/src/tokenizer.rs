// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{INLINE_TOKEN_COUNT, ParseError};
use smallvec::SmallVec;

/// Token storage. Lines with up to [`INLINE_TOKEN_COUNT`] tokens are kept on the stack.
pub type TokenVec<'a> = SmallVec<[&'a str; INLINE_TOKEN_COUNT]>;

/// The token view handed to command handlers. Token `0` is the command name.
///
/// Every token borrows the line that was tokenized, so an [`Args`] can not outlive
/// that line or be kept across the next edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args<'a> {
    tokens: TokenVec<'a>,
}

impl<'a> Args<'a> {
    #[must_use]
    pub fn from_slice(tokens: &[&'a str]) -> Self {
        Self {
            tokens: tokens.iter().copied().collect(),
        }
    }

    /// Token count, including the command name.
    #[must_use]
    pub fn len(&self) -> usize { self.tokens.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.tokens.is_empty() }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'a str> { self.tokens.get(index).copied() }

    #[must_use]
    pub fn command_name(&self) -> Option<&'a str> { self.get(0) }

    /// `true` if token `index` exists and equals `literal`.
    #[must_use]
    pub fn is(&self, index: usize, literal: &str) -> bool {
        self.get(index) == Some(literal)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[&'a str] { &self.tokens }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ { self.tokens.iter().copied() }

    /// The same view without its first token, so that a subcommand sees itself as
    /// token `0`.
    #[must_use]
    pub fn shifted(&self) -> Args<'a> {
        Self {
            tokens: self.tokens.iter().skip(1).copied().collect(),
        }
    }
}

/// Split `line` into tokens on ASCII space. Leading, trailing and repeated spaces are
/// ignored. Nothing is copied, each token is a slice of `line`.
///
/// # Errors
///
/// - [`ParseError::TooLong`] if `line` is longer than `max_len` bytes.
/// - [`ParseError::InvalidUtf8`] if `line` is not valid UTF-8.
/// - [`ParseError::Empty`] if there are no tokens.
/// - [`ParseError::TooManyTokens`] if there are more than `max_tokens` tokens.
pub fn tokenize(line: &[u8], max_tokens: usize, max_len: usize) -> Result<Args<'_>, ParseError> {
    if line.len() > max_len {
        return Err(ParseError::TooLong {
            len: line.len(),
            max: max_len,
        });
    }

    let line = std::str::from_utf8(line).map_err(|_| ParseError::InvalidUtf8)?;

    let mut tokens = TokenVec::new();
    for token in line.split(' ').filter(|token| !token.is_empty()) {
        if tokens.len() == max_tokens {
            return Err(ParseError::TooManyTokens { max: max_tokens });
        }
        tokens.push(token);
    }

    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    Ok(Args { tokens })
}
