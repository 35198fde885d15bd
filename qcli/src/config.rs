// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Everything that can be tuned about an [`crate::Engine`] is resolved once, at
//! construction time, from an [`EngineConfig`]. Nothing here changes while the engine
//! runs.

use crate::KeyMapKind;
use serde::{Deserialize, Serialize};

/// Maximum number of bytes in the line being edited.
pub const DEFAULT_LINE_CAPACITY: usize = 60;

/// Number of accepted lines the history ring keeps before the oldest one is
/// overwritten.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Maximum number of whitespace delimited tokens in one line, including the command
/// name.
pub const DEFAULT_MAX_TOKENS: usize = 10;

pub const DEFAULT_PROMPT: &str = "\\>$ ";

/// Column at which usage text is wrapped by the `?` built-in.
pub const DEFAULT_HELP_WRAP_WIDTH: usize = 80;

pub const DEFAULT_DISPLAY_TOGGLE_NAME: &str = "echo";

/// Inline size of the token view. Lines with more tokens than this spill to the heap,
/// which can only happen when [`EngineConfig::max_tokens`] is raised above it.
pub const INLINE_TOKEN_COUNT: usize = 16;

/// Configuration for an [`crate::Engine`].
///
/// Missing fields take their default value when deserialized, so a partial JSON
/// document like `{ "prompt": "> " }` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Capacity `N` of the line buffer, and of every history slot.
    pub line_capacity: usize,
    /// Capacity `H` of the history ring.
    pub history_capacity: usize,
    /// Lines with more tokens than this are rejected with a parse error.
    pub max_tokens: usize,
    /// Printed after clear screen at startup and after every accepted or aborted line.
    pub prompt: String,
    /// Which byte values the directional keys use.
    pub key_map: KeyMapKind,
    /// Name of the built-in that turns all screen output on or off. [`None`] leaves
    /// the built-in unregistered.
    pub display_toggle: Option<String>,
    pub help_wrap_width: usize,
    /// Optional line printed by [`crate::Engine::show_title`] right after the screen is
    /// cleared.
    pub banner: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            line_capacity: DEFAULT_LINE_CAPACITY,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            max_tokens: DEFAULT_MAX_TOKENS,
            prompt: DEFAULT_PROMPT.to_string(),
            key_map: KeyMapKind::default(),
            display_toggle: Some(DEFAULT_DISPLAY_TOGGLE_NAME.to_string()),
            help_wrap_width: DEFAULT_HELP_WRAP_WIDTH,
            banner: None,
        }
    }
}

impl EngineConfig {
    /// Clamp every capacity to at least 1, so that the modulo arithmetic in the history
    /// ring and the bounds in the line buffer are always defined.
    #[must_use]
    pub fn validated(mut self) -> Self {
        self.line_capacity = self.line_capacity.max(1);
        self.history_capacity = self.history_capacity.max(1);
        self.max_tokens = self.max_tokens.max(1);
        self.help_wrap_width = self.help_wrap_width.max(1);
        self
    }

    #[must_use]
    pub fn with_line_capacity(mut self, line_capacity: usize) -> Self {
        self.line_capacity = line_capacity;
        self
    }

    #[must_use]
    pub fn with_history_capacity(mut self, history_capacity: usize) -> Self {
        self.history_capacity = history_capacity;
        self
    }

    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    #[must_use]
    pub fn with_key_map(mut self, key_map: KeyMapKind) -> Self {
        self.key_map = key_map;
        self
    }

    #[must_use]
    pub fn with_display_toggle(mut self, name: Option<&str>) -> Self {
        self.display_toggle = name.map(ToString::to_string);
        self
    }

    #[must_use]
    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = Some(banner.into());
        self
    }

    /// Parse a (possibly partial) JSON document into a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON or a field has the wrong
    /// type.
    pub fn try_from_json(json: &str) -> miette::Result<Self> {
        serde_json::from_str::<Self>(json).map_err(|error| {
            miette::miette!(
                code = "r3bl_qcli::config::invalid_json",
                "Could not parse engine configuration: {error}"
            )
        })
    }
}
