// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Byte values of the keys the [`crate::InputStateMachine`] reacts to.
//!
//! Terminals disagree on how the directional keys are encoded. A conventional ANSI
//! terminal sends `ESC [ A` for Up, while a legacy console sends a single lead byte
//! `0xE0` followed by `H`. Instead of choosing one of these at build time, the engine
//! takes a [`KeyMap`] when it is constructed.

use crate::{CSI_INTRODUCER, ESC};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Named [`KeyMap`] presets. This is what configuration files and command line flags
/// refer to.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum KeyMapKind {
    /// `ESC [` followed by `A` / `B` / `C` / `D`.
    #[default]
    Ansi,
    /// A single `0xE0` lead byte followed by `H` / `P` / `M` / `K`.
    LegacyConsole,
}

/// How a directional key sequence starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeLead {
    /// Two byte control sequence introducer, eg: `ESC [`.
    Csi { escape: u8, introducer: u8 },
    /// A single byte that is immediately followed by the directional byte.
    Single(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Right,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMap {
    pub lead: EscapeLead,
    pub up: u8,
    pub down: u8,
    pub right: u8,
    pub left: u8,
    pub enter: u8,
    pub backspace: u8,
    pub delete: u8,
    pub tab: u8,
}

impl KeyMap {
    pub const ANSI: KeyMap = KeyMap {
        lead: EscapeLead::Csi {
            escape: ESC,
            introducer: CSI_INTRODUCER,
        },
        up: b'A',
        down: b'B',
        right: b'C',
        left: b'D',
        enter: b'\r',
        backspace: 0x08,
        delete: 0x7F,
        tab: b'\t',
    };

    pub const LEGACY_CONSOLE: KeyMap = KeyMap {
        lead: EscapeLead::Single(0xE0),
        up: b'H',
        down: b'P',
        right: b'M',
        left: b'K',
        ..KeyMap::ANSI
    };

    #[must_use]
    pub const fn from_kind(kind: KeyMapKind) -> Self {
        match kind {
            KeyMapKind::Ansi => Self::ANSI,
            KeyMapKind::LegacyConsole => Self::LEGACY_CONSOLE,
        }
    }

    /// Which direction (if any) `byte` encodes, once the lead of a sequence has been
    /// consumed.
    #[must_use]
    pub const fn direction(&self, byte: u8) -> Option<Direction> {
        if byte == self.up {
            Some(Direction::Up)
        } else if byte == self.down {
            Some(Direction::Down)
        } else if byte == self.right {
            Some(Direction::Right)
        } else if byte == self.left {
            Some(Direction::Left)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn is_erase(&self, byte: u8) -> bool {
        byte == self.backspace || byte == self.delete
    }
}

impl Default for KeyMap {
    fn default() -> Self { Self::ANSI }
}

impl From<KeyMapKind> for KeyMap {
    fn from(kind: KeyMapKind) -> Self { Self::from_kind(kind) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    #[test_case(KeyMap::ANSI, b'A', Some(Direction::Up))]
    #[test_case(KeyMap::ANSI, b'B', Some(Direction::Down))]
    #[test_case(KeyMap::ANSI, b'C', Some(Direction::Right))]
    #[test_case(KeyMap::ANSI, b'D', Some(Direction::Left))]
    #[test_case(KeyMap::ANSI, b'H', None)]
    #[test_case(KeyMap::LEGACY_CONSOLE, b'H', Some(Direction::Up))]
    #[test_case(KeyMap::LEGACY_CONSOLE, b'P', Some(Direction::Down))]
    #[test_case(KeyMap::LEGACY_CONSOLE, b'M', Some(Direction::Right))]
    #[test_case(KeyMap::LEGACY_CONSOLE, b'K', Some(Direction::Left))]
    #[test_case(KeyMap::LEGACY_CONSOLE, b'A', None)]
    fn test_direction(key_map: KeyMap, byte: u8, expected: Option<Direction>) {
        assert_eq!(key_map.direction(byte), expected);
    }

    #[test]
    fn test_legacy_console_shares_control_keys() {
        let legacy = KeyMap::LEGACY_CONSOLE;
        assert_eq!(legacy.enter, KeyMap::ANSI.enter);
        assert_eq!(legacy.tab, KeyMap::ANSI.tab);
        assert!(legacy.is_erase(0x08));
        assert!(legacy.is_erase(0x7F));
        assert_eq!(legacy.lead, EscapeLead::Single(0xE0));
    }

    #[test]
    fn test_kind_round_trips_through_strings() {
        for kind in KeyMapKind::iter() {
            assert_eq!(KeyMapKind::from_str(kind.as_ref()).unwrap(), kind);
        }
        assert_eq!(KeyMapKind::LegacyConsole.to_string(), "legacy_console");
        assert_eq!(KeyMap::from(KeyMapKind::Ansi), KeyMap::ANSI);
    }
}
