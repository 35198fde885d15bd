// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Direction, EscapeLead, KeyMap};

/// How much of an escape sequence has been seen so far. There is no terminal state,
/// the machine runs for as long as bytes keep coming.
///
/// ```text
///            ESC               [
///   Idle ──────────▶ EscSeen ────────▶ CsiSeen
///    ▲  ▲              │ other           │ any byte
///    │  └──────────────┘                 │ (directional byte runs an action)
///    └───────────────────────────────────┘
/// ```
///
/// With a [`EscapeLead::Single`] key map, the lead byte goes straight from `Idle` to
/// `CsiSeen`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EscapeState {
    #[default]
    Idle,
    EscSeen,
    CsiSeen,
}

/// What the engine should do in response to one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// The byte was swallowed as part of an (in progress or malformed) escape sequence.
    Nothing,
    Enter,
    /// Backspace or Delete.
    Erase,
    Tab,
    Move(Direction),
    Insert(u8),
}

#[derive(Debug, Clone)]
pub struct InputStateMachine {
    key_map: KeyMap,
    state: EscapeState,
}

impl InputStateMachine {
    #[must_use]
    pub fn new(key_map: KeyMap) -> Self {
        Self {
            key_map,
            state: EscapeState::Idle,
        }
    }

    #[must_use]
    pub fn state(&self) -> EscapeState { self.state }

    #[must_use]
    pub fn key_map(&self) -> &KeyMap { &self.key_map }

    /// Drop any partially parsed escape sequence.
    pub fn reset(&mut self) { self.state = EscapeState::Idle; }

    /// Consume one byte.
    pub fn step(&mut self, byte: u8) -> InputAction {
        let action = match self.state {
            EscapeState::Idle => self.step_idle(byte),
            EscapeState::EscSeen => {
                self.state = match self.key_map.lead {
                    EscapeLead::Csi { introducer, .. } if byte == introducer => {
                        EscapeState::CsiSeen
                    }
                    _ => EscapeState::Idle,
                };
                InputAction::Nothing
            }
            EscapeState::CsiSeen => {
                self.state = EscapeState::Idle;
                match self.key_map.direction(byte) {
                    Some(direction) => InputAction::Move(direction),
                    None => InputAction::Nothing,
                }
            }
        };

        tracing::trace!(
            message = "input step",
            byte = byte,
            state = ?self.state,
            action = ?action
        );

        action
    }

    fn step_idle(&mut self, byte: u8) -> InputAction {
        match self.key_map.lead {
            EscapeLead::Csi { escape, .. } if byte == escape => {
                self.state = EscapeState::EscSeen;
                return InputAction::Nothing;
            }
            EscapeLead::Single(lead) if byte == lead => {
                self.state = EscapeState::CsiSeen;
                return InputAction::Nothing;
            }
            _ => {}
        }

        let key_map = &self.key_map;
        if byte == key_map.enter {
            InputAction::Enter
        } else if key_map.is_erase(byte) {
            InputAction::Erase
        } else if byte == key_map.tab {
            InputAction::Tab
        } else {
            InputAction::Insert(byte)
        }
    }
}

impl Default for InputStateMachine {
    fn default() -> Self { Self::new(KeyMap::default()) }
}
