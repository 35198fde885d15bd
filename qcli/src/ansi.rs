// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The exact terminal control bytes the engine writes to its sink. These are the
//! single step ANSI CSI sequences, so that every edit can be mirrored on screen with a
//! fixed, tiny amount of output.

/// `ESC`, the first byte of every CSI sequence.
pub const ESC: u8 = 0x1B;

/// Second byte of the CSI (`ESC [`).
pub const CSI_INTRODUCER: u8 = b'[';

pub const CSI_START: &str = "\x1b[";

/// CUB 1: move the cursor back by one column.
pub const CURSOR_BACK: &str = "\x1b[1D";

/// CUF 1: move the cursor forward by one column.
pub const CURSOR_FORWARD: &str = "\x1b[1C";

/// ICH 1: open a blank cell at the cursor, shifting the rest of the row right.
pub const INSERT_CHAR: &str = "\x1b[1@";

/// DCH 1: delete the cell at the cursor, shifting the rest of the row left.
pub const DELETE_CHAR: &str = "\x1b[1P";

/// Return to column 0, then EL 0 (erase to end of line).
pub const CLEAR_LINE: &str = "\r\x1b[K";

/// CUP home, then ED 2 (erase entire display).
pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

/// Erase the last character of the line when the cursor is already at the end.
pub const ERASE_LAST_CHAR: &str = "\x08 \x08";

pub const CRLF: &str = "\r\n";

/// EL 2: erase the whole current line. Used by the interactive shell on exit.
pub const ERASE_ENTIRE_LINE: &str = "\x1b[2K";

/// CUP home, then ED 0 (erase to end of display). Used by the interactive shell on exit.
pub const CLEAR_TO_END_OF_SCREEN: &str = "\x1b[H\x1b[J";
