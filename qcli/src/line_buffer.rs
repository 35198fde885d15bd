// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The in-progress command line. Storage is reserved once at construction and never
//! grows, so `0 <= cursor <= len <= capacity` holds after every operation.

use std::fmt;

/// What [`LineBuffer::insert`] did. The engine picks the echo bytes from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The cursor was at the end of the line.
    Appended,
    /// The tail of the line was shifted right to make room.
    Inserted,
    /// The buffer is at capacity, nothing changed.
    Full,
}

/// What [`LineBuffer::delete_before_cursor`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The last byte of the line was removed.
    ErasedAtEnd,
    /// A byte in the middle of the line was removed and the tail shifted left.
    ErasedMidLine,
    /// The cursor is at column 0.
    Nothing,
}

#[derive(Clone, PartialEq, Eq)]
pub struct LineBuffer {
    bytes: Vec<u8>,
    cursor: usize,
    capacity: usize,
}

impl LineBuffer {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
            cursor: 0,
            capacity,
        }
    }

    pub fn insert(&mut self, byte: u8) -> InsertOutcome {
        if self.is_full() {
            return InsertOutcome::Full;
        }
        let outcome = if self.cursor == self.bytes.len() {
            self.bytes.push(byte);
            InsertOutcome::Appended
        } else {
            self.bytes.insert(self.cursor, byte);
            InsertOutcome::Inserted
        };
        self.cursor += 1;
        outcome
    }

    /// Backspace: remove the byte to the left of the cursor.
    pub fn delete_before_cursor(&mut self) -> DeleteOutcome {
        if self.cursor == 0 {
            return DeleteOutcome::Nothing;
        }
        let at_end = self.cursor == self.bytes.len();
        self.cursor -= 1;
        self.bytes.remove(self.cursor);
        if at_end {
            DeleteOutcome::ErasedAtEnd
        } else {
            DeleteOutcome::ErasedMidLine
        }
    }

    /// Returns `false` if the cursor is already at column 0.
    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Returns `false` if the cursor is already at the end of the line.
    pub fn move_right(&mut self) -> bool {
        if self.cursor == self.bytes.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Replace the whole content, truncated to capacity, and put the cursor at the end.
    pub fn replace(&mut self, content: &[u8]) {
        let len = content.len().min(self.capacity);
        self.bytes.clear();
        self.bytes.extend_from_slice(&content[..len]);
        self.cursor = len;
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
        self.cursor = 0;
    }

    /// Move the content out and leave the line empty. Hand the storage back with
    /// [`LineBuffer::recycle`] to keep the allocation.
    pub fn take(&mut self) -> Vec<u8> {
        self.cursor = 0;
        std::mem::take(&mut self.bytes)
    }

    /// Reuse `storage` (cleared) unless something was typed since [`LineBuffer::take`].
    pub fn recycle(&mut self, mut storage: Vec<u8>) {
        if self.bytes.is_empty() {
            storage.clear();
            self.bytes = storage;
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] { &self.bytes }

    /// Bytes from the cursor to the end of the line.
    #[must_use]
    pub fn tail(&self) -> &[u8] { &self.bytes[self.cursor..] }

    #[must_use]
    pub fn tail_len(&self) -> usize { self.bytes.len() - self.cursor }

    #[must_use]
    pub fn len(&self) -> usize { self.bytes.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.bytes.is_empty() }

    #[must_use]
    pub fn is_full(&self) -> bool { self.bytes.len() >= self.capacity }

    #[must_use]
    pub fn cursor(&self) -> usize { self.cursor }

    #[must_use]
    pub fn capacity(&self) -> usize { self.capacity }
}

impl fmt::Debug for LineBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineBuffer")
            .field("content", &String::from_utf8_lossy(&self.bytes))
            .field("cursor", &self.cursor)
            .field("capacity", &self.capacity)
            .finish()
    }
}
