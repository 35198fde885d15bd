// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Circular store of accepted lines with Up / Down recall.
//!
//! Two cursors move independently over the same ring of `capacity` slots:
//!
//! - The write cursor is the slot the next [`HistoryStore::record`] overwrites.
//! - The recall cursor (and the recall depth, ie: how many steps back from the newest
//!   entry it currently is) is only used while the user browses with Up / Down. It is
//!   put back on the write cursor every time a line is accepted or the line buffer is
//!   reset.
//!
//! All cursor arithmetic is modulo the configured capacity. Slots are cleared and
//! refilled in place, so their allocations are reused once the ring is full.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryStore {
    slots: Vec<Vec<u8>>,
    write_cursor: usize,
    count: usize,
    recall_cursor: usize,
    recall_depth: usize,
}

impl HistoryStore {
    /// `capacity` is clamped to at least one slot. Each slot reserves `line_capacity`
    /// bytes up front.
    #[must_use]
    pub fn new(capacity: usize, line_capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: (0..capacity)
                .map(|_| Vec::with_capacity(line_capacity))
                .collect(),
            write_cursor: 0,
            count: 0,
            recall_cursor: 0,
            recall_depth: 0,
        }
    }

    /// Store `line` unless it is equal to the most recent entry. Returns `true` if the
    /// line was stored. Once the ring is full the oldest entry is overwritten.
    ///
    /// The recall state is left alone, call [`Self::reset_recall`] afterwards.
    pub fn record(&mut self, line: &[u8]) -> bool {
        if self.most_recent() == Some(line) {
            return false;
        }
        let capacity = self.capacity();
        let slot = &mut self.slots[self.write_cursor];
        slot.clear();
        slot.extend_from_slice(line);
        self.write_cursor = (self.write_cursor + 1) % capacity;
        self.count = (self.count + 1).min(capacity);
        true
    }

    #[must_use]
    pub fn most_recent(&self) -> Option<&[u8]> { self.get(0) }

    /// Entry `index` steps back from the newest one, so `get(0)` is the newest.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        if index >= self.count {
            return None;
        }
        let capacity = self.capacity();
        let slot = (self.write_cursor + capacity - 1 - index) % capacity;
        Some(self.slots[slot].as_slice())
    }

    pub fn iter_newest_first(&self) -> impl Iterator<Item = &[u8]> {
        (0..self.count).filter_map(|index| self.get(index))
    }

    /// Up: step one entry further back and return it. Returns [`None`] once every
    /// stored entry has been visited, leaving the recall state unchanged.
    pub fn recall_prev(&mut self) -> Option<&[u8]> {
        if self.recall_depth >= self.count {
            return None;
        }
        let capacity = self.capacity();
        self.recall_cursor = (self.recall_cursor + capacity - 1) % capacity;
        self.recall_depth += 1;
        Some(self.slots[self.recall_cursor].as_slice())
    }

    /// Down: step one entry forward (towards the newest) and return it. Returns
    /// [`None`] when there is nothing newer than the entry currently recalled, in
    /// which case the recall state is reset and the caller should show an empty line.
    pub fn recall_next(&mut self) -> Option<&[u8]> {
        if self.recall_depth <= 1 {
            self.reset_recall();
            return None;
        }
        self.recall_cursor = (self.recall_cursor + 1) % self.capacity();
        self.recall_depth -= 1;
        Some(self.slots[self.recall_cursor].as_slice())
    }

    pub fn reset_recall(&mut self) {
        self.recall_cursor = self.write_cursor;
        self.recall_depth = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize { self.count }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.count == 0 }

    #[must_use]
    pub fn capacity(&self) -> usize { self.slots.len() }

    #[must_use]
    pub fn write_cursor(&self) -> usize { self.write_cursor }

    #[must_use]
    pub fn recall_cursor(&self) -> usize { self.recall_cursor }

    #[must_use]
    pub fn recall_depth(&self) -> usize { self.recall_depth }
}
