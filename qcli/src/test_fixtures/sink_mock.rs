// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::{self, Write},
          sync::{Arc, Mutex, MutexGuard, PoisonError,
                 atomic::{AtomicBool, Ordering}}};
use strip_ansi_escapes::strip;

/// A sink that captures every byte written to it.
///
/// You can safely clone this struct, since it only contains [`Arc`]s. Clones share the
/// same buffer, so hand one clone to the [`crate::Engine`] and keep the other to
/// inspect what was written.
#[derive(Debug, Clone, Default)]
pub struct SinkMock {
    pub buffer: Arc<Mutex<Vec<u8>>>,
    fail_writes: Arc<AtomicBool>,
}

impl SinkMock {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Make every subsequent write (on this and all its clones) fail with
    /// [`io::ErrorKind::BrokenPipe`].
    pub fn set_fail_writes(&self, fail: bool) { self.fail_writes.store(fail, Ordering::SeqCst); }

    #[must_use]
    pub fn get_copy_of_buffer(&self) -> Vec<u8> { self.lock().clone() }

    #[must_use]
    pub fn get_copy_of_buffer_as_string(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    #[must_use]
    pub fn get_copy_of_buffer_as_string_strip_ansi(&self) -> String {
        let stripped = strip(self.lock().as_slice());
        String::from_utf8_lossy(&stripped).into_owned()
    }

    pub fn clear(&self) { self.lock().clear(); }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Write for SinkMock {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> { Ok(()) }
}
