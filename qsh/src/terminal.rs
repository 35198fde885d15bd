// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Glue between a raw mode terminal and the engine. None of this is needed to use the
//! engine on a device that hands out bytes on its own (a UART, a socket, a test).

use crate::Shell;
use r3bl_qcli::{CLEAR_TO_END_OF_SCREEN, ERASE_ENTIRE_LINE, ExecError};
use std::{io::{self, Read, Write},
          sync::{atomic::{AtomicBool, Ordering},
                 mpsc::{self, Receiver, RecvTimeoutError}},
          thread::{self, JoinHandle},
          time::Duration};

/// How long [`run_session`] waits for a byte before checking the stop flag again.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(5);

/// `Ctrl+C` in raw mode.
pub const INTERRUPT: u8 = 0x03;

/// Many terminals send DEL for the Backspace key. The engine expects BS.
pub const DEL: u8 = 0x7F;
pub const BACKSPACE: u8 = 0x08;

pub const FAREWELL: &str = " \r\n#! qsh input thread closed !\r\n\r\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Interrupted,
    InputClosed,
    Stopped,
}

/// Raw mode stays on while this is alive.
#[derive(Debug)]
pub struct RawModeGuard;

impl RawModeGuard {
    /// # Errors
    ///
    /// Returns an error if the terminal can't be put in raw mode.
    pub fn new() -> io::Result<Self> {
        crossterm::terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(error) = crossterm::terminal::disable_raw_mode() {
            // % is Display, ? is Debug.
            tracing::error!(message = "Could not disable raw mode", error = %error);
        }
    }
}

/// Read `input` one byte at a time on a dedicated thread. The channel closes when
/// `input` reaches end of file, fails, or the receiver is dropped.
pub fn spawn_input_thread(
    mut input: impl Read + Send + 'static,
) -> (Receiver<u8>, JoinHandle<()>) {
    let (sender, receiver) = mpsc::channel();
    let handle = thread::spawn(move || {
        let mut byte = [0_u8; 1];
        loop {
            match input.read(&mut byte) {
                Ok(0) => break,
                Ok(_) => {
                    if sender.send(byte[0]).is_err() {
                        break;
                    }
                }
                Err(error) if error.kind() == io::ErrorKind::Interrupted => {}
                Err(error) => {
                    tracing::warn!(message = "Input thread stopped", error = %error);
                    break;
                }
            }
        }
    });
    (receiver, handle)
}

/// Show the title, then feed every byte from `input` into `shell` until `Ctrl+C`, the
/// channel closes, or `stop` is set.
///
/// # Errors
///
/// Returns the sink's error.
pub fn run_session<W: Write>(
    shell: &mut Shell<W>,
    input: &Receiver<u8>,
    stop: &AtomicBool,
) -> io::Result<SessionEnd> {
    shell.title()?;

    loop {
        if stop.load(Ordering::Relaxed) {
            return Ok(SessionEnd::Stopped);
        }

        let byte = match input.recv_timeout(POLL_TIMEOUT) {
            Ok(byte) => byte,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => return Ok(SessionEnd::InputClosed),
        };

        match byte {
            INTERRUPT => {
                let sink = shell.engine_mut().sink_mut();
                write!(sink, "{ERASE_ENTIRE_LINE}{CLEAR_TO_END_OF_SCREEN}{FAREWELL}")?;
                sink.flush()?;
                tracing::debug!(message = "Session interrupted");
                return Ok(SessionEnd::Interrupted);
            }
            DEL => shell.feed(BACKSPACE)?,
            other => shell.feed(other)?,
        };
    }
}

/// Process exit code for a failed `--exec` line.
#[must_use]
pub fn exec_exit_code(error: &ExecError) -> u8 {
    match error {
        ExecError::Command(error) => {
            u8::try_from(error.code().unsigned_abs()).unwrap_or(u8::MAX)
        }
        ExecError::Parse(_) => 2,
        ExecError::NotFound(_) => 127,
        ExecError::IO(_) => 74,
    }
}
