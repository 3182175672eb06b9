//! The host I/O adapter: the interpreter's only window onto the outside world.
//!
//! Raw terminal handling is host policy, not LC-3 semantics, so it lives behind a trait: the
//! core CPU loop only ever talks to a `dyn HostIo`, which keeps it runnable against an
//! in-memory mock in tests and against a real terminal in the binary.

use nix::sys::select::{select, FdSet};
use nix::sys::termios::{self, LocalFlags, SetArg, Termios};
use nix::sys::time::{TimeVal, TimeValLike};
use std::io::{self, Read, Write};

/// The three operations the interpreter needs from its environment.
pub trait HostIo {
    /// Non-blocking probe: `Some(byte)` if a character is waiting, `None` otherwise.
    fn try_read_char(&mut self) -> Option<u8>;

    /// Blocks until one byte is available and returns it.
    fn read_char_blocking(&mut self) -> u8;

    /// Synchronously appends `bytes` to the console output.
    fn write_bytes(&mut self, bytes: &[u8]);
}

/// A [`HostIo`] backed by the process's own stdin/stdout, with the terminal put into raw mode
/// (no line buffering, no local echo) for the duration of the interpreter's run.
pub struct TerminalIo {
    original_termios: Termios,
}

impl TerminalIo {
    /// Disables canonical mode and echo on stdin, saving the prior settings to restore on drop.
    pub fn new() -> nix::Result<Self> {
        let original_termios = termios::tcgetattr(libc::STDIN_FILENO)?;

        let mut raw = original_termios.clone();
        raw.local_flags &= !(LocalFlags::ICANON | LocalFlags::ECHO);
        termios::tcsetattr(libc::STDIN_FILENO, SetArg::TCSANOW, &raw)?;

        Ok(Self { original_termios })
    }
}

impl Drop for TerminalIo {
    fn drop(&mut self) {
        let _ = termios::tcsetattr(libc::STDIN_FILENO, SetArg::TCSANOW, &self.original_termios);
    }
}

impl HostIo for TerminalIo {
    fn try_read_char(&mut self) -> Option<u8> {
        let mut readfds = FdSet::new();
        readfds.insert(libc::STDIN_FILENO);

        let ready = select(None, &mut readfds, None, None, &mut TimeVal::zero())
            .map(|count| count > 0)
            .unwrap_or(false);

        if !ready {
            return None;
        }

        let mut buffer = [0u8; 1];
        match io::stdin().read_exact(&mut buffer) {
            Ok(()) => Some(buffer[0]),
            Err(_) => None,
        }
    }

    fn read_char_blocking(&mut self) -> u8 {
        let mut buffer = [0u8; 1];
        match io::stdin().read_exact(&mut buffer) {
            Ok(()) => buffer[0],
            // Treat unexpected EOF on a blocking read as the host having nothing left to offer.
            Err(_) => 0,
        }
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        let mut stdout = io::stdout();
        let _ = stdout.write_all(bytes);
        let _ = stdout.flush();
    }
}
