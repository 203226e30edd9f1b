//! Line-oriented terminal access.
//!
//! The shell and the editor session only ever need three things from a
//! terminal: read a line, print text, clear the screen. [`Console`] is that
//! seam; [`TermConsole`] is the real terminal and
//! `test_utils::ScriptedConsole` a scripted one for tests.

use crate::error::{JotterError, Result};
use console::Term;
use std::io::{self, BufRead};

pub trait Console {
    /// Read one line without its line terminator. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>>;

    /// Print text as-is (no newline added).
    fn print(&mut self, text: &str) -> Result<()>;

    fn clear_screen(&mut self) -> Result<()>;

    fn println(&mut self, text: &str) -> Result<()> {
        self.print(text)?;
        self.print("\n")
    }
}

/// Console on the process's stdin/stdout.
///
/// Input is read with plain buffered line reads so piped input works the
/// same as interactive input. Bytes that are not valid UTF-8 are replaced
/// with U+FFFD rather than failing the read. Clearing is skipped when stdout
/// is not a terminal.
pub struct TermConsole {
    term: Term,
    stdin: io::Stdin,
}

impl TermConsole {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
            stdin: io::stdin(),
        }
    }
}

impl Default for TermConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TermConsole {
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        let read = self
            .stdin
            .lock()
            .read_until(b'\n', &mut buf)
            .map_err(JotterError::Io)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(decode_line(&buf)))
    }

    fn print(&mut self, text: &str) -> Result<()> {
        self.term.write_str(text).map_err(JotterError::Io)
    }

    fn clear_screen(&mut self) -> Result<()> {
        if !self.term.is_term() {
            return Ok(());
        }
        self.term.clear_screen().map_err(JotterError::Io)
    }
}

fn decode_line(buf: &[u8]) -> String {
    strip_line_ending(String::from_utf8_lossy(buf).into_owned())
}

fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}
