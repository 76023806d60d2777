use std::io::{self, Stdout, Write};

use crossterm::Command;
use crossterm::cursor::MoveTo;

/// Buffered cursor-control sink driven by the canvas.
///
/// Everything between [`begin`](TerminalWriter::begin) and
/// [`flush`](TerminalWriter::flush) accumulates in a pending buffer whose
/// tail can be trimmed, so the canvas can take back characters it decides
/// not to send.
pub trait TerminalWriter {
    /// Enter buffered mode. Drops anything left pending from an aborted frame.
    fn begin(&mut self);

    /// Queue a move to 1-based column `x`, row `y`.
    fn goto(&mut self, x: u16, y: u16);

    /// Queue one character at the current cursor position.
    fn write_char(&mut self, ch: char);

    /// Drop the last `n` queued characters (saturating at empty).
    fn truncate_pending(&mut self, n: usize);

    /// Send the pending buffer in one write, clear it, and return the
    /// number of bytes sent.
    ///
    /// # Errors
    /// Returns the underlying I/O error.
    fn flush(&mut self) -> io::Result<usize>;
}

/// Byte length of the cursor-position sequence `ESC [ y ; x H` that
/// [`TerminalWriter::goto`] queues for (x, y).
///
/// # Example
/// ```
/// use fc_render::writer::goto_sequence_len;
/// assert_eq!(goto_sequence_len(1, 1), 6);
/// assert_eq!(goto_sequence_len(120, 40), 9);
/// ```
#[inline]
#[must_use]
pub const fn goto_sequence_len(x: u16, y: u16) -> usize {
    4 + decimal_digits(x) + decimal_digits(y)
}

const fn decimal_digits(mut n: u16) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// ANSI writer backed by crossterm commands.
///
/// # Example
/// ```
/// use fc_render::writer::{AnsiWriter, TerminalWriter};
/// let mut w = AnsiWriter::new(Vec::new());
/// w.begin();
/// w.goto(3, 2);
/// w.write_char('x');
/// assert_eq!(w.flush().unwrap(), 7);
/// assert_eq!(w.into_inner(), b"\x1b[2;3Hx");
/// ```
#[derive(Debug)]
pub struct AnsiWriter<W: Write> {
    out: W,
    pending: String,
}

impl AnsiWriter<Stdout> {
    /// Writer on the process's standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> AnsiWriter<W> {
    /// Wrap an output stream.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self {
            out,
            pending: String::new(),
        }
    }

    /// Text queued since the last flush.
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Borrow the wrapped output.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Unwrap the output. Pending text is discarded.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TerminalWriter for AnsiWriter<W> {
    fn begin(&mut self) {
        self.pending.clear();
    }

    fn goto(&mut self, x: u16, y: u16) {
        // Writing into a String cannot fail.
        let _ = MoveTo(x.saturating_sub(1), y.saturating_sub(1)).write_ansi(&mut self.pending);
    }

    #[inline]
    fn write_char(&mut self, ch: char) {
        self.pending.push(ch);
    }

    fn truncate_pending(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        let cut = self
            .pending
            .char_indices()
            .nth_back(n - 1)
            .map_or(0, |(idx, _)| idx);
        self.pending.truncate(cut);
    }

    fn flush(&mut self) -> io::Result<usize> {
        let len = self.pending.len();
        let result = self
            .out
            .write_all(self.pending.as_bytes())
            .and_then(|()| self.out.flush());
        self.pending.clear();
        result.map(|()| len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_len_matches_crossterm() {
        for (x, y) in [(1, 1), (9, 9), (10, 1), (1, 10), (99, 100), (65535, 65535)] {
            let mut s = String::new();
            MoveTo(x - 1, y - 1).write_ansi(&mut s).unwrap();
            assert_eq!(goto_sequence_len(x, y), s.len(), "({x}, {y})");
        }
    }

    #[test]
    fn goto_is_one_based() {
        let mut w = AnsiWriter::new(Vec::new());
        w.goto(1, 1);
        w.goto(12, 7);
        assert_eq!(w.pending(), "\x1b[1;1H\x1b[7;12H");
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        let mut w = AnsiWriter::new(Vec::new());
        w.goto(1, 1);
        for ch in ['a', 'é', '▄', 'b'] {
            w.write_char(ch);
        }
        w.truncate_pending(3);
        assert_eq!(w.pending(), "\x1b[1;1Ha");
        w.truncate_pending(0);
        assert_eq!(w.pending(), "\x1b[1;1Ha");
        w.truncate_pending(100);
        assert_eq!(w.pending(), "");
    }

    #[test]
    fn flush_sends_once_and_clears() {
        let mut w = AnsiWriter::new(Vec::new());
        w.begin();
        w.write_char('a');
        w.write_char('\n');
        assert_eq!(w.flush().unwrap(), 2);
        assert_eq!(w.pending(), "");
        assert_eq!(w.flush().unwrap(), 0);
        assert_eq!(w.get_ref(), b"a\n");
    }

    #[test]
    fn begin_discards_stale_text() {
        let mut w = AnsiWriter::new(Vec::new());
        w.write_char('z');
        w.begin();
        w.write_char('a');
        w.flush().unwrap();
        assert_eq!(w.into_inner(), b"a");
    }
}
