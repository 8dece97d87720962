//! Line-oriented console I/O.
//!
//! `Console` wraps any reader and writer so the game loop runs the same
//! against stdin/stdout and against in-memory buffers in tests. Malformed
//! numbers are never an error: they come back as `NumberInput::Invalid`.

use std::io::{self, BufRead, Write};

/// Result of reading a number from the console.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberInput {
    Value(i64),
    /// The line did not hold an integer.
    Invalid,
    /// Input is exhausted.
    Eof,
}

impl NumberInput {
    /// The value as an index, if it is a non-negative integer.
    #[must_use]
    pub fn as_index(self) -> Option<usize> {
        match self {
            NumberInput::Value(v) => usize::try_from(v).ok(),
            _ => None,
        }
    }
}

/// Parse a trimmed integer.
///
/// ```
/// use territory_war::console::parse_number;
///
/// assert_eq!(parse_number(" 12\n"), Some(12));
/// assert_eq!(parse_number("-3"), Some(-3));
/// assert_eq!(parse_number("two"), None);
/// ```
#[must_use]
pub fn parse_number(line: &str) -> Option<i64> {
    line.trim().parse().ok()
}

/// A reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write text as-is and flush.
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    /// Write a line.
    pub fn println(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Read one line without its line ending. `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(|c: char| c == '\r' || c == '\n').len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Read one line as an integer.
    pub fn read_number(&mut self) -> io::Result<NumberInput> {
        Ok(match self.read_line()? {
            None => NumberInput::Eof,
            Some(line) => parse_number(&line).map_or(NumberInput::Invalid, NumberInput::Value),
        })
    }

    /// Print a prompt, then read a line.
    pub fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.print(prompt)?;
        self.read_line()
    }

    /// Print a prompt, then read an integer.
    pub fn prompt_number(&mut self, prompt: &str) -> io::Result<NumberInput> {
        self.print(prompt)?;
        self.read_number()
    }

    /// Everything written so far.
    #[must_use]
    pub fn output(&self) -> &W {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_read_line_strips_line_endings() {
        let mut c = console("North Island\r\nsecond\n");

        assert_eq!(c.read_line().unwrap().as_deref(), Some("North Island"));
        assert_eq!(c.read_line().unwrap().as_deref(), Some("second"));
        assert_eq!(c.read_line().unwrap(), None);
    }

    #[test]
    fn test_read_number() {
        let mut c = console("3\nabc\n\n  -1 \n");

        assert_eq!(c.read_number().unwrap(), NumberInput::Value(3));
        assert_eq!(c.read_number().unwrap(), NumberInput::Invalid);
        assert_eq!(c.read_number().unwrap(), NumberInput::Invalid);
        assert_eq!(c.read_number().unwrap(), NumberInput::Value(-1));
        assert_eq!(c.read_number().unwrap(), NumberInput::Eof);
    }

    #[test]
    fn test_as_index() {
        assert_eq!(NumberInput::Value(4).as_index(), Some(4));
        assert_eq!(NumberInput::Value(-4).as_index(), None);
        assert_eq!(NumberInput::Invalid.as_index(), None);
        assert_eq!(NumberInput::Eof.as_index(), None);
    }

    #[test]
    fn test_prompt_writes_before_reading() {
        let mut c = console("7\n");

        assert_eq!(c.prompt_number("Choice: ").unwrap(), NumberInput::Value(7));
        assert_eq!(String::from_utf8_lossy(c.output()), "Choice: ");
    }
}
