//! Line-oriented prompting over an injectable input and output.
//!
//! The interactive session never touches stdin or stdout directly; it reads
//! through a [`Prompter`] so that tests can drive it with scripted input.

use std::io::{self, BufRead, Write};

/// The outcome of asking for a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// The user entered a whole number.
    Number(i64),
    /// The user entered something that is not a whole number.
    Invalid,
    /// The input has ended.
    Closed,
}

/// Reads answers from `input` and writes prompts to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter over the given input and output.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes a line of text and flushes it.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Writes an empty line.
    pub fn blank(&mut self) -> io::Result<()> {
        self.say("")
    }

    /// Reads one line, trimmed. Returns `None` at end of input.
    ///
    /// Bytes that are not valid UTF-8 are replaced with `U+FFFD`.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self
            .read_bytes()?
            .map(|bytes| String::from_utf8_lossy(&bytes).trim().to_string()))
    }

    /// Prints `prompt` and reads a single answer.
    pub fn ask_number(&mut self, prompt: &str) -> io::Result<Reply> {
        self.say(prompt)?;
        self.read_number()
    }

    /// Prints `prompt`, then keeps reading until a whole number is entered,
    /// printing `retry` after each invalid answer.
    ///
    /// Returns `None` if the input ends first.
    pub fn ask_number_until_valid(
        &mut self,
        prompt: &str,
        retry: &str,
    ) -> io::Result<Option<i64>> {
        if !prompt.is_empty() {
            self.say(prompt)?;
        }

        loop {
            match self.read_number()? {
                Reply::Number(value) => return Ok(Some(value)),
                Reply::Invalid => self.say(retry)?,
                Reply::Closed => return Ok(None),
            }
        }
    }

    /// Returns the output writer.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    fn read_number(&mut self) -> io::Result<Reply> {
        Ok(match self.read_bytes()? {
            None => Reply::Closed,
            Some(bytes) => std::str::from_utf8(&bytes)
                .ok()
                .and_then(|line| line.trim().parse().ok())
                .map_or(Reply::Invalid, Reply::Number),
        })
    }

    fn read_bytes(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Ok(None);
        }
        Ok(Some(bytes))
    }
}
