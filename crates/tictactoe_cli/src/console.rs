//! Line-oriented console the game talks through.

use super::PlayError;
use std::io::{BufRead, Write};
use tracing::trace;

/// Borrowed input and output streams for one play session.
///
/// With echo on, every line read is written back to the output so that
/// scripted sessions produce a readable transcript.
pub struct Console<'a> {
    input: &'a mut dyn BufRead,
    output: &'a mut dyn Write,
    echo: bool,
}

impl<'a> Console<'a> {
    /// Creates a console over the given streams.
    pub fn new(input: &'a mut dyn BufRead, output: &'a mut dyn Write) -> Self {
        Self {
            input,
            output,
            echo: false,
        }
    }

    /// Enables or disables echoing of input lines.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Reads one line without its line ending; `None` at end of input.
    ///
    /// Bytes that are not UTF-8 become replacement characters, so a
    /// garbled line reaches the caller as unparseable text.
    pub fn read_line(&mut self) -> Result<Option<String>, PlayError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            trace!("Input exhausted");
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf)
            .trim_end_matches(['\r', '\n'])
            .to_string();
        if self.echo {
            writeln!(self.output, "{}", line)?;
        }
        Ok(Some(line))
    }

    /// Writes `text` followed by a newline.
    pub fn say(&mut self, text: &str) -> Result<(), PlayError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Writes `text` without a newline and flushes, for prompts.
    pub fn prompt(&mut self, text: &str) -> Result<(), PlayError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }
}
