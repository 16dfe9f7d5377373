//! Line-oriented console used by the menu and the human player.

use std::io::{self, BufRead, Write};
use tracing::{instrument, trace};

/// Reader/writer pair for the interactive game.
///
/// Generic so tests can script input from a byte slice and capture output
/// in a `Vec<u8>`.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given input and output.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes a line of text.
    pub fn say(&mut self, text: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Writes a prompt (no newline) and reads one line of input.
    ///
    /// The line terminator is stripped. Returns `None` once input is
    /// exhausted.
    #[instrument(skip(self, prompt))]
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            trace!("Input exhausted");
            return Ok(None);
        }
        let line = line.trim_end_matches(['\r', '\n']).to_string();
        trace!(line = %line, "Read input line");
        Ok(Some(line))
    }

    /// Consumes the console, returning input and output.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
