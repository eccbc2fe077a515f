//! Line-based console I/O with validated prompts.
//!
//! Every game talks to the player through a `Console`. Prompts are printed
//! on their own line, answers are read one line at a time, and numeric
//! prompts keep asking until the answer parses and lies in range.
//!
//! ```
//! use std::io::Cursor;
//! use funny_bunny::core::Console;
//!
//! let input = Cursor::new("seven\n9\n4\n");
//! let mut console = Console::new(input, Vec::new());
//!
//! let value: u32 = console
//!     .prompt_int_in_range("Pick:", 1..=6, "Out of range!")
//!     .unwrap();
//! assert_eq!(value, 4);
//! ```

use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::ops::RangeInclusive;
use std::str::FromStr;

use super::error::{InputError, Result};

/// Printed when a numeric prompt gets something that is not a number.
pub const NOT_A_NUMBER: &str = "Please enter a whole number.";

/// Console bound to an input reader and an output writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console over the process' standard input and output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over any reader/writer pair.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line.
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Print an empty line.
    pub fn blank(&mut self) -> Result<()> {
        writeln!(self.output)?;
        Ok(())
    }

    /// Print text verbatim (no newline added).
    pub fn write_raw(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Read one line, without its line terminator.
    ///
    /// Output is flushed first so the prompt is visible before blocking.
    pub fn read_line(&mut self) -> Result<String> {
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Print a prompt and read the answer.
    pub fn prompt_line(&mut self, prompt: &str) -> Result<String> {
        self.say(prompt)?;
        self.read_line()
    }

    /// Ask until the answer parses as a number.
    pub fn prompt_int<T: FromStr>(&mut self, prompt: &str) -> Result<T> {
        loop {
            let answer = self.prompt_line(prompt)?;
            match answer.trim().parse() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    log::debug!("rejected non-numeric answer {answer:?}");
                    self.say(NOT_A_NUMBER)?;
                }
            }
        }
    }

    /// Ask until the answer is a number inside `range`.
    ///
    /// Out-of-range answers print `out_of_range` before asking again.
    pub fn prompt_int_in_range<T>(
        &mut self,
        prompt: &str,
        range: RangeInclusive<T>,
        out_of_range: &str,
    ) -> Result<T>
    where
        T: FromStr + PartialOrd + Display,
    {
        loop {
            let value: T = self.prompt_int(prompt)?;
            if range.contains(&value) {
                return Ok(value);
            }
            log::debug!("rejected {value}, outside {}..={}", range.start(), range.end());
            self.say(out_of_range)?;
        }
    }

    /// Take the reader and writer back.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}
