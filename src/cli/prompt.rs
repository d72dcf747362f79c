//! Line-oriented prompting over any reader/writer pair
//!
//! Every `ask*` method returns `Ok(None)` once the input is exhausted so the
//! caller can wind down instead of spinning on an empty stream.

use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::LibraryResult;

/// Shown when a number can't be parsed
pub const INVALID_INTEGER: &str = "Error: Please enter a valid integer!";

/// Shown when a number is outside the accepted range
pub const INVALID_RANGE: &str = "Error: Invalid range. Try again!";

/// Reads answers from `input` and writes prompts to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a full line of output
    pub fn say(&mut self, text: impl AsRef<str>) -> LibraryResult<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    /// Write text as-is, without adding a newline
    pub fn write_raw(&mut self, text: &str) -> LibraryResult<()> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Print `prompt` and read one trimmed line
    pub fn ask(&mut self, prompt: &str) -> LibraryResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask until the answer parses as `T`
    pub fn ask_number<T: FromStr>(&mut self, prompt: &str) -> LibraryResult<Option<T>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match answer.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.say(INVALID_INTEGER)?,
            }
        }
    }

    /// Ask until the answer is an integer inside `range`
    pub fn ask_in_range(
        &mut self,
        prompt: &str,
        range: RangeInclusive<u32>,
    ) -> LibraryResult<Option<u32>> {
        loop {
            let Some(value) = self.ask_number::<u32>(prompt)? else {
                return Ok(None);
            };
            if range.contains(&value) {
                return Ok(Some(value));
            }
            self.say(INVALID_RANGE)?;
        }
    }
}
