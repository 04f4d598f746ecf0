//! Line-oriented prompting over any reader/writer pair.

use std::io::{BufRead, Write};

use anyhow::Context;

/// Raised when the input stream ends while a prompt is waiting.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("input closed")]
pub(crate) struct InputClosed;

#[derive(Debug)]
pub(crate) struct Console<R, W> {
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: BufRead,
    W: Write,
{
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub(crate) fn out(&mut self) -> &mut W {
        &mut self.output
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }

    /// Shows `prompt` and reads one line with surrounding whitespace removed.
    pub(crate) fn line(&mut self, prompt: &str) -> anyhow::Result<String> {
        write!(self.output, "{prompt}").context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;

        let mut buf = String::new();
        let read = self
            .input
            .read_line(&mut buf)
            .context("Failed to read input")?;
        if read == 0 {
            return Err(InputClosed.into());
        }
        Ok(buf.trim().to_owned())
    }

    /// Reads a non-negative integer, re-prompting until it is within bounds.
    pub(crate) fn int(
        &mut self,
        prompt: &str,
        min: Option<u32>,
        max: Option<u32>,
    ) -> anyhow::Result<u32> {
        loop {
            let answer = self.line(prompt)?;
            let value = (!answer.is_empty() && answer.bytes().all(|b| b.is_ascii_digit()))
                .then(|| answer.parse::<u32>().ok())
                .flatten();
            let Some(value) = value else {
                writeln!(self.output, "Invalid input. Enter a positive integer.")?;
                continue;
            };
            let too_small = min.is_some_and(|min| value < min);
            let too_large = max.is_some_and(|max| value > max);
            if too_small || too_large {
                writeln!(self.output, "{}", bounds_message(min, max))?;
                continue;
            }
            return Ok(value);
        }
    }

    /// Reads a `y`/`n` answer, re-prompting on anything else.
    pub(crate) fn yes_no(&mut self, prompt: &str) -> anyhow::Result<bool> {
        loop {
            match self.line(prompt)?.to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => writeln!(self.output, "Invalid input. Enter 'y' or 'n'.")?,
            }
        }
    }
}

fn bounds_message(min: Option<u32>, max: Option<u32>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("Value must be between {min} and {max}."),
        (Some(min), None) => format!("Value must be at least {min}."),
        (None, Some(max)) => format!("Value must be at most {max}."),
        (None, None) => String::new(),
    }
}
