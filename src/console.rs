//! Retrying typed input from a console-style source.
//!
//! A [`Prompter`] pairs one input source with one prompt sink, both owned for
//! the prompter's whole life. Each read writes the prompt, blocks on a line
//! of input, and parses its first whitespace-delimited token; a malformed
//! token discards the rest of the line and re-prompts. By default the loop
//! ends only at end-of-input; [`Prompter::with_attempt_limit`] puts a hard
//! cap on malformed attempts for non-interactive callers.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use tracing::debug;

use crate::error::{Error, Result};

pub struct Prompter<R, W> {
    input: R,
    output: W,
    max_attempts: Option<usize>,
}

impl Prompter<BufReader<Stdin>, Stdout> {
    /// A prompter over the process's standard input and output.
    pub fn stdin() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            max_attempts: None,
        }
    }

    /// Caps the number of malformed inputs tolerated per read; once the cap
    /// is hit the read returns [`Error::RetriesExhausted`] instead of
    /// prompting again.
    pub fn with_attempt_limit(mut self, attempts: usize) -> Self {
        self.max_attempts = Some(attempts);
        self
    }

    /// Reads one integer, re-prompting on malformed input.
    pub fn read_int(&mut self, prompt: &str) -> Result<i64> {
        self.read_value(prompt, |token| token.parse().ok())
    }

    /// Reads one boolean (`true`/`false`, case-insensitive), re-prompting on
    /// malformed input.
    pub fn read_bool(&mut self, prompt: &str) -> Result<bool> {
        self.read_value(prompt, |token| token.to_ascii_lowercase().parse().ok())
    }

    /// Reads one floating-point number, re-prompting on malformed input.
    pub fn read_float(&mut self, prompt: &str) -> Result<f64> {
        self.read_value(prompt, |token| token.parse().ok())
    }

    fn read_value<T>(&mut self, prompt: &str, parse: impl Fn(&str) -> Option<T>) -> Result<T> {
        let mut attempts = 0;
        loop {
            if let Some(limit) = self.max_attempts {
                if attempts >= limit {
                    return Err(Error::RetriesExhausted { attempts });
                }
            }
            self.output
                .write_all(prompt.as_bytes())
                .and_then(|_| self.output.flush())
                .map_err(|e| Error::Console { source: e })?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .map_err(|e| Error::Console { source: e })?;
            if read == 0 {
                return Err(Error::InputClosed);
            }

            // First token only; the rest of the line is discarded whether or
            // not the parse succeeds.
            match line.split_whitespace().next().and_then(&parse) {
                Some(value) => return Ok(value),
                None => {
                    debug!("Malformed input {:?}, prompting again", line.trim_end());
                    attempts += 1;
                }
            }
        }
    }

    /// Hands back the input and output handles, ending the prompter's
    /// ownership of them.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Consumes the prompter and releases both handles. Reads after closing
    /// are a compile error rather than undefined behavior.
    pub fn close(self) {}
}
