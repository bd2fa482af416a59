// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Line-oriented prompting over arbitrary reader/writer pairs.

use std::io::{self, BufRead, Write};

/// Reads answers from `input`, writing prompts and messages to `output`.
///
/// Every read returns `Ok(None)` at end of input.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `prompt` and read one trimmed line.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt until `parse` accepts the answer.
    ///
    /// Rejected answers print the parser's message and prompt again.
    pub fn ask<T, F>(&mut self, prompt: &str, parse: F) -> io::Result<Option<T>>
    where
        F: Fn(&str) -> Result<T, String>,
    {
        loop {
            let Some(answer) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(msg) => writeln!(self.output, "{}", msg)?,
            }
        }
    }

    /// Read a finite number greater than zero.
    pub fn ask_positive_f64(&mut self, prompt: &str) -> io::Result<Option<f64>> {
        self.ask(prompt, |s| match s.parse::<f64>() {
            Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
            _ => Err("Please enter a positive number.".to_string()),
        })
    }

    pub fn ask_age(&mut self, prompt: &str) -> io::Result<Option<u32>> {
        self.ask(prompt, |s| match s.parse::<u32>() {
            Ok(v) if (1..=120).contains(&v) => Ok(v),
            _ => Err("Please enter an age between 1 and 120.".to_string()),
        })
    }

    pub fn ask_non_empty(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.ask(prompt, |s| {
            if s.is_empty() {
                Err("A value is required.".to_string())
            } else {
                Ok(s.to_string())
            }
        })
    }
}
