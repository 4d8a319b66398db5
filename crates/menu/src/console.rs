// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Line-oriented terminal access.
//!
//! Menus and prompts only talk to the terminal through [`Console`], so a
//! whole session can be driven from a script of input lines.

use crate::error::MenuError;
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// A line-based terminal.
pub trait Console {
    /// Prints one line of output.
    fn print(&mut self, line: &str);

    /// Shows `prompt` and reads one line, without its line terminator.
    ///
    /// # Errors
    ///
    /// Returns `MenuError::InputClosed` when no more input is available and
    /// `MenuError::Io` if the terminal cannot be read.
    fn read_line(&mut self, prompt: &str) -> Result<String, MenuError>;

    /// Reads a line holding a secret, such as a password.
    ///
    /// Consoles able to hide the input should override this. The default
    /// reads it like any other line.
    ///
    /// # Errors
    ///
    /// See [`Console::read_line`].
    fn read_secret(&mut self, prompt: &str) -> Result<String, MenuError> {
        self.read_line(prompt)
    }
}

/// [`Console`] over the process's stdin and stdout.
///
/// Secrets are read like any other line and are therefore echoed.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    /// Creates a new `StdConsole`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn print(&mut self, line: &str) {
        println!("{line}");
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, MenuError> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;
        drop(stdout);

        let mut line: String = String::new();
        let read: usize = std::io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(MenuError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// [`Console`] that replays queued input lines and records all output.
///
/// Used to drive sessions without a terminal. Once the queue is empty every
/// read fails with `MenuError::InputClosed`.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
    prompts: Vec<String>,
}

impl ScriptedConsole {
    /// Creates a console that will answer reads with `lines`, in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
            prompts: Vec::new(),
        }
    }

    /// Returns every printed line, in order.
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Returns every prompt shown, in order.
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Returns whether some printed line equals `line`.
    #[must_use]
    pub fn printed(&self, line: &str) -> bool {
        self.output.iter().any(|printed| printed == line)
    }

    /// Returns whether some printed line contains `fragment`.
    #[must_use]
    pub fn printed_containing(&self, fragment: &str) -> bool {
        self.output.iter().any(|printed| printed.contains(fragment))
    }

    /// Returns the number of input lines not yet consumed.
    #[must_use]
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn print(&mut self, line: &str) {
        self.output.push(line.to_string());
    }

    fn read_line(&mut self, prompt: &str) -> Result<String, MenuError> {
        self.prompts.push(prompt.to_string());
        self.input.pop_front().ok_or(MenuError::InputClosed)
    }
}
