// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field input helpers shared by every multi-field flow.

use doghouse_menu::{Console, MenuError};
use std::fmt::Display;

/// How to ask for one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Shown before reading.
    pub prompt: &'static str,
    /// Printed, followed by the validation error, when the input is rejected.
    pub error_message: &'static str,
    /// Whether the input is read through [`Console::read_secret`].
    pub secret: bool,
}

impl Field {
    /// A field read in the clear.
    #[must_use]
    pub const fn plain(prompt: &'static str, error_message: &'static str) -> Self {
        Self {
            prompt,
            error_message,
            secret: false,
        }
    }

    /// A field read as a secret.
    #[must_use]
    pub const fn secret(prompt: &'static str, error_message: &'static str) -> Self {
        Self {
            prompt,
            error_message,
            secret: true,
        }
    }

    fn read(&self, console: &mut dyn Console) -> Result<String, MenuError> {
        if self.secret {
            console.read_secret(self.prompt)
        } else {
            console.read_line(self.prompt)
        }
    }

    fn reject(&self, console: &mut dyn Console, error: &dyn Display) {
        console.print(&format!("{}: {error}", self.error_message));
    }
}

/// Prompts for `field` until `parse` accepts the input.
///
/// # Errors
///
/// Returns a `MenuError` only if the console cannot be read.
pub fn read_until_valid<T, E, F>(
    console: &mut dyn Console,
    field: &Field,
    mut parse: F,
) -> Result<T, MenuError>
where
    F: FnMut(&str) -> Result<T, E>,
    E: Display,
{
    loop {
        let input: String = field.read(console)?;
        match parse(&input) {
            Ok(value) => return Ok(value),
            Err(error) => field.reject(console, &error),
        }
    }
}

/// Prompts for `field` once. Rejected input is reported and yields `None`.
///
/// # Errors
///
/// Returns a `MenuError` only if the console cannot be read.
pub fn read_once<T, E, F>(
    console: &mut dyn Console,
    field: &Field,
    parse: F,
) -> Result<Option<T>, MenuError>
where
    F: FnOnce(&str) -> Result<T, E>,
    E: Display,
{
    let input: String = field.read(console)?;
    match parse(&input) {
        Ok(value) => Ok(Some(value)),
        Err(error) => {
            field.reject(console, &error);
            Ok(None)
        }
    }
}

/// Parses the `Y`/`N` answer used for yes-no questions.
///
/// # Errors
///
/// Returns a description of the accepted answers for anything else.
pub fn parse_yes_no(text: &str) -> Result<bool, String> {
    match text {
        "Y" => Ok(true),
        "N" => Ok(false),
        other => Err(format!("'{other}' is not one of Y, N")),
    }
}
