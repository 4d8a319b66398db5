// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::MenuError;
use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static DESCRIPTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9A-Za-z ;.,_\-]*$").expect("description pattern must compile")
});
#[allow(clippy::expect_used)]
static KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(0|[1-9][0-9]*)$").expect("key pattern must compile"));

/// Text shown as a menu title or next to a menu key.
///
/// 1 to 1000 characters of letters, digits, spaces and `;.,_-`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Description {
    value: String,
}

impl Description {
    /// Creates a new `Description`.
    ///
    /// # Errors
    ///
    /// Returns `MenuError::InvalidDescription` if the value is empty, longer
    /// than 1000 characters, or contains other characters.
    pub fn new(value: &str) -> Result<Self, MenuError> {
        let length: usize = value.chars().count();
        if !(1..=1000).contains(&length) {
            return Err(MenuError::InvalidDescription(format!(
                "must be between 1 and 1000 characters long (got {length})"
            )));
        }
        if !DESCRIPTION_PATTERN.is_match(value) {
            return Err(MenuError::InvalidDescription(format!(
                "'{value}' contains forbidden characters"
            )));
        }
        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Returns the description text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Description {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// The text a user types to pick a menu entry.
///
/// 1 to 10 digits; `0` is the only key allowed to start with a zero.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key {
    value: String,
}

impl Key {
    /// Creates a new `Key`.
    ///
    /// # Errors
    ///
    /// Returns `MenuError::InvalidKey` if the value is not 1 to 10 digits or
    /// has a leading zero.
    pub fn new(value: &str) -> Result<Self, MenuError> {
        if value.is_empty() || value.len() > 10 || !KEY_PATTERN.is_match(value) {
            return Err(MenuError::InvalidKey(format!(
                "'{value}' is not 1 to 10 digits without a leading zero"
            )));
        }
        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Returns the key text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}
