// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Account credentials: usernames, passwords, emails and session tokens.

use crate::error::DomainError;
use crate::validation::{check_length, check_pattern, compile};
use regex::Regex;
use std::sync::LazyLock;

static USERNAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Za-z0-9]*$"));
static PASSWORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Za-z0-9@!#]*$"));
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^([A-Za-z0-9+_.\-]+@([A-Za-z0-9]+(\.[A-Za-z0-9]+)?)+)?$")
});
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9a-z]*$"));

/// A login name.
///
/// Between 2 and 30 ASCII letters or digits.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Username {
    value: String,
}

impl Username {
    /// Creates a new `Username`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUsername` if the value is not 2 to 30
    /// alphanumeric characters.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        check_length(value, 2, 30).map_err(DomainError::InvalidUsername)?;
        check_pattern(
            value,
            &USERNAME_PATTERN,
            "only letters and digits are allowed",
        )
        .map_err(DomainError::InvalidUsername)?;
        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Returns the username value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// An account password.
///
/// The value never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Password {
    value: String,
}

impl Password {
    /// Creates a new `Password`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPassword` if the value is not 8 to 30
    /// characters drawn from letters, digits, `@`, `!` and `#`.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        check_length(value, 8, 30).map_err(DomainError::InvalidPassword)?;
        check_pattern(
            value,
            &PASSWORD_PATTERN,
            "only letters, digits, '@', '!' and '#' are allowed",
        )
        .map_err(DomainError::InvalidPassword)?;
        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Returns the password value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(****)")
    }
}

/// An optional contact email.
///
/// The empty value means "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Email {
    value: String,
}

impl Email {
    /// Creates a new `Email`. An empty string yields the default value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidEmail` if the value is longer than 320
    /// characters or is not of the form `local@domain`.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        check_length(value, 0, 320).map_err(DomainError::InvalidEmail)?;
        check_pattern(value, &EMAIL_PATTERN, "expected the form local@domain")
            .map_err(DomainError::InvalidEmail)?;
        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Returns the email value, empty when not provided.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns whether no email was provided.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.value.is_empty()
    }
}

/// A backend session token.
///
/// The default value is a well-formed sentinel meaning "not logged in".
/// Equality and hashing are by value; `Debug` hides the token.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token {
    value: String,
}

impl Token {
    /// The sentinel value held while no user is logged in.
    pub const NOT_LOGGED_IN: &'static str = "notloggedtoken00000000000000000000000000";

    /// Creates a new `Token`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidToken` unless the value is exactly 40
    /// characters of lowercase letters and digits.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        check_length(value, 40, 40).map_err(DomainError::InvalidToken)?;
        check_pattern(
            value,
            &TOKEN_PATTERN,
            "only lowercase letters and digits are allowed",
        )
        .map_err(DomainError::InvalidToken)?;
        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Returns the token value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns whether this is the "not logged in" sentinel.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.value == Self::NOT_LOGGED_IN
    }
}

impl Default for Token {
    fn default() -> Self {
        Self {
            value: String::from(Self::NOT_LOGGED_IN),
        }
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_default() {
            f.write_str("Token(not logged in)")
        } else {
            f.write_str("Token(****)")
        }
    }
}
