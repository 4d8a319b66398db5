// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised while constructing domain values.
///
/// Every variant names the field or rule that was violated so that callers
/// can surface a specific message and re-prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Username is too short, too long or not alphanumeric.
    InvalidUsername(String),
    /// Password length or character set is invalid.
    InvalidPassword(String),
    /// Email does not look like `local@domain`.
    InvalidEmail(String),
    /// Session token is not 40 lowercase alphanumeric characters.
    InvalidToken(String),
    /// Dog identifier is negative or not a number.
    InvalidDogId(String),
    /// Dog name is not capitalised letters.
    InvalidDogname(String),
    /// Breed is not part of the allowed catalog.
    UnknownBreed {
        /// The rejected breed.
        value: String,
        /// The closest allowed breeds, best first.
        suggestions: Vec<String>,
    },
    /// Sex is neither `M` nor `F`.
    InvalidSex(String),
    /// Date text is not `YYYY-MM-DD` or names an impossible day.
    DateWrongFormat {
        /// The text that failed to parse.
        input: String,
    },
    /// Date lies after today.
    DateInFuture {
        /// The rejected date.
        date: time::Date,
        /// The reference day used for the check.
        today: time::Date,
    },
    /// Dog description is too long or contains forbidden characters.
    InvalidDogDescription(String),
    /// Estimated adult size is not one of the known sizes.
    InvalidEstimatedAdultSize(String),
    /// Picture URL does not point at the image host.
    InvalidPictureUrl(String),
    /// A dog cannot enter the shelter before it was born.
    BirthAfterEntry {
        /// The dog's birth date.
        birth_date: time::Date,
        /// The rejected entry date.
        entry_date: time::Date,
    },
    /// `build()` was called on a builder that already produced its value.
    BuilderExhausted,
    /// The breed catalog file could not be read.
    BreedCatalogUnreadable {
        /// Path of the catalog file.
        path: String,
        /// The underlying I/O error message.
        reason: String,
    },
    /// The breed catalog is not `{"dogs": [..]}`.
    BreedCatalogMalformed {
        /// The parser error message.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidUsername(msg) => write!(f, "Invalid username: {msg}"),
            Self::InvalidPassword(msg) => write!(f, "Invalid password: {msg}"),
            Self::InvalidEmail(msg) => write!(f, "Invalid email: {msg}"),
            Self::InvalidToken(msg) => write!(f, "Invalid token: {msg}"),
            Self::InvalidDogId(msg) => write!(f, "Invalid dog id: {msg}"),
            Self::InvalidDogname(msg) => write!(f, "Invalid dog name: {msg}"),
            Self::UnknownBreed { value, suggestions } => {
                write!(f, "Breed '{value}' is not among the valid ones")?;
                if !suggestions.is_empty() {
                    write!(f, ", did you mean: {}?", suggestions.join(", "))?;
                }
                Ok(())
            }
            Self::InvalidSex(msg) => write!(f, "Invalid sex: {msg}"),
            Self::DateWrongFormat { input } => {
                write!(f, "Invalid date '{input}': expected format YYYY-MM-DD")
            }
            Self::DateInFuture { date, today } => {
                write!(f, "Invalid date: {date} is after today ({today})")
            }
            Self::InvalidDogDescription(msg) => write!(f, "Invalid dog description: {msg}"),
            Self::InvalidEstimatedAdultSize(msg) => {
                write!(f, "Invalid estimated adult size: {msg}")
            }
            Self::InvalidPictureUrl(msg) => write!(f, "Invalid picture url: {msg}"),
            Self::BirthAfterEntry {
                birth_date,
                entry_date,
            } => {
                write!(
                    f,
                    "Entry date {entry_date} is before birth date {birth_date}"
                )
            }
            Self::BuilderExhausted => write!(f, "Builder has already been used"),
            Self::BreedCatalogUnreadable { path, reason } => {
                write!(f, "Unable to read breed catalog '{path}': {reason}")
            }
            Self::BreedCatalogMalformed { reason } => {
                write!(f, "Malformed breed catalog: {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
