// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::{check_length, check_pattern, compile};
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

static DOGNAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| compile(r"^([A-Z][a-z]+)?$"));
static DOG_DESCRIPTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[A-Za-z0-9,;. \-\t?!]*$"));
static PICTURE_URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^(https://(i\.)?imgur\.com/[A-Za-z0-9_]+\.(jpg|jpeg|png|gif))?$")
});

/// Identifier the backend assigns to a dog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DogId {
    value: u64,
}

impl DogId {
    /// Creates a new `DogId`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDogId` if the value is negative.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        u64::try_from(value)
            .map(|value| Self { value })
            .map_err(|_| DomainError::InvalidDogId(format!("{value} is negative")))
    }

    /// Parses a `DogId` from user input.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDogId` if the text is not a non-negative
    /// integer.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let value: i64 = text
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidDogId(format!("'{text}' is not a number")))?;
        Self::new(value)
    }

    /// Returns the identifier value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.value
    }
}

impl std::fmt::Display for DogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A dog's name, empty when the dog is unnamed.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dogname {
    value: String,
}

impl Dogname {
    /// Creates a new `Dogname`. An empty string yields the default value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDogname` if the value is longer than 50
    /// characters or is not an uppercase letter followed by lowercase ones.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        check_length(value, 0, 50).map_err(DomainError::InvalidDogname)?;
        check_pattern(
            value,
            &DOGNAME_PATTERN,
            "must be an uppercase letter followed by lowercase letters",
        )
        .map_err(DomainError::InvalidDogname)?;
        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Returns the name, empty when unset.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns whether the name is unset.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.value.is_empty()
    }
}

/// A dog's sex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sex {
    /// `M`
    Male,
    /// `F`
    Female,
}

impl Sex {
    /// Returns the single-letter code.
    #[must_use]
    pub const fn value(&self) -> char {
        match self {
            Self::Male => 'M',
            Self::Female => 'F',
        }
    }
}

impl FromStr for Sex {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Self::Male),
            "F" => Ok(Self::Female),
            _ => Err(DomainError::InvalidSex(format!(
                "'{s}' is not one of M, F"
            ))),
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Free text describing a dog, empty when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DogDescription {
    value: String,
}

impl DogDescription {
    /// Creates a new `DogDescription`. An empty string yields the default value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDogDescription` if the value is longer
    /// than 400 characters or contains characters other than letters,
    /// digits, spaces, tabs and `,;.-?!`.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        check_length(value, 0, 400).map_err(DomainError::InvalidDogDescription)?;
        check_pattern(
            value,
            &DOG_DESCRIPTION_PATTERN,
            "only letters, digits, spaces and ,;.-?! are allowed",
        )
        .map_err(DomainError::InvalidDogDescription)?;
        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Returns the description, empty when unset.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns whether the description is unset.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.value.is_empty()
    }
}

/// Expected size of a dog once fully grown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EstimatedAdultSize {
    /// `XS`
    ExtraSmall,
    /// `S`
    Small,
    /// `M`
    Medium,
    /// `L`
    Large,
    /// `XL`
    ExtraLarge,
}

impl EstimatedAdultSize {
    /// Returns the size code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ExtraSmall => "XS",
            Self::Small => "S",
            Self::Medium => "M",
            Self::Large => "L",
            Self::ExtraLarge => "XL",
        }
    }
}

impl FromStr for EstimatedAdultSize {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "XS" => Ok(Self::ExtraSmall),
            "S" => Ok(Self::Small),
            "M" => Ok(Self::Medium),
            "L" => Ok(Self::Large),
            "XL" => Ok(Self::ExtraLarge),
            _ => Err(DomainError::InvalidEstimatedAdultSize(format!(
                "'{s}' is not one of XS, S, M, L, XL"
            ))),
        }
    }
}

impl std::fmt::Display for EstimatedAdultSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Link to a picture of the dog on the image host, empty when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PictureUrl {
    value: String,
}

impl PictureUrl {
    /// Creates a new `PictureUrl`. An empty string yields the default value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPictureUrl` if the value is longer than
    /// 100 characters or is not an `https://imgur.com` (or `i.imgur.com`)
    /// link to a jpg, jpeg, png or gif image.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        check_length(value, 0, 100).map_err(DomainError::InvalidPictureUrl)?;
        check_pattern(
            value,
            &PICTURE_URL_PATTERN,
            "expected https://imgur.com/<id>.<jpg|jpeg|png|gif>",
        )
        .map_err(DomainError::InvalidPictureUrl)?;
        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Returns the URL, empty when unset.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns whether the URL is unset.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.value.is_empty()
    }
}
