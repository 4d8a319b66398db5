// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Validated value types and dog aggregates.
//!
//! Every type here is immutable and can only be obtained through a
//! constructor that checks its rules, so a value that exists is valid.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod breed;
mod credentials;
mod date;
mod dog;
mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use breed::{Breed, BreedCatalog, MAX_BREED_SUGGESTIONS};
pub use credentials::{Email, Password, Token, Username};
pub use date::Date;
pub use dog::{Dog, DogBirthInfo, DogBuilder};
pub use error::DomainError;
pub use types::{DogDescription, DogId, Dogname, EstimatedAdultSize, PictureUrl, Sex};
