// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dog aggregates and their builder.

use crate::breed::Breed;
use crate::date::Date;
use crate::error::DomainError;
use crate::types::{DogDescription, DogId, Dogname, EstimatedAdultSize, PictureUrl, Sex};

/// What is known about a dog from birth.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DogBirthInfo {
    breed: Breed,
    sex: Sex,
    birth_date: Date,
    estimated_adult_size: EstimatedAdultSize,
}

impl DogBirthInfo {
    /// Creates new `DogBirthInfo`.
    ///
    /// The birth date is already known not to lie in the future.
    #[must_use]
    pub const fn new(
        breed: Breed,
        sex: Sex,
        birth_date: Date,
        estimated_adult_size: EstimatedAdultSize,
    ) -> Self {
        Self {
            breed,
            sex,
            birth_date,
            estimated_adult_size,
        }
    }

    /// Returns the breed.
    #[must_use]
    pub const fn breed(&self) -> &Breed {
        &self.breed
    }

    /// Returns the sex.
    #[must_use]
    pub const fn sex(&self) -> Sex {
        self.sex
    }

    /// Returns the birth date.
    #[must_use]
    pub const fn birth_date(&self) -> Date {
        self.birth_date
    }

    /// Returns the estimated adult size.
    #[must_use]
    pub const fn estimated_adult_size(&self) -> EstimatedAdultSize {
        self.estimated_adult_size
    }

    /// Returns the dog's age in whole years as of today.
    #[must_use]
    pub fn age(&self) -> i32 {
        self.birth_date.years_to_today()
    }

    /// Returns the dog's age in whole years as of `today`.
    #[must_use]
    pub fn age_on(&self, today: time::Date) -> i32 {
        self.birth_date.years_until(today)
    }
}

/// A dog hosted by the shelter.
///
/// Only [`DogBuilder`] can produce a `Dog`, which guarantees that the entry
/// date never precedes the birth date. Unset optional fields hold their
/// default value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Dog {
    id: DogId,
    birth_info: DogBirthInfo,
    entry_date: Date,
    neutered: bool,
    name: Dogname,
    description: DogDescription,
    picture: PictureUrl,
}

impl Dog {
    /// Starts building a dog from its required fields.
    #[must_use]
    pub fn builder(
        id: DogId,
        birth_info: DogBirthInfo,
        entry_date: Date,
        neutered: bool,
    ) -> DogBuilder {
        DogBuilder::new(id, birth_info, entry_date, neutered)
    }

    /// Returns the dog identifier.
    #[must_use]
    pub const fn id(&self) -> DogId {
        self.id
    }

    /// Returns the birth information.
    #[must_use]
    pub const fn birth_info(&self) -> &DogBirthInfo {
        &self.birth_info
    }

    /// Returns the day the dog entered the shelter.
    #[must_use]
    pub const fn entry_date(&self) -> Date {
        self.entry_date
    }

    /// Returns whether the dog is neutered.
    #[must_use]
    pub const fn neutered(&self) -> bool {
        self.neutered
    }

    /// Returns the name, default when unnamed.
    #[must_use]
    pub const fn name(&self) -> &Dogname {
        &self.name
    }

    /// Returns the description, default when unset.
    #[must_use]
    pub const fn description(&self) -> &DogDescription {
        &self.description
    }

    /// Returns the picture link, default when unset.
    #[must_use]
    pub const fn picture(&self) -> &PictureUrl {
        &self.picture
    }
}

impl std::fmt::Display for Dog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &str = if self.name.is_default() {
            "(unnamed)"
        } else {
            self.name.value()
        };
        write!(
            f,
            "#{} {} | {} | {} | born {} | size {} | entered {} | neutered: {}",
            self.id,
            name,
            self.birth_info.breed,
            self.birth_info.sex,
            self.birth_info.birth_date,
            self.birth_info.estimated_adult_size,
            self.entry_date,
            if self.neutered { "yes" } else { "no" }
        )?;
        if !self.description.is_default() {
            write!(f, " | {}", self.description.value())?;
        }
        if !self.picture.is_default() {
            write!(f, " | {}", self.picture.value())?;
        }
        Ok(())
    }
}

/// Single-use builder for [`Dog`].
///
/// Required fields are given up front, optional ones are attached with the
/// `with_*` methods, and [`DogBuilder::build`] hands the finished dog over.
/// Once `build` has been called the builder is exhausted: further `with_*`
/// calls are ignored and `build` fails.
#[derive(Debug)]
pub struct DogBuilder {
    draft: Option<Dog>,
}

impl DogBuilder {
    /// Creates a builder from the required fields.
    #[must_use]
    pub fn new(id: DogId, birth_info: DogBirthInfo, entry_date: Date, neutered: bool) -> Self {
        Self {
            draft: Some(Dog {
                id,
                birth_info,
                entry_date,
                neutered,
                name: Dogname::default(),
                description: DogDescription::default(),
                picture: PictureUrl::default(),
            }),
        }
    }

    /// Sets the dog's name.
    pub fn with_name(&mut self, name: Dogname) -> &mut Self {
        if let Some(draft) = self.draft.as_mut() {
            draft.name = name;
        }
        self
    }

    /// Sets the dog's description.
    pub fn with_description(&mut self, description: DogDescription) -> &mut Self {
        if let Some(draft) = self.draft.as_mut() {
            draft.description = description;
        }
        self
    }

    /// Sets the dog's picture link.
    pub fn with_picture(&mut self, picture: PictureUrl) -> &mut Self {
        if let Some(draft) = self.draft.as_mut() {
            draft.picture = picture;
        }
        self
    }

    /// Returns whether `build` has already been called.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.draft.is_none()
    }

    /// Produces the dog.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::BuilderExhausted` if the builder was already
    /// used, and `DomainError::BirthAfterEntry` if the entry date precedes
    /// the birth date. The builder is exhausted afterwards in every case.
    pub fn build(&mut self) -> Result<Dog, DomainError> {
        let dog: Dog = self.draft.take().ok_or(DomainError::BuilderExhausted)?;

        // Rule: a dog cannot enter the shelter before it was born
        if dog.entry_date < dog.birth_info.birth_date {
            return Err(DomainError::BirthAfterEntry {
                birth_date: dog.birth_info.birth_date.value(),
                entry_date: dog.entry_date.value(),
            });
        }

        Ok(dog)
    }
}
