// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response bodies exchanged with the backend.
//!
//! These DTOs are distinct from the domain types and represent the wire
//! contract. Outbound bodies are only built from validated domain values;
//! inbound dog records are validated again before they become [`Dog`]s.

use doghouse_domain::{
    Breed, BreedCatalog, Date, Dog, DogBirthInfo, DogDescription, DogId, Dogname, DomainError,
    Email, EstimatedAdultSize, Password, PictureUrl, Sex, Username,
};
use serde::{Deserialize, Serialize};

/// Body of a login request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    /// The login name.
    pub username: String,
    /// The password.
    pub password: String,
}

impl LoginRequest {
    /// Builds the body from validated credentials.
    #[must_use]
    pub fn new(username: &Username, password: &Password) -> Self {
        Self {
            username: username.value().to_string(),
            password: password.value().to_string(),
        }
    }
}

/// Body of a successful login response.
///
/// Kept as raw strings: the caller decides whether the key is a valid token
/// and which menu the role leads to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    /// The session token.
    pub key: String,
    /// The role of the authenticated account.
    pub role: String,
}

/// A new account, made of validated fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// The requested login name.
    pub username: Username,
    /// The contact email, default when not provided.
    pub email: Email,
    /// The password, already confirmed by the user.
    pub password: Password,
}

/// Body of a registration request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    /// The requested login name.
    pub username: String,
    /// The password.
    pub password: String,
    /// The contact email, omitted when not provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<&Registration> for RegisterRequest {
    fn from(registration: &Registration) -> Self {
        Self {
            username: registration.username.value().to_string(),
            password: registration.password.value().to_string(),
            email: (!registration.email.is_default())
                .then(|| registration.email.value().to_string()),
        }
    }
}

/// A dog as the backend describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DogRecord {
    /// The dog identifier.
    pub id: i64,
    /// The breed.
    pub breed: String,
    /// `M` or `F`.
    pub sex: String,
    /// Birth date (ISO 8601).
    pub birth_date: String,
    /// `XS`, `S`, `M`, `L` or `XL`.
    pub estimated_adult_size: String,
    /// Entry date (ISO 8601).
    pub entry_date: String,
    /// Whether the dog is neutered.
    pub neutered: bool,
    /// The name, empty when unnamed.
    #[serde(default)]
    pub name: String,
    /// The description, empty when unset.
    #[serde(default)]
    pub description: String,
    /// The picture link, empty when unset.
    #[serde(default)]
    pub picture: String,
}

impl DogRecord {
    /// Validates the record and assembles the dog.
    ///
    /// # Errors
    ///
    /// Returns the first `DomainError` raised by a field or by the builder.
    pub fn into_dog(self, catalog: &BreedCatalog) -> Result<Dog, DomainError> {
        let birth_info: DogBirthInfo = DogBirthInfo::new(
            Breed::new(&self.breed, catalog)?,
            self.sex.parse::<Sex>()?,
            Date::parse_date(&self.birth_date)?,
            self.estimated_adult_size.parse::<EstimatedAdultSize>()?,
        );
        Dog::builder(
            DogId::new(self.id)?,
            birth_info,
            Date::parse_date(&self.entry_date)?,
            self.neutered,
        )
        .with_name(Dogname::new(&self.name)?)
        .with_description(DogDescription::new(&self.description)?)
        .with_picture(PictureUrl::new(&self.picture)?)
        .build()
    }
}

/// Body of an add-dog request.
///
/// The identifier is assigned by the backend and therefore not sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddDogRequest {
    /// The breed.
    pub breed: String,
    /// `M` or `F`.
    pub sex: String,
    /// Birth date (ISO 8601).
    pub birth_date: String,
    /// `XS`, `S`, `M`, `L` or `XL`.
    pub estimated_adult_size: String,
    /// Entry date (ISO 8601).
    pub entry_date: String,
    /// Whether the dog is neutered.
    pub neutered: bool,
    /// The name, omitted when unnamed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The description, omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The picture link, omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

impl From<&Dog> for AddDogRequest {
    fn from(dog: &Dog) -> Self {
        let birth_info: &DogBirthInfo = dog.birth_info();
        Self {
            breed: birth_info.breed().value().to_string(),
            sex: birth_info.sex().to_string(),
            birth_date: birth_info.birth_date().to_string(),
            estimated_adult_size: birth_info.estimated_adult_size().to_string(),
            entry_date: dog.entry_date().to_string(),
            neutered: dog.neutered(),
            name: (!dog.name().is_default()).then(|| dog.name().value().to_string()),
            description: (!dog.description().is_default())
                .then(|| dog.description().value().to_string()),
            picture: (!dog.picture().is_default()).then(|| dog.picture().value().to_string()),
        }
    }
}

/// Body of a successful add-dog response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddDogResponse {
    /// The identifier the backend assigned.
    pub dog_id: i64,
}

/// Body of an add-preference request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreferenceRequest {
    /// The preferred dog.
    pub dog: u64,
}
