// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::BackendError;
use crate::request_response::{LoginResponse, Registration};
use doghouse_domain::{BreedCatalog, Dog, DogId, Password, Token, Username};

/// The remote shelter service.
///
/// Calls block until the backend answers or fails. Implementations only
/// move validated values over the wire; deciding what a response means for
/// the session is left to the caller.
pub trait Backend {
    /// Authenticates a user.
    ///
    /// # Errors
    ///
    /// Returns a `BackendError` if the backend is unreachable or rejects the
    /// credentials.
    fn login(
        &mut self,
        username: &Username,
        password: &Password,
    ) -> Result<LoginResponse, BackendError>;

    /// Ends the session identified by `token`.
    ///
    /// # Errors
    ///
    /// Returns a `BackendError` if the backend is unreachable or refuses.
    fn logout(&mut self, token: &Token) -> Result<(), BackendError>;

    /// Creates a new account.
    ///
    /// # Errors
    ///
    /// Returns a `BackendError` carrying the per-field complaints if the
    /// backend refuses the registration.
    fn register(&mut self, registration: &Registration) -> Result<(), BackendError>;

    /// Lists the dogs currently hosted.
    ///
    /// # Errors
    ///
    /// Returns a `BackendError` if the call fails or a record is invalid.
    fn list_dogs(&mut self, catalog: &BreedCatalog) -> Result<Vec<Dog>, BackendError>;

    /// Adds a dog and returns the identifier the backend assigned.
    ///
    /// # Errors
    ///
    /// Returns a `BackendError` if the call fails or is refused.
    fn add_dog(&mut self, token: &Token, dog: &Dog) -> Result<DogId, BackendError>;

    /// Removes a dog.
    ///
    /// # Errors
    ///
    /// Returns a `BackendError` if the call fails or is refused.
    fn remove_dog(&mut self, token: &Token, id: DogId) -> Result<(), BackendError>;

    /// Lists the dogs the logged-in user marked as preferred.
    ///
    /// # Errors
    ///
    /// Returns a `BackendError` if the call fails or a record is invalid.
    fn list_preferences(
        &mut self,
        token: &Token,
        catalog: &BreedCatalog,
    ) -> Result<Vec<Dog>, BackendError>;

    /// Marks a dog as preferred.
    ///
    /// # Errors
    ///
    /// Returns a `BackendError` if the call fails or is refused.
    fn add_preference(&mut self, token: &Token, id: DogId) -> Result<(), BackendError>;

    /// Removes a dog from the preferred ones.
    ///
    /// # Errors
    ///
    /// Returns a `BackendError` if the call fails or is refused.
    fn remove_preference(&mut self, token: &Token, id: DogId) -> Result<(), BackendError>;
}
