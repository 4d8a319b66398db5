// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Blocking HTTP implementation of [`Backend`].

use crate::backend::Backend;
use crate::error::{BackendError, FieldErrors};
use crate::request_response::{
    AddDogRequest, AddDogResponse, DogRecord, LoginRequest, LoginResponse, PreferenceRequest,
    RegisterRequest, Registration,
};
use doghouse_domain::{BreedCatalog, Dog, DogId, Password, Token, Username};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use std::fmt::Display;
use std::time::Duration;
use tracing::{debug, warn};

/// Talks to the backend's REST API.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Creates a backend rooted at `base_url` (for instance
    /// `http://127.0.0.1:8000/api/v1`).
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Connection` if the HTTP client cannot be set up.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        let client: Client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BackendError::Connection(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    fn authorized(request: RequestBuilder, token: &Token) -> RequestBuilder {
        request.header(AUTHORIZATION, format!("Token {}", token.value()))
    }

    /// Sends a request and turns non-success statuses into errors.
    fn send(request: RequestBuilder, operation: &str) -> Result<Response, BackendError> {
        let response: Response = request.send().map_err(|e| {
            warn!(operation, error = %e, "Backend unreachable");
            BackendError::Connection(e.to_string())
        })?;

        let status: u16 = response.status().as_u16();
        debug!(operation, status, "Backend answered");
        if response.status().is_success() {
            return Ok(response);
        }

        warn!(operation, status, "Backend refused request");
        let body: String = error_body(response.text(), operation);
        Err(BackendError::Status {
            status,
            errors: FieldErrors::from_body(&body),
        })
    }

    fn parse<T: DeserializeOwned>(response: Response) -> Result<T, BackendError> {
        response
            .json::<T>()
            .map_err(|e| BackendError::MalformedResponse(e.to_string()))
    }

    fn into_dogs(records: Vec<DogRecord>, catalog: &BreedCatalog) -> Result<Vec<Dog>, BackendError> {
        records
            .into_iter()
            .map(|record| {
                let id: i64 = record.id;
                record.into_dog(catalog).map_err(|e| {
                    BackendError::MalformedResponse(format!("dog {id}: {e}"))
                })
            })
            .collect()
    }
}

/// Returns the body of a refused request, empty if it could not be read.
fn error_body<E: Display>(read: Result<String, E>, operation: &str) -> String {
    read.unwrap_or_else(|e| {
        warn!(operation, error = %e, "Unable to read error body");
        String::new()
    })
}

impl Backend for HttpBackend {
    fn login(
        &mut self,
        username: &Username,
        password: &Password,
    ) -> Result<LoginResponse, BackendError> {
        let request: RequestBuilder = self
            .client
            .post(self.url("auth/login/"))
            .json(&LoginRequest::new(username, password));
        Self::parse(Self::send(request, "login")?)
    }

    fn logout(&mut self, token: &Token) -> Result<(), BackendError> {
        let request: RequestBuilder =
            Self::authorized(self.client.post(self.url("auth/logout/")), token);
        Self::send(request, "logout").map(|_| ())
    }

    fn register(&mut self, registration: &Registration) -> Result<(), BackendError> {
        let request: RequestBuilder = self
            .client
            .post(self.url("auth/register/"))
            .json(&RegisterRequest::from(registration));
        Self::send(request, "register").map(|_| ())
    }

    fn list_dogs(&mut self, catalog: &BreedCatalog) -> Result<Vec<Dog>, BackendError> {
        let request: RequestBuilder = self.client.get(self.url("dogs/"));
        let records: Vec<DogRecord> = Self::parse(Self::send(request, "list dogs")?)?;
        Self::into_dogs(records, catalog)
    }

    fn add_dog(&mut self, token: &Token, dog: &Dog) -> Result<DogId, BackendError> {
        let request: RequestBuilder = Self::authorized(
            self.client
                .post(self.url("dogs/"))
                .json(&AddDogRequest::from(dog)),
            token,
        );
        let response: AddDogResponse = Self::parse(Self::send(request, "add dog")?)?;
        DogId::new(response.dog_id).map_err(|e| BackendError::MalformedResponse(e.to_string()))
    }

    fn remove_dog(&mut self, token: &Token, id: DogId) -> Result<(), BackendError> {
        let request: RequestBuilder =
            Self::authorized(self.client.delete(self.url(&format!("dogs/{id}/"))), token);
        Self::send(request, "remove dog").map(|_| ())
    }

    fn list_preferences(
        &mut self,
        token: &Token,
        catalog: &BreedCatalog,
    ) -> Result<Vec<Dog>, BackendError> {
        let request: RequestBuilder =
            Self::authorized(self.client.get(self.url("preferences/")), token);
        let records: Vec<DogRecord> = Self::parse(Self::send(request, "list preferences")?)?;
        Self::into_dogs(records, catalog)
    }

    fn add_preference(&mut self, token: &Token, id: DogId) -> Result<(), BackendError> {
        let request: RequestBuilder = Self::authorized(
            self.client
                .post(self.url("preferences/"))
                .json(&PreferenceRequest { dog: id.value() }),
            token,
        );
        Self::send(request, "add preference").map(|_| ())
    }

    fn remove_preference(&mut self, token: &Token, id: DogId) -> Result<(), BackendError> {
        let request: RequestBuilder = Self::authorized(
            self.client.delete(self.url(&format!("preferences/{id}/"))),
            token,
        );
        Self::send(request, "remove preference").map(|_| ())
    }
}
