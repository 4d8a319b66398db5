// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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
#![allow(clippy::multiple_crate_versions)]

mod backend;
mod error;
mod http;
mod request_response;

#[cfg(test)]
mod tests;

pub use backend::Backend;
pub use error::{BackendError, DETAIL_KEY, FieldErrors, NON_FIELD_ERRORS_KEY};
pub use http::HttpBackend;
pub use request_response::{
    AddDogRequest, AddDogResponse, DogRecord, LoginRequest, LoginResponse, PreferenceRequest,
    RegisterRequest, Registration,
};
