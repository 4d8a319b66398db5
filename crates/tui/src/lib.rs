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

mod app;
mod config;
mod error;
mod menus;
pub mod messages;
mod prompt;
mod session;

#[cfg(test)]
mod tests;

pub use app::App;
pub use config::{Args, DEFAULT_BREEDS, DEFAULT_SERVER};
pub use error::AppError;
pub use menus::{MenuKind, Menus};
pub use prompt::{Field, parse_yes_no, read_once, read_until_valid};
pub use session::{ADMIN_ROLE, Session, USER_ROLE};
