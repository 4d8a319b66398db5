// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! A small engine for numbered terminal menus.
//!
//! A [`Menu`] pairs validated [`Key`]s with actions. Running it prints the
//! entries, asks for a key until a valid one is typed, calls the bound action
//! and stops once an exit entry was chosen. What an action does is entirely
//! up to the caller, which passes its own context type through the loop.

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

mod console;
mod error;
mod menu;
mod types;

#[cfg(test)]
mod tests;

pub use console::{Console, ScriptedConsole, StdConsole};
pub use error::MenuError;
pub use menu::{
    Action, INVALID_SELECTION_MESSAGE, Menu, MenuBuilder, MenuEntry, SELECTION_PROMPT,
};
pub use types::{Description, Key};
