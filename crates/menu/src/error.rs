// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for menu construction and interaction.

use thiserror::Error;

/// Menu errors.
#[derive(Debug, Error)]
pub enum MenuError {
    /// Description is empty, too long or has forbidden characters.
    #[error("Invalid description: {0}")]
    InvalidDescription(String),

    /// Key is not a number of 1 to 10 digits without a leading zero.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Two entries of the same menu share a key.
    #[error("Duplicate menu key '{0}'")]
    DuplicateKey(String),

    /// The menu has no entry that leaves it.
    #[error("Menu must contain at least one exit entry")]
    MissingExit,

    /// The builder already produced its menu.
    #[error("Menu builder has already been used")]
    BuilderExhausted,

    /// The input stream ended.
    #[error("Input closed")]
    InputClosed,

    /// Reading or writing the terminal failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
