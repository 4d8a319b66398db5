// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use doghouse_client::BackendError;
use doghouse_domain::DomainError;
use doghouse_menu::MenuError;
use thiserror::Error;

/// Errors that end a session.
///
/// Recoverable failures (invalid input, refused requests) are reported to
/// the user inside the session and never surface here.
#[derive(Debug, Error)]
pub enum AppError {
    /// The menu engine or the terminal failed.
    #[error(transparent)]
    Menu(#[from] MenuError),

    /// A value could not be built at start-up.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The backend client could not be set up.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl AppError {
    /// Returns whether this error only means the input stream ended.
    #[must_use]
    pub const fn is_input_closed(&self) -> bool {
        matches!(self, Self::Menu(MenuError::InputClosed))
    }
}
