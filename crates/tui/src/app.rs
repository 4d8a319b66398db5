// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::AppError;
use crate::menus::{MenuKind, Menus};
use crate::messages::SOMETHING_WENT_WRONG;
use crate::session::Session;
use doghouse_client::Backend;
use doghouse_domain::BreedCatalog;
use doghouse_menu::Console;
use std::rc::Rc;
use tracing::{error, info};

/// The terminal client: a session started on the login menu.
pub struct App<B> {
    session: Session<B>,
}

impl<B> App<B> {
    /// Returns the session state.
    #[must_use]
    pub const fn session(&self) -> &Session<B> {
        &self.session
    }
}

impl<B: Backend + 'static> App<B> {
    /// Creates the client.
    ///
    /// # Errors
    ///
    /// Returns an `AppError` if the menus cannot be built.
    pub fn new(backend: B, catalog: BreedCatalog) -> Result<Self, AppError> {
        let menus: Menus<B> = Menus::new()?;
        Ok(Self {
            session: Session::new(backend, catalog, Rc::new(menus)),
        })
    }

    /// Runs the login menu until the user exits or the input ends.
    ///
    /// # Errors
    ///
    /// Returns the `AppError` that aborted the session, after telling the
    /// user that the client is terminating.
    pub fn run(&mut self, console: &mut dyn Console) -> Result<(), AppError> {
        info!("Starting session");
        match self.session.enter(MenuKind::Login, console) {
            Ok(()) => Ok(()),
            Err(err) if err.is_input_closed() => {
                info!("Input closed, ending session");
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "Session aborted");
                console.print(SOMETHING_WENT_WRONG);
                Err(err)
            }
        }
    }
}
