// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::AppError;
use crate::messages::{
    ADD_DOG_ENTRY, ADD_PREFERENCE_ENTRY, ADMIN_MENU_DESCRIPTION, ANONYMOUS_MENU_DESCRIPTION,
    BACK_TO_LOGIN_MENU_ENTRY, CONTINUE_WITHOUT_LOGIN_ENTRY, EXIT_ENTRY, LOGIN_ENTRY,
    LOGIN_MENU_DESCRIPTION, LOGOUT_ENTRY, REGISTER_ENTRY, REMOVE_DOG_ENTRY,
    REMOVE_PREFERENCE_ENTRY, SHOW_DOGS_ENTRY, SHOW_PREFERENCES_ENTRY, USER_MENU_DESCRIPTION,
};
use crate::session::Session;
use doghouse_client::Backend;
use doghouse_menu::{Description, Menu, MenuEntry, MenuError};

/// The menus a session can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuKind {
    /// Shown at start-up and after logout.
    Login,
    /// Shown to logged-in users.
    User,
    /// Shown to logged-in administrators.
    Admin,
    /// Shown to visitors who continued without logging in.
    Anonymous,
}

type SessionMenu<B> = Menu<Session<B>, AppError>;

/// One instance of every menu, built once per session.
pub struct Menus<B> {
    login: SessionMenu<B>,
    user: SessionMenu<B>,
    admin: SessionMenu<B>,
    anonymous: SessionMenu<B>,
}

impl<B> Menus<B> {
    /// Returns the menu for `kind`.
    #[must_use]
    pub const fn get(&self, kind: MenuKind) -> &SessionMenu<B> {
        match kind {
            MenuKind::Login => &self.login,
            MenuKind::User => &self.user,
            MenuKind::Admin => &self.admin,
            MenuKind::Anonymous => &self.anonymous,
        }
    }
}

impl<B: Backend + 'static> Menus<B> {
    /// Builds every menu.
    ///
    /// # Errors
    ///
    /// Returns a `MenuError` if an entry or a description is rejected.
    pub fn new() -> Result<Self, MenuError> {
        Ok(Self {
            login: Self::login_menu()?,
            user: Self::user_menu()?,
            admin: Self::admin_menu()?,
            anonymous: Self::anonymous_menu()?,
        })
    }

    fn login_menu() -> Result<SessionMenu<B>, MenuError> {
        Menu::builder(Description::new(LOGIN_MENU_DESCRIPTION)?)
            .with_entry(MenuEntry::create("1", LOGIN_ENTRY, Session::login)?)?
            .with_entry(MenuEntry::create(
                "2",
                CONTINUE_WITHOUT_LOGIN_ENTRY,
                Session::continue_without_login,
            )?)?
            .with_entry(MenuEntry::create("3", REGISTER_ENTRY, Session::register)?)?
            .with_entry(MenuEntry::create_exit("0", EXIT_ENTRY, Session::exit)?)?
            .build()
    }

    fn user_menu() -> Result<SessionMenu<B>, MenuError> {
        Menu::builder(Description::new(USER_MENU_DESCRIPTION)?)
            .with_entry(MenuEntry::create("1", SHOW_DOGS_ENTRY, Session::show_dogs)?)?
            .with_entry(MenuEntry::create(
                "2",
                SHOW_PREFERENCES_ENTRY,
                Session::show_preferences,
            )?)?
            .with_entry(MenuEntry::create(
                "3",
                ADD_PREFERENCE_ENTRY,
                Session::add_preference,
            )?)?
            .with_entry(MenuEntry::create(
                "4",
                REMOVE_PREFERENCE_ENTRY,
                Session::remove_preference,
            )?)?
            .with_entry(MenuEntry::create_exit("0", LOGOUT_ENTRY, Session::logout)?)?
            .build()
    }

    fn admin_menu() -> Result<SessionMenu<B>, MenuError> {
        Menu::builder(Description::new(ADMIN_MENU_DESCRIPTION)?)
            .with_entry(MenuEntry::create("1", SHOW_DOGS_ENTRY, Session::show_dogs)?)?
            .with_entry(MenuEntry::create("2", ADD_DOG_ENTRY, Session::add_dog)?)?
            .with_entry(MenuEntry::create("3", REMOVE_DOG_ENTRY, Session::remove_dog)?)?
            .with_entry(MenuEntry::create_exit("0", LOGOUT_ENTRY, Session::logout)?)?
            .build()
    }

    fn anonymous_menu() -> Result<SessionMenu<B>, MenuError> {
        Menu::builder(Description::new(ANONYMOUS_MENU_DESCRIPTION)?)
            .with_entry(MenuEntry::create("1", SHOW_DOGS_ENTRY, Session::show_dogs)?)?
            .with_entry(MenuEntry::create_exit(
                "0",
                BACK_TO_LOGIN_MENU_ENTRY,
                Session::back_to_login,
            )?)?
            .build()
    }
}
