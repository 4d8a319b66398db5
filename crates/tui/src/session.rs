// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::AppError;
use crate::menus::{MenuKind, Menus};
use crate::messages::{
    ADD_DOG_ERROR, ADD_PREFERENCE_ERROR, BIRTH_DATE_FIELD, BREED_FIELD, CONNECTION_ERROR,
    DESCRIPTION_FIELD, DOG_ID_FIELD, DOG_REMOVED_MESSAGE, EMAIL_FIELD, ENTRY_DATE_FIELD,
    EXIT_MESSAGE, INVALID_CREDENTIALS, LOGIN_ERROR, LOGOUT_ERROR, LOGOUT_MESSAGE, NAME_FIELD,
    NEUTERED_FIELD, NO_DOGS_MESSAGE, PASSWORD_FIELD, PASSWORDS_DO_NOT_COINCIDE, PICTURE_FIELD,
    PREFERENCE_ADDED_MESSAGE, PREFERENCE_REMOVED_MESSAGE, REGISTRATION_ERROR,
    REGISTRATION_MESSAGE, REMOVE_DOG_ERROR, REMOVE_PREFERENCE_ERROR, REPEAT_PASSWORD_PROMPT,
    SEX_FIELD, SHOW_DOGS_ERROR, SHOW_PREFERENCES_ERROR, SIZE_FIELD, USERNAME_FIELD, dog_added,
    logged_in, unknown_role,
};
use crate::prompt::{parse_yes_no, read_once, read_until_valid};
use doghouse_client::{Backend, BackendError, LoginResponse, Registration};
use doghouse_domain::{
    Breed, BreedCatalog, Date, Dog, DogBirthInfo, DogDescription, DogId, Dogname, DomainError,
    Email, EstimatedAdultSize, Password, PictureUrl, Sex, Token, Username,
};
use doghouse_menu::Console;
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Role string the backend returns for regular users.
pub const USER_ROLE: &str = "user";

/// Role string the backend returns for administrators.
pub const ADMIN_ROLE: &str = "admin";

/// State of one client session, and the actions behind every menu entry.
///
/// Menus run against the session. Entering a menu moves the current-menu
/// pointer; leaving it through its exit entry moves the pointer back.
pub struct Session<B> {
    backend: B,
    catalog: BreedCatalog,
    token: Token,
    current: MenuKind,
    menus: Rc<Menus<B>>,
}

impl<B> Session<B> {
    /// Returns the backend.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns the accepted breeds.
    #[must_use]
    pub const fn catalog(&self) -> &BreedCatalog {
        &self.catalog
    }

    /// Returns the session token, the default one when logged out.
    #[must_use]
    pub const fn token(&self) -> &Token {
        &self.token
    }

    /// Returns the menu currently shown.
    #[must_use]
    pub const fn current(&self) -> MenuKind {
        self.current
    }

    /// Returns whether a user is logged in.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        !self.token.is_default()
    }
}

impl<B: Backend + 'static> Session<B> {
    /// Creates a logged-out session positioned on the login menu.
    #[must_use]
    pub fn new(backend: B, catalog: BreedCatalog, menus: Rc<Menus<B>>) -> Self {
        Self {
            backend,
            catalog,
            token: Token::default(),
            current: MenuKind::Login,
            menus,
        }
    }

    /// Runs the `kind` menu until its exit entry is chosen.
    ///
    /// # Errors
    ///
    /// Returns an `AppError` if the console fails while the menu, or any
    /// menu entered from it, is running.
    pub fn enter(&mut self, kind: MenuKind, console: &mut dyn Console) -> Result<(), AppError> {
        let menus: Rc<Menus<B>> = Rc::clone(&self.menus);
        let previous: MenuKind = std::mem::replace(&mut self.current, kind);
        debug!(from = ?previous, to = ?kind, "Entering menu");

        let result: Result<(), AppError> = menus.get(kind).run(console, self);

        debug!(from = ?kind, to = ?previous, "Leaving menu");
        self.current = previous;
        result
    }

    /// Authenticates and enters the menu matching the returned role.
    ///
    /// # Errors
    ///
    /// Returns an `AppError` only if the console fails.
    pub fn login(&mut self, console: &mut dyn Console) -> Result<(), AppError> {
        let Some(username) = read_once(console, &USERNAME_FIELD, Username::new)? else {
            return Ok(());
        };
        let Some(password) = read_once(console, &PASSWORD_FIELD, Password::new)? else {
            return Ok(());
        };

        let response: LoginResponse = match self.backend.login(&username, &password) {
            Ok(response) => response,
            Err(error) => {
                report(console, LOGIN_ERROR, &error);
                return Ok(());
            }
        };

        let Ok(token) = Token::new(&response.key) else {
            warn!(username = %username, "Backend returned a malformed token");
            console.print(INVALID_CREDENTIALS);
            return Ok(());
        };

        let kind: MenuKind = match response.role.as_str() {
            USER_ROLE => MenuKind::User,
            ADMIN_ROLE => MenuKind::Admin,
            other => {
                warn!(username = %username, role = other, "Unknown role");
                console.print(&unknown_role(other));
                return Ok(());
            }
        };

        self.token = token;
        info!(username = %username, role = %response.role, "Logged in");
        console.print(&logged_in(username.value()));
        self.enter(kind, console)
    }

    /// Ends the session on the backend and forgets the token.
    ///
    /// # Errors
    ///
    /// Never fails; the signature matches the other menu actions.
    pub fn logout(&mut self, console: &mut dyn Console) -> Result<(), AppError> {
        let outcome: Result<(), BackendError> = self.backend.logout(&self.token);
        self.token = Token::default();
        match outcome {
            Ok(()) => {
                info!("Logged out");
                console.print(LOGOUT_MESSAGE);
            }
            Err(error) => report(console, LOGOUT_ERROR, &error),
        }
        Ok(())
    }

    /// Browses the shelter without an account.
    ///
    /// # Errors
    ///
    /// Returns an `AppError` only if the console fails.
    pub fn continue_without_login(&mut self, console: &mut dyn Console) -> Result<(), AppError> {
        self.enter(MenuKind::Anonymous, console)
    }

    /// Creates a new account.
    ///
    /// # Errors
    ///
    /// Returns an `AppError` only if the console fails.
    pub fn register(&mut self, console: &mut dyn Console) -> Result<(), AppError> {
        let username: Username = read_until_valid(console, &USERNAME_FIELD, Username::new)?;
        let email: Email = read_until_valid(console, &EMAIL_FIELD, Email::new)?;
        let password: Password = read_until_valid(console, &PASSWORD_FIELD, Password::new)?;
        let repeated: String = console.read_secret(REPEAT_PASSWORD_PROMPT)?;
        if repeated != password.value() {
            console.print(PASSWORDS_DO_NOT_COINCIDE);
            return Ok(());
        }

        let registration: Registration = Registration {
            username,
            email,
            password,
        };
        match self.backend.register(&registration) {
            Ok(()) => {
                info!(username = %registration.username, "Registered");
                console.print(REGISTRATION_MESSAGE);
            }
            Err(error) => report(console, REGISTRATION_ERROR, &error),
        }
        Ok(())
    }

    /// Prints every dog in the shelter.
    ///
    /// # Errors
    ///
    /// Never fails; the signature matches the other menu actions.
    pub fn show_dogs(&mut self, console: &mut dyn Console) -> Result<(), AppError> {
        match self.backend.list_dogs(&self.catalog) {
            Ok(dogs) => print_dogs(console, &dogs),
            Err(error) => report(console, SHOW_DOGS_ERROR, &error),
        }
        Ok(())
    }

    /// Prints the dogs the user marked as preferred.
    ///
    /// # Errors
    ///
    /// Never fails; the signature matches the other menu actions.
    pub fn show_preferences(&mut self, console: &mut dyn Console) -> Result<(), AppError> {
        match self.backend.list_preferences(&self.token, &self.catalog) {
            Ok(dogs) => print_dogs(console, &dogs),
            Err(error) => report(console, SHOW_PREFERENCES_ERROR, &error),
        }
        Ok(())
    }

    /// Marks a dog as preferred.
    ///
    /// # Errors
    ///
    /// Returns an `AppError` only if the console fails.
    pub fn add_preference(&mut self, console: &mut dyn Console) -> Result<(), AppError> {
        let id: DogId = read_until_valid(console, &DOG_ID_FIELD, DogId::parse)?;
        match self.backend.add_preference(&self.token, id) {
            Ok(()) => console.print(PREFERENCE_ADDED_MESSAGE),
            Err(error) => report(console, ADD_PREFERENCE_ERROR, &error),
        }
        Ok(())
    }

    /// Removes a dog from the preferred ones.
    ///
    /// # Errors
    ///
    /// Returns an `AppError` only if the console fails.
    pub fn remove_preference(&mut self, console: &mut dyn Console) -> Result<(), AppError> {
        let id: DogId = read_until_valid(console, &DOG_ID_FIELD, DogId::parse)?;
        match self.backend.remove_preference(&self.token, id) {
            Ok(()) => console.print(PREFERENCE_REMOVED_MESSAGE),
            Err(error) => report(console, REMOVE_PREFERENCE_ERROR, &error),
        }
        Ok(())
    }

    /// Reads a new dog field by field and adds it to the shelter.
    ///
    /// # Errors
    ///
    /// Returns an `AppError` only if the console fails.
    pub fn add_dog(&mut self, console: &mut dyn Console) -> Result<(), AppError> {
        let dog: Dog = match self.read_dog(console)? {
            Ok(dog) => dog,
            Err(error) => {
                console.print(&error.to_string());
                return Ok(());
            }
        };

        match self.backend.add_dog(&self.token, &dog) {
            Ok(id) => {
                info!(dog_id = id.value(), "Dog added");
                console.print(&dog_added(id.value()));
            }
            Err(error) => report(console, ADD_DOG_ERROR, &error),
        }
        Ok(())
    }

    /// Removes a dog from the shelter.
    ///
    /// # Errors
    ///
    /// Returns an `AppError` only if the console fails.
    pub fn remove_dog(&mut self, console: &mut dyn Console) -> Result<(), AppError> {
        let id: DogId = read_until_valid(console, &DOG_ID_FIELD, DogId::parse)?;
        match self.backend.remove_dog(&self.token, id) {
            Ok(()) => console.print(DOG_REMOVED_MESSAGE),
            Err(error) => report(console, REMOVE_DOG_ERROR, &error),
        }
        Ok(())
    }

    /// Leaves the login menu, ending the program.
    ///
    /// # Errors
    ///
    /// Never fails; the signature matches the other menu actions.
    pub fn exit(&mut self, console: &mut dyn Console) -> Result<(), AppError> {
        console.print(EXIT_MESSAGE);
        Ok(())
    }

    /// Leaves the anonymous menu.
    ///
    /// # Errors
    ///
    /// Never fails; the signature matches the other menu actions.
    pub fn back_to_login(&mut self, _console: &mut dyn Console) -> Result<(), AppError> {
        debug!("Back to login menu");
        Ok(())
    }

    /// The outer result fails only with the console; the inner one carries
    /// the builder's verdict on the assembled dog.
    fn read_dog(
        &self,
        console: &mut dyn Console,
    ) -> Result<Result<Dog, DomainError>, AppError> {
        let breed: Breed =
            read_until_valid(console, &BREED_FIELD, |text| Breed::new(text, &self.catalog))?;
        let sex: Sex = read_until_valid(console, &SEX_FIELD, str::parse::<Sex>)?;
        let birth_date: Date = read_until_valid(console, &BIRTH_DATE_FIELD, Date::parse_date)?;
        let size: EstimatedAdultSize =
            read_until_valid(console, &SIZE_FIELD, str::parse::<EstimatedAdultSize>)?;
        let entry_date: Date = read_until_valid(console, &ENTRY_DATE_FIELD, Date::parse_date)?;
        let neutered: bool = read_until_valid(console, &NEUTERED_FIELD, parse_yes_no)?;
        let name: Dogname = read_until_valid(console, &NAME_FIELD, Dogname::new)?;
        let description: DogDescription =
            read_until_valid(console, &DESCRIPTION_FIELD, DogDescription::new)?;
        let picture: PictureUrl = read_until_valid(console, &PICTURE_FIELD, PictureUrl::new)?;

        // The backend assigns the real identifier.
        let provisional_id: DogId = DogId::new(0)?;
        Ok(Dog::builder(
            provisional_id,
            DogBirthInfo::new(breed, sex, birth_date, size),
            entry_date,
            neutered,
        )
        .with_name(name)
        .with_description(description)
        .with_picture(picture)
        .build())
    }
}

fn print_dogs(console: &mut dyn Console, dogs: &[Dog]) {
    if dogs.is_empty() {
        console.print(NO_DOGS_MESSAGE);
        return;
    }
    for dog in dogs {
        console.print(&dog.to_string());
    }
}

/// Tells the user why a backend call failed.
fn report(console: &mut dyn Console, failure: &str, error: &BackendError) {
    match error {
        BackendError::Connection(_) => console.print(CONNECTION_ERROR),
        BackendError::Status { errors, .. } => {
            console.print(failure);
            for line in errors.lines() {
                console.print(&line);
            }
        }
        BackendError::MalformedResponse(reason) => {
            console.print(failure);
            console.print(reason);
        }
    }
}
