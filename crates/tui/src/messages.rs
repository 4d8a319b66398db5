// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Everything the client shows to the user.

use crate::prompt::Field;

// Menus
pub const LOGIN_MENU_DESCRIPTION: &str = "DOGHOUSE Login";
pub const USER_MENU_DESCRIPTION: &str = "DOGHOUSE";
pub const ADMIN_MENU_DESCRIPTION: &str = "DOGHOUSE Admin";
pub const ANONYMOUS_MENU_DESCRIPTION: &str = "DOGHOUSE Guest";

pub const LOGIN_ENTRY: &str = "login";
pub const CONTINUE_WITHOUT_LOGIN_ENTRY: &str = "continue without login";
pub const REGISTER_ENTRY: &str = "register";
pub const EXIT_ENTRY: &str = "exit";
pub const BACK_TO_LOGIN_MENU_ENTRY: &str = "back to login menu";
pub const SHOW_DOGS_ENTRY: &str = "show dogs";
pub const SHOW_PREFERENCES_ENTRY: &str = "show preferences";
pub const ADD_PREFERENCE_ENTRY: &str = "add preference";
pub const REMOVE_PREFERENCE_ENTRY: &str = "remove preference";
pub const ADD_DOG_ENTRY: &str = "add dog";
pub const REMOVE_DOG_ENTRY: &str = "remove dog";
pub const LOGOUT_ENTRY: &str = "logout";

// Outcomes
pub const EXIT_MESSAGE: &str = "Bye!";
pub const LOGOUT_MESSAGE: &str = "Logged out";
pub const REGISTRATION_MESSAGE: &str = "Registration completed, you can now log in";
pub const NO_DOGS_MESSAGE: &str = "No dogs to show";
pub const PREFERENCE_ADDED_MESSAGE: &str = "Preference added";
pub const PREFERENCE_REMOVED_MESSAGE: &str = "Preference removed";
pub const DOG_REMOVED_MESSAGE: &str = "Dog removed";
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong, terminating";

#[must_use]
pub fn logged_in(username: &str) -> String {
    format!("Logged in as {username}")
}

#[must_use]
pub fn dog_added(id: u64) -> String {
    format!("Dog added with id {id}")
}

#[must_use]
pub fn unknown_role(role: &str) -> String {
    format!("Unknown role '{role}', please contact an administrator")
}

// Failures
pub const INVALID_USERNAME_ERROR: &str = "Invalid username";
pub const INVALID_PASSWORD_ERROR: &str = "Invalid password";
pub const INVALID_EMAIL_ERROR: &str = "Invalid email";
pub const INVALID_DOG_ID_ERROR: &str = "Invalid dog id";
pub const INVALID_BREED_ERROR: &str = "Invalid breed";
pub const INVALID_SEX_ERROR: &str = "Invalid sex";
pub const INVALID_DATE_ERROR: &str = "Invalid date";
pub const INVALID_SIZE_ERROR: &str = "Invalid size";
pub const INVALID_ANSWER_ERROR: &str = "Invalid answer";
pub const INVALID_NAME_ERROR: &str = "Invalid name";
pub const INVALID_DESCRIPTION_ERROR: &str = "Invalid description";
pub const INVALID_PICTURE_ERROR: &str = "Invalid picture";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials, please try again";
pub const PASSWORDS_DO_NOT_COINCIDE: &str = "The passwords do not coincide";
pub const CONNECTION_ERROR: &str = "Unable to contact server";
pub const LOGIN_ERROR: &str = "Incorrect credentials, please retry with correct credentials";
pub const LOGOUT_ERROR: &str = "Unable to logout";
pub const REGISTRATION_ERROR: &str = "We were unable to register your account";
pub const SHOW_DOGS_ERROR: &str = "Unable to show the dogs";
pub const SHOW_PREFERENCES_ERROR: &str = "Unable to show your preferences";
pub const ADD_PREFERENCE_ERROR: &str = "Unable to add the preference";
pub const REMOVE_PREFERENCE_ERROR: &str = "Unable to remove the preference";
pub const ADD_DOG_ERROR: &str = "Unable to add the dog";
pub const REMOVE_DOG_ERROR: &str = "Unable to remove the dog";

// Fields
pub const USERNAME_FIELD: Field = Field::plain("Insert username: ", INVALID_USERNAME_ERROR);
pub const PASSWORD_FIELD: Field = Field::secret("Insert password: ", INVALID_PASSWORD_ERROR);
pub const REPEAT_PASSWORD_PROMPT: &str = "Repeat password: ";
pub const EMAIL_FIELD: Field = Field::plain("Insert email (optional): ", INVALID_EMAIL_ERROR);
pub const DOG_ID_FIELD: Field = Field::plain("Insert dog id: ", INVALID_DOG_ID_ERROR);
pub const BREED_FIELD: Field = Field::plain("Insert breed: ", INVALID_BREED_ERROR);
pub const SEX_FIELD: Field = Field::plain("Insert sex (M/F): ", INVALID_SEX_ERROR);
pub const BIRTH_DATE_FIELD: Field = Field::plain("Insert birth date (YYYY-MM-DD): ", INVALID_DATE_ERROR);
pub const SIZE_FIELD: Field = Field::plain(
    "Insert estimated adult size (XS/S/M/L/XL): ",
    INVALID_SIZE_ERROR,
);
pub const ENTRY_DATE_FIELD: Field = Field::plain("Insert entry date (YYYY-MM-DD): ", INVALID_DATE_ERROR);
pub const NEUTERED_FIELD: Field = Field::plain("Is the dog neutered? (Y/N): ", INVALID_ANSWER_ERROR);
pub const NAME_FIELD: Field = Field::plain("Insert name (optional): ", INVALID_NAME_ERROR);
pub const DESCRIPTION_FIELD: Field = Field::plain(
    "Insert description (optional): ",
    INVALID_DESCRIPTION_ERROR,
);
pub const PICTURE_FIELD: Field = Field::plain(
    "Insert picture link (optional): ",
    INVALID_PICTURE_ERROR,
);
