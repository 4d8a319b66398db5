// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::App;
use doghouse_client::{Backend, BackendError, FieldErrors, LoginResponse, Registration};
use doghouse_domain::{
    Breed, BreedCatalog, Date, Dog, DogBirthInfo, DogId, Dogname, EstimatedAdultSize, Password,
    Sex, Token, Username,
};
use doghouse_menu::ScriptedConsole;

pub const TOKEN: &str = "0123456789abcdef0123456789abcdef01234567";
pub const VALID_PASSWORD: &str = "password1";

/// A backend call as the session made it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Login(String),
    Logout(String),
    Register {
        username: String,
        email: String,
    },
    ListDogs,
    AddDog(Dog),
    RemoveDog(u64),
    ListPreferences(String),
    AddPreference(u64),
    RemovePreference(u64),
}

/// In-memory backend that records calls and answers with canned results.
#[derive(Debug)]
pub struct StubBackend {
    pub calls: Vec<Call>,
    pub login: Result<LoginResponse, BackendError>,
    pub logout: Result<(), BackendError>,
    pub register: Result<(), BackendError>,
    pub dogs: Result<Vec<Dog>, BackendError>,
    pub added_dog_id: Result<u64, BackendError>,
    pub change: Result<(), BackendError>,
}

impl StubBackend {
    pub fn logging_in_as(role: &str) -> Self {
        Self {
            login: Ok(LoginResponse {
                key: String::from(TOKEN),
                role: role.to_string(),
            }),
            ..Self::default()
        }
    }
}

impl Default for StubBackend {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            login: Err(status_error(400, r#"{"non_field_errors": ["Wrong credentials."]}"#)),
            logout: Ok(()),
            register: Ok(()),
            dogs: Ok(Vec::new()),
            added_dog_id: Ok(1),
            change: Ok(()),
        }
    }
}

impl Backend for StubBackend {
    fn login(
        &mut self,
        username: &Username,
        _password: &Password,
    ) -> Result<LoginResponse, BackendError> {
        self.calls.push(Call::Login(username.value().to_string()));
        self.login.clone()
    }

    fn logout(&mut self, token: &Token) -> Result<(), BackendError> {
        self.calls.push(Call::Logout(token.value().to_string()));
        self.logout.clone()
    }

    fn register(&mut self, registration: &Registration) -> Result<(), BackendError> {
        self.calls.push(Call::Register {
            username: registration.username.value().to_string(),
            email: registration.email.value().to_string(),
        });
        self.register.clone()
    }

    fn list_dogs(&mut self, _catalog: &BreedCatalog) -> Result<Vec<Dog>, BackendError> {
        self.calls.push(Call::ListDogs);
        self.dogs.clone()
    }

    fn add_dog(&mut self, _token: &Token, dog: &Dog) -> Result<DogId, BackendError> {
        self.calls.push(Call::AddDog(dog.clone()));
        self.added_dog_id
            .clone()
            .map(|id| DogId::new(i64::try_from(id).unwrap()).unwrap())
    }

    fn remove_dog(&mut self, _token: &Token, id: DogId) -> Result<(), BackendError> {
        self.calls.push(Call::RemoveDog(id.value()));
        self.change.clone()
    }

    fn list_preferences(
        &mut self,
        token: &Token,
        _catalog: &BreedCatalog,
    ) -> Result<Vec<Dog>, BackendError> {
        self.calls
            .push(Call::ListPreferences(token.value().to_string()));
        self.dogs.clone()
    }

    fn add_preference(&mut self, _token: &Token, id: DogId) -> Result<(), BackendError> {
        self.calls.push(Call::AddPreference(id.value()));
        self.change.clone()
    }

    fn remove_preference(&mut self, _token: &Token, id: DogId) -> Result<(), BackendError> {
        self.calls.push(Call::RemovePreference(id.value()));
        self.change.clone()
    }
}

pub fn status_error(status: u16, body: &str) -> BackendError {
    BackendError::Status {
        status,
        errors: FieldErrors::from_body(body),
    }
}

pub fn connection_error() -> BackendError {
    BackendError::Connection(String::from("connection refused"))
}

pub fn catalog() -> BreedCatalog {
    BreedCatalog::new(["Beagle", "Boxer", "Poodle", "Labrador", "Chihuahua"])
}

pub fn sample_dog() -> Dog {
    let catalog: BreedCatalog = catalog();
    Dog::builder(
        DogId::new(4).unwrap(),
        DogBirthInfo::new(
            Breed::new("Beagle", &catalog).unwrap(),
            Sex::Female,
            Date::new(time::macros::date!(2019 - 03 - 01)).unwrap(),
            EstimatedAdultSize::Medium,
        ),
        Date::new(time::macros::date!(2021 - 06 - 15)).unwrap(),
        true,
    )
    .with_name(Dogname::new("Luna").unwrap())
    .build()
    .unwrap()
}

/// Runs a whole session over `input` and returns the app and what it printed.
pub fn run_session(backend: StubBackend, input: &[&str]) -> (App<StubBackend>, ScriptedConsole) {
    let mut app: App<StubBackend> = App::new(backend, catalog()).unwrap();
    let mut console: ScriptedConsole = ScriptedConsole::new(input.iter().copied());
    app.run(&mut console).unwrap();
    (app, console)
}

/// Input that logs in as `user22` from the login menu.
pub fn login_input() -> Vec<&'static str> {
    vec!["1", "user22", VALID_PASSWORD]
}
