// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::HttpBackend;
use doghouse_domain::{
    Breed, BreedCatalog, Date, Dog, DogBirthInfo, DogDescription, DogId, Dogname,
    EstimatedAdultSize, PictureUrl, Sex, Token,
};
use std::time::Duration;

pub const TOKEN: &str = "0123456789abcdef0123456789abcdef01234567";

pub fn catalog() -> BreedCatalog {
    BreedCatalog::new(["Beagle", "Boxer", "Poodle", "Labrador"])
}

pub fn token() -> Token {
    Token::new(TOKEN).unwrap()
}

pub fn backend(server: &mockito::ServerGuard) -> HttpBackend {
    HttpBackend::new(&server.url(), Duration::from_secs(5)).unwrap()
}

pub fn minimal_dog(catalog: &BreedCatalog) -> Dog {
    let birth_info: DogBirthInfo = DogBirthInfo::new(
        Breed::new("Beagle", catalog).unwrap(),
        Sex::Female,
        Date::parse_date("2019-03-01").unwrap(),
        EstimatedAdultSize::Medium,
    );
    Dog::builder(
        DogId::new(0).unwrap(),
        birth_info,
        Date::parse_date("2021-06-15").unwrap(),
        true,
    )
    .build()
    .unwrap()
}

pub fn full_dog(catalog: &BreedCatalog) -> Dog {
    let birth_info: DogBirthInfo = DogBirthInfo::new(
        Breed::new("Boxer", catalog).unwrap(),
        Sex::Male,
        Date::parse_date("2018-01-10").unwrap(),
        EstimatedAdultSize::Large,
    );
    Dog::builder(
        DogId::new(7).unwrap(),
        birth_info,
        Date::parse_date("2020-02-20").unwrap(),
        false,
    )
    .with_name(Dogname::new("Rocky").unwrap())
    .with_description(DogDescription::new("Friendly, likes long walks.").unwrap())
    .with_picture(PictureUrl::new("https://i.imgur.com/abc123.jpg").unwrap())
    .build()
    .unwrap()
}

pub const DOGS_BODY: &str = r#"[
    {
        "id": 1,
        "name": "Rocky",
        "breed": "Boxer",
        "sex": "M",
        "birth_date": "2018-01-10",
        "estimated_adult_size": "L",
        "entry_date": "2020-02-20",
        "neutered": false,
        "description": "",
        "picture": ""
    },
    {
        "id": 2,
        "breed": "Beagle",
        "sex": "F",
        "birth_date": "2019-03-01",
        "estimated_adult_size": "M",
        "entry_date": "2021-06-15",
        "neutered": true
    }
]"#;
