// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Console, Description, Menu, MenuBuilder, MenuEntry, MenuError};

type TestMenuBuilder = MenuBuilder<Vec<String>, MenuError>;
type TestEntry = MenuEntry<Vec<String>, MenuError>;

fn noop(_: &mut Vec<String>, _: &mut dyn Console) -> Result<(), MenuError> {
    Ok(())
}

fn create_test_builder() -> TestMenuBuilder {
    Menu::builder(Description::new("a description").unwrap())
}

fn create_entry(key: &str) -> TestEntry {
    MenuEntry::create(key, "description", noop).unwrap()
}

fn create_exit_entry(key: &str) -> TestEntry {
    MenuEntry::create_exit(key, "description", noop).unwrap()
}

#[test]
fn test_menu_entry_validates_key_and_description() {
    assert!(matches!(
        TestEntry::create("a", "description", noop),
        Err(MenuError::InvalidKey(_))
    ));
    assert!(matches!(
        TestEntry::create("1", "", noop),
        Err(MenuError::InvalidDescription(_))
    ));

    let entry: TestEntry = create_exit_entry("0");
    assert_eq!(entry.key().value(), "0");
    assert_eq!(entry.description().value(), "description");
    assert!(entry.is_exit());
    assert!(!create_entry("1").is_exit());
}

#[test]
fn test_menu_builder_cannot_create_empty_menu() {
    let mut builder: TestMenuBuilder = create_test_builder();
    assert!(matches!(builder.build(), Err(MenuError::MissingExit)));
}

#[test]
fn test_menu_builder_cannot_create_menu_with_no_exit() {
    let mut builder: TestMenuBuilder = create_test_builder();
    builder.with_entry(create_entry("1")).unwrap();
    builder.with_entry(create_entry("2")).unwrap();

    assert!(matches!(builder.build(), Err(MenuError::MissingExit)));

    // The builder is still usable after a missing-exit failure
    builder.with_entry(create_exit_entry("0")).unwrap();
    let menu = builder.build().unwrap();
    assert_eq!(menu.entries().count(), 3);
}

#[test]
fn test_menu_builder_cannot_create_menu_with_duplicate_keys() {
    let mut builder: TestMenuBuilder = create_test_builder();
    builder.with_entry(create_entry("1")).unwrap();

    let result = builder.with_entry(create_exit_entry("1"));
    assert!(matches!(result, Err(MenuError::DuplicateKey(key)) if key == "1"));
}

#[test]
fn test_menu_builder_creates_menu_with_exit() {
    let menu = create_test_builder()
        .with_entry(create_exit_entry("0"))
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(menu.description().value(), "a description");
    assert_eq!(menu.entries().count(), 1);
}

#[test]
fn test_menu_builder_keeps_insertion_order() {
    let menu = create_test_builder()
        .with_entry(create_entry("2"))
        .unwrap()
        .with_entry(create_entry("1"))
        .unwrap()
        .with_entry(create_exit_entry("0"))
        .unwrap()
        .build()
        .unwrap();

    let keys: Vec<&str> = menu.entries().map(|entry| entry.key().value()).collect();
    assert_eq!(keys, vec!["2", "1", "0"]);
}

#[test]
fn test_menu_builder_cannot_build_twice() {
    let mut builder: TestMenuBuilder = create_test_builder();
    builder.with_entry(create_exit_entry("0")).unwrap();

    assert!(builder.build().is_ok());
    assert!(matches!(builder.build(), Err(MenuError::BuilderExhausted)));
    assert!(matches!(
        builder.with_entry(create_entry("1")),
        Err(MenuError::BuilderExhausted)
    ));
}
