// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, Email, Password, Token, Username};
use std::collections::HashSet;

fn valid_tokens() -> Vec<&'static str> {
    vec![
        "asd8g8asf9af89d9gas9f8gsjabhka123445ywef",
        "9944b09199c62bcf9418ad846dd0e4bbdfc6ee4b",
        "qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqq",
        "1111111111111111111111111111111111111111",
    ]
}

#[test]
fn test_username_accepts_alphanumeric_values() {
    for value in ["user22", "01", "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", "paoloapaoloaaapoalo"] {
        let username: Username = Username::new(value).unwrap();
        assert_eq!(username.value(), value);
        assert_eq!(username.to_string(), value);
    }
}

#[test]
fn test_username_rejects_invalid_values() {
    for value in [
        "",
        "a",
        "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
        "abcs#?",
        "localhost@hi",
        "user name",
    ] {
        let result: Result<Username, DomainError> = Username::new(value);
        assert!(
            matches!(result, Err(DomainError::InvalidUsername(_))),
            "{value:?} should be rejected"
        );
    }
}

#[test]
fn test_username_length_boundaries() {
    assert!(Username::new(&"a".repeat(2)).is_ok());
    assert!(Username::new(&"a".repeat(30)).is_ok());
    assert!(Username::new(&"a".repeat(31)).is_err());
}

#[test]
fn test_password_accepts_valid_values() {
    for value in [
        "aaaaaaaa",
        "123###78",
        "PASSWORDASAASD@@@ASDAS",
        "a!aaaaaaaaaasas9as89a89a89a98a",
    ] {
        assert_eq!(Password::new(value).unwrap().value(), value);
    }
}

#[test]
fn test_password_rejects_invalid_values() {
    for value in [
        "aaaaaaa",
        "12?3###78",
        "PASSWORDASAASD@@@ASD'AS",
        "a!aaasasdasdasdas9as89a8989a98a",
    ] {
        let result: Result<Password, DomainError> = Password::new(value);
        assert!(
            matches!(result, Err(DomainError::InvalidPassword(_))),
            "{value:?} should be rejected"
        );
    }
}

#[test]
fn test_password_equality_by_value() {
    assert_eq!(
        Password::new("aaaaaaaa").unwrap(),
        Password::new("aaaaaaaa").unwrap()
    );
    assert_ne!(
        Password::new("aaaaaaaa").unwrap(),
        Password::new("123###78").unwrap()
    );
}

#[test]
fn test_password_is_not_revealed_by_debug() {
    let password: Password = Password::new("s3cretpass!").unwrap();
    assert!(!format!("{password:?}").contains("s3cretpass!"));
}

#[test]
fn test_email_defaults_to_empty() {
    let email: Email = Email::default();
    assert_eq!(email.value(), "");
    assert!(email.is_default());
    assert_eq!(Email::new("").unwrap(), email);
}

#[test]
fn test_email_accepts_valid_values() {
    for value in ["aaa@aaa", "email+@pip.com", "valid@em.a", "+@1.1"] {
        let email: Email = Email::new(value).unwrap();
        assert!(!email.is_default());
    }
}

#[test]
fn test_email_rejects_invalid_values() {
    for value in ["aaaaaa", "email+#ù@pip.com", "valid@e.m.a", "email@b."] {
        let result: Result<Email, DomainError> = Email::new(value);
        assert!(
            matches!(result, Err(DomainError::InvalidEmail(_))),
            "{value:?} should be rejected"
        );
    }
}

#[test]
fn test_email_rejects_overlong_values() {
    let value: String = format!("{}@example.com", "a".repeat(320));
    assert!(Email::new(&value).is_err());
}

#[test]
fn test_token_accepts_valid_values() {
    for value in valid_tokens() {
        assert_eq!(Token::new(value).unwrap().value(), value);
    }
}

#[test]
fn test_token_rejects_invalid_values() {
    for value in [
        "",
        "39lengthf9af89d9gas9f8gsjabhka123445ywe",
        "41lenght000000000000000000000000000000000",
        "@qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqq",
        "11111111111111111111111111111111111#1111",
        "QQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQQ",
    ] {
        let result: Result<Token, DomainError> = Token::new(value);
        assert!(
            matches!(result, Err(DomainError::InvalidToken(_))),
            "{value:?} should be rejected"
        );
    }
}

#[test]
fn test_token_default_is_the_not_logged_in_sentinel() {
    let token: Token = Token::default();
    assert_eq!(token.value(), Token::NOT_LOGGED_IN);
    assert_eq!(Token::NOT_LOGGED_IN.len(), 40);
    assert!(token.is_default());
    // The sentinel is itself a well-formed token
    assert_eq!(Token::new(Token::NOT_LOGGED_IN).unwrap(), token);
}

#[test]
fn test_token_equality_and_hash_by_value() {
    assert_eq!(Token::default(), Token::default());

    let mut seen: HashSet<Token> = HashSet::new();
    for value in valid_tokens() {
        assert_eq!(Token::new(value).unwrap(), Token::new(value).unwrap());
        assert_ne!(Token::new(value).unwrap(), Token::default());
        assert!(!Token::new(value).unwrap().is_default());
        seen.insert(Token::new(value).unwrap());
        seen.insert(Token::new(value).unwrap());
    }
    assert_eq!(seen.len(), valid_tokens().len());
}

#[test]
fn test_token_is_not_revealed_by_debug() {
    let token: Token = Token::new("9944b09199c62bcf9418ad846dd0e4bbdfc6ee4b").unwrap();
    assert!(!format!("{token:?}").contains("9944b"));
}
