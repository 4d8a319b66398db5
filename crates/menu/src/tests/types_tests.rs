// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Description, Key, MenuError};

fn special_chars() -> Vec<&'static str> {
    vec!["\n", "\r", "*", "^", "$", "@", "#"]
}

#[test]
fn test_description_length_limits() {
    assert!(Description::new(&"a".repeat(1000)).is_ok());
    assert!(matches!(
        Description::new(&"a".repeat(1001)),
        Err(MenuError::InvalidDescription(_))
    ));
    assert!(matches!(
        Description::new(""),
        Err(MenuError::InvalidDescription(_))
    ));
}

#[test]
fn test_description_accepts_menu_text() {
    for value in ["correct", "DOGHOUSE Login", "continue without login", "a-b_c; d, e."] {
        assert_eq!(Description::new(value).unwrap().value(), value);
    }
}

#[test]
fn test_description_rejects_special_chars() {
    for value in special_chars() {
        assert!(
            matches!(
                Description::new(value),
                Err(MenuError::InvalidDescription(_))
            ),
            "{value:?} should be rejected"
        );
    }
}

#[test]
fn test_key_accepts_digits() {
    for value in ["0", "1", "9", "10", "1234567890"] {
        assert_eq!(Key::new(value).unwrap().to_string(), value);
    }
}

#[test]
fn test_key_rejects_invalid_values() {
    let mut invalid: Vec<&str> = vec!["", "11111111111", "aaa001", "00n2", "0az03", "1234b", "2e", "k", "-1", " 1"];
    invalid.extend(special_chars());
    for value in invalid {
        assert!(
            matches!(Key::new(value), Err(MenuError::InvalidKey(_))),
            "{value:?} should be rejected"
        );
    }
}

#[test]
fn test_key_can_start_with_zero_only_if_length_one() {
    assert!(Key::new("0").is_ok());
    assert!(Key::new("01").is_err());
    assert!(Key::new("00").is_err());
}
