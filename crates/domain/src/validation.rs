// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared rule checks used by the value type constructors.

use regex::Regex;

/// Returns a description of the violated length rule, if any.
///
/// Lengths are counted in characters, not bytes.
pub fn check_length(value: &str, min: usize, max: usize) -> Result<(), String> {
    let length: usize = value.chars().count();
    if length < min || length > max {
        if min == max {
            return Err(format!("must be exactly {min} characters long"));
        }
        return Err(format!(
            "must be between {min} and {max} characters long (got {length})"
        ));
    }
    Ok(())
}

/// Returns a description of the violated pattern rule, if any.
///
/// `pattern` must be anchored so that the whole value is matched.
pub fn check_pattern(value: &str, pattern: &Regex, rule: &str) -> Result<(), String> {
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(String::from(rule))
    }
}

/// Compiles one of the crate's built-in patterns.
///
/// The patterns are literals checked by the unit tests, so a failure here is
/// a programming error rather than bad input.
#[allow(clippy::expect_used)]
pub fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern must compile")
}
