// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for backend calls.

use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Key the backend uses for errors not tied to a single field.
pub const NON_FIELD_ERRORS_KEY: &str = "non_field_errors";

/// Key used when the error body is not a JSON object.
pub const DETAIL_KEY: &str = "detail";

/// Error messages from a rejected request, grouped by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    /// Parses an error response body.
    ///
    /// Objects map each field to a message or a list of messages. Any other
    /// body, JSON or not, is kept as a single `detail` message.
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        let mut errors: BTreeMap<String, Vec<String>> = BTreeMap::new();
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(fields)) => {
                for (field, value) in fields {
                    let messages: Vec<String> = match value {
                        Value::Array(items) => items.iter().map(message_text).collect(),
                        other => vec![message_text(&other)],
                    };
                    errors.insert(field, messages);
                }
            }
            Ok(other) => {
                errors.insert(String::from(DETAIL_KEY), vec![message_text(&other)]);
            }
            Err(_) if !body.trim().is_empty() => {
                errors.insert(String::from(DETAIL_KEY), vec![body.trim().to_string()]);
            }
            Err(_) => {}
        }
        Self { errors }
    }

    /// Returns the messages for `field`, empty if there are none.
    #[must_use]
    pub fn field(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the messages not tied to a single field.
    #[must_use]
    pub fn non_field_errors(&self) -> &[String] {
        self.field(NON_FIELD_ERRORS_KEY)
    }

    /// Returns whether the body carried no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.values().all(Vec::is_empty)
    }

    /// Returns one line per message. Messages not tied to a field come
    /// first and unprefixed, then `field: message` lines by field name.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let general = |field: &str| field == NON_FIELD_ERRORS_KEY || field == DETAIL_KEY;
        let mut lines: Vec<String> = [NON_FIELD_ERRORS_KEY, DETAIL_KEY]
            .into_iter()
            .flat_map(|field| self.field(field).iter().cloned())
            .collect();
        for (field, messages) in &self.errors {
            if general(field.as_str()) {
                continue;
            }
            lines.extend(messages.iter().map(|message| format!("{field}: {message}")));
        }
        lines
    }
}

fn message_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Backend call errors.
#[derive(Debug, Clone, Error)]
pub enum BackendError {
    /// The backend could not be reached.
    #[error("Unable to contact server: {0}")]
    Connection(String),

    /// The backend answered with a non-success status.
    #[error("Server answered with status {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The parsed error body.
        errors: FieldErrors,
    },

    /// The backend answered with a body that could not be understood.
    #[error("Malformed server response: {0}")]
    MalformedResponse(String),
}

impl BackendError {
    /// Returns the parsed error body for status failures.
    #[must_use]
    pub const fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Status { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_from_object_body() {
        let errors: FieldErrors = FieldErrors::from_body(
            r#"{"non_field_errors": ["Unable to log in with provided credentials."], "username": "taken"}"#,
        );

        assert_eq!(
            errors.non_field_errors(),
            ["Unable to log in with provided credentials."]
        );
        assert_eq!(errors.field("username"), ["taken"]);
        assert!(errors.field("email").is_empty());
        assert_eq!(
            errors.lines(),
            vec![
                String::from("Unable to log in with provided credentials."),
                String::from("username: taken"),
            ]
        );
    }

    #[test]
    fn test_general_messages_come_before_field_lines() {
        let errors: FieldErrors = FieldErrors::from_body(
            r#"{"age": ["too old"], "detail": "Request refused.", "non_field_errors": ["Try later."]}"#,
        );

        assert_eq!(
            errors.lines(),
            vec![
                String::from("Try later."),
                String::from("Request refused."),
                String::from("age: too old"),
            ]
        );
    }

    #[test]
    fn test_field_errors_from_other_bodies() {
        assert_eq!(
            FieldErrors::from_body("Bad Gateway").field(DETAIL_KEY),
            ["Bad Gateway"]
        );
        assert_eq!(
            FieldErrors::from_body(r#"["nope"]"#).field(DETAIL_KEY),
            [r#"["nope"]"#]
        );
        assert!(FieldErrors::from_body("").is_empty());
        assert!(FieldErrors::from_body("{}").is_empty());
    }

    #[test]
    fn test_backend_error_exposes_field_errors() {
        let err: BackendError = BackendError::Status {
            status: 400,
            errors: FieldErrors::from_body(r#"{"detail": "Invalid token."}"#),
        };
        assert_eq!(err.to_string(), "Server answered with status 400");
        assert_eq!(
            err.field_errors().unwrap().lines(),
            vec![String::from("Invalid token.")]
        );
        assert!(
            BackendError::Connection(String::from("refused"))
                .field_errors()
                .is_none()
        );
    }
}
