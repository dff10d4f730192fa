//! Mapping of non-success responses onto [`ApiError`].
//!
//! The backend reports refusals in a handful of JSON shapes:
//!
//! | Body | Produced by |
//! |------|-------------|
//! | `{"errors": "..."}` | cart, favourite and subscribe toggles |
//! | `{"detail": "..."}` | authentication and permission failures |
//! | `{"non_field_errors": ["..."]}` | token login |
//! | `{"<field>": ["...", ...]}` | serializer validation, e.g. `set_password` |
//!
//! All of them flatten into a list of human-readable messages. Field errors
//! are prefixed with the field name.

use serde_json::{Map, Value};
use store::ApiError;

const GENERIC_KEYS: [&str; 3] = ["errors", "detail", "non_field_errors"];

/// Build the error for a failed response.
pub fn error_from_status(status: u16, body: &str) -> ApiError {
    match status {
        401 => ApiError::Unauthorized,
        403 => ApiError::Forbidden,
        404 => ApiError::NotFound,
        400 => {
            let messages = decode_messages(body);
            if messages.is_empty() {
                ApiError::Status {
                    status,
                    body: body.to_string(),
                }
            } else {
                ApiError::Rejected(messages)
            }
        }
        _ => ApiError::Status {
            status,
            body: body.to_string(),
        },
    }
}

/// Messages carried by an error body. Empty when the body is not JSON.
pub fn decode_messages(body: &str) -> Vec<String> {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return Vec::new();
    };
    let mut messages = Vec::new();
    match value {
        Value::Object(map) => {
            for key in GENERIC_KEYS {
                if let Some(value) = map.get(key) {
                    collect(value, None, &mut messages);
                }
            }
            for (key, value) in sorted_fields(&map) {
                if !GENERIC_KEYS.contains(&key) {
                    collect(value, Some(key), &mut messages);
                }
            }
        }
        other => collect(&other, None, &mut messages),
    }
    messages
}

/// Field entries by name, independent of the map's own ordering.
fn sorted_fields(map: &Map<String, Value>) -> Vec<(&str, &Value)> {
    let mut fields: Vec<_> = map.iter().map(|(k, v)| (k.as_str(), v)).collect();
    fields.sort_by(|a, b| a.0.cmp(b.0));
    fields
}

fn collect(value: &Value, field: Option<&str>, out: &mut Vec<String>) {
    match value {
        Value::String(message) => match field {
            Some(field) => out.push(format!("{field}: {message}")),
            None => out.push(message.clone()),
        },
        Value::Array(items) => {
            for item in items {
                collect(item, field, out);
            }
        }
        Value::Object(map) => {
            for (key, value) in sorted_fields(map) {
                collect(value, Some(key), out);
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_error() {
        let err = error_from_status(400, r#"{"errors": "Recipe is already in the cart"}"#);
        assert_eq!(err, ApiError::rejected("Recipe is already in the cart"));
    }

    #[test]
    fn test_login_error() {
        let body = r#"{"non_field_errors": ["Unable to log in with provided credentials."]}"#;
        assert_eq!(
            decode_messages(body),
            vec!["Unable to log in with provided credentials.".to_string()]
        );
    }

    #[test]
    fn test_field_errors_are_prefixed() {
        let body = r#"{
            "new_password": ["This password is too short.", "This password is too common."],
            "current_password": ["Invalid password."]
        }"#;
        assert_eq!(
            decode_messages(body),
            vec![
                "current_password: Invalid password.".to_string(),
                "new_password: This password is too short.".to_string(),
                "new_password: This password is too common.".to_string(),
            ]
        );
    }

    #[test]
    fn test_generic_keys_come_first() {
        let body = r#"{"amount": ["Must be positive."], "detail": "Bad request."}"#;
        assert_eq!(
            decode_messages(body),
            vec!["Bad request.".to_string(), "amount: Must be positive.".to_string()]
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            error_from_status(401, r#"{"detail": "Invalid token."}"#),
            ApiError::Unauthorized
        );
        assert_eq!(error_from_status(403, ""), ApiError::Forbidden);
        assert_eq!(error_from_status(404, "<html>"), ApiError::NotFound);
        assert_eq!(
            error_from_status(400, "<html>oops</html>"),
            ApiError::Status {
                status: 400,
                body: "<html>oops</html>".to_string()
            }
        );
        assert_eq!(
            error_from_status(502, "Bad Gateway"),
            ApiError::Status {
                status: 502,
                body: "Bad Gateway".to_string()
            }
        );
    }
}
