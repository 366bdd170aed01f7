//! Response decoding for store API calls.
//!
//! Bodies are decoded into a generic [`serde_json::Value`]. A body carrying an
//! `errors` field is turned into a [`RequestError`] instead of being returned.

use serde_json::Value;

use crate::clients::errors::{ClientError, RequestError};

/// Decodes a response body. An empty body decodes to an empty object.
///
/// # Errors
///
/// Returns [`ClientError::InvalidResponse`] if the body is not valid JSON.
pub fn decode_body(status: u16, body: &str) -> Result<Value, ClientError> {
    if body.trim().is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }

    serde_json::from_str(body).map_err(|source| ClientError::InvalidResponse { status, source })
}

/// Fails with a [`RequestError`] if `body` carries a non-null `errors` field.
///
/// # Errors
///
/// Returns the combined error text built by [`error_message`].
pub fn check_errors(body: Value) -> Result<Value, RequestError> {
    match body.get("errors") {
        Some(errors) if !errors.is_null() => Err(RequestError::new(error_message(errors))),
        _ => Ok(body),
    }
}

/// Renders an `errors` payload as text.
///
/// - an object yields one `key: message` line per field, using the first
///   message when the field holds a list
/// - a list yields one line per entry
/// - a string is used as is; any other value uses its JSON text
///
/// ```rust
/// use serde_json::json;
/// use shopify_store_client::clients::http_response::error_message;
///
/// let errors = json!({"price": "is invalid", "title": ["can't be blank", "is too short"]});
/// assert_eq!(error_message(&errors), "price: is invalid\ntitle: can't be blank");
/// ```
#[must_use]
pub fn error_message(errors: &Value) -> String {
    match errors {
        Value::Object(fields) => fields
            .iter()
            .map(|(key, value)| {
                let first = match value {
                    Value::Array(messages) => messages.first().map_or_else(String::new, text),
                    other => text(other),
                };
                format!("{key}: {first}")
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Array(entries) => entries.iter().map(text).collect::<Vec<_>>().join("\n"),
        other => text(other),
    }
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
