//! Failed backend calls and their user-facing message

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Message shown for a 404 without a more specific explanation
pub const NOT_FOUND_MESSAGE: &str = "Not Found";

/// A failed call to the backend service.
///
/// HTTP failures carry the status and whatever the error body said;
/// transport failures carry only a message.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ApiFailure {
    pub status: Option<u16>,
    #[serde(rename = "fieldErrors")]
    pub field_errors: BTreeMap<String, String>,
    pub message: Option<String>,
    /// Parsed error body (`{}` when the body was not JSON)
    pub data: Value,
}

impl ApiFailure {
    /// Failure from a non-success response whose body was parsed as JSON
    pub fn from_response(status: u16, data: Value) -> Self {
        let field_errors = data
            .get("fieldErrors")
            .and_then(Value::as_object)
            .map(|errors| {
                errors
                    .iter()
                    .filter_map(|(field, message)| {
                        message.as_str().map(|m| (field.clone(), m.to_string()))
                    })
                    .collect()
            })
            .unwrap_or_default();
        let message = data
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string);

        Self {
            status: Some(status),
            field_errors,
            message,
            data,
        }
    }

    /// Failure from a non-success response with a raw body
    pub fn from_body(status: u16, body: &[u8]) -> Self {
        let data = serde_json::from_slice(body).unwrap_or_else(|_| Value::Object(Default::default()));
        Self::from_response(status, data)
    }

    /// The request never produced a response
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            data: Value::Object(Default::default()),
            ..Default::default()
        }
    }

    /// A success response whose body did not match the expected shape
    pub fn decode(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: Some(message.into()),
            data: Value::Object(Default::default()),
            ..Default::default()
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }
}

impl std::fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "backend responded with HTTP {}", status)?,
            None => write!(f, "backend request failed")?,
        }
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiFailure {}

/// Pick the message to show for a failed call.
///
/// Precedence: field error `title`, then a non-empty top-level message,
/// then "Not Found" for a 404, then `fallback`.
pub fn normalize_error(failure: &ApiFailure, fallback: &str) -> String {
    if let Some(title) = failure.field_errors.get("title") {
        return title.clone();
    }
    if let Some(message) = failure.message.as_deref().filter(|m| !m.is_empty()) {
        return message.to_string();
    }
    if failure.is_not_found() {
        return NOT_FOUND_MESSAGE.to_string();
    }
    fallback.to_string()
}
