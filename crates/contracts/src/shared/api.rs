//! Response envelope shared by every backend endpoint.
//!
//! The backend answers either with the payload itself (chat), with
//! `{"success": true, ...}` or with `{"success": false, "error": "..."}`.
//! Non-2xx answers usually carry `{"error": "..."}` as well. [`ApiOutcome`]
//! folds all of these into one tagged value at the boundary so the UI never
//! inspects raw JSON.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

/// Result of a well-formed exchange with the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome<T> {
    Success(T),
    Failure(ApiFailure),
}

/// Application-level failure reported by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    pub status: u16,
    /// Server-supplied message, verbatim.
    pub message: Option<String>,
}

impl ApiFailure {
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }

    /// Server message, or `fallback` when the server did not send one.
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| fallback.to_string())
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => f.write_str(message),
            None => f.write_str(&server_error_message(self.status)),
        }
    }
}

/// The body could not be decoded into the expected shape.
#[derive(Debug, thiserror::Error)]
pub enum ApiDecodeError {
    #[error("response is not valid JSON: {0}")]
    NotJson(#[source] serde_json::Error),
    #[error("unexpected response shape: {0}")]
    Shape(#[source] serde_json::Error),
}

/// Message shown when only the HTTP status is known.
pub fn server_error_message(status: u16) -> String {
    format!("服务器错误 ({})", status)
}

/// `error` field of a JSON object, if it is a string.
pub fn error_field(value: &Value) -> Option<String> {
    value
        .get("error")
        .and_then(Value::as_str)
        .map(str::to_owned)
}

pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

impl<T: DeserializeOwned> ApiOutcome<T> {
    /// Decode a response body received with `status`.
    ///
    /// A non-2xx status or an explicit `"success": false` yields
    /// [`ApiOutcome::Failure`]; an unparseable body on a non-2xx status is a
    /// failure too (the status is all we know). An unparseable or mis-shaped
    /// body on a 2xx status is a decode error.
    pub fn decode(status: u16, body: &str) -> Result<Self, ApiDecodeError> {
        let ok_status = is_success_status(status);
        let value: Value = match serde_json::from_str(body) {
            Ok(value) => value,
            Err(_) if !ok_status => return Ok(Self::Failure(ApiFailure::new(status, None))),
            Err(e) => return Err(ApiDecodeError::NotJson(e)),
        };

        let flagged_failure = value.get("success").and_then(Value::as_bool) == Some(false);
        if flagged_failure || !ok_status {
            return Ok(Self::Failure(ApiFailure::new(status, error_field(&value))));
        }

        serde_json::from_value(value)
            .map(Self::Success)
            .map_err(ApiDecodeError::Shape)
    }
}

impl<T> ApiOutcome<T> {
    pub fn into_result(self) -> Result<T, ApiFailure> {
        match self {
            ApiOutcome::Success(value) => Ok(value),
            ApiOutcome::Failure(failure) => Err(failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Answer {
        answer: String,
    }

    #[test]
    fn test_success_payload() {
        let outcome =
            ApiOutcome::<Answer>::decode(200, r#"{"success": true, "answer": "肺部未见异常"}"#)
                .unwrap();
        assert_eq!(
            outcome,
            ApiOutcome::Success(Answer {
                answer: "肺部未见异常".to_string()
            })
        );
    }

    #[test]
    fn test_flagged_failure_keeps_server_message() {
        let outcome =
            ApiOutcome::<Answer>::decode(200, r#"{"success": false, "error": "图片无法识别"}"#)
                .unwrap();
        match outcome {
            ApiOutcome::Failure(failure) => {
                assert_eq!(failure.message.as_deref(), Some("图片无法识别"));
                assert_eq!(failure.to_string(), "图片无法识别");
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn test_http_error_with_json_body() {
        let outcome = ApiOutcome::<Answer>::decode(500, r#"{"error": "no results"}"#).unwrap();
        let failure = outcome.into_result().unwrap_err();
        assert_eq!(failure.status, 500);
        assert_eq!(failure.to_string(), "no results");
    }

    #[test]
    fn test_http_error_with_unparseable_body() {
        let outcome = ApiOutcome::<Answer>::decode(502, "<html>Bad Gateway</html>").unwrap();
        let failure = outcome.into_result().unwrap_err();
        assert_eq!(failure.message, None);
        assert_eq!(failure.to_string(), "服务器错误 (502)");
        assert_eq!(failure.message_or("评估失败"), "评估失败");
    }

    #[test]
    fn test_garbage_on_ok_status_is_decode_error() {
        let err = ApiOutcome::<Answer>::decode(200, "not json").unwrap_err();
        assert!(matches!(err, ApiDecodeError::NotJson(_)));

        let err = ApiOutcome::<Answer>::decode(200, r#"{"success": true}"#).unwrap_err();
        assert!(matches!(err, ApiDecodeError::Shape(_)));
    }
}
