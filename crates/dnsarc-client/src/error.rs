use std::fmt;

use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum length for raw response bodies carried in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Connect status codes.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Code {
    Canceled,
    InvalidArgument,
    DeadlineExceeded,
    NotFound,
    AlreadyExists,
    PermissionDenied,
    ResourceExhausted,
    FailedPrecondition,
    Aborted,
    OutOfRange,
    Unimplemented,
    Internal,
    Unavailable,
    DataLoss,
    Unauthenticated,
    #[serde(other)]
    Unknown,
}

impl Code {
    pub fn as_str(&self) -> &'static str {
        match self {
            Code::Canceled => "canceled",
            Code::Unknown => "unknown",
            Code::InvalidArgument => "invalid_argument",
            Code::DeadlineExceeded => "deadline_exceeded",
            Code::NotFound => "not_found",
            Code::AlreadyExists => "already_exists",
            Code::PermissionDenied => "permission_denied",
            Code::ResourceExhausted => "resource_exhausted",
            Code::FailedPrecondition => "failed_precondition",
            Code::Aborted => "aborted",
            Code::OutOfRange => "out_of_range",
            Code::Unimplemented => "unimplemented",
            Code::Internal => "internal",
            Code::Unavailable => "unavailable",
            Code::DataLoss => "data_loss",
            Code::Unauthenticated => "unauthenticated",
        }
    }

    /// Code implied by an HTTP status when the body carries no Connect error.
    pub fn from_http_status(status: StatusCode) -> Self {
        match status.as_u16() {
            400 => Code::Internal,
            401 => Code::Unauthenticated,
            403 => Code::PermissionDenied,
            404 => Code::Unimplemented,
            429 | 502 | 503 | 504 => Code::Unavailable,
            _ => Code::Unknown,
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{code}: {message}")]
pub struct ConnectError {
    pub code: Code,
    pub message: String,
}

#[derive(Deserialize)]
struct WireError {
    code: Code,
    #[serde(default)]
    message: String,
}

impl ConnectError {
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// A successful response that lacks a field the caller needs.
    pub fn missing(field: &str) -> Self {
        Self::new(Code::Internal, format!("response is missing `{field}`"))
    }

    pub fn is_unauthenticated(&self) -> bool {
        self.code == Code::Unauthenticated
    }

    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        let mut end = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
    }

    /// Build the error for a non-2xx response.
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        match serde_json::from_str::<WireError>(body) {
            Ok(wire) => Self::new(wire.code, wire.message),
            Err(_) => {
                let message = if body.trim().is_empty() {
                    status.to_string()
                } else {
                    Self::truncate_body(body)
                };
                Self::new(Code::from_http_status(status), message)
            }
        }
    }
}

impl From<reqwest::Error> for ConnectError {
    fn from(e: reqwest::Error) -> Self {
        let code = if e.is_timeout() {
            Code::DeadlineExceeded
        } else if e.is_decode() {
            Code::Internal
        } else {
            Code::Unavailable
        };
        Self::new(code, e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_connect_error_body() {
        let err = ConnectError::from_response(
            StatusCode::UNAUTHORIZED,
            r#"{"code":"unauthenticated","message":"invalid token"}"#,
        );
        assert_eq!(err, ConnectError::new(Code::Unauthenticated, "invalid token"));
        assert_eq!(err.to_string(), "unauthenticated: invalid token");
    }

    #[test]
    fn unrecognized_code_is_unknown() {
        let err = ConnectError::from_response(
            StatusCode::BAD_REQUEST,
            r#"{"code":"something_new"}"#,
        );
        assert_eq!(err.code, Code::Unknown);
        assert!(err.message.is_empty());
    }

    #[test]
    fn known_codes_decode_by_name() {
        for (wire, code) in [
            ("\"canceled\"", Code::Canceled),
            ("\"unauthenticated\"", Code::Unauthenticated),
            ("\"unknown\"", Code::Unknown),
        ] {
            assert_eq!(serde_json::from_str::<Code>(wire).unwrap(), code);
        }
    }

    #[test]
    fn falls_back_to_http_status() {
        let err = ConnectError::from_response(StatusCode::UNAUTHORIZED, "");
        assert!(err.is_unauthenticated());
        assert_eq!(err.message, "401 Unauthorized");

        let err = ConnectError::from_response(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
        assert_eq!(err.code, Code::Unavailable);
        assert_eq!(err.message, "<html>bad gateway</html>");
    }

    #[test]
    fn long_bodies_are_truncated() {
        let body = "x".repeat(MAX_ERROR_BODY_LENGTH + 10);
        let err = ConnectError::from_response(StatusCode::INTERNAL_SERVER_ERROR, &body);
        assert!(err.message.ends_with("(truncated, 510 total bytes)"));
        assert_eq!(err.code, Code::Unknown);
    }
}
