use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error carried from server functions back to the browser.
///
/// `Display` and `FromStr` are inverse so the value survives the server
/// function error encoding.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConsoleError {
    /// The remote rejected the session; the session has already been cleared.
    Unauthenticated,
    Validation(String),
    Remote(String),
}

impl ConsoleError {
    /// Text suitable for a toast.
    pub fn message(&self) -> &str {
        match self {
            ConsoleError::Unauthenticated => "Session expired, please sign in again",
            ConsoleError::Validation(msg) | ConsoleError::Remote(msg) => msg,
        }
    }

    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, ConsoleError::Unauthenticated)
    }
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::Unauthenticated => f.write_str("unauthenticated"),
            ConsoleError::Validation(msg) => write!(f, "validation: {msg}"),
            ConsoleError::Remote(msg) => write!(f, "remote: {msg}"),
        }
    }
}

impl FromStr for ConsoleError {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "unauthenticated" {
            return Ok(ConsoleError::Unauthenticated);
        }
        if let Some(msg) = s.strip_prefix("validation: ") {
            return Ok(ConsoleError::Validation(msg.to_string()));
        }
        Ok(ConsoleError::Remote(
            s.strip_prefix("remote: ").unwrap_or(s).to_string(),
        ))
    }
}

impl From<crate::forms::FieldErrors> for ConsoleError {
    fn from(errors: crate::forms::FieldErrors) -> Self {
        ConsoleError::Validation(errors.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse_are_inverse() {
        for err in [
            ConsoleError::Unauthenticated,
            ConsoleError::Validation("TTL must be at least 300".into()),
            ConsoleError::Remote("not_found: zone not found".into()),
        ] {
            let parsed: ConsoleError = err.to_string().parse().unwrap();
            assert_eq!(parsed, err);
        }
    }

    #[test]
    fn unknown_text_becomes_remote() {
        let parsed: ConsoleError = "connection reset".parse().unwrap();
        assert_eq!(parsed, ConsoleError::Remote("connection reset".into()));
    }
}
