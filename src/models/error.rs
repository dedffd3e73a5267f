//! Error type for the query harness.
//!
//! Remote statuses such as 403 or 500 are not errors here; they come back in
//! an [`ApiResponse`](crate::http::ApiResponse) for the caller to assert on.
//! These variants cover what goes wrong on our side of the wire.

use std::fmt;

use reqwest::StatusCode;

#[derive(Debug)]
pub enum HarnessError {
    /// The configured base URL is unusable
    Config(String),
    /// The request could not be sent or its body could not be read
    Transport(String),
    /// The body did not have the expected JSON shape
    Decode(String),
    /// A helper that needs a specific status got another one
    UnexpectedStatus {
        expected: StatusCode,
        actual: StatusCode,
    },
    /// A search that had to yield a location came back empty
    NoResults(String),
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::Transport(msg) => write!(f, "Transport error: {msg}"),
            Self::Decode(msg) => write!(f, "Decode error: {msg}"),
            Self::UnexpectedStatus { expected, actual } => {
                write!(f, "Unexpected status: expected {expected}, got {actual}")
            }
            Self::NoResults(term) => write!(f, "No locations found for '{term}'"),
        }
    }
}

impl std::error::Error for HarnessError {}

impl From<reqwest::Error> for HarnessError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(error.to_string())
    }
}

impl From<serde_json::Error> for HarnessError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(error.to_string())
    }
}
