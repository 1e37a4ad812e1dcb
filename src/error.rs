//! Error type used internally by the client.
//!
//! `AppError` never crosses the public request boundary: the request wrapper
//! converts it into an [`ApiResult::Failure`](crate::model::result::ApiResult)
//! whose message is the error's `Display` output.

use reqwest::StatusCode;
use reqwest::header::{InvalidHeaderName, InvalidHeaderValue};
use std::fmt;

/// Errors produced while building, sending or decoding a request
#[derive(Debug)]
pub enum AppError {
    /// The server answered with a non-success status code
    HttpStatus(StatusCode),
    /// The request did not complete within the configured timeout (seconds)
    Timeout(u64),
    /// Transport level failure reported by `reqwest`
    Network(reqwest::Error),
    /// JSON serialization or parsing failure
    Json(serde_json::Error),
    /// A caller supplied header could not be used
    InvalidHeader(String),
    /// Invalid caller input, e.g. an unresolved path placeholder in strict mode
    InvalidInput(String),
    /// An endpoint key that is not part of the registry
    UnknownEndpoint(String),
    /// I/O failure
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::HttpStatus(status) => {
                write!(f, "HTTP error! status: {}", status.as_u16())
            }
            AppError::Timeout(secs) => write!(f, "request timed out after {secs}s"),
            AppError::Network(e) => write!(f, "{e}"),
            AppError::Json(e) => write!(f, "{e}"),
            AppError::InvalidHeader(msg) => write!(f, "invalid header: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::UnknownEndpoint(key) => write!(f, "unknown endpoint: {key}"),
            AppError::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl AppError {
    /// Returns the HTTP status carried by this error, if any
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::HttpStatus(status) => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<InvalidHeaderName> for AppError {
    fn from(e: InvalidHeaderName) -> Self {
        AppError::InvalidHeader(e.to_string())
    }
}

impl From<InvalidHeaderValue> for AppError {
    fn from(e: InvalidHeaderValue) -> Self {
        AppError::InvalidHeader(e.to_string())
    }
}
