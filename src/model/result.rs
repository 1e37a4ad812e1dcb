use crate::constants::GENERIC_ERROR_MESSAGE;
use crate::error::AppError;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Outcome of a single API call
///
/// A call either succeeds with the parsed response body or fails with a
/// human readable message. Serializes to the envelope
/// `{"success": true, "data": ...}` or `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<T> {
    /// The call completed and the body was parsed
    Success {
        /// Parsed response body
        data: T,
    },
    /// The call failed; nothing was parsed
    Failure {
        /// Human readable failure message
        error: String,
    },
}

impl<T> ApiResult<T> {
    /// Wraps parsed data
    pub fn success(data: T) -> Self {
        ApiResult::Success { data }
    }

    /// Wraps a failure message, substituting the generic message when empty
    pub fn failure(error: impl Into<String>) -> Self {
        let error = error.into();
        let error = if error.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            error
        };
        ApiResult::Failure { error }
    }

    /// Returns `true` for [`ApiResult::Success`]
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Success { .. })
    }

    /// Returns `true` for [`ApiResult::Failure`]
    #[must_use]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Parsed data of a successful call
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match self {
            ApiResult::Success { data } => Some(data),
            ApiResult::Failure { .. } => None,
        }
    }

    /// Failure message of a failed call
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            ApiResult::Success { .. } => None,
            ApiResult::Failure { error } => Some(error),
        }
    }

    /// Consumes the result, returning the data of a successful call
    pub fn into_data(self) -> Option<T> {
        match self {
            ApiResult::Success { data } => Some(data),
            ApiResult::Failure { .. } => None,
        }
    }

    /// Converts into a standard `Result` with the failure message as error
    pub fn into_result(self) -> Result<T, String> {
        match self {
            ApiResult::Success { data } => Ok(data),
            ApiResult::Failure { error } => Err(error),
        }
    }

    /// Maps the data of a successful call
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResult<U> {
        match self {
            ApiResult::Success { data } => ApiResult::Success { data: f(data) },
            ApiResult::Failure { error } => ApiResult::Failure { error },
        }
    }
}

impl<T> From<Result<T, AppError>> for ApiResult<T> {
    fn from(result: Result<T, AppError>) -> Self {
        match result {
            Ok(data) => ApiResult::success(data),
            Err(e) => ApiResult::failure(e.to_string()),
        }
    }
}

impl<T: Serialize> Serialize for ApiResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ApiResult", 2)?;
        match self {
            ApiResult::Success { data } => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
            }
            ApiResult::Failure { error } => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}
