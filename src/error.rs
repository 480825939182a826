/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Error type for the whole crate
//!
//! Failures produced by this crate have their own variants. Errors coming from
//! `reqwest`, `reqwest-middleware` or `serde_json` are wrapped unmodified so the
//! caller can still inspect the original error.

use reqwest::StatusCode;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// The requested resource name is not registered in the client
    ResourceNotImplemented(String),
    /// The resource exists but does not declare the requested action
    ActionNotImplemented {
        /// Resource name
        resource: String,
        /// Action name
        action: String,
    },
    /// Caller supplied invalid input
    InvalidInput(String),
    /// A header name or value could not be built
    InvalidHeader(String),
    /// Server answered 401
    Unauthorized,
    /// Server answered 404
    NotFound,
    /// Server answered 429
    RateLimitExceeded,
    /// Any other non-success status
    Unexpected(StatusCode),
    /// Error raised by `reqwest`
    Network(reqwest::Error),
    /// Error raised by the middleware chain
    Middleware(reqwest_middleware::Error),
    /// JSON encoding or decoding error
    Json(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ResourceNotImplemented(name) => {
                write!(f, "Resource \"{name}\" is not implemented")
            }
            AppError::ActionNotImplemented { resource, action } => {
                write!(
                    f,
                    "Action \"{action}\" is not implemented on resource \"{resource}\""
                )
            }
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::InvalidHeader(msg) => write!(f, "invalid header: {msg}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::NotFound => write!(f, "not found"),
            AppError::RateLimitExceeded => write!(f, "rate limit exceeded"),
            AppError::Unexpected(status) => write!(f, "unexpected http status: {status}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Middleware(e) => write!(f, "middleware error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Middleware(e) => Some(e),
            AppError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}

impl From<reqwest_middleware::Error> for AppError {
    fn from(err: reqwest_middleware::Error) -> Self {
        AppError::Middleware(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<reqwest::header::InvalidHeaderName> for AppError {
    fn from(err: reqwest::header::InvalidHeaderName) -> Self {
        AppError::InvalidHeader(err.to_string())
    }
}

impl From<reqwest::header::InvalidHeaderValue> for AppError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        AppError::InvalidHeader(err.to_string())
    }
}
