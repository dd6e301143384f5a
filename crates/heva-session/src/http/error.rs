/*
[INPUT]:  Error sources (HTTP, API status, storage, validation, config)
[OUTPUT]: Structured error types with classification helpers
[POS]:    Error handling layer - one error type for client and session
[UPDATE]: When adding failure modes or changing user-facing messages
*/

use reqwest::StatusCode;
use thiserror::Error;

use crate::auth::{StoreError, ValidationError};

/// Main error type for the HEVA client
#[derive(Error, Debug)]
pub enum HevaError {
    /// Transport-level failure (connection refused, DNS, TLS, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status
    #[error("{message} (status {code})")]
    Api { code: u16, message: String },

    /// Login rejected or unreachable
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Backend rejected the bearer token; the local session was cleared
    #[error("Session expired, please log in again")]
    SessionExpired,

    /// Authenticated call attempted without a token
    #[error("Not logged in: no bearer token available")]
    MissingToken,

    /// Token contains characters that cannot go into a header
    #[error("Invalid authorization header: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Token storage error: {0}")]
    Storage(#[from] StoreError),

    /// Client-side form validation failed; nothing was sent
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl HevaError {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            HevaError::Http(_) => true,
            HevaError::Api { code, .. } => *code >= 500,
            _ => false,
        }
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            HevaError::Authentication { .. } | HevaError::SessionExpired | HevaError::MissingToken
        )
    }

    pub fn is_validation_error(&self) -> bool {
        matches!(self, HevaError::Validation(_))
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        HevaError::Api {
            code: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Result type alias for HEVA client operations
pub type Result<T> = std::result::Result<T, HevaError>;
