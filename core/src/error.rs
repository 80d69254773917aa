//! Error types for the booking API client.
//!
//! # Design
//! Failures are split by where they happened. `Transport` means no response
//! arrived at all and reports status 0. `Status` carries the non-2xx code and
//! the raw response text. `Deserialization` covers bodies that arrived with a
//! success status but could not be turned into the expected type. Only the
//! first two are "classified" HTTP failures whose message is fit to show a
//! user as-is.

use thiserror::Error;

/// Errors returned by the HTTP wrapper and the access layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection refused, ...).
    #[error("network request failed: {message}")]
    Transport { message: String },

    /// The server answered with a status outside 200..=299.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be read or deserialized into the expected
    /// type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}

impl ApiError {
    /// HTTP status carried by the error, 0 when no response was received.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Status { status, .. } => *status,
            _ => 0,
        }
    }

    pub fn is_classified(&self) -> bool {
        matches!(self, ApiError::Transport { .. } | ApiError::Status { .. })
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == 404
    }
}

/// Failure reported by a `Transport`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// No response arrived.
    #[error("{0}")]
    Connect(String),

    /// The status line arrived but the body could not be read (too large,
    /// connection dropped mid-body, invalid UTF-8).
    #[error("failed to read response body (HTTP {status}): {message}")]
    Body { status: u16, message: String },
}

impl From<TransportError> for ApiError {
    fn from(e: TransportError) -> Self {
        match e {
            TransportError::Connect(message) => ApiError::Transport { message },
            TransportError::Body { status, message } if (200..300).contains(&status) => {
                ApiError::Deserialization(format!("response body unreadable: {message}"))
            }
            TransportError::Body { status, message } => ApiError::Status {
                status,
                body: format!("<unreadable body: {message}>"),
            },
        }
    }
}
