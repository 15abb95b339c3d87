//! Client error taxonomy.
//!
//! Remote failures are caught where the call is made and turned into UI
//! state; none of these reach a global handler.

use crickboard_shared::ValidationErrors;

/// Transport-level failure from the HTTP layer.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS...).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("unexpected status {status}")]
    Status {
        status: u16,
        /// `error` field of the JSON body, when there was one.
        message: Option<String>,
    },

    /// Encoding the request or decoding the response failed.
    #[error("failed to decode body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(msg), ..
            } => Some(msg),
            _ => None,
        }
    }
}

/// Errors surfaced to the user.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Rejected credentials or unreachable auth endpoint. Shown next to the form.
    #[error("{0}")]
    Auth(String),

    /// Client-side field violations. Shown per field; submission blocked.
    #[error("invalid input: {0}")]
    Validation(ValidationErrors),

    /// Listing failure. Degraded to an empty list by the remote client.
    #[error("could not load matches: {0}")]
    Fetch(String),

    /// Match creation failed. Shown as an alert; the draft is kept.
    #[error("{0}")]
    Submission(String),
}

impl ClientError {
    /// Maps an auth-endpoint failure, preferring the server's own wording.
    pub fn auth(err: &ApiError, fallback: &str) -> Self {
        ClientError::Auth(err.server_message().unwrap_or(fallback).to_string())
    }
}
