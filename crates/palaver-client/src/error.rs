//! Client error types.

use thiserror::Error;

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server rejected the request (4xx).
    #[error("Client error ({status}): {message}")]
    Client {
        /// HTTP status code.
        status: u16,
        /// Error message from the response body.
        message: String,
    },

    /// Server failed to process the request (5xx).
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Error message from the response body.
        message: String,
    },

    /// Response status outside both the success and error ranges.
    ///
    /// Treated as fatal: the server is not speaking the expected contract,
    /// so retrying will not help.
    #[error("Unexpected HTTP status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Error message, when one could be extracted.
        message: String,
    },

    /// Operation requires a server-assigned conversation id.
    #[error("Conversation id is required for {0}")]
    MissingId(&'static str),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Map a non-success status code and message to the right error category.
    pub(crate) fn from_status(status: u16, message: String) -> Self {
        match status {
            400..=499 => Error::Client { status, message },
            500..=599 => Error::Server { status, message },
            _ => Error::UnexpectedStatus { status, message },
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Client { status: 404, .. })
    }

    /// Check if the server rejected the request (4xx).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Client { .. })
    }

    /// Check if the server failed to process the request (5xx).
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Server { .. })
    }

    /// The HTTP status code, for errors that carry one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Client { status, .. }
            | Error::Server { status, .. }
            | Error::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error body returned by the server.
///
/// Either field may be absent; `error_title` wins when both are present.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error_title: Option<String>,
}

impl ErrorBody {
    pub(crate) fn into_message(self) -> Option<String> {
        self.error_title.or(self.description)
    }
}
