//! Failure classification for API calls.
//!
//! Transport problems, malformed payloads, and business rejections all
//! collapse into one enum so screens can show a single message string
//! and the app can react to auth loss in one place.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Could not open a connection to the server.
    #[error("connection failed: {source}")]
    Connect {
        #[source]
        source: reqwest::Error,
    },

    /// The request ran past the configured deadline.
    #[error("request timed out")]
    Timeout,

    /// Any other transport-level failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// The body was not the JSON we expected.
    #[error("malformed response: {0}")]
    Decode(String),

    /// The server no longer accepts our token.
    #[error("not signed in: {message}")]
    Unauthorized { message: String },

    /// The server processed the request and said no.
    #[error("server rejected request (code {code}): {message}")]
    Server { code: i32, message: String },

    /// Success envelope arrived without the payload the endpoint promises.
    #[error("response missing expected data")]
    MissingData,

    /// Local filesystem work on behalf of a request failed.
    #[error("failed to {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_connect() {
            ApiError::Connect { source: err }
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl ApiError {
    /// Short tag for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Connect { .. } => "connect",
            ApiError::Timeout => "timeout",
            ApiError::Transport(_) => "transport",
            ApiError::Decode(_) => "decode",
            ApiError::Unauthorized { .. } => "unauthorized",
            ApiError::Server { .. } => "server",
            ApiError::MissingData => "missing_data",
            ApiError::Io { .. } => "io",
        }
    }

    /// What the user sees. Server-sourced messages pass through
    /// verbatim, everything else gets a stable generic line.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Connect { .. } => "Cannot reach the server. Check your connection.".into(),
            ApiError::Timeout => "The server took too long to respond.".into(),
            ApiError::Transport(_) => "A network error occurred.".into(),
            ApiError::Decode(_) => "The server sent an unexpected response.".into(),
            ApiError::Unauthorized { message } => message.clone(),
            ApiError::Server { message, .. } => message.clone(),
            ApiError::MissingData => "The server sent an empty response.".into(),
            ApiError::Io { .. } => "A local file operation failed.".into(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }
}
