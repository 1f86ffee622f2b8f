//! Error types for bit.ly API operations.

use thiserror::Error;

/// Errors that can occur during bit.ly API operations.
#[derive(Debug, Error)]
pub enum BitlyError {
    /// Configuration is missing or incomplete.
    #[error("bit.ly configuration required: {0}")]
    ConfigMissing(String),

    /// A method was called without the arguments it needs.
    ///
    /// Raised before any request is sent.
    #[error("Invalid usage: {0}")]
    Usage(String),

    /// The HTTP layer answered with a status other than 200.
    #[error("HTTP {status_code}: {body}")]
    Transport { status_code: u16, body: String },

    /// The connect or request timeout elapsed.
    #[error("Request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// The service reported a failure inside its JSON envelope.
    #[error("bit.ly API error {status_code}: {message}")]
    Api { status_code: i64, message: String },

    /// HTTP transport error (connection refused, TLS failure, ...).
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response decoded but lacked a field the caller depends on.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Broad category of a [`BitlyError`].
///
/// Lets callers branch on the failure domain without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The call was rejected locally, nothing was sent.
    Usage,
    /// Network failure, timeout, or non-200 HTTP status.
    Transport,
    /// Non-200 `status_code` in the response envelope.
    Application,
    /// Configuration, decoding, or URL problems.
    Other,
}

impl BitlyError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Usage(_) => ErrorKind::Usage,
            Self::Transport { .. } | Self::Timeout(_) | Self::Http(_) => ErrorKind::Transport,
            Self::Api { .. } => ErrorKind::Application,
            Self::ConfigMissing(_)
            | Self::Parse(_)
            | Self::Url(_)
            | Self::MalformedResponse(_) => ErrorKind::Other,
        }
    }

    /// Returns true if the request hit the connect or request timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }

    /// The numeric status code carried by transport and application errors.
    pub fn status_code(&self) -> Option<i64> {
        match self {
            Self::Transport { status_code, .. } => Some(i64::from(*status_code)),
            Self::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for BitlyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else {
            Self::Http(err)
        }
    }
}

/// Result type alias for bit.ly operations.
pub type Result<T> = core::result::Result<T, BitlyError>;
