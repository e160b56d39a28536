//! Error types for people-pager
//!
//! Every fallible API in the crate returns `Result<T, Error>`. Transport,
//! status and decoding failures are all variants of the same [`Error`], so a
//! failed page fetch reaches the pagination controller as a single value.
//! [`Error::kind`] recovers the coarse taxonomy when a caller needs it.

use thiserror::Error;

/// The main error type for people-pager
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

/// Coarse classification of a failed page fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Network or connection failure, including timeouts
    Transport,
    /// The server answered with a non-success status
    Server,
    /// The payload did not match the expected shape
    Decode,
    /// Anything that is not a fetch failure (config, I/O, ...)
    Other,
}

impl Error {
    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Classify this error for display or diagnostics
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            Error::Http(e) if e.is_decode() => FetchErrorKind::Decode,
            Error::Http(_) | Error::Timeout { .. } => FetchErrorKind::Transport,
            Error::HttpStatus { .. } => FetchErrorKind::Server,
            Error::Decode { .. } | Error::JsonParse(_) => FetchErrorKind::Decode,
            _ => FetchErrorKind::Other,
        }
    }
}

/// Result type alias for people-pager
pub type Result<T> = std::result::Result<T, Error>;
