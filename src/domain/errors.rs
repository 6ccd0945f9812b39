//! Domain error types
//!
//! This module defines the error hierarchy for the exporter.
//! Errors don't expose third-party types; HTTP and I/O failures are
//! converted to messages at the boundary where they occur.

use thiserror::Error;

/// Main export error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid user input (identifiers, frontmatter JSON, output path)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A request to the Notion API failed
    #[error("API request returned an error: {0}")]
    Request(#[from] RequestError),

    /// The API returned content in a shape the converter cannot handle
    #[error("Malformed content: {0}")]
    MalformedContent(String),

    /// A block type with no Markdown mapping was encountered
    #[error("Unsupported block type '{kind}' (block {block_id})")]
    UnsupportedBlock { kind: String, block_id: String },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Notion API request errors
///
/// Errors that occur when talking to the Notion REST API.
/// These errors don't expose reqwest types.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Failed to connect to the API host
    #[error("Failed to connect to Notion API: {0}")]
    ConnectionFailed(String),

    /// Request timed out
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Response body could not be decoded
    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),
}

impl RequestError {
    /// Builds the matching variant for a non-success HTTP status
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        if status >= 500 {
            RequestError::ServerError { status, message }
        } else {
            RequestError::ClientError { status, message }
        }
    }
}

impl ExportError {
    /// Whether this error came from the HTTP layer
    pub fn is_request_failure(&self) -> bool {
        matches!(self, ExportError::Request(_))
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for ExportError {
    fn from(err: toml::de::Error) -> Self {
        ExportError::Configuration(format!("TOML parse error: {err}"))
    }
}
