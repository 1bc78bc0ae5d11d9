//! Error types for the directory reporting engine.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when talking to the contact directory service.
#[derive(Error, Debug)]
pub enum DirectoryApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The directory answered but reported `success: false`
    #[error("Directory service reported failure: {0}")]
    ServiceFailure(String),

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Authentication failed
    #[error("Authentication failed")]
    Unauthorized,

    /// Generic API error with context
    #[error("API error: {0}")]
    Other(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Reasons a directory payload fails record validation.
///
/// A malformed payload is excluded from the snapshot individually; it never
/// aborts the surrounding load.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecordError {
    /// A mandatory field is absent from the payload
    #[error("Missing mandatory field: {0}")]
    MissingField(&'static str),

    /// Status value outside the closed enumeration
    #[error("Unknown contact status: {0}")]
    UnknownStatus(String),
}

/// Errors that can occur while reading an exported document back.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The text is not well-formed quoted CSV
    #[error("Export parse error: {0}")]
    ParseError(#[from] csv::Error),
}

/// Convenience type alias for Results with DirectoryApiError
pub type DirectoryApiResult<T> = Result<T, DirectoryApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ExportError
pub type ExportResult<T> = Result<T, ExportError>;
