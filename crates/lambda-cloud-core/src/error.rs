//! Error types for Lambda Cloud operations.
//!
//! This module provides the provider's closed error code set, the structured
//! error body returned on failed requests, and the crate-wide [`Error`] type that
//! separates domain failures from transport failures.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Error codes returned by the Lambda Cloud API.
///
/// The set is closed: a code string this crate does not recognise deserializes
/// as [`ErrorCode::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ErrorCode {
    /// `global/unknown`
    Unknown,
    /// `global/invalid-api-key`
    InvalidApiKey,
    /// `global/account-inactive`
    AccountInactive,
    /// `global/invalid-parameters`
    InvalidParameters,
    /// `global/object-does-not-exist`
    ObjectDoesNotExist,
    /// `instance-operations/launch/insufficient-capacity`
    InsufficientCapacity,
    /// `instance-operations/launch/file-system-in-wrong-region`
    FileSystemInWrongRegion,
    /// `instance-operations/launch/file-systems-not-supported`
    FileSystemsNotSupported,
    /// `ssh-keys/key-in-use`
    KeyInUse,
}

impl ErrorCode {
    /// Every code in the set.
    pub const ALL: [Self; 9] = [
        Self::Unknown,
        Self::InvalidApiKey,
        Self::AccountInactive,
        Self::InvalidParameters,
        Self::ObjectDoesNotExist,
        Self::InsufficientCapacity,
        Self::FileSystemInWrongRegion,
        Self::FileSystemsNotSupported,
        Self::KeyInUse,
    ];

    /// Returns the wire representation of the code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "global/unknown",
            Self::InvalidApiKey => "global/invalid-api-key",
            Self::AccountInactive => "global/account-inactive",
            Self::InvalidParameters => "global/invalid-parameters",
            Self::ObjectDoesNotExist => "global/object-does-not-exist",
            Self::InsufficientCapacity => "instance-operations/launch/insufficient-capacity",
            Self::FileSystemInWrongRegion => {
                "instance-operations/launch/file-system-in-wrong-region"
            }
            Self::FileSystemsNotSupported => {
                "instance-operations/launch/file-systems-not-supported"
            }
            Self::KeyInUse => "ssh-keys/key-in-use",
        }
    }

    /// Returns true for codes only produced by the launch operation.
    #[must_use]
    pub const fn is_launch_error(&self) -> bool {
        matches!(
            self,
            Self::InsufficientCapacity | Self::FileSystemInWrongRegion | Self::FileSystemsNotSupported
        )
    }
}

impl From<&str> for ErrorCode {
    fn from(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == value)
            .unwrap_or(Self::Unknown)
    }
}

impl From<String> for ErrorCode {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<ErrorCode> for String {
    fn from(code: ErrorCode) -> Self {
        code.as_str().to_string()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single provider error: code, message and optional suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Suggested remedy, if the provider offers one
    #[serde(default)]
    pub suggestion: Option<String>,
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " ({suggestion})")?;
        }
        Ok(())
    }
}

/// Error body returned by the Lambda Cloud API for non-2xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Top-level error
    pub error: ErrorDetail,
    /// Per-field validation errors keyed by field name
    #[serde(default)]
    pub field_errors: HashMap<String, ErrorDetail>,
}

impl ErrorResponse {
    /// Look up the validation error reported for a request field.
    #[must_use]
    pub fn field_error(&self, field: &str) -> Option<&ErrorDetail> {
        self.field_errors.get(field)
    }
}

/// Main error type for Lambda Cloud operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The API rejected the request with a structured error body
    #[error("Lambda Cloud API error ({status}): {}", .response.error)]
    Api {
        /// HTTP status code of the response
        status: u16,
        /// Parsed error body
        response: Box<ErrorResponse>,
    },

    /// The API could not be reached
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Operation timed out
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The connection failed after it was established, e.g. a reset while
    /// reading the body
    #[error("Network error: {0}")]
    Network(String),

    /// The API answered with a failure status but no error body
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// A response body could not be decoded
    #[error("Failed to parse Lambda Cloud response: {0}")]
    ParseError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid endpoint
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Specialized result type for Lambda Cloud operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Api { .. } => "API_ERROR",
            Self::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            Self::Timeout(_) => "TIMEOUT",
            Self::Network(_) => "NETWORK_ERROR",
            Self::HttpError(_) => "HTTP_ERROR",
            Self::ParseError(_) => "PARSE_ERROR",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::ValidationError(_) => "VALIDATION_ERROR",
        }
    }

    /// Returns the provider error code when the API rejected the request.
    #[must_use]
    pub fn api_error_code(&self) -> Option<ErrorCode> {
        self.api_response().map(|response| response.error.code)
    }

    /// Returns the parsed error body when the API rejected the request.
    #[must_use]
    pub fn api_response(&self) -> Option<&ErrorResponse> {
        match self {
            Self::Api { response, .. } => Some(response),
            _ => None,
        }
    }

    /// Returns true if the exchange failed below HTTP, so no complete response
    /// was received.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::ServiceUnavailable(_) | Self::Timeout(_) | Self::Network(_)
        )
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::ServiceUnavailable(err.to_string())
        } else if err.is_builder() {
            Self::InvalidEndpoint(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ValidationError(err.to_string())
    }
}
