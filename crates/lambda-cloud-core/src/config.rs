//! Configuration for Lambda Cloud clients.
//!
//! A [`LambdaCloudConfig`] carries the API root and the API key. It is built fully
//! populated: when no base path is supplied the production v1 root is used.

use crate::Error;
use secrecy::{ExposeSecret, SecretString};
use url::Url;
use validator::Validate;

/// Production root of the Lambda Cloud v1 API.
pub const DEFAULT_BASE_PATH: &str = "https://cloud.lambdalabs.com/api/v1";

/// Configuration for a Lambda Cloud client instance.
///
/// The API key is never validated locally; an invalid key surfaces as
/// `global/invalid-api-key` on the first request.
#[derive(Debug, Clone, Validate)]
pub struct LambdaCloudConfig {
    #[validate(url)]
    base_path: String,

    api_key: SecretString,
}

impl LambdaCloudConfig {
    /// Create a configuration for the production API.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Lambda Cloud API key, sent as a bearer token
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            api_key: SecretString::from(api_key.into()),
        }
    }

    /// Create a configuration from an optional base path.
    ///
    /// `None` and empty strings fall back to [`DEFAULT_BASE_PATH`].
    #[must_use]
    pub fn from_parts(base_path: Option<String>, api_key: impl Into<String>) -> Self {
        let config = Self::new(api_key);
        match base_path {
            Some(path) => config.with_base_path(path),
            None => config,
        }
    }

    /// Override the API root (for example a mock server in tests).
    ///
    /// An empty value keeps [`DEFAULT_BASE_PATH`].
    #[must_use]
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        let base_path = base_path.into();
        let trimmed = base_path.trim_end_matches('/');
        self.base_path = if trimmed.is_empty() {
            DEFAULT_BASE_PATH.to_string()
        } else {
            trimmed.to_string()
        };
        self
    }

    /// Returns the API root without a trailing slash.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    /// Value of the `Authorization` header sent with every request.
    pub(crate) fn authorization(&self) -> String {
        format!("Bearer {}", self.api_key.expose_secret())
    }

    /// Validate the configuration and parse the API root.
    ///
    /// # Errors
    ///
    /// Returns an error if the base path is not an absolute URL.
    pub fn parse_base_url(&self) -> Result<Url, Error> {
        self.validate()
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {e}")))?;

        Url::parse(&self.base_path)
            .map_err(|e| Error::ConfigError(format!("Invalid base path: {e}")))
    }
}
