//! HTTP transport seam.
//!
//! The dispatcher only needs a status code and the body text of a response.
//! [`Transport`] captures that contract; [`HttpTransport`] fulfils it with
//! `reqwest`.

use crate::dispatch::HttpMethod;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder, StatusCode};
use std::fmt;
use tracing::debug;
use url::Url;

/// A fully resolved request handed to a [`Transport`].
#[derive(Clone, PartialEq, Eq)]
pub struct TransportRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Absolute request URL
    pub url: Url,
    /// Value of the `Authorization` header
    pub authorization: String,
    /// Pre-serialized JSON body
    pub body: Option<String>,
}

impl fmt::Debug for TransportRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportRequest")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("authorization", &"[REDACTED]")
            .field("body", &self.body)
            .finish()
    }
}

/// Status and raw body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response body as text
    pub body: String,
}

impl TransportResponse {
    /// Create a response from a status and body.
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns true when there is nothing to parse.
    #[must_use]
    pub fn has_no_content(&self) -> bool {
        self.status == StatusCode::NO_CONTENT || self.body.trim().is_empty()
    }
}

/// Executes HTTP requests on behalf of the dispatcher.
///
/// Implementations report connectivity failures as `Err`; any response the
/// server produced, whatever its status, is `Ok`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and collect the response.
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse>;
}

/// [`Transport`] backed by a `reqwest` client.
///
/// No timeout is configured by default; supply a tuned [`Client`] through
/// [`HttpTransport::from_client`] to bound request time.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    /// Build a transport with the given `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(user_agent: &str) -> Result<Self> {
        let http = ClientBuilder::new()
            .user_agent(user_agent)
            .build()
            .map_err(|err| Error::ConfigError(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self { http })
    }

    /// Wrap an existing `reqwest` client.
    #[must_use]
    pub const fn from_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse> {
        let TransportRequest {
            method,
            url,
            authorization,
            body,
        } = request;

        let mut builder = self
            .http
            .request(method.into(), url)
            .header(AUTHORIZATION, authorization)
            .header(ACCEPT, "application/json");

        if let Some(payload) = body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(payload);
        }

        let response = builder.send().await?;
        let status = response.status();
        debug!(%status, "received Lambda Cloud response");

        let body = response.text().await?;
        Ok(TransportResponse { status, body })
    }
}
