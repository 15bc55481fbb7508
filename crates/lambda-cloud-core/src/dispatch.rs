//! Request dispatch and response classification.
//!
//! Every Lambda Cloud call goes through [`Dispatcher`]: it resolves the route
//! against the configured API root, attaches the bearer token, and turns the
//! response into either the typed payload or an [`Error`].
//!
//! Successful bodies are enveloped as `{"data": ...}`. Failed bodies are
//! [`ErrorResponse`] documents and surface as [`Error::Api`].

use crate::config::LambdaCloudConfig;
use crate::error::{Error, ErrorResponse, Result};
use crate::transport::{Transport, TransportRequest, TransportResponse};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// HTTP methods used by the Lambda Cloud API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `DELETE`
    Delete,
}

impl HttpMethod {
    /// Returns the method name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: T,
}

/// Sends requests for a single configuration over a [`Transport`].
///
/// Stateless apart from the shared configuration, so clones may be used from
/// any number of tasks at once.
#[derive(Clone)]
pub struct Dispatcher {
    config: Arc<LambdaCloudConfig>,
    base_url: Url,
    transport: Arc<dyn Transport>,
}

impl Dispatcher {
    /// Create a dispatcher.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base path is not a valid URL.
    pub fn new(config: Arc<LambdaCloudConfig>, transport: Arc<dyn Transport>) -> Result<Self> {
        let base_url = config.parse_base_url()?;
        if base_url.cannot_be_a_base() {
            return Err(Error::ConfigError(format!(
                "Base path `{}` cannot carry routes",
                config.base_path()
            )));
        }
        Ok(Self {
            config,
            base_url,
            transport,
        })
    }

    /// Returns the configuration requests are sent with.
    #[must_use]
    pub fn config(&self) -> &LambdaCloudConfig {
        &self.config
    }

    /// Send a request and decode the `data` payload of the response.
    ///
    /// `route` lists the path segments below the API root. Each segment is
    /// percent-encoded, so ids containing `/`, `?` or `#` stay inside their
    /// segment.
    ///
    /// A 204 or empty success body is decoded from JSON `null`, so `T = ()` and
    /// `T = Option<_>` accept it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] when the API rejects the request, a transport
    /// error when it cannot be reached, [`Error::InvalidEndpoint`] for an empty,
    /// `.` or `..` segment, and [`Error::ParseError`] when the success body does
    /// not match `T`.
    pub async fn dispatch<T>(
        &self,
        route: &[&str],
        method: HttpMethod,
        body: Option<String>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let (url, response) = self.execute(route, method, body).await?;

        if response.has_no_content() {
            return serde_json::from_value(serde_json::Value::Null).map_err(|err| {
                Error::ParseError(format!("Empty response for `{}`: {err}", url.path()))
            });
        }

        serde_json::from_str::<Envelope<T>>(&response.body)
            .map(|envelope| envelope.data)
            .map_err(|err| {
                Error::ParseError(format!(
                    "Failed to parse response for `{}`: {err}",
                    url.path()
                ))
            })
    }

    /// Send a request whose success body is discarded unread.
    ///
    /// # Errors
    ///
    /// Same failure classification as [`Dispatcher::dispatch`].
    pub async fn dispatch_empty(
        &self,
        route: &[&str],
        method: HttpMethod,
        body: Option<String>,
    ) -> Result<()> {
        self.execute(route, method, body).await.map(|_| ())
    }

    async fn execute(
        &self,
        route: &[&str],
        method: HttpMethod,
        body: Option<String>,
    ) -> Result<(Url, TransportResponse)> {
        let url = self.route_url(route)?;
        let path = url.path().to_string();
        debug!(%method, %path, "dispatching Lambda Cloud request");

        let response = self
            .transport
            .send(TransportRequest {
                method,
                url: url.clone(),
                authorization: self.config.authorization(),
                body,
            })
            .await?;

        debug!(%method, %path, status = %response.status, "Lambda Cloud request completed");

        if response.is_success() {
            Ok((url, response))
        } else {
            Err(classify_failure(&path, &response))
        }
    }

    /// Resolve `route` below the API root, one encoded segment per entry.
    fn route_url(&self, route: &[&str]) -> Result<Url> {
        if let Some(segment) = route
            .iter()
            .find(|segment| matches!(**segment, "" | "." | ".."))
        {
            return Err(Error::InvalidEndpoint(format!(
                "Invalid route segment `{segment}` in {route:?}"
            )));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| {
                Error::InvalidEndpoint(format!(
                    "Base path `{}` cannot carry routes",
                    self.config.base_path()
                ))
            })?
            .pop_if_empty()
            .extend(route);
        Ok(url)
    }
}

fn classify_failure(path: &str, response: &TransportResponse) -> Error {
    let status = response.status;
    match serde_json::from_str::<ErrorResponse>(&response.body) {
        Ok(parsed) => Error::Api {
            status: status.as_u16(),
            response: Box::new(parsed),
        },
        Err(err) => {
            warn!(%path, %status, %err, "Lambda Cloud error body is not an error response");
            Error::HttpError(format!("Lambda Cloud error {status}: {}", response.body))
        }
    }
}
