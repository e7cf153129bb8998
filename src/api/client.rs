//! AIStore request client implementation.
//!
//! [`RequestClient`] is the single place where requests to the cluster are
//! built and sent: it resolves paths against the versioned base URL, attaches
//! the standard headers, turns non-2xx responses into errors and optionally
//! deserializes the body.
//!
//! # Example
//!
//! ```rust,ignore
//! use aistore::api::{RequestClient, RequestOptions};
//! use aistore::api::types::BucketList;
//! use http::Method;
//!
//! let client = RequestClient::new("http://localhost:8080")?;
//! let url = client.get_full_url("objects/bck/obj", &[("provider", "ais")])?;
//! let list: BucketList = client
//!     .request_deserialize(Method::GET, "buckets/bck", RequestOptions::new())
//!     .await?;
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use http::header::{CONTENT_TYPE, USER_AGENT};
use http::{HeaderMap, HeaderValue, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::constants::{user_agent, JSON_CONTENT_TYPE};
use crate::api::error::{handle_errors, AisError, AisResult, ErrorHandler};
use crate::api::session::{HttpRequest, RequestOptions, Response, Session};
use crate::network::API_VERSION;

/// Builder for configuring [`RequestClient`].
pub struct RequestClientBuilder {
    endpoint: String,
    timeout: Option<Duration>,
    session: Option<Arc<dyn Session>>,
    error_handler: Arc<dyn ErrorHandler>,
}

impl RequestClientBuilder {
    /// Create a new builder for the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: None,
            session: None,
            error_handler: Arc::new(handle_errors),
        }
    }

    /// Set a client-wide timeout for the default session.
    ///
    /// Ignored when a custom session is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a custom transport instead of the reqwest-backed default.
    pub fn session(mut self, session: impl Session + 'static) -> Self {
        self.session = Some(Arc::new(session));
        self
    }

    /// Replace the status-code-to-error policy.
    pub fn error_handler(mut self, handler: impl ErrorHandler + 'static) -> Self {
        self.error_handler = Arc::new(handler);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if no session was supplied and the default one cannot
    /// be initialized (or the `http` feature is disabled).
    pub fn build(self) -> AisResult<RequestClient> {
        let session = match self.session {
            Some(session) => session,
            None => default_session(self.timeout)?,
        };
        Ok(RequestClient::from_parts(
            self.endpoint,
            session,
            self.error_handler,
        ))
    }
}

#[cfg(feature = "http")]
fn default_session(timeout: Option<Duration>) -> AisResult<Arc<dyn Session>> {
    Ok(Arc::new(crate::api::session::ReqwestSession::new(timeout)?))
}

#[cfg(not(feature = "http"))]
fn default_session(_timeout: Option<Duration>) -> AisResult<Arc<dyn Session>> {
    Err(AisError::InvalidParameter(
        "no session supplied and the `http` feature is disabled".to_string(),
    ))
}

/// Request client bound to one AIStore endpoint.
#[derive(Clone)]
pub struct RequestClient {
    endpoint: String,
    base_url: String,
    session: Arc<dyn Session>,
    error_handler: Arc<dyn ErrorHandler>,
}

impl RequestClient {
    /// Create a client with the default reqwest session.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(endpoint: impl Into<String>) -> AisResult<Self> {
        RequestClientBuilder::new(endpoint).build()
    }

    /// Create a client over an existing session.
    pub fn with_session(endpoint: impl Into<String>, session: impl Session + 'static) -> Self {
        Self::from_parts(endpoint.into(), Arc::new(session), Arc::new(handle_errors))
    }

    /// Create a new client builder for custom configuration.
    pub fn builder(endpoint: impl Into<String>) -> RequestClientBuilder {
        RequestClientBuilder::new(endpoint)
    }

    fn from_parts(
        endpoint: String,
        session: Arc<dyn Session>,
        error_handler: Arc<dyn ErrorHandler>,
    ) -> Self {
        let base_url = format!("{}/{}", endpoint, API_VERSION);
        Self {
            endpoint,
            base_url,
            session,
            error_handler,
        }
    }

    /// Endpoint as given at construction.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Endpoint plus the API version segment.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Transport every request goes through.
    pub fn session(&self) -> &Arc<dyn Session> {
        &self.session
    }

    /// Full URL for `path` with `params` encoded as the query string.
    ///
    /// Leading slashes on `path` are dropped. No `?` is appended when `params`
    /// encodes to nothing.
    pub fn get_full_url<P>(&self, path: &str, params: &P) -> AisResult<String>
    where
        P: Serialize + ?Sized,
    {
        let query = serde_urlencoded::to_string(params)
            .map_err(|e| AisError::Serialize(format!("Failed to encode query: {}", e)))?;
        let url = self.url_for(path);
        if query.is_empty() {
            Ok(url)
        } else {
            Ok(format!("{}?{}", url, query))
        }
    }

    /// Send a request and return the raw response.
    ///
    /// Any status outside 200-299 goes through the error handler and comes
    /// back as `Err`. On success the body is left unread.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> AisResult<Response> {
        let url = self.url_for(path);
        let mut headers = Self::request_headers();
        headers.extend(options.headers);

        tracing::debug!(method = %method, url = %url, "Sending request");

        let request = HttpRequest {
            method,
            url,
            headers,
            query: options.params,
            body: options.body,
            timeout: options.timeout,
        };
        let response = self.session.send(request).await?;

        if response.is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Failed to read error response body: {}", e);
                String::new()
            }
        };
        Err(self.error_handler.handle(status, &body))
    }

    /// Send a request and deserialize the JSON body into `T`.
    pub async fn request_deserialize<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> AisResult<T> {
        let text = self.request(method, path, options).await?.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            AisError::Deserialize(format!(
                "Failed to deserialize {}: {}",
                std::any::type_name::<T>(),
                e
            ))
        })
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        // The version string is ASCII, so this only fails if the constants are edited badly
        if let Ok(value) = HeaderValue::from_str(&user_agent()) {
            headers.insert(USER_AGENT, value);
        }
        headers
    }
}

impl fmt::Debug for RequestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestClient")
            .field("endpoint", &self.endpoint)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
