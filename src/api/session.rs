//! Transport seam between [`RequestClient`](crate::api::RequestClient) and the network.
//!
//! [`Session`] is the only thing the request client talks to. The default
//! [`ReqwestSession`] sends real HTTP; tests plug in their own implementation.

use std::fmt;
use std::pin::Pin;
use std::time::Duration;

use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use futures_util::stream::{self, Stream, StreamExt};
use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use serde::Serialize;

use crate::api::error::{AisError, AisResult};

/// Stream of body chunks.
pub type ByteStream = Pin<Box<dyn Stream<Item = AisResult<Bytes>> + Send>>;

// ============================================================================
// Request
// ============================================================================

/// Fully resolved request handed to a [`Session`].
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    /// URL without the query string
    pub url: String,
    pub headers: HeaderMap,
    /// Query parameters, in caller order
    pub query: Vec<(String, String)>,
    pub body: Option<Bytes>,
    /// Per-request timeout
    pub timeout: Option<Duration>,
}

/// Caller-supplied extras forwarded verbatim to the session.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub headers: HeaderMap,
    pub params: Vec<(String, String)>,
    pub body: Option<Bytes>,
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header. Fails on names or values the HTTP layer rejects.
    pub fn header(mut self, name: &str, value: &str) -> AisResult<Self> {
        let header_name = HeaderName::try_from(name)
            .map_err(|e| AisError::InvalidHeader(format!("Invalid header name '{}': {}", name, e)))?;
        let header_value = HeaderValue::from_str(value).map_err(|e| {
            AisError::InvalidHeader(format!("Invalid header value for '{}': {}", name, e))
        })?;
        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Add a single query parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Add several query parameters.
    pub fn params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Set a raw request body.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `value` as the JSON request body.
    pub fn json<B: Serialize + ?Sized>(mut self, value: &B) -> AisResult<Self> {
        let encoded = serde_json::to_vec(value)
            .map_err(|e| AisError::Serialize(format!("Failed to encode JSON body: {}", e)))?;
        self.body = Some(Bytes::from(encoded));
        Ok(self)
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

// ============================================================================
// Response
// ============================================================================

enum Body {
    Full(Bytes),
    Stream(ByteStream),
}

/// Response as returned by a [`Session`].
///
/// The body is not read until the caller asks for it, so large objects can be
/// consumed chunk by chunk through [`Response::into_stream`].
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Body,
}

impl Response {
    /// Response with a fully buffered body.
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Body::Full(body.into()),
        }
    }

    /// Response whose body arrives as a stream of chunks.
    pub fn from_stream<S>(status: StatusCode, headers: HeaderMap, stream: S) -> Self
    where
        S: Stream<Item = AisResult<Bytes>> + Send + 'static,
    {
        Self {
            status,
            headers,
            body: Body::Stream(Box::pin(stream)),
        }
    }

    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status.as_u16())
    }

    /// Read the whole body.
    pub async fn bytes(self) -> AisResult<Bytes> {
        match self.body {
            Body::Full(bytes) => Ok(bytes),
            Body::Stream(mut stream) => {
                let mut buf = BytesMut::new();
                while let Some(chunk) = stream.next().await {
                    buf.extend_from_slice(&chunk?);
                }
                Ok(buf.freeze())
            }
        }
    }

    /// Read the whole body as text. Invalid UTF-8 is replaced, not rejected.
    pub async fn text(self) -> AisResult<String> {
        let bytes = self.bytes().await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Consume the body as a raw byte stream.
    pub fn into_stream(self) -> ByteStream {
        match self.body {
            Body::Full(bytes) if bytes.is_empty() => Box::pin(stream::empty()),
            Body::Full(bytes) => Box::pin(stream::once(async move { Ok(bytes) })),
            Body::Stream(stream) => stream,
        }
    }
}

impl fmt::Debug for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = match &self.body {
            Body::Full(bytes) => format!("{} bytes", bytes.len()),
            Body::Stream(_) => "<stream>".to_string(),
        };
        f.debug_struct("Response")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .field("body", &body)
            .finish()
    }
}

// ============================================================================
// Session
// ============================================================================

/// Sends a resolved request and returns the raw response, whatever its status.
#[async_trait]
pub trait Session: Send + Sync {
    async fn send(&self, request: HttpRequest) -> AisResult<Response>;
}

/// [`Session`] backed by a shared `reqwest::Client`.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct ReqwestSession {
    client: reqwest::Client,
}

#[cfg(feature = "http")]
impl ReqwestSession {
    /// Build a session with an optional client-wide timeout.
    pub fn new(timeout: Option<Duration>) -> AisResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl Session for ReqwestSession {
    async fn send(&self, request: HttpRequest) -> AisResult<Response> {
        let mut builder = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let stream = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| AisError::Body(e.to_string())));
        Ok(Response::from_stream(status, headers, stream))
    }
}
