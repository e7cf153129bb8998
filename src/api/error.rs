//! Error types for the AIStore request client.

use http::StatusCode;
use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum AisError {
    /// HTTP/network error from reqwest
    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The cluster answered with a status outside 200-299
    #[error(transparent)]
    Status(#[from] StatusError),

    /// A successful response body did not match the expected type
    #[error("Deserialization error: {0}")]
    Deserialize(String),

    /// Request body or query string could not be encoded
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Header name or value rejected by the HTTP layer
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Malformed `provider://bucket/object` URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Invalid parameter provided
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Reading the response body failed after the status line was received.
    /// Custom [`Session`](crate::api::Session) implementations should use it
    /// for failures in their body streams.
    #[error("Body error: {0}")]
    Body(String),
}

/// Result type alias for SDK operations.
pub type AisResult<T> = Result<T, AisError>;

impl AisError {
    /// HTTP status carried by the error, if it came from a non-2xx response.
    pub fn status(&self) -> Option<u16> {
        match self {
            AisError::Status(err) => Some(err.status()),
            _ => None,
        }
    }
}

/// Non-2xx response, classified by status code and message.
#[derive(Debug, Clone, Error)]
pub enum StatusError {
    #[error("Bucket not found: {}", .0.message)]
    BucketNotFound(ErrorResponse),

    #[error("Remote bucket not found: {}", .0.message)]
    RemoteBucketNotFound(ErrorResponse),

    #[error("Bucket already exists: {}", .0.message)]
    BucketAlreadyExists(ErrorResponse),

    #[error("ETL already exists: {}", .0.message)]
    EtlAlreadyExists(ErrorResponse),

    /// Resource not found (404)
    #[error("Not found: {}", .0.message)]
    NotFound(ErrorResponse),

    /// Conflicting state (409)
    #[error("Conflict: {}", .0.message)]
    Conflict(ErrorResponse),

    /// Any other status
    #[error("AIStore error {}: {}", .0.status, .0.message)]
    Ais(ErrorResponse),
}

impl StatusError {
    /// Classify an error response.
    ///
    /// Client errors are first matched on the message text, the way the cluster
    /// reports missing or duplicate buckets, then on the status code.
    pub fn classify(status: StatusCode, response: ErrorResponse) -> Self {
        if status.is_client_error() {
            let text = response.message.to_lowercase();
            if text.contains("does not exist") {
                if text.contains("remote bucket") {
                    return StatusError::RemoteBucketNotFound(response);
                }
                if text.contains("bucket") {
                    return StatusError::BucketNotFound(response);
                }
                return StatusError::NotFound(response);
            }
            if text.contains("already exists") {
                if text.contains("etl") {
                    return StatusError::EtlAlreadyExists(response);
                }
                return StatusError::BucketAlreadyExists(response);
            }
        }

        match status {
            StatusCode::NOT_FOUND => StatusError::NotFound(response),
            StatusCode::CONFLICT => StatusError::Conflict(response),
            _ => StatusError::Ais(response),
        }
    }

    pub fn response(&self) -> &ErrorResponse {
        match self {
            StatusError::BucketNotFound(r)
            | StatusError::RemoteBucketNotFound(r)
            | StatusError::BucketAlreadyExists(r)
            | StatusError::EtlAlreadyExists(r)
            | StatusError::NotFound(r)
            | StatusError::Conflict(r)
            | StatusError::Ais(r) => r,
        }
    }

    pub fn status(&self) -> u16 {
        self.response().status
    }
}

/// Error body returned by the cluster.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
pub struct ErrorResponse {
    /// HTTP status as reported by the cluster
    #[serde(default)]
    pub status: u16,
    /// Human-readable error message
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub url_path: String,
    #[serde(default)]
    pub remote_addr: String,
    #[serde(default)]
    pub caller: String,
    /// Node that produced the error
    #[serde(default)]
    pub node: String,
}

impl ErrorResponse {
    /// Build a response from a non-JSON body.
    pub fn from_text(status: StatusCode, text: impl Into<String>) -> Self {
        let text = text.into();
        let message = if text.is_empty() {
            status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
        } else {
            text
        };
        Self {
            status: status.as_u16(),
            message,
            ..Default::default()
        }
    }

    /// Parse a cluster error body, falling back to the raw text.
    pub fn parse(status: StatusCode, body: &str) -> Self {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(mut response) => {
                if response.status == 0 {
                    response.status = status.as_u16();
                }
                if response.message.is_empty() {
                    response.message = body.to_string();
                }
                response
            }
            Err(_) => Self::from_text(status, body.trim()),
        }
    }
}

/// Turns a non-2xx response into an error.
///
/// Any `Fn(StatusCode, &str) -> AisError` works, so tests and callers can
/// swap the mapping without a new type.
pub trait ErrorHandler: Send + Sync {
    fn handle(&self, status: StatusCode, body: &str) -> AisError;
}

impl<F> ErrorHandler for F
where
    F: Fn(StatusCode, &str) -> AisError + Send + Sync,
{
    fn handle(&self, status: StatusCode, body: &str) -> AisError {
        self(status, body)
    }
}

/// Default error policy: parse the cluster error body and classify it.
pub fn handle_errors(status: StatusCode, body: &str) -> AisError {
    AisError::Status(StatusError::classify(status, ErrorResponse::parse(status, body)))
}
