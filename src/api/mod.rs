//! Request client for the AIStore REST API.
//!
//! Every call to the cluster goes through [`RequestClient`], which owns the
//! transport ([`Session`]), the versioned base URL and the error policy.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use aistore::api::{RequestClient, RequestOptions};
//! use http::Method;
//!
//! let client = RequestClient::new("http://localhost:8080")?;
//!
//! // Raw response, body left unread for streaming
//! let response = client
//!     .request(Method::GET, "objects/bck/obj", RequestOptions::new().param("provider", "ais"))
//!     .await?;
//! ```
//!
//! # Error Handling
//!
//! Non-2xx responses never come back as `Ok`. They are handed to the
//! client's [`ErrorHandler`] (by default [`handle_errors`]):
//!
//! ```rust,ignore
//! use aistore::api::{AisError, StatusError};
//!
//! match client.request(Method::GET, "buckets/missing", RequestOptions::new()).await {
//!     Ok(response) => println!("status {}", response.status()),
//!     Err(AisError::Status(StatusError::BucketNotFound(resp))) => println!("{}", resp.message),
//!     Err(AisError::Deserialize(msg)) => println!("unexpected body: {}", msg),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```
//!
//! # Custom Transport
//!
//! ```rust,ignore
//! let client = RequestClient::builder("http://localhost:8080")
//!     .session(MySession::default())
//!     .error_handler(|status, body: &str| my_policy(status, body))
//!     .build()?;
//! ```

pub mod client;
pub mod constants;
pub mod error;
pub mod session;
pub mod types;

// Re-export main types for convenience
pub use client::{RequestClient, RequestClientBuilder};
pub use error::{handle_errors, AisError, AisResult, ErrorHandler, ErrorResponse, StatusError};
#[cfg(feature = "http")]
pub use session::ReqwestSession;
pub use session::{ByteStream, HttpRequest, RequestOptions, Response, Session};
pub use types::*;
