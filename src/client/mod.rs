//! High-level client: buckets, objects and object groups on top of
//! [`RequestClient`].
//!
//! ```rust,ignore
//! use aistore::client::{Client, GetOptions};
//! use aistore::shared::Provider;
//! use futures_util::TryStreamExt;
//!
//! let client = Client::new("http://localhost:8080")?;
//! let bucket = client.bucket("images", Provider::Ais);
//!
//! let entries = bucket.list_all_objects("train/").await?;
//! let bytes = bucket.object("train/0001.jpg").get(GetOptions::new()).await?.read_all().await?;
//! ```

pub mod bucket;
pub mod object;
pub mod object_group;
pub mod source;

pub use bucket::Bucket;
pub use object::{GetOptions, Object, ObjectReader};
pub use object_group::ObjectGroup;
pub use source::{AisSource, UrlStream};

use crate::api::{AisResult, RequestClient};
use crate::shared::Provider;

/// Entry point for bucket and object operations.
#[derive(Debug, Clone)]
pub struct Client {
    request_client: RequestClient,
}

impl Client {
    /// Create a client for `endpoint` with the default HTTP session.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[cfg(feature = "http")]
    pub fn new(endpoint: impl Into<String>) -> AisResult<Self> {
        Ok(Self::from_request_client(RequestClient::new(endpoint)?))
    }

    /// Create a client for the endpoint in `AIS_ENDPOINT`, or the local default.
    #[cfg(feature = "http")]
    pub fn from_env() -> AisResult<Self> {
        Self::new(crate::network::endpoint_from_env())
    }

    /// Wrap an already configured request client.
    pub fn from_request_client(request_client: RequestClient) -> Self {
        Self { request_client }
    }

    pub fn request_client(&self) -> &RequestClient {
        &self.request_client
    }

    /// Handle to a bucket. No request is made.
    pub fn bucket(&self, name: impl Into<String>, provider: Provider) -> Bucket {
        Bucket::new(self.request_client.clone(), name.into(), provider)
    }
}
