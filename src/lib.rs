//! # AIStore Rust SDK
//!
//! A Rust client for AIStore clusters.
//!
//! ## Modules
//!
//! - [`api`]: request client (URL building, headers, error dispatch, typed
//!   deserialization) and wire types
//! - [`client`]: buckets, objects and object groups
//! - [`datapipes`]: list/load adapters for ML data pipelines (`datapipes` feature)
//!
//! Plus:
//! - [`shared`]: provider enum and `provider://bucket/object` URL helpers
//! - [`network`]: endpoint defaults
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use aistore::client::{Client, GetOptions};
//! use aistore::shared::Provider;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new("http://localhost:8080")?;
//!     let bucket = client.bucket("my-bucket", Provider::Ais);
//!
//!     for entry in bucket.list_all_objects("train/").await? {
//!         println!("{} ({} bytes)", entry.name, entry.size);
//!     }
//!
//!     let reader = bucket.object("train/0001.bin").get(GetOptions::new()).await?;
//!     let bytes = reader.read_all().await?;
//!     println!("read {} bytes", bytes.len());
//!
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Request client, transport seam, errors and wire types.
pub mod api;

/// Bucket and object operations built on the request client.
pub mod client;

/// Shared types and URL helpers.
pub mod shared;

/// Endpoint defaults.
pub mod network;

/// Iterable adapters that list and load objects for data pipelines.
#[cfg(feature = "datapipes")]
pub mod datapipes;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use aistore::prelude::*;
/// ```
pub mod prelude {
    // Request client
    pub use crate::api::{
        handle_errors, AisError, AisResult, ErrorHandler, ErrorResponse, HttpRequest,
        RequestClient, RequestClientBuilder, RequestOptions, Response, Session, StatusError,
    };
    #[cfg(feature = "http")]
    pub use crate::api::ReqwestSession;

    // Wire types
    pub use crate::api::types::{
        BucketEntry, BucketList, ByteRange, ListObjectsMsg, ObjectAttributes,
    };

    // High-level client
    pub use crate::client::{
        AisSource, Bucket, Client, GetOptions, Object, ObjectGroup, ObjectReader,
    };

    // Shared
    pub use crate::shared::{parse_url, unparse_url, Provider};

    // Network constants
    pub use crate::network::{API_VERSION, DEFAULT_ENDPOINT};

    // Data pipes
    #[cfg(feature = "datapipes")]
    pub use crate::datapipes::{AisFileLister, AisFileLoader, AisSourceLister};
}
