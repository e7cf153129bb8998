//! Data-pipe adapters for ML pipelines.
//!
//! Each adapter turns a source of URLs into an async stream:
//!
//! - [`AisFileLister`]: `provider://bucket/prefix` → every matching object URL
//! - [`AisFileLoader`]: object URL → `(url, ObjectReader)`
//! - [`AisSourceLister`]: [`AisSource`](crate::client::AisSource)s → full HTTP URLs
//!
//! The module only exists with the `datapipes` feature enabled.
//!
//! ```rust,ignore
//! use aistore::client::Client;
//! use aistore::datapipes::AisFileLister;
//! use futures_util::StreamExt;
//!
//! let client = Client::new("http://localhost:8080")?;
//! let files = AisFileLister::new(client, ["gcp://bucket-name/folder/", "ais://bucket-name/"])
//!     .load_files()
//!     .into_stream();
//! futures_util::pin_mut!(files);
//! while let Some(item) = files.next().await {
//!     let (url, reader) = item?;
//!     let bytes = reader.read_all().await?;
//! }
//! ```

pub mod lister;
pub mod loader;
pub mod source_lister;

pub use lister::AisFileLister;
pub use loader::AisFileLoader;
pub use source_lister::AisSourceLister;

use futures_util::stream;

use crate::api::AisResult;
use crate::client::UrlStream;

/// Turn a finite list of URLs into an owned stream, with its length.
fn url_source<I, S>(urls: I) -> (UrlStream<'static>, usize)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let urls: Vec<AisResult<String>> = urls.into_iter().map(|url| Ok(url.into())).collect();
    let len = urls.len();
    (Box::pin(stream::iter(urls)), len)
}
