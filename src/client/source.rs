//! Anything that can enumerate full object URLs on the cluster.

use std::pin::Pin;

use futures_util::stream::Stream;

use crate::api::AisResult;

/// Stream of full object URLs.
pub type UrlStream<'a> = Pin<Box<dyn Stream<Item = AisResult<String>> + Send + 'a>>;

/// Source of object URLs: a bucket, a single object or an object group.
pub trait AisSource: Send + Sync {
    /// URLs of the objects whose names start with `prefix`, each reading
    /// through `etl_name` when given.
    fn list_urls<'a>(&'a self, prefix: &'a str, etl_name: Option<&'a str>) -> UrlStream<'a>;
}
