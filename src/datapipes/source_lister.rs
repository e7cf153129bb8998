//! Full URLs over a set of [`AisSource`]s.

use std::sync::Arc;

use futures_util::stream::{Stream, StreamExt};

use crate::api::AisResult;
use crate::client::AisSource;

/// Chains the URLs of each source in order, filtered by `prefix` and read
/// through an optional ETL.
pub struct AisSourceLister {
    sources: Vec<Arc<dyn AisSource>>,
    prefix: String,
    etl_name: Option<String>,
}

impl AisSourceLister {
    pub fn new(sources: Vec<Arc<dyn AisSource>>) -> Self {
        Self {
            sources,
            prefix: String::new(),
            etl_name: None,
        }
    }

    /// Only include objects whose names start with `prefix`.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_etl_name(mut self, etl_name: impl Into<String>) -> Self {
        self.etl_name = Some(etl_name.into());
        self
    }

    pub fn into_stream(self) -> impl Stream<Item = AisResult<String>> + Send + 'static {
        let AisSourceLister {
            sources,
            prefix,
            etl_name,
        } = self;

        async_stream::try_stream! {
            for source in &sources {
                let mut urls = source.list_urls(&prefix, etl_name.as_deref());
                while let Some(url) = urls.next().await {
                    yield url?;
                }
            }
        }
    }
}
