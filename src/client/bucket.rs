//! Bucket handle and object listing.

use futures_util::stream::{Stream, StreamExt, TryStreamExt};
use http::Method;

use crate::api::constants::{QPARAM_PROVIDER, URL_PATH_BUCKETS};
use crate::api::types::{BucketEntry, BucketList, ListObjectsMsg};
use crate::api::{AisResult, RequestClient, RequestOptions};
use crate::client::object::Object;
use crate::client::object_group::ObjectGroup;
use crate::client::source::{AisSource, UrlStream};
use crate::shared::Provider;

/// A bucket on the cluster, addressed by name and provider.
#[derive(Debug, Clone)]
pub struct Bucket {
    client: RequestClient,
    name: String,
    provider: Provider,
}

impl Bucket {
    pub(crate) fn new(client: RequestClient, name: String, provider: Provider) -> Self {
        Self {
            client,
            name,
            provider,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// Fetch a single page of the listing.
    pub async fn list_objects(&self, msg: ListObjectsMsg) -> AisResult<BucketList> {
        let options = RequestOptions::new()
            .param(QPARAM_PROVIDER, self.provider.as_str())
            .json(&msg.into_action())?;
        let path = format!("{}/{}", URL_PATH_BUCKETS, self.name);
        self.client
            .request_deserialize(Method::GET, &path, options)
            .await
    }

    /// Stream every entry matching `prefix`, fetching pages on demand.
    ///
    /// `props` selects the returned properties (empty for the cluster
    /// default) and `page_size` bounds each page (0 for the cluster default).
    pub fn list_objects_iter(
        &self,
        prefix: &str,
        props: &str,
        page_size: u32,
    ) -> impl Stream<Item = AisResult<BucketEntry>> + Send + 'static {
        let bucket = self.clone();
        let mut msg = ListObjectsMsg::new()
            .with_prefix(prefix)
            .with_props(props)
            .with_page_size(page_size);

        async_stream::try_stream! {
            loop {
                let page = bucket.list_objects(msg.clone()).await?;
                tracing::debug!(
                    bucket = %bucket.name,
                    entries = page.entries.len(),
                    last = page.is_last_page(),
                    "Fetched list-objects page"
                );
                let last = page.is_last_page();
                msg = msg.with_continuation(page.uuid, page.continuation_token);
                for entry in page.entries {
                    yield entry;
                }
                if last {
                    break;
                }
            }
        }
    }

    /// Collect the full listing for `prefix`.
    pub async fn list_all_objects(&self, prefix: &str) -> AisResult<Vec<BucketEntry>> {
        self.list_objects_iter(prefix, "", 0).try_collect().await
    }

    /// Handle to an object in this bucket. No request is made.
    pub fn object(&self, name: impl Into<String>) -> Object {
        Object::new(
            self.client.clone(),
            self.name.clone(),
            self.provider,
            name.into(),
        )
    }

    /// Group of named objects in this bucket.
    pub fn objects<I, S>(&self, names: I) -> ObjectGroup
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ObjectGroup::new(self.clone(), names.into_iter().map(Into::into).collect())
    }
}

impl AisSource for Bucket {
    fn list_urls<'a>(&'a self, prefix: &'a str, etl_name: Option<&'a str>) -> UrlStream<'a> {
        let entries = self.list_objects_iter(prefix, "name", 0);
        Box::pin(entries.map(move |entry| {
            entry.and_then(|entry| self.object(entry.name).get_url(etl_name))
        }))
    }
}
