//! Loads objects named by `provider://bucket/object` URLs.

use futures_util::stream::{Stream, StreamExt};

use crate::api::AisResult;
use crate::client::{Client, GetOptions, ObjectReader, UrlStream};
use crate::datapipes::url_source;
use crate::shared::parse_url;

/// Streams `(url, reader)` pairs, one per source URL, in source order.
///
/// Each object body stays unread until the caller consumes the reader. When
/// an ETL name is set, the cluster transforms every object before sending it.
pub struct AisFileLoader {
    client: Client,
    source: UrlStream<'static>,
    length: Option<usize>,
    etl_name: Option<String>,
}

impl AisFileLoader {
    /// Loader over a fixed list of object URLs. Its length is the list length.
    pub fn new<I, S>(client: Client, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (source, len) = url_source(urls);
        Self {
            client,
            source,
            length: Some(len),
            etl_name: None,
        }
    }

    /// Loader over URLs produced by an upstream stream (e.g. a lister).
    pub fn from_stream<St>(client: Client, urls: St) -> Self
    where
        St: Stream<Item = AisResult<String>> + Send + 'static,
    {
        Self {
            client,
            source: Box::pin(urls),
            length: None,
            etl_name: None,
        }
    }

    /// Apply an existing cluster ETL to every object.
    pub fn with_etl_name(mut self, etl_name: impl Into<String>) -> Self {
        self.etl_name = Some(etl_name.into());
        self
    }

    /// Number of source URLs, known only for list-backed loaders.
    pub fn length(&self) -> Option<usize> {
        self.length
    }

    pub fn into_stream(self) -> impl Stream<Item = AisResult<(String, ObjectReader)>> + Send + 'static {
        let AisFileLoader {
            client,
            mut source,
            etl_name,
            ..
        } = self;

        async_stream::try_stream! {
            while let Some(url) = source.next().await {
                let url = url?;
                let (provider, bucket, object) = parse_url(&url)?;
                let mut options = GetOptions::new();
                if let Some(etl) = &etl_name {
                    options = options.with_etl_name(etl.clone());
                }
                let reader = client.bucket(bucket, provider).object(object).get(options).await?;
                yield (url, reader);
            }
        }
    }
}
