//! Lists object URLs under `provider://bucket/prefix` URLs.

use futures_util::stream::{Stream, StreamExt};

use crate::api::AisResult;
use crate::client::{Client, UrlStream};
use crate::datapipes::loader::AisFileLoader;
use crate::datapipes::url_source;
use crate::shared::{parse_url, unparse_url};

/// Streams `provider://bucket/object` URLs for every object under each
/// source prefix, in source order.
///
/// The length is unknown up front: listing happens lazily. Supply one with
/// [`AisFileLister::with_length`] if the caller knows it.
pub struct AisFileLister {
    client: Client,
    source: UrlStream<'static>,
    length: Option<usize>,
}

impl AisFileLister {
    /// Lister over a fixed set of prefixes such as `ais://bucket-name/folder/`.
    pub fn new<I, S>(client: Client, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (source, _) = url_source(prefixes);
        Self {
            client,
            source,
            length: None,
        }
    }

    /// Lister over prefixes produced by an upstream stream.
    pub fn from_stream<St>(client: Client, prefixes: St) -> Self
    where
        St: Stream<Item = AisResult<String>> + Send + 'static,
    {
        Self {
            client,
            source: Box::pin(prefixes),
            length: None,
        }
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Declared number of items, if any.
    pub fn length(&self) -> Option<usize> {
        self.length
    }

    /// Chain into an [`AisFileLoader`] sharing this lister's client.
    pub fn load_files(self) -> AisFileLoader {
        let client = self.client.clone();
        AisFileLoader::from_stream(client, self.into_stream())
    }

    pub fn into_stream(self) -> impl Stream<Item = AisResult<String>> + Send + 'static {
        let AisFileLister {
            client, mut source, ..
        } = self;

        async_stream::try_stream! {
            while let Some(prefix_url) = source.next().await {
                let (provider, bucket_name, prefix) = parse_url(&prefix_url?)?;
                let bucket = client.bucket(bucket_name.clone(), provider);
                let mut entries = Box::pin(bucket.list_objects_iter(&prefix, "name", 0));
                while let Some(entry) = entries.next().await {
                    let entry = entry?;
                    yield unparse_url(provider, &bucket_name, &entry.name);
                }
            }
        }
    }
}
