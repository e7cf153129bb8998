//! A named set of objects in one bucket.

use futures_util::stream;

use crate::client::bucket::Bucket;
use crate::client::object::Object;
use crate::client::source::{AisSource, UrlStream};

#[derive(Debug, Clone)]
pub struct ObjectGroup {
    bucket: Bucket,
    names: Vec<String>,
}

impl ObjectGroup {
    pub(crate) fn new(bucket: Bucket, names: Vec<String>) -> Self {
        Self { bucket, names }
    }

    pub fn bucket(&self) -> &Bucket {
        &self.bucket
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn objects(&self) -> impl Iterator<Item = Object> + '_ {
        self.names.iter().map(|name| self.bucket.object(name.as_str()))
    }
}

impl AisSource for ObjectGroup {
    fn list_urls<'a>(&'a self, prefix: &'a str, etl_name: Option<&'a str>) -> UrlStream<'a> {
        let urls = self
            .names
            .iter()
            .filter(move |name| name.starts_with(prefix))
            .map(move |name| self.bucket.object(name.as_str()).get_url(etl_name));
        Box::pin(stream::iter(urls))
    }
}
