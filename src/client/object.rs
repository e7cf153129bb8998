//! Object handle, reads and URLs.

use bytes::Bytes;
use futures_util::stream;
use http::header::RANGE;
use http::{HeaderValue, Method};

use crate::api::constants::{QPARAM_ETL_NAME, QPARAM_PROVIDER, URL_PATH_OBJECTS};
use crate::api::types::{ByteRange, ObjectAttributes};
use crate::api::{AisError, AisResult, ByteStream, RequestClient, RequestOptions, Response};
use crate::client::source::{AisSource, UrlStream};
use crate::shared::url::encode_object_name;
use crate::shared::Provider;

/// Options for [`Object::get`].
#[derive(Debug, Clone, Default)]
pub struct GetOptions {
    /// ETL to run on the cluster before the object is returned
    pub etl_name: Option<String>,
    pub byte_range: Option<ByteRange>,
}

impl GetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_etl_name(mut self, etl_name: impl Into<String>) -> Self {
        self.etl_name = Some(etl_name.into());
        self
    }

    pub fn with_byte_range(mut self, range: ByteRange) -> Self {
        self.byte_range = Some(range);
        self
    }
}

/// An object on the cluster.
#[derive(Debug, Clone)]
pub struct Object {
    client: RequestClient,
    bucket: String,
    provider: Provider,
    name: String,
}

impl Object {
    pub(crate) fn new(client: RequestClient, bucket: String, provider: Provider, name: String) -> Self {
        Self {
            client,
            bucket,
            provider,
            name,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bucket_name(&self) -> &str {
        &self.bucket
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    fn path(&self) -> String {
        format!(
            "{}/{}/{}",
            URL_PATH_OBJECTS,
            self.bucket,
            encode_object_name(&self.name)
        )
    }

    fn query(&self, etl_name: Option<&str>) -> Vec<(&'static str, String)> {
        let mut query = vec![(QPARAM_PROVIDER, self.provider.as_str().to_string())];
        if let Some(etl) = etl_name {
            query.push((QPARAM_ETL_NAME, etl.to_string()));
        }
        query
    }

    /// Read the object. The body is not buffered; see [`ObjectReader`].
    pub async fn get(&self, options: GetOptions) -> AisResult<ObjectReader> {
        let mut request = RequestOptions::new().params(self.query(options.etl_name.as_deref()));
        if let Some(range) = options.byte_range {
            let value = HeaderValue::from_str(&range.header_value())
                .map_err(|e| AisError::InvalidHeader(format!("Invalid range: {}", e)))?;
            request.headers.insert(RANGE, value);
        }

        let response = self.client.request(Method::GET, &self.path(), request).await?;
        Ok(ObjectReader::new(response))
    }

    /// Fetch the object's attributes without its content.
    pub async fn head(&self) -> AisResult<ObjectAttributes> {
        let request = RequestOptions::new().params(self.query(None));
        let response = self.client.request(Method::HEAD, &self.path(), request).await?;
        Ok(ObjectAttributes::from_headers(response.headers()))
    }

    /// Full URL that reads this object, optionally through an ETL.
    pub fn get_url(&self, etl_name: Option<&str>) -> AisResult<String> {
        self.client.get_full_url(&self.path(), &self.query(etl_name))
    }
}

impl AisSource for Object {
    fn list_urls<'a>(&'a self, prefix: &'a str, etl_name: Option<&'a str>) -> UrlStream<'a> {
        if !self.name.starts_with(prefix) {
            return Box::pin(stream::empty());
        }
        Box::pin(stream::once(async move { self.get_url(etl_name) }))
    }
}

/// Content of a successful object read.
#[derive(Debug)]
pub struct ObjectReader {
    attributes: ObjectAttributes,
    response: Response,
}

impl ObjectReader {
    fn new(response: Response) -> Self {
        Self {
            attributes: ObjectAttributes::from_headers(response.headers()),
            response,
        }
    }

    pub fn attributes(&self) -> &ObjectAttributes {
        &self.attributes
    }

    /// The body as a raw byte stream.
    pub fn raw(self) -> ByteStream {
        self.response.into_stream()
    }

    /// Buffer the whole body.
    pub async fn read_all(self) -> AisResult<Bytes> {
        self.response.bytes().await
    }
}
