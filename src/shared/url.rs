//! `provider://bucket/object` URLs used by the data-pipe adapters.

use ::url::Url;

use crate::api::error::{AisError, AisResult};
use crate::shared::types::Provider;

/// Split `provider://bucket/object` into its parts.
///
/// The object part may be empty (`ais://bucket` or `ais://bucket/`), in which
/// case it acts as an empty prefix. Percent-escapes in the object are decoded.
pub fn parse_url(input: &str) -> AisResult<(Provider, String, String)> {
    let url = Url::parse(input).map_err(|e| AisError::InvalidUrl(format!("{}: {}", input, e)))?;
    let provider: Provider = url.scheme().parse()?;

    let bucket = match url.host_str() {
        Some(host) if !host.is_empty() => host.to_string(),
        _ => {
            return Err(AisError::InvalidUrl(format!(
                "{}: missing bucket name (expected provider://bucket/object)",
                input
            )))
        }
    };

    let path = url.path().strip_prefix('/').unwrap_or(url.path());
    let object = urlencoding::decode(path)
        .map_err(|e| AisError::InvalidUrl(format!("{}: {}", input, e)))?
        .into_owned();

    Ok((provider, bucket, object))
}

/// Inverse of [`parse_url`]. Each `/`-separated segment of the object is
/// percent-encoded, so names holding `%`, `#` or `?` survive the round trip.
pub fn unparse_url(provider: Provider, bucket: &str, object: &str) -> String {
    let object = object.trim_start_matches('/');
    if object.is_empty() {
        format!("{}://{}", provider, bucket)
    } else {
        format!("{}://{}/{}", provider, bucket, encode_object_name(object))
    }
}

/// Percent-encode an object name for use in a URL path, keeping `/`.
pub(crate) fn encode_object_name(name: &str) -> String {
    name.split('/')
        .map(|segment| urlencoding::encode(segment))
        .collect::<Vec<_>>()
        .join("/")
}
