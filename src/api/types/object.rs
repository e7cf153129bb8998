//! Object metadata types.

use http::header::CONTENT_LENGTH;
use http::HeaderMap;
use serde::{Deserialize, Serialize};

use crate::api::constants::{
    HEADER_OBJ_ATIME, HEADER_OBJ_CKSUM_TYPE, HEADER_OBJ_CKSUM_VAL, HEADER_OBJ_VERSION,
};

/// Object attributes reported in `ais-*` response headers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ObjectAttributes {
    /// Object size in bytes (from `Content-Length`)
    pub size: u64,
    pub checksum_type: String,
    pub checksum_value: String,
    /// Last access time
    pub access_time: String,
    pub obj_version: String,
}

impl ObjectAttributes {
    /// Read attributes from response headers. Missing headers become defaults.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let get = |name: &str| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default()
                .to_string()
        };
        Self {
            size: headers
                .get(CONTENT_LENGTH)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.parse().ok())
                .unwrap_or(0),
            checksum_type: get(HEADER_OBJ_CKSUM_TYPE),
            checksum_value: get(HEADER_OBJ_CKSUM_VAL),
            access_time: get(HEADER_OBJ_ATIME),
            obj_version: get(HEADER_OBJ_VERSION),
        }
    }
}

/// Byte range for partial reads, rendered as an HTTP `Range` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    /// Inclusive end; `None` reads to the end of the object
    pub end: Option<u64>,
}

impl ByteRange {
    pub fn header_value(&self) -> String {
        match self.end {
            Some(end) => format!("bytes={}-{}", self.start, end),
            None => format!("bytes={}-", self.start),
        }
    }
}
