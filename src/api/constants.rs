//! Header names, media types, URL paths and query parameter keys used on the wire.

/// Media type sent with every request.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Product prefix of the `User-Agent` header.
pub const USER_AGENT_BASE: &str = "ais/rust";

/// SDK version reported in the `User-Agent` header.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// URL paths
// ============================================================================

pub const URL_PATH_BUCKETS: &str = "buckets";
pub const URL_PATH_OBJECTS: &str = "objects";

// ============================================================================
// Query parameters
// ============================================================================

pub const QPARAM_PROVIDER: &str = "provider";
pub const QPARAM_ETL_NAME: &str = "etl_name";

// ============================================================================
// Actions
// ============================================================================

/// Action name for listing objects in a bucket.
pub const ACT_LIST: &str = "list";

// ============================================================================
// Object attribute headers
// ============================================================================

pub const HEADER_OBJ_CKSUM_TYPE: &str = "ais-checksum-type";
pub const HEADER_OBJ_CKSUM_VAL: &str = "ais-checksum-value";
pub const HEADER_OBJ_ATIME: &str = "ais-atime";
pub const HEADER_OBJ_VERSION: &str = "ais-version";

/// Build the `User-Agent` value: `<product>/<sdk-version>`.
pub fn user_agent() -> String {
    format!("{}/{}", USER_AGENT_BASE, SDK_VERSION)
}
