//! Network constants for the AIStore SDK.

/// Default AIStore endpoint (a local cluster's proxy).
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080";

/// Environment variable consulted by [`Client::from_env`](crate::client::Client::from_env).
pub const AIS_ENDPOINT_ENV: &str = "AIS_ENDPOINT";

/// API version path segment appended to every endpoint.
pub const API_VERSION: &str = "v1";

/// Resolve the endpoint from `AIS_ENDPOINT`, falling back to [`DEFAULT_ENDPOINT`].
pub fn endpoint_from_env() -> String {
    std::env::var(AIS_ENDPOINT_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
}
