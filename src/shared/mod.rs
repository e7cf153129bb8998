//! Shared utilities and types used across the client and data-pipe modules.

pub mod types;
pub mod url;

// Re-export commonly used items
pub use types::*;
pub use self::url::{parse_url, unparse_url};
