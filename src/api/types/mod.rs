//! Wire types exchanged with the AIStore REST API.

pub mod bucket;
pub mod object;

// Re-export all types for convenience
pub use bucket::*;
pub use object::*;
