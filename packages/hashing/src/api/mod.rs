//! Fluent hashing API
//!
//! Actions take data as arguments.
//! Usage: `Hash::sha256().on_result(handler).compute(data)`

pub mod hash_builder;
pub mod hash_entry;

pub use hash_builder::{HashBuilder, HashBuilderWithError, HashBuilderWithHandler};
pub use hash_entry::Hash;
