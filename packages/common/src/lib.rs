//! Common infrastructure for the digestkit crates
//!
//! This crate provides shared functionality used across the workspace:
//! - Logging bootstrap on top of `env_logger`
//! - Structured, content-free log helpers for digest operations
//! - Default `on_result` / `on_error` handlers for the builder APIs

pub mod handlers;
pub mod logging;
#[doc(hidden)]
pub mod macros;

pub use handlers::{on_error, on_result};
pub use logging::LoggingTransformer;
