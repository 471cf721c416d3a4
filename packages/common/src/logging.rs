//! Structured logging infrastructure
//!
//! Provides env_logger-based logging with content-free helpers for digest
//! operations. Input bytes are never logged, only their length.

use log::{debug, info, warn};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging bootstrap and helpers using `env_logger`
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (should be called once at application startup)
    ///
    /// Configure logging levels via the `RUST_LOG` environment variable:
    /// - `RUST_LOG=debug` - Enable all debug logs
    /// - `RUST_LOG=warn` - Only primitive failures and other warnings
    /// - `RUST_LOG=digestkit_hashing=debug` - Module-specific levels
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            // Another logger may already be installed by the host application
            if env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .try_init()
                .is_ok()
            {
                info!("Structured logging initialized");
            }
        });
    }

    /// Initialize logging for test environments
    ///
    /// Safe to call from every test; repeated initialization is ignored.
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a completed digest computation
    pub fn log_digest_computed(algorithm: &str, input_len: usize) {
        debug!("Digest computed: {algorithm} (input_len: {input_len})");
    }

    /// Log a digest primitive failure with its propagated status code
    pub fn log_digest_failure(algorithm: &str, code: i32) {
        warn!("Digest primitive failed: {algorithm} (status: {code})");
    }
}
