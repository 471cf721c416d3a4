//! Default handler functions for result and error processing
//!
//! These provide the `on_result` and `on_error` symbols the builder APIs accept
//! when callers only want logging and pass-through behaviour.

/// Default result handler that logs and passes the result through unchanged
pub fn on_result<T>(result: T) -> T {
    tracing::debug!("Operation completed");
    result
}

/// Default error handler that logs the error before passing it through
pub fn on_error<E: std::fmt::Display>(error: E) -> E {
    tracing::warn!("Error occurred: {error}");
    error
}
