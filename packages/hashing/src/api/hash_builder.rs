//! Fluent hash builders
//!
//! Usage: `Hash::sha256().on_result(handler).compute(data)`

use crate::algorithm::HashAlgorithm;
use crate::facade::HashFacade;
use crate::hash_result::HashResult;
use crate::provider::{HashPrimitive, RustCryptoProvider};
use crate::{HashError, Result as HashingResult};

/// Hash builder for one algorithm
#[derive(Debug, Clone, Copy)]
pub struct HashBuilder<P = RustCryptoProvider> {
    facade: HashFacade<P>,
}

/// Hash builder with error handler
pub struct HashBuilderWithError<E, P = RustCryptoProvider> {
    facade: HashFacade<P>,
    error_handler: E,
}

/// Hash builder with result handler
pub struct HashBuilderWithHandler<F, P = RustCryptoProvider> {
    facade: HashFacade<P>,
    result_handler: F,
}

impl HashBuilder {
    /// Create a builder for `algorithm` over the default provider
    #[must_use]
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self {
            facade: HashFacade::new(algorithm),
        }
    }
}

impl<P: HashPrimitive> HashBuilder<P> {
    /// Algorithm this builder computes
    #[must_use]
    pub fn algorithm(&self) -> HashAlgorithm {
        self.facade.algorithm()
    }

    /// Swap in a different hash primitive provider
    #[must_use]
    pub fn with_provider<Q: HashPrimitive>(self, provider: Q) -> HashBuilder<Q> {
        HashBuilder {
            facade: HashFacade::with_provider(self.facade.algorithm(), provider),
        }
    }

    /// Add `on_result` handler that receives the outcome and produces the value
    /// returned by `compute`
    pub fn on_result<F, T>(self, handler: F) -> HashBuilderWithHandler<F, P>
    where
        F: FnOnce(HashingResult<HashResult>) -> T,
    {
        HashBuilderWithHandler {
            facade: self.facade,
            result_handler: handler,
        }
    }

    /// Add `on_error` handler - transforms errors but passes through success
    pub fn on_error<E>(self, handler: E) -> HashBuilderWithError<E, P>
    where
        E: FnOnce(HashError) -> HashError,
    {
        HashBuilderWithError {
            facade: self.facade,
            error_handler: handler,
        }
    }

    /// Compute hash - action takes data as argument
    ///
    /// # Errors
    ///
    /// Returns `HashError::PrimitiveFailure` when the provider fails.
    pub fn compute<D: AsRef<[u8]>>(self, data: D) -> HashingResult<HashResult> {
        self.facade.digest(data.as_ref())
    }

    /// Compute hash and return it as lowercase hex
    ///
    /// # Errors
    ///
    /// Returns `HashError::PrimitiveFailure` when the provider fails.
    pub fn compute_hex<D: AsRef<[u8]>>(self, data: D) -> HashingResult<String> {
        self.facade.hex_digest(data.as_ref())
    }
}

impl<E, P> HashBuilderWithError<E, P>
where
    E: FnOnce(HashError) -> HashError,
    P: HashPrimitive,
{
    /// Add `on_result` handler after error handler
    ///
    /// The handler sees errors after the error handler transformed them.
    pub fn on_result<F, T>(
        self,
        handler: F,
    ) -> HashBuilderWithHandler<impl FnOnce(HashingResult<HashResult>) -> T, P>
    where
        F: FnOnce(HashingResult<HashResult>) -> T,
    {
        let error_handler = self.error_handler;
        HashBuilderWithHandler {
            facade: self.facade,
            result_handler: move |result: HashingResult<HashResult>| {
                handler(result.map_err(error_handler))
            },
        }
    }

    /// Compute hash with error handler
    ///
    /// # Errors
    ///
    /// Returns the error handler's transformation of any failure.
    pub fn compute<D: AsRef<[u8]>>(self, data: D) -> HashingResult<HashResult> {
        self.facade.digest(data.as_ref()).map_err(self.error_handler)
    }
}

impl<F, P: HashPrimitive> HashBuilderWithHandler<F, P> {
    /// Compute hash and pass the outcome to the result handler
    pub fn compute<D, T>(self, data: D) -> T
    where
        D: AsRef<[u8]>,
        F: FnOnce(HashingResult<HashResult>) -> T,
    {
        let result = self.facade.digest(data.as_ref());
        (self.result_handler)(result)
    }
}
