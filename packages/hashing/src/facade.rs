//! Uniform hashing facade
//!
//! [`HashFacade`] binds one [`HashAlgorithm`] and one [`HashPrimitive`] at
//! construction. Each call resolves the variant, allocates a digest buffer of
//! exactly the variant's length, hands it to the provider and either wraps the
//! bytes in a [`HashResult`] or turns the provider's status into
//! [`HashError::PrimitiveFailure`]. The buffer is owned by the call and dropped
//! on both paths.

use crate::algorithm::{HashAlgorithm, ResolvedVariant};
use crate::config::HashConfig;
use crate::hash_result::{HashResponse, HashResult};
use crate::provider::{HashPrimitive, RustCryptoProvider};
use crate::{HashError, Result};
use digestkit_common::LoggingTransformer;

/// Hashing facade with a fixed algorithm and provider
#[derive(Debug, Clone, Copy)]
pub struct HashFacade<P = RustCryptoProvider> {
    algorithm: HashAlgorithm,
    provider: P,
}

impl HashFacade {
    /// Facade over the default RustCrypto provider
    #[must_use]
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self::with_provider(algorithm, RustCryptoProvider)
    }

    /// Facade for the algorithm named by a configuration
    #[must_use]
    pub fn from_config(config: &HashConfig) -> Self {
        Self::new(config.algorithm)
    }
}

impl Default for HashFacade {
    fn default() -> Self {
        Self::new(HashAlgorithm::default())
    }
}

impl<P: HashPrimitive> HashFacade<P> {
    /// Facade over a caller-supplied provider
    #[must_use]
    pub fn with_provider(algorithm: HashAlgorithm, provider: P) -> Self {
        Self {
            algorithm,
            provider,
        }
    }

    /// Algorithm this facade computes
    #[must_use]
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Compute the raw digest of `input`
    ///
    /// # Errors
    ///
    /// Returns `HashError::PrimitiveFailure` carrying the provider's status code
    /// unchanged when the provider reports failure.
    pub fn digest(&self, input: &[u8]) -> Result<HashResult> {
        let ResolvedVariant {
            primitive,
            digest_len,
        } = self.algorithm.resolve();
        tracing::trace!(?primitive, digest_len, "dispatching digest");

        let mut buffer = vec![0u8; digest_len];
        match self.provider.digest_into(primitive, input, &mut buffer) {
            Ok(()) => {
                LoggingTransformer::log_digest_computed(self.algorithm.name(), input.len());
                Ok(HashResult::new(self.algorithm, buffer))
            }
            Err(status) => {
                let code = status.get();
                LoggingTransformer::log_digest_failure(self.algorithm.name(), code);
                Err(HashError::primitive_failure(self.algorithm, code))
            }
        }
    }

    /// Compute the lowercase hex digest of `input`
    ///
    /// # Errors
    ///
    /// See [`HashFacade::digest`].
    pub fn hex_digest(&self, input: &[u8]) -> Result<String> {
        self.digest(input).map(|hash| hash.to_hex())
    }

    /// Compute the digest and report it as a [`HashResponse`]
    #[must_use]
    pub fn respond(&self, input: &[u8]) -> HashResponse {
        self.digest(input).into()
    }

    /// Check `input` against an expected hex digest (case-insensitive)
    ///
    /// # Errors
    ///
    /// See [`HashFacade::digest`].
    pub fn matches_hex(&self, input: &[u8], expected_hex: &str) -> Result<bool> {
        let actual = self.hex_digest(input)?;
        Ok(actual.eq_ignore_ascii_case(expected_hex.trim()))
    }
}

/// A single hash request: variant plus input bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashRequest<'a> {
    /// Variant to compute
    pub algorithm: HashAlgorithm,
    /// Input bytes, any length including empty
    pub input: &'a [u8],
}

impl<'a> HashRequest<'a> {
    /// Create a request
    #[must_use]
    pub fn new(algorithm: HashAlgorithm, input: &'a [u8]) -> Self {
        Self { algorithm, input }
    }

    /// Execute with the default provider
    #[must_use]
    pub fn execute(&self) -> HashResponse {
        self.execute_with(RustCryptoProvider)
    }

    /// Execute with a caller-supplied provider
    #[must_use]
    pub fn execute_with<P: HashPrimitive>(&self, provider: P) -> HashResponse {
        HashFacade::with_provider(self.algorithm, provider).respond(self.input)
    }
}
