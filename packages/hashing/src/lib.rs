//! Uniform SHA-1, SHA-2 and SHA-3 hashing
//!
//! Pick a [`HashAlgorithm`], hand bytes to a [`HashFacade`] (or the fluent
//! [`Hash`] builders) and get back a [`HashResult`] rendered as lowercase hex,
//! or a [`HashError`] carrying the failing primitive's status code. The hash
//! functions themselves come from the RustCrypto `sha1`, `sha2` and `sha3`
//! crates behind the [`HashPrimitive`] trait.
//!
//! ```
//! use digestkit_hashing::{Hash, HashAlgorithm, HashFacade, OutputLength};
//!
//! let facade = HashFacade::new(HashAlgorithm::Sha2(OutputLength::L256));
//! assert_eq!(
//!     facade.hex_digest(b"abc").ok().as_deref(),
//!     Some("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
//! );
//!
//! let hex = Hash::sha1().compute_hex("abc");
//! assert_eq!(hex.ok().as_deref(), Some("a9993e364706816aba3e25717850c26c9cd0d89d"));
//! ```

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod api;
pub mod config;
pub mod encoding;
pub mod error;
pub mod facade;
pub mod hash_result;
pub mod provider;
pub mod streaming;

// Re-export error types
pub use error::{HashError, Result};

pub use algorithm::{DigestPrimitive, HashAlgorithm, HashFamily, OutputLength, ResolvedVariant};
pub use api::{Hash, HashBuilder};
pub use config::HashConfig;
pub use facade::{HashFacade, HashRequest};
pub use hash_result::{HashResponse, HashResult};
pub use provider::{HashPrimitive, PrimitiveResult, RustCryptoProvider};
pub use streaming::{hash_reader, StreamingHasher};

// Re-export common handlers from digestkit_common
pub use digestkit_common::{on_error, on_result};

/// Compute the digest of `input` with the default provider
///
/// # Errors
///
/// Returns `HashError::PrimitiveFailure` when the provider fails.
pub fn digest(algorithm: HashAlgorithm, input: &[u8]) -> Result<HashResult> {
    HashFacade::new(algorithm).digest(input)
}

/// Compute the lowercase hex digest of `input` with the default provider
///
/// # Errors
///
/// Returns `HashError::PrimitiveFailure` when the provider fails.
pub fn hex_digest(algorithm: HashAlgorithm, input: &[u8]) -> Result<String> {
    HashFacade::new(algorithm).hex_digest(input)
}
