//! Entry point for the fluent hashing API

use super::hash_builder::HashBuilder;
use crate::algorithm::{HashAlgorithm, OutputLength};

/// Entry point for hash operations
pub struct Hash;

impl Hash {
    /// Use any supported algorithm
    #[must_use]
    pub fn with_algorithm(algorithm: HashAlgorithm) -> HashBuilder {
        HashBuilder::new(algorithm)
    }

    /// Use SHA-1
    #[must_use]
    pub fn sha1() -> HashBuilder {
        HashBuilder::new(HashAlgorithm::Sha1)
    }

    /// Use SHA-2 with the given output length
    #[must_use]
    pub fn sha2(length: OutputLength) -> HashBuilder {
        HashBuilder::new(HashAlgorithm::Sha2(length))
    }

    /// Use SHA-3 with the given output length
    #[must_use]
    pub fn sha3(length: OutputLength) -> HashBuilder {
        HashBuilder::new(HashAlgorithm::Sha3(length))
    }

    /// Use SHA-224
    #[must_use]
    pub fn sha224() -> HashBuilder {
        Self::sha2(OutputLength::L224)
    }

    /// Use SHA-256
    #[must_use]
    pub fn sha256() -> HashBuilder {
        Self::sha2(OutputLength::L256)
    }

    /// Use SHA-384
    #[must_use]
    pub fn sha384() -> HashBuilder {
        Self::sha2(OutputLength::L384)
    }

    /// Use SHA-512
    #[must_use]
    pub fn sha512() -> HashBuilder {
        Self::sha2(OutputLength::L512)
    }

    /// Use SHA3-224
    #[must_use]
    pub fn sha3_224() -> HashBuilder {
        Self::sha3(OutputLength::L224)
    }

    /// Use SHA3-256
    #[must_use]
    pub fn sha3_256() -> HashBuilder {
        Self::sha3(OutputLength::L256)
    }

    /// Use SHA3-384
    #[must_use]
    pub fn sha3_384() -> HashBuilder {
        Self::sha3(OutputLength::L384)
    }

    /// Use SHA3-512
    #[must_use]
    pub fn sha3_512() -> HashBuilder {
        Self::sha3(OutputLength::L512)
    }
}
