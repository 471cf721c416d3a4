//! Hash algorithm variants and the resolver that maps them to primitives
//!
//! A [`HashAlgorithm`] is the user-facing selection (family plus output length).
//! [`HashAlgorithm::resolve`] turns it into the concrete [`DigestPrimitive`] to
//! invoke together with the digest length that primitive must produce.

use crate::HashError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Standard output lengths shared by the SHA-2 and SHA-3 families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputLength {
    /// 224-bit digest (28 bytes)
    L224,
    /// 256-bit digest (32 bytes)
    L256,
    /// 384-bit digest (48 bytes)
    L384,
    /// 512-bit digest (64 bytes)
    L512,
}

impl OutputLength {
    /// All lengths in ascending order
    pub const ALL: [Self; 4] = [Self::L224, Self::L256, Self::L384, Self::L512];

    /// Digest length in bits
    #[must_use]
    pub const fn bits(self) -> u16 {
        match self {
            Self::L224 => 224,
            Self::L256 => 256,
            Self::L384 => 384,
            Self::L512 => 512,
        }
    }

    /// Digest length in bytes
    #[must_use]
    pub const fn bytes(self) -> usize {
        self.bits() as usize / 8
    }

    /// Look up a length from its bit count
    #[must_use]
    pub const fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            224 => Some(Self::L224),
            256 => Some(Self::L256),
            384 => Some(Self::L384),
            512 => Some(Self::L512),
            _ => None,
        }
    }
}

/// Hash function family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashFamily {
    /// SHA-1 (FIPS 180-4), single 160-bit variant
    Sha1,
    /// SHA-2 (FIPS 180-4)
    Sha2,
    /// SHA-3 (FIPS 202)
    Sha3,
}

/// Supported hash algorithm variants
///
/// SHA-1 carries no length; SHA-2 and SHA-3 carry one of the four standard
/// [`OutputLength`]s, so out-of-range selections cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HashAlgorithm {
    /// SHA-1
    Sha1,
    /// SHA-2 with the given output length
    Sha2(OutputLength),
    /// SHA-3 with the given output length
    Sha3(OutputLength),
}

/// Concrete primitive selected by the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestPrimitive {
    /// SHA-1
    Sha1,
    /// SHA-224
    Sha224,
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
    /// SHA3-224
    Sha3_224,
    /// SHA3-256
    Sha3_256,
    /// SHA3-384
    Sha3_384,
    /// SHA3-512
    Sha3_512,
}

/// Output of [`HashAlgorithm::resolve`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedVariant {
    /// Primitive to dispatch to
    pub primitive: DigestPrimitive,
    /// Exact raw digest length the primitive must produce
    pub digest_len: usize,
}

impl HashAlgorithm {
    /// Every supported variant
    pub const ALL: [Self; 9] = [
        Self::Sha1,
        Self::Sha2(OutputLength::L224),
        Self::Sha2(OutputLength::L256),
        Self::Sha2(OutputLength::L384),
        Self::Sha2(OutputLength::L512),
        Self::Sha3(OutputLength::L224),
        Self::Sha3(OutputLength::L256),
        Self::Sha3(OutputLength::L384),
        Self::Sha3(OutputLength::L512),
    ];

    /// Map this selection to the primitive to invoke and its digest length
    #[must_use]
    pub const fn resolve(self) -> ResolvedVariant {
        let primitive = match self {
            Self::Sha1 => DigestPrimitive::Sha1,
            Self::Sha2(OutputLength::L224) => DigestPrimitive::Sha224,
            Self::Sha2(OutputLength::L256) => DigestPrimitive::Sha256,
            Self::Sha2(OutputLength::L384) => DigestPrimitive::Sha384,
            Self::Sha2(OutputLength::L512) => DigestPrimitive::Sha512,
            Self::Sha3(OutputLength::L224) => DigestPrimitive::Sha3_224,
            Self::Sha3(OutputLength::L256) => DigestPrimitive::Sha3_256,
            Self::Sha3(OutputLength::L384) => DigestPrimitive::Sha3_384,
            Self::Sha3(OutputLength::L512) => DigestPrimitive::Sha3_512,
        };
        ResolvedVariant {
            primitive,
            digest_len: self.digest_len(),
        }
    }

    /// Algorithm family
    #[must_use]
    pub const fn family(self) -> HashFamily {
        match self {
            Self::Sha1 => HashFamily::Sha1,
            Self::Sha2(_) => HashFamily::Sha2,
            Self::Sha3(_) => HashFamily::Sha3,
        }
    }

    /// Digest length in bits
    #[must_use]
    pub const fn bits(self) -> u16 {
        match self {
            Self::Sha1 => 160,
            Self::Sha2(len) | Self::Sha3(len) => len.bits(),
        }
    }

    /// Raw digest length in bytes
    #[must_use]
    pub const fn digest_len(self) -> usize {
        self.bits() as usize / 8
    }

    /// Length of the hex rendering of a digest
    #[must_use]
    pub const fn hex_len(self) -> usize {
        self.digest_len() * 2
    }

    /// Internal block size (SHA-3: sponge rate) in bytes
    #[must_use]
    pub const fn block_len(self) -> usize {
        match self {
            Self::Sha1 | Self::Sha2(OutputLength::L224 | OutputLength::L256) => 64,
            Self::Sha2(OutputLength::L384 | OutputLength::L512) => 128,
            Self::Sha3(len) => 200 - 2 * len.bytes(),
        }
    }

    /// Standard display name, e.g. `SHA-256` or `SHA3-384`
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha1 => "SHA-1",
            Self::Sha2(OutputLength::L224) => "SHA-224",
            Self::Sha2(OutputLength::L256) => "SHA-256",
            Self::Sha2(OutputLength::L384) => "SHA-384",
            Self::Sha2(OutputLength::L512) => "SHA-512",
            Self::Sha3(OutputLength::L224) => "SHA3-224",
            Self::Sha3(OutputLength::L256) => "SHA3-256",
            Self::Sha3(OutputLength::L384) => "SHA3-384",
            Self::Sha3(OutputLength::L512) => "SHA3-512",
        }
    }

    /// Canonical identifier used in configuration, e.g. `sha2-256`
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha2(OutputLength::L224) => "sha2-224",
            Self::Sha2(OutputLength::L256) => "sha2-256",
            Self::Sha2(OutputLength::L384) => "sha2-384",
            Self::Sha2(OutputLength::L512) => "sha2-512",
            Self::Sha3(OutputLength::L224) => "sha3-224",
            Self::Sha3(OutputLength::L256) => "sha3-256",
            Self::Sha3(OutputLength::L384) => "sha3-384",
            Self::Sha3(OutputLength::L512) => "sha3-512",
        }
    }
}

impl Default for HashAlgorithm {
    fn default() -> Self {
        Self::Sha2(OutputLength::L256)
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        let unsupported = || HashError::UnsupportedAlgorithm(s.to_string());
        let length = |bits: &str| {
            bits.parse::<u16>()
                .ok()
                .and_then(OutputLength::from_bits)
                .ok_or_else(unsupported)
        };

        if matches!(normalized.as_str(), "sha1" | "sha-1") {
            return Ok(Self::Sha1);
        }
        // SHA-3 prefixes must be tried before the bare `sha` SHA-2 forms
        if let Some(bits) = ["sha3-", "sha-3-"]
            .iter()
            .find_map(|prefix| normalized.strip_prefix(prefix))
        {
            return length(bits).map(Self::Sha3);
        }
        if let Some(bits) = ["sha2-", "sha-2-", "sha-", "sha"]
            .iter()
            .find_map(|prefix| normalized.strip_prefix(prefix))
        {
            return length(bits).map(Self::Sha2);
        }
        Err(unsupported())
    }
}

impl TryFrom<String> for HashAlgorithm {
    type Error = HashError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HashAlgorithm> for String {
    fn from(algorithm: HashAlgorithm) -> Self {
        algorithm.id().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolver_fixes_digest_lengths() {
        let expected = [20, 28, 32, 48, 64, 28, 32, 48, 64];
        for (algorithm, len) in HashAlgorithm::ALL.iter().zip(expected) {
            let resolved = algorithm.resolve();
            assert_eq!(resolved.digest_len, len, "{algorithm}");
            assert_eq!(algorithm.hex_len(), len * 2);
        }
    }

    #[test]
    fn resolver_picks_matching_primitive() {
        assert_eq!(HashAlgorithm::Sha1.resolve().primitive, DigestPrimitive::Sha1);
        assert_eq!(
            HashAlgorithm::Sha2(OutputLength::L384).resolve().primitive,
            DigestPrimitive::Sha384
        );
        assert_eq!(
            HashAlgorithm::Sha3(OutputLength::L224).resolve().primitive,
            DigestPrimitive::Sha3_224
        );
    }

    #[test]
    fn block_lengths_match_standards() {
        assert_eq!(HashAlgorithm::Sha1.block_len(), 64);
        assert_eq!(HashAlgorithm::Sha2(OutputLength::L256).block_len(), 64);
        assert_eq!(HashAlgorithm::Sha2(OutputLength::L512).block_len(), 128);
        assert_eq!(HashAlgorithm::Sha3(OutputLength::L256).block_len(), 136);
        assert_eq!(HashAlgorithm::Sha3(OutputLength::L512).block_len(), 72);
    }

    #[test]
    fn parses_common_spellings() {
        let cases = [
            ("sha1", HashAlgorithm::Sha1),
            ("SHA-1", HashAlgorithm::Sha1),
            ("sha256", HashAlgorithm::Sha2(OutputLength::L256)),
            ("SHA-224", HashAlgorithm::Sha2(OutputLength::L224)),
            ("sha2-512", HashAlgorithm::Sha2(OutputLength::L512)),
            ("sha2_384", HashAlgorithm::Sha2(OutputLength::L384)),
            ("sha3-256", HashAlgorithm::Sha3(OutputLength::L256)),
            ("SHA3_512", HashAlgorithm::Sha3(OutputLength::L512)),
            ("sha-3-224", HashAlgorithm::Sha3(OutputLength::L224)),
        ];
        for (input, expected) in cases {
            assert_eq!(input.parse::<HashAlgorithm>().ok(), Some(expected), "{input}");
        }
    }

    #[test]
    fn rejects_unknown_names() {
        for input in ["md5", "sha2-160", "sha3-1", "sha", "", "sha3256"] {
            let err = input.parse::<HashAlgorithm>();
            assert!(
                matches!(err, Err(HashError::UnsupportedAlgorithm(_))),
                "{input} should not parse"
            );
        }
    }

    #[test]
    fn canonical_ids_round_trip() {
        for algorithm in HashAlgorithm::ALL {
            assert_eq!(algorithm.id().parse::<HashAlgorithm>().ok(), Some(algorithm));
            assert_eq!(algorithm.name().parse::<HashAlgorithm>().ok(), Some(algorithm));
        }
    }

    #[test]
    fn serde_uses_canonical_ids() {
        let json = serde_json::to_string(&HashAlgorithm::Sha3(OutputLength::L384))
            .expect("serialize algorithm");
        assert_eq!(json, "\"sha3-384\"");
        let parsed: HashAlgorithm =
            serde_json::from_str("\"SHA-512\"").expect("deserialize algorithm");
        assert_eq!(parsed, HashAlgorithm::Sha2(OutputLength::L512));
    }
}
