//! Hash result types with encoding support

use crate::algorithm::HashAlgorithm;
use crate::encoding;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Successful digest of a single hash request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashResult {
    algorithm: HashAlgorithm,
    /// Raw digest bytes, always `algorithm.digest_len()` long
    bytes: Vec<u8>,
}

impl HashResult {
    pub(crate) fn new(algorithm: HashAlgorithm, bytes: Vec<u8>) -> Self {
        debug_assert_eq!(bytes.len(), algorithm.digest_len());
        Self { algorithm, bytes }
    }

    /// Algorithm that produced this digest
    #[must_use]
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Get the raw bytes of the hash
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Convert to a `Vec<u8>`
    #[must_use]
    pub fn to_vec(self) -> Vec<u8> {
        self.bytes
    }

    /// Get the hash as a lowercase hexadecimal string
    #[must_use]
    pub fn to_hex(&self) -> String {
        encoding::to_lower_hex(&self.bytes)
    }

    /// Get the hash as a base64 string
    #[must_use]
    pub fn to_base64(&self) -> String {
        encoding::to_base64(&self.bytes)
    }

    /// Get the hash as a base64url string (URL-safe, unpadded)
    #[must_use]
    pub fn to_base64url(&self) -> String {
        encoding::to_base64url(&self.bytes)
    }

    /// Get the length of the hash in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the hash is empty
    ///
    /// Never true for a digest produced by this crate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<HashResult> for Vec<u8> {
    fn from(result: HashResult) -> Self {
        result.bytes
    }
}

impl AsRef<[u8]> for HashResult {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Display for HashResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Serialisable outcome of a hash request
///
/// Serialises as `{"ok":true,"hex":"..."}` or
/// `{"ok":false,"code":N,"message":"..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "WireResponse", try_from = "WireResponse")]
pub enum HashResponse {
    /// Digest computed
    Success {
        /// Lowercase hex digest
        hex: String,
    },
    /// Digest computation failed
    Failure {
        /// Propagated error code
        code: i32,
        /// Description naming the failed operation and code
        message: String,
    },
}

impl HashResponse {
    /// Whether this response carries a digest
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Hex digest, if successful
    #[must_use]
    pub fn hex(&self) -> Option<&str> {
        match self {
            Self::Success { hex } => Some(hex),
            Self::Failure { .. } => None,
        }
    }

    /// Error code, if failed
    #[must_use]
    pub fn code(&self) -> Option<i32> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { code, .. } => Some(*code),
        }
    }

    /// Error description, if failed
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { message, .. } => Some(message),
        }
    }

    /// Render as a JSON object
    ///
    /// # Errors
    ///
    /// Returns the serializer error; not expected for this shape.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<Result<HashResult>> for HashResponse {
    fn from(result: Result<HashResult>) -> Self {
        match result {
            Ok(hash) => Self::Success {
                hex: hash.to_hex(),
            },
            Err(e) => Self::Failure {
                code: e.code(),
                message: e.to_string(),
            },
        }
    }
}

/// Flat wire shape shared by both response states
#[derive(Serialize, Deserialize)]
struct WireResponse {
    ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    code: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl From<HashResponse> for WireResponse {
    fn from(response: HashResponse) -> Self {
        match response {
            HashResponse::Success { hex } => Self {
                ok: true,
                hex: Some(hex),
                code: None,
                message: None,
            },
            HashResponse::Failure { code, message } => Self {
                ok: false,
                hex: None,
                code: Some(code),
                message: Some(message),
            },
        }
    }
}

impl TryFrom<WireResponse> for HashResponse {
    type Error = String;

    fn try_from(wire: WireResponse) -> std::result::Result<Self, Self::Error> {
        match wire {
            WireResponse {
                ok: true,
                hex: Some(hex),
                code: None,
                message: None,
            } => Ok(Self::Success { hex }),
            WireResponse {
                ok: false,
                hex: None,
                code: Some(code),
                message: Some(message),
            } => Ok(Self::Failure { code, message }),
            WireResponse { ok, .. } => Err(format!(
                "inconsistent hash response fields for ok={ok}"
            )),
        }
    }
}
