//! Hash primitive providers
//!
//! A [`HashPrimitive`] computes a raw digest into a caller-supplied buffer and
//! reports a status code. The facade never hashes anything itself; it always
//! goes through a provider. [`RustCryptoProvider`] is the default and wraps the
//! RustCrypto `sha1`, `sha2` and `sha3` crates.

use crate::algorithm::DigestPrimitive;
use digest::Digest;
use std::num::NonZeroI32;

/// Status returned when the output buffer does not match the digest length
pub const STATUS_BUFFER_LENGTH_MISMATCH: NonZeroI32 = match NonZeroI32::new(-1) {
    Some(status) => status,
    None => unreachable!(),
};

/// Outcome of a primitive call
///
/// Success is status zero, so a failure status can never be zero.
pub type PrimitiveResult = std::result::Result<(), NonZeroI32>;

/// Source of the actual hash computation
pub trait HashPrimitive {
    /// Write the digest of `input` into `output`
    ///
    /// `output` is sized exactly to the primitive's digest length.
    ///
    /// # Errors
    ///
    /// Returns the provider's status code when the computation fails. The
    /// status is a [`NonZeroI32`] because zero means success.
    fn digest_into(
        &self,
        primitive: DigestPrimitive,
        input: &[u8],
        output: &mut [u8],
    ) -> PrimitiveResult;
}

impl<P: HashPrimitive + ?Sized> HashPrimitive for &P {
    fn digest_into(
        &self,
        primitive: DigestPrimitive,
        input: &[u8],
        output: &mut [u8],
    ) -> PrimitiveResult {
        (**self).digest_into(primitive, input, output)
    }
}

/// Default provider backed by the RustCrypto hash crates
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoProvider;

impl HashPrimitive for RustCryptoProvider {
    fn digest_into(
        &self,
        primitive: DigestPrimitive,
        input: &[u8],
        output: &mut [u8],
    ) -> PrimitiveResult {
        match primitive {
            DigestPrimitive::Sha1 => write_digest::<sha1::Sha1>(input, output),
            DigestPrimitive::Sha224 => write_digest::<sha2::Sha224>(input, output),
            DigestPrimitive::Sha256 => write_digest::<sha2::Sha256>(input, output),
            DigestPrimitive::Sha384 => write_digest::<sha2::Sha384>(input, output),
            DigestPrimitive::Sha512 => write_digest::<sha2::Sha512>(input, output),
            DigestPrimitive::Sha3_224 => write_digest::<sha3::Sha3_224>(input, output),
            DigestPrimitive::Sha3_256 => write_digest::<sha3::Sha3_256>(input, output),
            DigestPrimitive::Sha3_384 => write_digest::<sha3::Sha3_384>(input, output),
            DigestPrimitive::Sha3_512 => write_digest::<sha3::Sha3_512>(input, output),
        }
    }
}

fn write_digest<D: Digest>(input: &[u8], output: &mut [u8]) -> PrimitiveResult {
    if output.len() != <D as Digest>::output_size() {
        return Err(STATUS_BUFFER_LENGTH_MISMATCH);
    }
    output.copy_from_slice(&D::digest(input));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_exact_length_digest() {
        let mut out = [0u8; 32];
        RustCryptoProvider
            .digest_into(DigestPrimitive::Sha256, b"abc", &mut out)
            .expect("sha256 into 32-byte buffer");
        assert_eq!(
            hex::encode(out),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn rejects_wrongly_sized_buffer() {
        let mut out = [0u8; 20];
        let status = RustCryptoProvider.digest_into(DigestPrimitive::Sha3_256, b"abc", &mut out);
        assert_eq!(status, Err(STATUS_BUFFER_LENGTH_MISMATCH));
        assert_eq!(STATUS_BUFFER_LENGTH_MISMATCH.get(), -1);
        assert_eq!(out, [0u8; 20]);
    }

    fn sha1_of_empty<P: HashPrimitive>(provider: P) -> [u8; 20] {
        let mut out = [0u8; 20];
        assert!(provider.digest_into(DigestPrimitive::Sha1, b"", &mut out).is_ok());
        out
    }

    #[test]
    fn provider_works_through_reference() {
        let provider = RustCryptoProvider;
        assert_eq!(
            hex::encode(sha1_of_empty(&provider)),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
    }
}
