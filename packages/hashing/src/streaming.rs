//! Incremental hash computation
//!
//! Feeds input in pieces instead of one slice. Digests are identical to the
//! one-shot [`crate::HashFacade`] output for the same bytes.

use crate::algorithm::{DigestPrimitive, HashAlgorithm};
use crate::hash_result::HashResult;
use crate::Result;
use digest::DynDigest;
use std::io::{self, Read, Write};

/// Read size used by [`hash_reader`]
pub const CHUNK_SIZE: usize = 8192;

/// Incremental hasher for one algorithm
pub struct StreamingHasher {
    algorithm: HashAlgorithm,
    state: Box<dyn DynDigest + Send>,
    total_bytes: u64,
}

impl StreamingHasher {
    /// Create a new streaming hasher for the specified algorithm
    #[must_use]
    pub fn new(algorithm: HashAlgorithm) -> Self {
        let state = match algorithm.resolve().primitive {
            DigestPrimitive::Sha1 => boxed::<sha1::Sha1>(),
            DigestPrimitive::Sha224 => boxed::<sha2::Sha224>(),
            DigestPrimitive::Sha256 => boxed::<sha2::Sha256>(),
            DigestPrimitive::Sha384 => boxed::<sha2::Sha384>(),
            DigestPrimitive::Sha512 => boxed::<sha2::Sha512>(),
            DigestPrimitive::Sha3_224 => boxed::<sha3::Sha3_224>(),
            DigestPrimitive::Sha3_256 => boxed::<sha3::Sha3_256>(),
            DigestPrimitive::Sha3_384 => boxed::<sha3::Sha3_384>(),
            DigestPrimitive::Sha3_512 => boxed::<sha3::Sha3_512>(),
        };
        Self {
            algorithm,
            state,
            total_bytes: 0,
        }
    }

    /// Algorithm being computed
    #[must_use]
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Absorb the next piece of input
    pub fn update(&mut self, chunk: &[u8]) {
        self.state.update(chunk);
        self.total_bytes += chunk.len() as u64;
    }

    /// Get the total number of bytes processed so far
    #[must_use]
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// Finish and return the digest
    #[must_use]
    pub fn finalize(self) -> HashResult {
        tracing::debug!(
            algorithm = self.algorithm.name(),
            total_bytes = self.total_bytes,
            "streaming digest finalized"
        );
        HashResult::new(self.algorithm, self.state.finalize().into_vec())
    }
}

impl std::fmt::Debug for StreamingHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamingHasher")
            .field("algorithm", &self.algorithm)
            .field("total_bytes", &self.total_bytes)
            .finish_non_exhaustive()
    }
}

impl Write for StreamingHasher {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn boxed<D>() -> Box<dyn DynDigest + Send>
where
    D: DynDigest + Default + Send + 'static,
{
    Box::new(D::default())
}

/// Hash everything a reader yields, [`CHUNK_SIZE`] bytes at a time
///
/// # Errors
///
/// Returns `HashError::Io` if reading fails; interrupted reads are retried.
pub fn hash_reader<R: Read>(algorithm: HashAlgorithm, mut reader: R) -> Result<HashResult> {
    let mut hasher = StreamingHasher::new(algorithm);
    let mut buffer = [0u8; CHUNK_SIZE];
    loop {
        match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => hasher.update(&buffer[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::OutputLength;
    use crate::HashError;

    #[test]
    fn chunked_updates_match_single_update() {
        let data = vec![0x5a_u8; 3 * CHUNK_SIZE + 17];
        for algorithm in HashAlgorithm::ALL {
            let mut whole = StreamingHasher::new(algorithm);
            whole.update(&data);

            let mut pieces = StreamingHasher::new(algorithm);
            for chunk in data.chunks(1000) {
                pieces.update(chunk);
            }
            assert_eq!(pieces.total_bytes(), data.len() as u64);
            assert_eq!(whole.finalize(), pieces.finalize(), "{algorithm}");
        }
    }

    #[test]
    fn empty_stream_matches_empty_digest() {
        let hash = StreamingHasher::new(HashAlgorithm::Sha2(OutputLength::L256)).finalize();
        assert_eq!(
            hash.to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn io_copy_into_hasher() {
        let mut hasher = StreamingHasher::new(HashAlgorithm::Sha1);
        let copied = io::copy(&mut &b"abc"[..], &mut hasher).expect("copy into hasher");
        assert_eq!(copied, 3);
        assert_eq!(
            hasher.finalize().to_hex(),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
    }

    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }
    }

    #[test]
    fn reader_errors_surface_as_io() {
        let result = hash_reader(HashAlgorithm::Sha1, BrokenReader);
        assert!(matches!(result, Err(HashError::Io(_))));
    }
}
