//! Deterministic string hashing used to pick a bucket for a key

use std::hash::Hasher;

/// Polynomial rolling hash over raw bytes.
///
/// Each byte `b` updates the state as `h = h * 31 + b` with wrapping arithmetic, starting
/// from zero. The result depends only on the bytes written, so it is stable across calls,
/// processes and platforms (unlike `DefaultHasher`, which is seeded per process).
#[derive(Debug, Clone, Copy, Default)]
pub struct PolynomialHasher {
    /// Running hash state
    hash: u64,
}

impl PolynomialHasher {
    /// Multiplier applied to the running state before each byte is added
    const MULTIPLIER: u64 = 31;

    /// Creates a hasher with a zeroed state
    #[must_use]
    pub const fn new() -> Self {
        Self { hash: 0 }
    }
}

impl Hasher for PolynomialHasher {
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.hash = self.hash.wrapping_mul(Self::MULTIPLIER).wrapping_add(u64::from(byte));
        }
    }
}

/// Hashes the UTF-8 bytes of `key`.
///
/// The bytes are written directly, without the length prefix or terminator that
/// `str::hash` would add, so the value matches a plain byte-wise rolling hash.
#[must_use]
pub fn hash_key(key: &str) -> u64 {
    let mut hasher = PolynomialHasher::new();
    hasher.write(key.as_bytes());
    hasher.finish()
}
