//! Fixed-length input fingerprints driving color and layout decisions

use crate::io::error::{IdenticonError, Result};
use md5::{Digest, Md5};
use std::fmt;

/// Number of bytes in a fingerprint; all byte lookups wrap modulo this length
pub const FINGERPRINT_LEN: usize = 16;

/// Deterministic 16-byte digest of an input string
///
/// Only used as a reproducible source of pseudo-random bits. It carries no
/// cryptographic guarantees and must not be treated as an identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; FINGERPRINT_LEN]);

impl Fingerprint {
    /// Derive the fingerprint of a non-empty byte sequence
    ///
    /// # Errors
    ///
    /// Returns [`IdenticonError::InvalidInput`] if `input` is empty
    pub fn derive(input: &[u8]) -> Result<Self> {
        if input.is_empty() {
            return Err(IdenticonError::InvalidInput);
        }

        Ok(Self(Md5::digest(input).into()))
    }

    /// Wrap a precomputed digest
    pub const fn from_bytes(bytes: [u8; FINGERPRINT_LEN]) -> Self {
        Self(bytes)
    }

    /// Byte at `index`, wrapping around the fingerprint length
    pub fn byte(&self, index: usize) -> u8 {
        self.0.get(index % FINGERPRINT_LEN).copied().unwrap_or(0)
    }

    /// Raw fingerprint bytes
    pub const fn as_bytes(&self) -> &[u8; FINGERPRINT_LEN] {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
