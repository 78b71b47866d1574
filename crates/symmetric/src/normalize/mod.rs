//! Key and IV normalization
//!
//! pgcrypto never rejects a key or IV for having the wrong length. Short
//! material is extended with zero bytes and long material is truncated to
//! whatever the resolved algorithm needs. The rules per family:
//!
//! | Family   | Key bytes used                                         |
//! |----------|--------------------------------------------------------|
//! | AES      | 16 if the raw key has at most 16, 24 if at most 24, else 32 |
//! | DES      | 8                                                      |
//! | 3DES     | 24                                                     |
//! | Blowfish | 1..=56 as supplied, short keys repeated up to 4 bytes  |
//! | CAST5    | 5..=16, shorter keys zero-padded to 5                  |
//!
//! The IV is only used in CBC mode, where it is extended or truncated to one
//! block. An empty IV therefore becomes an all-zero block.

use core::fmt;

use pgcipher_api::{Error, Result};
use pgcipher_common::SecretBuffer;
use pgcipher_params::utils::symmetric::{
    AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE, MAX_BLOCK_SIZE, MAX_KEY_SIZE,
};
#[cfg(feature = "legacy")]
use pgcipher_params::utils::symmetric::{
    BLOWFISH_MAX_KEY_SIZE, BLOWFISH_MIN_KEY_SIZE, CAST5_MAX_KEY_SIZE, CAST5_MIN_KEY_SIZE,
    DES_KEY_SIZE, TDES_KEY_SIZE,
};

use crate::cipher_type::{Algorithm, CipherSpec, Mode};

/// Key material sized for the resolved algorithm
///
/// The bytes are wiped when the key is dropped.
#[derive(Clone)]
pub struct NormalizedKey {
    bytes: SecretBuffer<MAX_KEY_SIZE>,
    len: usize,
}

impl NormalizedKey {
    /// The normalized key bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes.as_slice()[..self.len]
    }

    /// Length of the normalized key in bytes
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; every algorithm needs at least one key byte
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Debug for NormalizedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NormalizedKey({} bytes, [REDACTED])", self.len)
    }
}

/// One-block initialization vector for CBC mode
#[derive(Clone, PartialEq, Eq)]
pub struct NormalizedIv {
    bytes: [u8; MAX_BLOCK_SIZE],
    len: usize,
}

impl NormalizedIv {
    /// The IV bytes, exactly one block long
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl fmt::Debug for NormalizedIv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NormalizedIv({} bytes, [REDACTED])", self.len)
    }
}

/// Number of key bytes the algorithm uses for a raw key of `raw_len` bytes
///
/// # Errors
///
/// [`Error::InvalidKeyOrIv`] when the algorithm cannot be keyed from an empty
/// key (Blowfish and CAST5).
pub fn required_key_size(algorithm: Algorithm, raw_len: usize) -> Result<usize> {
    match algorithm {
        Algorithm::Aes => Ok(match raw_len {
            0..=AES128_KEY_SIZE => AES128_KEY_SIZE,
            _ if raw_len <= AES192_KEY_SIZE => AES192_KEY_SIZE,
            _ => AES256_KEY_SIZE,
        }),
        #[cfg(feature = "legacy")]
        Algorithm::Des => Ok(DES_KEY_SIZE),
        #[cfg(feature = "legacy")]
        Algorithm::TripleDes => Ok(TDES_KEY_SIZE),
        #[cfg(feature = "legacy")]
        Algorithm::Blowfish => match raw_len {
            0 => Err(Error::key_or_iv(algorithm.name(), "key must not be empty")),
            // Repeating a short key keeps its key schedule unchanged
            _ if raw_len < BLOWFISH_MIN_KEY_SIZE => Ok(BLOWFISH_MIN_KEY_SIZE.div_ceil(raw_len) * raw_len),
            _ => Ok(raw_len.min(BLOWFISH_MAX_KEY_SIZE)),
        },
        #[cfg(feature = "legacy")]
        Algorithm::Cast5 => match raw_len {
            0 => Err(Error::key_or_iv(algorithm.name(), "key must not be empty")),
            _ => Ok(raw_len.clamp(CAST5_MIN_KEY_SIZE, CAST5_MAX_KEY_SIZE)),
        },
    }
}

/// Sizes a raw key for the algorithm
pub fn normalize_key(algorithm: Algorithm, raw_key: &[u8]) -> Result<NormalizedKey> {
    let len = required_key_size(algorithm, raw_key.len())?;
    let mut bytes = SecretBuffer::<MAX_KEY_SIZE>::zeroed();
    let used = raw_key.len().min(len);
    bytes.as_mut_slice()[..used].copy_from_slice(&raw_key[..used]);

    let tail = &mut bytes.as_mut_slice()[used..len];
    match algorithm {
        #[cfg(feature = "legacy")]
        Algorithm::Blowfish => {
            for (byte, k) in tail.iter_mut().zip(raw_key.iter().cycle()) {
                *byte = *k;
            }
        }
        _ => debug_assert!(tail.iter().all(|&b| b == 0)),
    }

    Ok(NormalizedKey { bytes, len })
}

/// Sizes a raw IV to one block of the algorithm
pub fn normalize_iv(algorithm: Algorithm, raw_iv: &[u8]) -> NormalizedIv {
    let len = algorithm.block_size();
    let mut bytes = [0u8; MAX_BLOCK_SIZE];
    let used = raw_iv.len().min(len);
    bytes[..used].copy_from_slice(&raw_iv[..used]);
    NormalizedIv { bytes, len }
}

/// Normalizes a raw key and IV for the resolved cipher type
///
/// The IV is `None` in ECB mode, whatever the caller supplied.
pub fn normalize(
    spec: &CipherSpec,
    raw_key: &[u8],
    raw_iv: &[u8],
) -> Result<(NormalizedKey, Option<NormalizedIv>)> {
    let key = normalize_key(spec.algorithm, raw_key)?;
    let iv = match spec.mode {
        Mode::Ecb => None,
        Mode::Cbc => Some(normalize_iv(spec.algorithm, raw_iv)),
    };
    Ok((key, iv))
}
