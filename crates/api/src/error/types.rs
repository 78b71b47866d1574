//! Error type definitions for cipher operations

use thiserror::Error;

/// Primary error type for cipher operations
///
/// None of the variants carry key, IV or plaintext bytes. Padding failures
/// deliberately carry nothing beyond their context so that a decrypt
/// caller cannot learn where the padding check failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The algorithm token of a cipher type is not a known family
    #[error("unsupported cipher algorithm \"{algorithm}\"")]
    UnsupportedAlgorithm {
        /// Algorithm token as supplied by the caller
        algorithm: String,
    },

    /// The mode token is not supported by the selected algorithm
    #[error("unsupported cipher mode \"{mode}\" for {algorithm}")]
    UnsupportedMode {
        /// Canonical name of the resolved algorithm
        algorithm: &'static str,
        /// Mode token as supplied by the caller
        mode: String,
    },

    /// The cipher type string does not follow `<algorithm>[-<mode>][/pad:<flag>]`
    #[error("invalid cipher type \"{spec}\": {reason}")]
    InvalidCipherSpec {
        /// Cipher type as supplied by the caller
        spec: String,
        /// Rule that was violated
        reason: &'static str,
    },

    /// Input is not a whole number of blocks where it has to be
    #[error("{context}: length {actual} is not a multiple of the {block_size}-byte block size")]
    InvalidInputLength {
        /// Which buffer failed the check
        context: &'static str,
        /// Cipher block size in bytes
        block_size: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// PKCS padding did not verify after decryption
    #[error("{context}: invalid padding")]
    InvalidPadding {
        /// Operation that detected the failure
        context: &'static str,
    },

    /// Key or IV material that cannot be normalized for the algorithm
    #[error("invalid key or IV for {algorithm}: {reason}")]
    InvalidKeyOrIv {
        /// Canonical name of the algorithm
        algorithm: &'static str,
        /// Rule that was violated
        reason: &'static str,
    },

    /// A primitive was handed a buffer of the wrong size
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },
}

/// Result type for cipher operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `InvalidCipherSpec` error
    pub fn cipher_spec(spec: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidCipherSpec {
            spec: spec.into(),
            reason,
        }
    }

    /// Shorthand to create an `InvalidKeyOrIv` error
    pub fn key_or_iv(algorithm: &'static str, reason: &'static str) -> Self {
        Self::InvalidKeyOrIv { algorithm, reason }
    }
}
