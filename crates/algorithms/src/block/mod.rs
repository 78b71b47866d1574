//! Block cipher implementations
//!
//! Every cipher family exposes the same [`BlockCipher`] interface so the
//! modes in [`modes`] can drive any of them over a caller-owned buffer.

pub mod aes;
#[cfg(feature = "legacy")]
pub mod legacy;
pub mod modes;

use pgcipher_api::Result;

// Re-exports
pub use aes::{Aes128, Aes192, Aes256};
#[cfg(feature = "legacy")]
pub use legacy::{Blowfish, Cast5, Des, TripleDes};
pub use modes::{BlockMode, Cbc, Ecb};

/// Marker trait for cipher algorithms with compile-time properties
pub trait CipherAlgorithm {
    /// Key size in bytes (the largest accepted size for variable-key ciphers)
    const KEY_SIZE: usize;

    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Algorithm name
    fn name() -> &'static str;
}

/// Trait for block ciphers with type-level constraints
pub trait BlockCipher: Sized {
    /// The algorithm this cipher implements
    type Algorithm: CipherAlgorithm;

    /// Creates a new block cipher instance, expanding the key schedule
    ///
    /// The key must already have a length the algorithm accepts.
    fn new(key: &[u8]) -> Result<Self>;

    /// Encrypts a single block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts a single block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Returns the key size in bytes
    fn key_size() -> usize {
        Self::Algorithm::KEY_SIZE
    }

    /// Returns the block size in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Returns the name of the block cipher
    fn name() -> &'static str {
        Self::Algorithm::name()
    }
}
