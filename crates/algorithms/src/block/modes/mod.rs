//! Block cipher modes of operation
//!
//! This module implements the two modes pgcrypto offers for its block
//! ciphers: ECB and CBC. Both work in place on a buffer whose length is a
//! multiple of the block size; padding is applied by the caller.

pub mod cbc;
pub mod ecb;

use pgcipher_api::Result;

// Re-exports
pub use cbc::Cbc;
pub use ecb::Ecb;

/// Common interface of the confidentiality-only block modes
pub trait BlockMode {
    /// Mode name
    fn mode_name() -> &'static str;

    /// Encrypts a block-aligned buffer in place
    fn encrypt_in_place(&self, buf: &mut [u8]) -> Result<()>;

    /// Decrypts a block-aligned buffer in place
    fn decrypt_in_place(&self, buf: &mut [u8]) -> Result<()>;

    /// Encrypts a block-aligned message into a new buffer
    fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut out = plaintext.to_vec();
        self.encrypt_in_place(&mut out)?;
        Ok(out)
    }

    /// Decrypts a block-aligned message into a new buffer
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let mut out = ciphertext.to_vec();
        self.decrypt_in_place(&mut out)?;
        Ok(out)
    }
}
