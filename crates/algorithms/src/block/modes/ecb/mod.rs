//! Electronic Codebook (ECB) mode implementation
//!
//! Each block is transformed independently with the same key, so equal
//! plaintext blocks give equal ciphertext blocks. It is offered only because
//! pgcrypto offers it.

use pgcipher_api::{validate, Result};

use super::BlockMode;
use crate::block::BlockCipher;

/// ECB mode implementation
pub struct Ecb<B: BlockCipher> {
    cipher: B,
}

impl<B: BlockCipher> Ecb<B> {
    /// Creates a new ECB mode instance with the given cipher
    pub fn new(cipher: B) -> Self {
        Self { cipher }
    }
}

impl<B: BlockCipher> BlockMode for Ecb<B> {
    fn mode_name() -> &'static str {
        "ECB"
    }

    fn encrypt_in_place(&self, buf: &mut [u8]) -> Result<()> {
        let block_size = B::block_size();
        validate::block_aligned("ECB plaintext", buf.len(), block_size)?;

        for block in buf.chunks_exact_mut(block_size) {
            self.cipher.encrypt_block(block)?;
        }
        Ok(())
    }

    fn decrypt_in_place(&self, buf: &mut [u8]) -> Result<()> {
        let block_size = B::block_size();
        validate::block_aligned("ECB ciphertext", buf.len(), block_size)?;

        for block in buf.chunks_exact_mut(block_size) {
            self.cipher.decrypt_block(block)?;
        }
        Ok(())
    }
}
