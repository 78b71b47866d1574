//! Cipher Block Chaining (CBC) mode implementation
//!
//! CBC mode is a block cipher mode of operation that provides confidentiality
//! by XORing each plaintext block with the previous ciphertext block before
//! encryption. The first block is XORed with an initialization vector (IV).
//!
//! This implementation follows NIST SP 800-38A and works in place, so the
//! only allocation in an encrypt or decrypt call is the caller's buffer.

use pgcipher_api::{validate, Result};
use pgcipher_params::utils::symmetric::MAX_BLOCK_SIZE;
use zeroize::Zeroize;

use super::BlockMode;
use crate::block::BlockCipher;

/// CBC mode implementation
pub struct Cbc<B: BlockCipher> {
    cipher: B,
    iv: [u8; MAX_BLOCK_SIZE],
}

impl<B: BlockCipher> Cbc<B> {
    /// Creates a new CBC mode instance with the given cipher and IV
    ///
    /// The IV must be exactly one block long.
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        validate::length("CBC initialization vector", iv.len(), B::block_size())?;

        let mut stored = [0u8; MAX_BLOCK_SIZE];
        stored[..iv.len()].copy_from_slice(iv);
        Ok(Self { cipher, iv: stored })
    }
}

impl<B: BlockCipher> BlockMode for Cbc<B> {
    fn mode_name() -> &'static str {
        "CBC"
    }

    fn encrypt_in_place(&self, buf: &mut [u8]) -> Result<()> {
        let block_size = B::block_size();
        validate::block_aligned("CBC plaintext", buf.len(), block_size)?;

        let mut prev_block = self.iv;
        for block in buf.chunks_exact_mut(block_size) {
            // XOR with previous ciphertext block (or IV for the first block)
            for (b, p) in block.iter_mut().zip(&prev_block[..block_size]) {
                *b ^= p;
            }
            self.cipher.encrypt_block(block)?;
            prev_block[..block_size].copy_from_slice(block);
        }
        Ok(())
    }

    fn decrypt_in_place(&self, buf: &mut [u8]) -> Result<()> {
        let block_size = B::block_size();
        validate::block_aligned("CBC ciphertext", buf.len(), block_size)?;

        let mut prev_block = self.iv;
        let mut current_block = [0u8; MAX_BLOCK_SIZE];
        for block in buf.chunks_exact_mut(block_size) {
            current_block[..block_size].copy_from_slice(block);
            self.cipher.decrypt_block(block)?;
            for (b, p) in block.iter_mut().zip(&prev_block[..block_size]) {
                *b ^= p;
            }
            prev_block[..block_size].copy_from_slice(&current_block[..block_size]);
        }
        current_block.zeroize();
        Ok(())
    }
}
