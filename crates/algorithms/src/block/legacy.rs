//! DES, 3DES, Blowfish and CAST5
//!
//! pgcrypto still accepts these 64-bit block ciphers, so they are carried
//! for compatibility only. The block transforms come from the RustCrypto
//! crates; this module adapts them to [`BlockCipher`].

use cipher::generic_array::GenericArray;
use cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use pgcipher_api::{validate, Error, Result};
use pgcipher_params::utils::symmetric::{
    BLOWFISH_BLOCK_SIZE, BLOWFISH_MAX_KEY_SIZE, CAST5_BLOCK_SIZE, CAST5_MAX_KEY_SIZE,
    DES_BLOCK_SIZE, DES_KEY_SIZE, TDES_KEY_SIZE,
};

use super::{BlockCipher, CipherAlgorithm};

macro_rules! legacy_block_cipher {
    (
        $(#[$meta:meta])*
        $name:ident, $algorithm:ident, $inner:ty, $label:literal, $key_size:expr, $block_size:expr
    ) => {
        #[doc = concat!("Type-level constants for ", $label)]
        pub enum $algorithm {}

        impl CipherAlgorithm for $algorithm {
            const KEY_SIZE: usize = $key_size;
            const BLOCK_SIZE: usize = $block_size;

            fn name() -> &'static str {
                $label
            }
        }

        $(#[$meta])*
        pub struct $name {
            inner: $inner,
        }

        impl BlockCipher for $name {
            type Algorithm = $algorithm;

            fn new(key: &[u8]) -> Result<Self> {
                let inner = <$inner as KeyInit>::new_from_slice(key).map_err(|_| {
                    Error::InvalidLength {
                        context: concat!($label, " key"),
                        expected: $key_size,
                        actual: key.len(),
                    }
                })?;
                Ok(Self { inner })
            }

            fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
                validate::length(concat!($label, " block"), block.len(), $block_size)?;
                self.inner.encrypt_block(GenericArray::from_mut_slice(block));
                Ok(())
            }

            fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
                validate::length(concat!($label, " block"), block.len(), $block_size)?;
                self.inner.decrypt_block(GenericArray::from_mut_slice(block));
                Ok(())
            }
        }
    };
}

legacy_block_cipher!(
    /// Single DES (FIPS 46-3)
    Des, DesAlgorithm, des::Des, "DES", DES_KEY_SIZE, DES_BLOCK_SIZE
);

legacy_block_cipher!(
    /// Three-key triple DES in EDE order
    TripleDes, TripleDesAlgorithm, des::TdesEde3, "3DES", TDES_KEY_SIZE, DES_BLOCK_SIZE
);

legacy_block_cipher!(
    /// Blowfish with big-endian word order, keys of 4 to 56 bytes
    Blowfish, BlowfishAlgorithm, blowfish::Blowfish, "Blowfish", BLOWFISH_MAX_KEY_SIZE,
    BLOWFISH_BLOCK_SIZE
);

legacy_block_cipher!(
    /// CAST5 (RFC 2144), keys of 5 to 16 bytes
    Cast5, Cast5Algorithm, cast5::Cast5, "CAST5", CAST5_MAX_KEY_SIZE, CAST5_BLOCK_SIZE
);
