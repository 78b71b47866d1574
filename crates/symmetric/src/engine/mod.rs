//! Encryption and decryption with pgcrypto semantics
//!
//! [`Cipher`] binds a resolved [`CipherSpec`] to normalized key material and
//! can be reused for any number of calls. [`encrypt`] and [`decrypt`] are the
//! one-shot forms taking a cipher type string.

use pgcipher_algorithms::block::{Aes128, Aes192, Aes256, BlockCipher, BlockMode, Cbc, Ecb};
#[cfg(feature = "legacy")]
use pgcipher_algorithms::block::{Blowfish, Cast5, Des, TripleDes};
use pgcipher_algorithms::padding;
use pgcipher_api::{validate, Error, Result};
use pgcipher_params::utils::symmetric::{AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE};
use tracing::{debug, trace};
use zeroize::Zeroize;

use crate::cipher_type::{resolve, Algorithm, CipherSpec, Mode};
use crate::normalize::{normalize, NormalizedIv, NormalizedKey};

#[derive(Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// A resolved cipher type with its normalized key and IV
///
/// Holds no state between calls, so one instance can serve many threads.
#[derive(Clone, Debug)]
pub struct Cipher {
    spec: CipherSpec,
    key: NormalizedKey,
    iv: Option<NormalizedIv>,
}

impl Cipher {
    /// Normalizes `key` and `iv` for `spec`
    pub fn new(spec: CipherSpec, key: &[u8], iv: &[u8]) -> Result<Self> {
        let (key, iv) = normalize(&spec, key, iv)?;
        Ok(Self { spec, key, iv })
    }

    /// Resolves `cipher_type` and normalizes `key` and `iv` for it
    pub fn from_cipher_type(cipher_type: &str, key: &[u8], iv: &[u8]) -> Result<Self> {
        Self::new(resolve(cipher_type)?, key, iv)
    }

    /// The resolved cipher type
    pub fn spec(&self) -> &CipherSpec {
        &self.spec
    }

    /// Encrypts `plaintext`
    ///
    /// With padding enabled the output is always between 1 and one block
    /// longer than the input. Without padding the input must be block
    /// aligned and the output has the same length.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let block_size = self.spec.block_size();
        if !self.spec.padding.is_enabled() {
            validate::block_aligned("plaintext", plaintext.len(), block_size)?;
        }

        let mut buf = Vec::with_capacity(plaintext.len() + block_size);
        buf.extend_from_slice(plaintext);
        if self.spec.padding.is_enabled() {
            padding::pad(&mut buf, block_size);
        }

        trace!(
            algorithm = self.spec.algorithm.name(),
            mode = self.spec.mode.name(),
            padding = self.spec.padding.is_enabled(),
            input_len = plaintext.len(),
            output_len = buf.len(),
            "encrypt"
        );

        if let Err(err) = self.apply(Direction::Encrypt, &mut buf) {
            buf.zeroize();
            return Err(err);
        }
        Ok(buf)
    }

    /// Decrypts `ciphertext`
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInputLength`] if the ciphertext is not block aligned
    /// - [`Error::InvalidPadding`] if padding is enabled and the decrypted
    ///   data does not end in valid PKCS padding, including an empty
    ///   ciphertext
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let block_size = self.spec.block_size();
        validate::block_aligned("ciphertext", ciphertext.len(), block_size)?;

        trace!(
            algorithm = self.spec.algorithm.name(),
            mode = self.spec.mode.name(),
            padding = self.spec.padding.is_enabled(),
            input_len = ciphertext.len(),
            "decrypt"
        );

        let mut buf = ciphertext.to_vec();
        if let Err(err) = self.apply(Direction::Decrypt, &mut buf) {
            buf.zeroize();
            return Err(err);
        }

        if self.spec.padding.is_enabled() {
            match padding::unpadded_len(&buf, block_size) {
                Ok(len) => buf.truncate(len),
                Err(err) => {
                    debug!(algorithm = self.spec.algorithm.name(), "decrypt: bad padding");
                    buf.zeroize();
                    return Err(err);
                }
            }
        }
        Ok(buf)
    }

    fn apply(&self, direction: Direction, buf: &mut [u8]) -> Result<()> {
        match self.spec.algorithm {
            Algorithm::Aes => match self.key.len() {
                AES128_KEY_SIZE => self.run::<Aes128>(direction, buf),
                AES192_KEY_SIZE => self.run::<Aes192>(direction, buf),
                AES256_KEY_SIZE => self.run::<Aes256>(direction, buf),
                _ => Err(Error::key_or_iv("aes", "unsupported key length")),
            },
            #[cfg(feature = "legacy")]
            Algorithm::Des => self.run::<Des>(direction, buf),
            #[cfg(feature = "legacy")]
            Algorithm::TripleDes => self.run::<TripleDes>(direction, buf),
            #[cfg(feature = "legacy")]
            Algorithm::Blowfish => self.run::<Blowfish>(direction, buf),
            #[cfg(feature = "legacy")]
            Algorithm::Cast5 => self.run::<Cast5>(direction, buf),
        }
    }

    fn run<B: BlockCipher>(&self, direction: Direction, buf: &mut [u8]) -> Result<()> {
        let cipher = B::new(self.key.as_bytes())?;
        match (self.spec.mode, &self.iv) {
            (Mode::Ecb, _) => transform(&Ecb::new(cipher), direction, buf),
            (Mode::Cbc, Some(iv)) => transform(&Cbc::new(cipher, iv.as_bytes())?, direction, buf),
            (Mode::Cbc, None) => Err(Error::key_or_iv(
                self.spec.algorithm.name(),
                "CBC mode requires an IV",
            )),
        }
    }
}

fn transform<M: BlockMode>(mode: &M, direction: Direction, buf: &mut [u8]) -> Result<()> {
    match direction {
        Direction::Encrypt => mode.encrypt_in_place(buf),
        Direction::Decrypt => mode.decrypt_in_place(buf),
    }
}

/// Encrypts `plaintext` as pgcrypto's `encrypt_iv` would
///
/// `cipher_type` is resolved with [`resolve`]; `key` and `iv` are padded or
/// truncated to the sizes the algorithm needs. The IV is ignored in ECB mode.
pub fn encrypt(plaintext: &[u8], key: &[u8], iv: &[u8], cipher_type: &str) -> Result<Vec<u8>> {
    Cipher::from_cipher_type(cipher_type, key, iv)?.encrypt(plaintext)
}

/// Decrypts `ciphertext` as pgcrypto's `decrypt_iv` would
pub fn decrypt(ciphertext: &[u8], key: &[u8], iv: &[u8], cipher_type: &str) -> Result<Vec<u8>> {
    Cipher::from_cipher_type(cipher_type, key, iv)?.decrypt(ciphertext)
}
