//! pgcrypto-compatible symmetric encryption
//!
//! This crate implements the `encrypt`/`decrypt` semantics of PostgreSQL's
//! pgcrypto extension on top of the primitives in `pgcipher-algorithms`:
//!
//! 1. [`resolve`] parses a cipher type such as `"aes-cbc/pad:pkcs"`
//! 2. [`normalize`] pads or truncates the key and IV to the sizes the
//!    algorithm needs
//! 3. [`Cipher`] runs the block cipher in ECB or CBC mode and applies or
//!    strips PKCS padding
//!
//! ```
//! use pgcipher_symmetric::{decrypt, encrypt};
//!
//! let ciphertext = encrypt(b"secret", b"key", b"iv", "aes-cbc/pad:pkcs")?;
//! assert_eq!(ciphertext.len(), 16);
//! assert_eq!(decrypt(&ciphertext, b"key", b"iv", "aes-cbc/pad:pkcs")?, b"secret");
//! # Ok::<(), pgcipher_symmetric::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cipher_type;
pub mod engine;
pub mod normalize;

pub use cipher_type::{resolve, Algorithm, CipherSpec, Mode, Padding};
pub use engine::{decrypt, encrypt, Cipher};
pub use normalize::{normalize, NormalizedIv, NormalizedKey};

// Re-export the API error system
pub use pgcipher_api::error::{Error, Result};
