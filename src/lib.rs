//! # pgcipher
//!
//! The `encrypt`/`decrypt` cipher semantics of PostgreSQL's pgcrypto
//! extension, in Rust.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! pgcipher = "0.1"
//! ```
//!
//! ```
//! use pgcipher::prelude::*;
//!
//! let ciphertext = encrypt(b"hello world12345", &[0u8; 16], &[0u8; 16], "aes-cbc/pad:pkcs")?;
//! assert_eq!(ciphertext.len(), 32);
//!
//! let plaintext = decrypt(&ciphertext, &[0u8; 16], &[0u8; 16], "aes-cbc/pad:pkcs")?;
//! assert_eq!(plaintext, b"hello world12345");
//! # Ok::<(), pgcipher::Error>(())
//! ```
//!
//! Cipher types follow pgcrypto: `<algorithm>[-<mode>][/pad:<pkcs|none>]`,
//! where the algorithm is one of `aes` (`rijndael`), `des`, `3des`, `bf`
//! (`blowfish`) or `cast5` and the mode is `cbc` (default) or `ecb`. Keys
//! and IVs of the wrong length are zero-padded or truncated, never rejected.
//!
//! ## Features
//!
//! - `legacy` (default): DES, 3DES, Blowfish and CAST5
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - `pgcipher-api`: Error type and validation helpers
//! - `pgcipher-common`: Zeroizing secret buffers
//! - `pgcipher-params`: Key and block sizes
//! - `pgcipher-algorithms`: Block ciphers, ECB/CBC and PKCS padding
//! - `pgcipher-symmetric`: Cipher type resolution, key/IV normalization
//!   and the encrypt/decrypt engine

#![forbid(unsafe_code)]

// Core re-exports
pub use pgcipher_algorithms as algorithms;
pub use pgcipher_api as api;
pub use pgcipher_common as common;
pub use pgcipher_params as params;
pub use pgcipher_symmetric as symmetric;

pub use pgcipher_api::{Error, Result};
pub use pgcipher_symmetric::{
    decrypt, encrypt, normalize, resolve, Algorithm, Cipher, CipherSpec, Mode, NormalizedIv,
    NormalizedKey, Padding,
};

/// Common imports for pgcipher users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export the cipher surface
    pub use crate::symmetric::{
        decrypt, encrypt, resolve, Algorithm, Cipher, CipherSpec, Mode, Padding,
    };
}
