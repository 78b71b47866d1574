//! Block cipher primitives for pgcrypto-compatible encryption
//!
//! This crate provides the raw building blocks used by `pgcipher-symmetric`:
//!
//! - a constant-time AES implementation (128, 192 and 256-bit keys)
//! - DES, 3DES, Blowfish and CAST5 behind the `legacy` feature
//! - ECB and CBC modes of operation working in place
//! - PKCS#7 padding with constant-time removal
//!
//! None of these types normalize keys or IVs; callers pass exactly the
//! lengths each algorithm accepts.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub use pgcipher_api::{Error, Result};

// Block cipher implementations
pub mod block;
pub use block::{Aes128, Aes192, Aes256, BlockCipher, BlockMode, Cbc, CipherAlgorithm, Ecb};
#[cfg(feature = "legacy")]
pub use block::{Blowfish, Cast5, Des, TripleDes};

// Padding
pub mod padding;
