//! Shared functionality for the pgcipher library
//!
//! This crate holds the secret-handling types used by both the block
//! cipher primitives and the key/IV normalizer.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod security;

// Re-export core security types
pub use security::SecretBuffer;
