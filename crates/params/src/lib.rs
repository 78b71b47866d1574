//! Constant values for the pgcipher library
//!
//! Key and block sizes for every supported block cipher family, shared by
//! the primitives and the key/IV normalizer.

#![no_std]
#![deny(missing_docs)]

pub mod utils;
