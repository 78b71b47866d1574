//! Test fixtures and benchmarks for the pgcipher library
//!
//! The `vectors` module holds the shared `CIPHER_TEST_CASES` table used by
//! the conformance tests under `tests/` and the criterion benches.

pub mod vectors;

pub use vectors::{CipherTestCase, CIPHER_TEST_CASES};
