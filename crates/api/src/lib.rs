//! Public error types for the pgcipher library
//!
//! Every fallible operation in the workspace returns [`Result`], so callers
//! match on a single closed taxonomy regardless of which layer failed.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;

pub use error::{validate, Error, Result};
