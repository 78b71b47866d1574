//! Validation utilities shared by the cipher primitives

use super::{Error, Result};

/// Validate an exact length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a buffer is a whole number of cipher blocks
///
/// An empty buffer counts as aligned.
#[inline(always)]
pub fn block_aligned(context: &'static str, actual: usize, block_size: usize) -> Result<()> {
    if block_size == 0 || actual % block_size != 0 {
        return Err(Error::InvalidInputLength {
            context,
            block_size,
            actual,
        });
    }
    Ok(())
}
