//! PKCS#7 block padding
//!
//! Padding always adds between 1 and `block_size` bytes, each equal to the
//! number of bytes added. Removal inspects the whole final block in constant
//! time so a failing check does not reveal where the padding went wrong.

use pgcipher_api::{Error, Result};
use subtle::{Choice, ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess};

/// Appends PKCS#7 padding so `buf` becomes a whole number of blocks
///
/// A buffer that is already aligned gains a full block of padding.
pub fn pad(buf: &mut Vec<u8>, block_size: usize) {
    debug_assert!((1..=u8::MAX as usize).contains(&block_size));
    let pad_len = block_size - buf.len() % block_size;
    buf.resize(buf.len() + pad_len, pad_len as u8);
}

/// Returns the length of `buf` without its PKCS#7 padding
///
/// `buf` must be a non-empty whole number of blocks whose final byte `n`
/// lies in `1..=block_size` and whose final `n` bytes all equal `n`.
pub fn unpadded_len(buf: &[u8], block_size: usize) -> Result<usize> {
    if buf.is_empty() || buf.len() % block_size != 0 {
        return Err(Error::InvalidPadding {
            context: "PKCS padding",
        });
    }

    let last_block = &buf[buf.len() - block_size..];
    let pad_len = last_block[block_size - 1];

    let mut valid: Choice = !pad_len.ct_eq(&0) & !pad_len.ct_gt(&(block_size as u8));
    for (i, byte) in last_block.iter().rev().enumerate() {
        let in_padding = (i as u8).ct_lt(&pad_len);
        valid &= !(in_padding & !byte.ct_eq(&pad_len));
    }

    if bool::from(valid) {
        Ok(buf.len() - pad_len as usize)
    } else {
        Err(Error::InvalidPadding {
            context: "PKCS padding",
        })
    }
}
