//! AES block cipher implementations
//!
//! This module implements the Advanced Encryption Standard (AES) block cipher
//! as specified in FIPS 197, for all three key sizes. pgcrypto picks the key
//! size from the length of the supplied key, so all three variants are
//! reachable from the same `aes` cipher type.
//!
//! ## Constant-Time Guarantees
//!
//! This implementation mitigates timing side-channel attacks by:
//! - Using branchless arithmetic for GF(2^8) operations
//! - Computing the S-box arithmetically instead of with table lookups
//! - Ensuring consistent memory access patterns

use core::sync::atomic::{compiler_fence, Ordering};

use pgcipher_api::{validate, Result};
use pgcipher_common::SecretBuffer;
use pgcipher_params::utils::symmetric::{
    AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE, AES_BLOCK_SIZE,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{BlockCipher, CipherAlgorithm};

/// Round constants for AES key expansion
const RCON: [u32; 11] = [
    0x00000000,0x01000000,0x02000000,0x04000000,0x08000000,
    0x10000000,0x20000000,0x40000000,0x80000000,0x1b000000,0x36000000,
];

/// Multiply two bytes in GF(2⁸) with AES's reduction poly x⁸ + x⁴ + x³ + x + 1
#[inline(always)]
fn gf_mul(a: u8, b: u8) -> u8 {
    let mut p = 0u8;
    let mut a = a;
    let mut b = b;
    for _ in 0..8 {
        // mask = 0xFF if b&1==1 else 0x00
        let mask = (b & 1).wrapping_neg();
        p ^= a & mask;
        let hi = a & 0x80;
        a <<= 1;
        a ^= ((hi != 0) as u8) * 0x1B;
        b >>= 1;
    }
    p
}

/// Raise to the 254th power (b⁻¹ in GF(2⁸)) in constant time
#[inline(always)]
fn gf_inv(x: u8) -> u8 {
    // always do the full exponentiation, even for x==0
    let x2   = gf_mul(x, x);
    let x4   = gf_mul(x2, x2);
    let x8   = gf_mul(x4, x4);
    let x16  = gf_mul(x8, x8);
    let x32  = gf_mul(x16, x16);
    let x64  = gf_mul(x32, x32);
    let x128 = gf_mul(x64, x64);
    let mut y = gf_mul(x128, x64);
    y = gf_mul(y, x32);
    y = gf_mul(y, x16);
    y = gf_mul(y, x8);
    y = gf_mul(y, x4);
    y = gf_mul(y, x2);

    // 0⁻¹ is defined as 0 for the S-box
    let mask = ((x != 0) as u8).wrapping_neg();
    y & mask
}

/// AES forward S-box: inv(x) ⊕ ROTL(inv(x),1–4) ⊕ 0x63
#[inline(always)]
fn sbox(x: u8) -> u8 {
    let i = gf_inv(x);
    i
     ^ i.rotate_left(1)
     ^ i.rotate_left(2)
     ^ i.rotate_left(3)
     ^ i.rotate_left(4)
     ^ 0x63
}

/// AES inverse S-box: undo affine then invert
#[inline(always)]
fn inv_sbox(x: u8) -> u8 {
    let y = x ^ 0x63;
    // A⁻¹ is convolution by t¹ + t³ + t⁶ mod (t⁸+1)
    let u = y.rotate_left(1)
          ^ y.rotate_left(3)
          ^ y.rotate_left(6);
    gf_inv(u)
}

#[inline(always)]
fn sub_word(word: u32) -> u32 {
    let [a, b, c, d] = word.to_be_bytes();
    u32::from_be_bytes([sbox(a), sbox(b), sbox(c), sbox(d)])
}

/// FIPS 197 §5.2 key expansion into `round_keys`
///
/// `round_keys` must hold `16 * (rounds + 1)` bytes and `key` must be 16, 24
/// or 32 bytes long; both are checked by the callers.
fn expand_key(key: &[u8], round_keys: &mut [u8]) {
    let nk = key.len() / 4;
    let total = round_keys.len() / 4;
    let mut words = [0u32; 60];

    for (word, chunk) in words.iter_mut().zip(key.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in nk..total {
        let mut temp = words[i - 1];
        if i % nk == 0 {
            temp = sub_word(temp.rotate_left(8)) ^ RCON[i / nk];
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        words[i] = words[i - nk] ^ temp;
    }

    for (chunk, word) in round_keys.chunks_exact_mut(4).zip(words.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    words.zeroize();
}

fn sub_bytes(state: &mut [u8; 16]) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
    // ensure no reordering around our bit-ops
    compiler_fence(Ordering::SeqCst);
}

fn inv_sub_bytes(state: &mut [u8; 16]) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
    compiler_fence(Ordering::SeqCst);
}

/// Row `r` of the column-major state rotates left by `r`
fn shift_rows(state: &mut [u8; 16]) {
    let temp = *state;
    for c in 0..4 {
        for r in 1..4 {
            state[c * 4 + r] = temp[((c + r) % 4) * 4 + r];
        }
    }
}

fn inv_shift_rows(state: &mut [u8; 16]) {
    let temp = *state;
    for c in 0..4 {
        for r in 1..4 {
            state[((c + r) % 4) * 4 + r] = temp[c * 4 + r];
        }
    }
}

/// Multiply by 2 in GF(2^8)
#[inline(always)]
fn mul2(byte: u8) -> u8 {
    let high = byte >> 7;
    (byte << 1) ^ (high * 0x1B)
}

#[inline(always)]
fn mul9(byte: u8) -> u8 { mul2(mul2(mul2(byte))) ^ byte }
#[inline(always)]
fn mul11(byte: u8) -> u8 { mul2(mul2(mul2(byte))) ^ mul2(byte) ^ byte }
#[inline(always)]
fn mul13(byte: u8) -> u8 { mul2(mul2(mul2(byte))) ^ mul2(mul2(byte)) ^ byte }
#[inline(always)]
fn mul14(byte: u8) -> u8 { mul2(mul2(mul2(byte))) ^ mul2(mul2(byte)) ^ mul2(byte) }

fn mix_columns(state: &mut [u8; 16]) {
    for column in state.chunks_exact_mut(4) {
        let [s0, s1, s2, s3] = [column[0], column[1], column[2], column[3]];
        column[0] = mul2(s0) ^ mul2(s1) ^ s1 ^ s2 ^ s3;
        column[1] = s0 ^ mul2(s1) ^ mul2(s2) ^ s2 ^ s3;
        column[2] = s0 ^ s1 ^ mul2(s2) ^ mul2(s3) ^ s3;
        column[3] = mul2(s0) ^ s0 ^ s1 ^ s2 ^ mul2(s3);
    }
}

fn inv_mix_columns(state: &mut [u8; 16]) {
    for column in state.chunks_exact_mut(4) {
        let [s0, s1, s2, s3] = [column[0], column[1], column[2], column[3]];
        column[0] = mul14(s0) ^ mul11(s1) ^ mul13(s2) ^ mul9(s3);
        column[1] = mul9(s0) ^ mul14(s1) ^ mul11(s2) ^ mul13(s3);
        column[2] = mul13(s0) ^ mul9(s1) ^ mul14(s2) ^ mul11(s3);
        column[3] = mul11(s0) ^ mul13(s1) ^ mul9(s2) ^ mul14(s3);
    }
}

#[inline(always)]
fn add_round_key(state: &mut [u8; 16], round_key: &[u8]) {
    for (s, k) in state.iter_mut().zip(round_key) {
        *s ^= k;
    }
}

/// Runs the forward cipher over one block with an expanded key schedule
fn encrypt_rounds(round_keys: &[u8], block: &mut [u8]) -> Result<()> {
    validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;
    let rounds = round_keys.len() / 16 - 1;

    let mut state = [0u8; 16];
    state.copy_from_slice(block);

    add_round_key(&mut state, &round_keys[..16]);
    for round in 1..rounds {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, &round_keys[round * 16..(round + 1) * 16]);
    }
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &round_keys[rounds * 16..]);

    block.copy_from_slice(&state);
    state.zeroize();
    Ok(())
}

/// Runs the inverse cipher over one block with an expanded key schedule
fn decrypt_rounds(round_keys: &[u8], block: &mut [u8]) -> Result<()> {
    validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;
    let rounds = round_keys.len() / 16 - 1;

    let mut state = [0u8; 16];
    state.copy_from_slice(block);

    add_round_key(&mut state, &round_keys[rounds * 16..]);
    for round in (1..rounds).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, &round_keys[round * 16..(round + 1) * 16]);
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, &round_keys[..16]);

    block.copy_from_slice(&state);
    state.zeroize();
    Ok(())
}

/// Type-level constants for AES-128
pub enum Aes128Algorithm {}

impl CipherAlgorithm for Aes128Algorithm {
    const KEY_SIZE: usize = AES128_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-128"
    }
}

/// Type-level constants for AES-192
pub enum Aes192Algorithm {}

impl CipherAlgorithm for Aes192Algorithm {
    const KEY_SIZE: usize = AES192_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-192"
    }
}

/// Type-level constants for AES-256
pub enum Aes256Algorithm {}

impl CipherAlgorithm for Aes256Algorithm {
    const KEY_SIZE: usize = AES256_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-256"
    }
}

/// AES-128 block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes128 {
    round_keys: SecretBuffer<176>, // 11 rounds × 16 bytes
}

/// AES-192 block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes192 {
    round_keys: SecretBuffer<208>, // 13 rounds × 16 bytes
}

/// AES-256 block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes256 {
    round_keys: SecretBuffer<240>, // 15 rounds × 16 bytes
}

impl BlockCipher for Aes128 {
    type Algorithm = Aes128Algorithm;

    fn new(key: &[u8]) -> Result<Self> {
        validate::length("AES-128 key", key.len(), AES128_KEY_SIZE)?;
        let mut round_keys = SecretBuffer::zeroed();
        expand_key(key, round_keys.as_mut_slice());
        Ok(Self { round_keys })
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        encrypt_rounds(self.round_keys.as_slice(), block)
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        decrypt_rounds(self.round_keys.as_slice(), block)
    }
}

impl BlockCipher for Aes192 {
    type Algorithm = Aes192Algorithm;

    fn new(key: &[u8]) -> Result<Self> {
        validate::length("AES-192 key", key.len(), AES192_KEY_SIZE)?;
        let mut round_keys = SecretBuffer::zeroed();
        expand_key(key, round_keys.as_mut_slice());
        Ok(Self { round_keys })
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        encrypt_rounds(self.round_keys.as_slice(), block)
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        decrypt_rounds(self.round_keys.as_slice(), block)
    }
}

impl BlockCipher for Aes256 {
    type Algorithm = Aes256Algorithm;

    fn new(key: &[u8]) -> Result<Self> {
        validate::length("AES-256 key", key.len(), AES256_KEY_SIZE)?;
        let mut round_keys = SecretBuffer::zeroed();
        expand_key(key, round_keys.as_mut_slice());
        Ok(Self { round_keys })
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        encrypt_rounds(self.round_keys.as_slice(), block)
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        decrypt_rounds(self.round_keys.as_slice(), block)
    }
}
