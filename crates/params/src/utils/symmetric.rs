//! Constants for symmetric block ciphers

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// DES key size in bytes (parity bits included)
pub const DES_KEY_SIZE: usize = 8;

/// DES block size in bytes
pub const DES_BLOCK_SIZE: usize = 8;

/// Three-key 3DES (EDE3) key size in bytes
pub const TDES_KEY_SIZE: usize = 24;

/// Smallest key the Blowfish key schedule is handed directly
pub const BLOWFISH_MIN_KEY_SIZE: usize = 4;

/// Largest Blowfish key (448 bits)
pub const BLOWFISH_MAX_KEY_SIZE: usize = 56;

/// Blowfish block size in bytes
pub const BLOWFISH_BLOCK_SIZE: usize = 8;

/// Smallest CAST5 key (40 bits)
pub const CAST5_MIN_KEY_SIZE: usize = 5;

/// Largest CAST5 key (128 bits)
pub const CAST5_MAX_KEY_SIZE: usize = 16;

/// CAST5 block size in bytes
pub const CAST5_BLOCK_SIZE: usize = 8;

/// Largest block size of any supported cipher
pub const MAX_BLOCK_SIZE: usize = AES_BLOCK_SIZE;

/// Largest normalized key of any supported cipher
pub const MAX_KEY_SIZE: usize = BLOWFISH_MAX_KEY_SIZE;
