//! Cipher type resolution
//!
//! A cipher type string has the form `<algorithm>[-<mode>][/pad:<flag>]`,
//! for example `aes`, `bf-ecb` or `aes-cbc/pad:none`. It is parsed once into
//! a [`CipherSpec`]; nothing downstream looks at the string again.

use core::fmt;

use pgcipher_api::{Error, Result};
use pgcipher_params::utils::symmetric::AES_BLOCK_SIZE;
#[cfg(feature = "legacy")]
use pgcipher_params::utils::symmetric::{BLOWFISH_BLOCK_SIZE, CAST5_BLOCK_SIZE, DES_BLOCK_SIZE};

/// Block cipher families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// AES (Rijndael with a 128-bit block); the key length picks 128/192/256
    Aes,
    /// Single DES
    #[cfg(feature = "legacy")]
    Des,
    /// Triple DES in EDE3 form
    #[cfg(feature = "legacy")]
    TripleDes,
    /// Blowfish
    #[cfg(feature = "legacy")]
    Blowfish,
    /// CAST5 (CAST-128)
    #[cfg(feature = "legacy")]
    Cast5,
}

impl Algorithm {
    /// Looks up a lowercase algorithm token
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "aes" | "rijndael" => Some(Self::Aes),
            #[cfg(feature = "legacy")]
            "des" => Some(Self::Des),
            #[cfg(feature = "legacy")]
            "3des" => Some(Self::TripleDes),
            #[cfg(feature = "legacy")]
            "bf" | "blowfish" => Some(Self::Blowfish),
            #[cfg(feature = "legacy")]
            "cast5" => Some(Self::Cast5),
            _ => None,
        }
    }

    /// Canonical pgcrypto name of the family
    pub fn name(self) -> &'static str {
        match self {
            Self::Aes => "aes",
            #[cfg(feature = "legacy")]
            Self::Des => "des",
            #[cfg(feature = "legacy")]
            Self::TripleDes => "3des",
            #[cfg(feature = "legacy")]
            Self::Blowfish => "bf",
            #[cfg(feature = "legacy")]
            Self::Cast5 => "cast5",
        }
    }

    /// Block size in bytes
    pub fn block_size(self) -> usize {
        match self {
            Self::Aes => AES_BLOCK_SIZE,
            #[cfg(feature = "legacy")]
            Self::Des | Self::TripleDes => DES_BLOCK_SIZE,
            #[cfg(feature = "legacy")]
            Self::Blowfish => BLOWFISH_BLOCK_SIZE,
            #[cfg(feature = "legacy")]
            Self::Cast5 => CAST5_BLOCK_SIZE,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Block cipher mode of operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Electronic codebook: no IV, blocks are independent
    Ecb,
    /// Cipher block chaining with a one-block IV
    #[default]
    Cbc,
}

impl Mode {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "ecb" => Some(Self::Ecb),
            "cbc" => Some(Self::Cbc),
            _ => None,
        }
    }

    /// Lowercase mode name
    pub fn name(self) -> &'static str {
        match self {
            Self::Ecb => "ecb",
            Self::Cbc => "cbc",
        }
    }
}

/// Padding applied on encrypt and stripped on decrypt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Padding {
    /// PKCS#7 style padding (`pad:pkcs`)
    #[default]
    Pkcs,
    /// No padding (`pad:none`); inputs must be block aligned
    Disabled,
}

impl Padding {
    /// Whether padding is applied
    pub fn is_enabled(self) -> bool {
        self == Self::Pkcs
    }
}

/// Resolved cipher type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CipherSpec {
    /// Algorithm family
    pub algorithm: Algorithm,
    /// Mode of operation
    pub mode: Mode,
    /// Padding scheme
    pub padding: Padding,
}

impl CipherSpec {
    /// Creates a descriptor from its parts
    pub const fn new(algorithm: Algorithm, mode: Mode, padding: Padding) -> Self {
        Self {
            algorithm,
            mode,
            padding,
        }
    }

    /// Block size of the algorithm in bytes
    pub fn block_size(&self) -> usize {
        self.algorithm.block_size()
    }
}

impl fmt::Display for CipherSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pad = match self.padding {
            Padding::Pkcs => "pkcs",
            Padding::Disabled => "none",
        };
        write!(f, "{}-{}/pad:{}", self.algorithm, self.mode.name(), pad)
    }
}

impl core::str::FromStr for CipherSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        resolve(s)
    }
}

/// Parses a cipher type string into a [`CipherSpec`]
///
/// Matching is ASCII case-insensitive. The mode defaults to CBC and padding
/// defaults to PKCS.
///
/// # Errors
///
/// - [`Error::InvalidCipherSpec`] if the string does not follow the grammar
///   or the padding flag is not `pkcs` or `none`
/// - [`Error::UnsupportedAlgorithm`] if the algorithm token is unknown
/// - [`Error::UnsupportedMode`] if the mode is neither `ecb` nor `cbc`
pub fn resolve(cipher_type: &str) -> Result<CipherSpec> {
    let lowered = cipher_type.to_ascii_lowercase();

    let (head, option) = match lowered.split_once('/') {
        Some((head, option)) => (head, Some(option)),
        None => (lowered.as_str(), None),
    };
    let (algorithm_token, mode_token) = match head.split_once('-') {
        Some((algorithm, mode)) => (algorithm, Some(mode)),
        None => (head, None),
    };

    if algorithm_token.is_empty()
        || !algorithm_token
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    {
        return Err(Error::cipher_spec(cipher_type, "malformed algorithm name"));
    }
    if let Some(mode) = mode_token {
        if mode.is_empty() || !mode.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(Error::cipher_spec(cipher_type, "malformed mode name"));
        }
    }
    let padding = match option {
        Some(option) => parse_padding(cipher_type, option)?,
        None => Padding::default(),
    };

    let algorithm =
        Algorithm::from_token(algorithm_token).ok_or_else(|| Error::UnsupportedAlgorithm {
            algorithm: algorithm_token.to_string(),
        })?;
    let mode = match mode_token {
        Some(token) => Mode::from_token(token).ok_or_else(|| Error::UnsupportedMode {
            algorithm: algorithm.name(),
            mode: token.to_string(),
        })?,
        None => Mode::default(),
    };

    Ok(CipherSpec::new(algorithm, mode, padding))
}

fn parse_padding(cipher_type: &str, option: &str) -> Result<Padding> {
    match option.split_once(':') {
        Some(("pad", "pkcs")) => Ok(Padding::Pkcs),
        Some(("pad", "none")) => Ok(Padding::Disabled),
        Some(("pad", _)) => Err(Error::cipher_spec(cipher_type, "unknown padding flag")),
        _ => Err(Error::cipher_spec(cipher_type, "unknown cipher option")),
    }
}
