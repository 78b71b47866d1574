//! Property-based tests for the encrypt/decrypt engine

use pgcipher::{decrypt, encrypt, resolve, Error};
use proptest::prelude::*;

const ALGORITHMS: [&str; 5] = ["aes", "des", "3des", "bf", "cast5"];

/// Every supported algorithm × mode × padding combination
fn cipher_type() -> impl Strategy<Value = String> {
    (
        prop::sample::select(ALGORITHMS.to_vec()),
        prop::sample::select(vec!["ecb", "cbc"]),
        prop::sample::select(vec!["pkcs", "none"]),
    )
        .prop_map(|(algorithm, mode, pad)| format!("{algorithm}-{mode}/pad:{pad}"))
}

/// Plaintext of 0..=4 blocks, block aligned when padding is off
fn message_for(cipher_type: &str) -> impl Strategy<Value = Vec<u8>> {
    let spec = resolve(cipher_type).unwrap();
    let block_size = spec.block_size();
    let padded = spec.padding.is_enabled();
    prop::collection::vec(any::<u8>(), 0..=4 * block_size).prop_map(move |mut v| {
        if !padded {
            v.truncate(v.len() - v.len() % block_size);
        }
        v
    })
}

fn case() -> impl Strategy<Value = (String, Vec<u8>, Vec<u8>, Vec<u8>)> {
    cipher_type().prop_flat_map(|cipher_type| {
        let message = message_for(&cipher_type);
        (
            Just(cipher_type),
            prop::collection::vec(any::<u8>(), 1..=40),
            prop::collection::vec(any::<u8>(), 0..=20),
            message,
        )
    })
}

/// Fixed key sizes as (algorithm, required key size)
const FIXED_KEY_SIZES: [(&str, usize); 5] = [
    ("aes", 16),
    ("aes", 24),
    ("aes", 32),
    ("des", 8),
    ("3des", 24),
];

proptest! {
    #[test]
    fn roundtrip((cipher_type, key, iv, plaintext) in case()) {
        let ciphertext = encrypt(&plaintext, &key, &iv, &cipher_type).unwrap();
        let block_size = resolve(&cipher_type).unwrap().block_size();

        prop_assert_eq!(ciphertext.len() % block_size, 0);
        if cipher_type.ends_with("pkcs") {
            prop_assert!(ciphertext.len() > plaintext.len());
            prop_assert!(ciphertext.len() <= plaintext.len() + block_size);
        } else {
            prop_assert_eq!(ciphertext.len(), plaintext.len());
        }

        let decrypted = decrypt(&ciphertext, &key, &iv, &cipher_type).unwrap();
        prop_assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn deterministic((cipher_type, key, iv, plaintext) in case()) {
        let first = encrypt(&plaintext, &key, &iv, &cipher_type).unwrap();
        let second = encrypt(&plaintext, &key, &iv, &cipher_type).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn short_key_is_zero_padded(
        index in 0..FIXED_KEY_SIZES.len(),
        mode in prop::sample::select(vec!["ecb", "cbc"]),
        seed in any::<u8>(),
        plaintext in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let (algorithm, required) = FIXED_KEY_SIZES[index];
        let cipher_type = format!("{algorithm}-{mode}");
        let short: Vec<u8> = (0..required - 1).map(|i| seed.wrapping_add(i as u8) | 1).collect();
        let mut padded = short.clone();
        padded.push(0);

        prop_assert_eq!(
            encrypt(&plaintext, &short, b"iv", &cipher_type).unwrap(),
            encrypt(&plaintext, &padded, b"iv", &cipher_type).unwrap()
        );
    }

    #[test]
    fn long_key_is_truncated(
        (algorithm, required) in prop::sample::select(vec![
            ("aes", 32usize),
            ("des", 8),
            ("3des", 24),
            ("bf", 56),
            ("cast5", 16),
        ]),
        mode in prop::sample::select(vec!["ecb", "cbc"]),
        key in prop::collection::vec(any::<u8>(), 61),
        plaintext in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let cipher_type = format!("{algorithm}-{mode}");
        let long = &key[..required + 5];
        let truncated = &key[..required];

        prop_assert_eq!(
            encrypt(&plaintext, long, b"iv", &cipher_type).unwrap(),
            encrypt(&plaintext, truncated, b"iv", &cipher_type).unwrap()
        );
    }

    #[test]
    fn long_iv_is_truncated(
        algorithm in prop::sample::select(ALGORITHMS.to_vec()),
        iv in prop::collection::vec(any::<u8>(), 21),
        plaintext in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let block_size = resolve(algorithm).unwrap().block_size();
        prop_assert_eq!(
            encrypt(&plaintext, b"some key", &iv, algorithm).unwrap(),
            encrypt(&plaintext, b"some key", &iv[..block_size], algorithm).unwrap()
        );
    }

    #[test]
    fn invalid_padding_byte_is_rejected(
        algorithm in prop::sample::select(ALGORITHMS.to_vec()),
        key in prop::collection::vec(any::<u8>(), 1..=32),
        bad in prop_oneof![Just(0u8), 17u8..=255],
    ) {
        let block_size = resolve(algorithm).unwrap().block_size();
        let mut block = vec![1u8; block_size];
        block[block_size - 1] = bad;

        let nopad = format!("{algorithm}-ecb/pad:none");
        let ciphertext = encrypt(&block, &key, b"", &nopad).unwrap();
        let result = decrypt(&ciphertext, &key, b"", &format!("{algorithm}-ecb"));
        let is_invalid_padding = matches!(result, Err(Error::InvalidPadding { .. }));
        prop_assert!(is_invalid_padding);
    }

    #[test]
    fn unaligned_plaintext_without_padding_is_rejected(
        algorithm in prop::sample::select(ALGORITHMS.to_vec()),
        len in 0usize..64,
    ) {
        let block_size = resolve(algorithm).unwrap().block_size();
        prop_assume!(len % block_size != 0);

        let cipher_type = format!("{algorithm}/pad:none");
        let result = encrypt(&vec![0u8; len], b"some key", b"", &cipher_type);
        prop_assert!(
            matches!(&result, Err(Error::InvalidInputLength { actual, .. }) if *actual == len),
            "unexpected result: {:?}",
            result
        );
    }
}

#[test]
fn literal_aes_cbc_pkcs_scenario() {
    let plaintext = b"hello world12345";
    let ciphertext = encrypt(plaintext, &[0u8; 16], &[0u8; 16], "aes-cbc/pad:pkcs").unwrap();
    assert_eq!(ciphertext.len(), 32);
    assert_eq!(
        decrypt(&ciphertext, &[0u8; 16], &[0u8; 16], "aes-cbc/pad:pkcs").unwrap(),
        plaintext
    );
}

#[test]
fn literal_aes_ecb_scenario() {
    let key = b"a twenty-four byte key!!";
    assert_eq!(key.len(), 24);
    let plaintext = b"the same plaintext, twice over";

    let first = encrypt(plaintext, key, b"", "aes-ecb").unwrap();
    let second = encrypt(plaintext, key, b"", "aes-ecb").unwrap();
    assert_eq!(first, second);
    assert_eq!(decrypt(&first, key, b"", "aes-ecb").unwrap(), plaintext);
}
