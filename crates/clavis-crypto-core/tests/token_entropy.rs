#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! Statistical sanity checks on CSPRNG token generation.

use std::collections::HashSet;

use clavis_crypto_core::token::{
    generate_email_token, generate_encryption_key, generate_salt, generate_session_token,
    secure_random_hex,
};

/// Sample count for the uniqueness sweep.
const SAMPLES: usize = 10_000;

/// 10,000 16-byte tokens must contain no duplicates. At 128 bits of
/// randomness a collision in this sample size indicates a broken generator,
/// not bad luck.
#[test]
fn session_tokens_never_collide_across_10k_samples() {
    let mut seen = HashSet::with_capacity(SAMPLES);
    for _ in 0..SAMPLES {
        let token = generate_session_token().expect("CSPRNG should be available");
        assert!(seen.insert(token), "duplicate session token generated");
    }
}

/// Every wrapper produces the pinned hex length for its use-site.
#[test]
fn wrappers_produce_pinned_lengths() {
    assert_eq!(
        generate_session_token().expect("CSPRNG should be available").len(),
        32
    );
    assert_eq!(generate_salt().expect("CSPRNG should be available").len(), 32);
    assert_eq!(
        generate_email_token().expect("CSPRNG should be available").len(),
        32
    );
    assert_eq!(
        generate_encryption_key().expect("CSPRNG should be available").len(),
        64
    );
}

/// Rough bit-balance check: across 1,000 32-byte draws, each hex nibble
/// value should appear with frequency near 1/16. A heavily skewed
/// distribution would indicate the generator is not drawing from the OS
/// CSPRNG.
#[test]
fn hex_nibbles_are_roughly_uniform() {
    const DRAWS: usize = 1_000;
    const BYTES_PER_DRAW: usize = 32;
    let mut counts = [0u32; 16];

    for _ in 0..DRAWS {
        let value = secure_random_hex(BYTES_PER_DRAW).expect("CSPRNG should be available");
        for c in value.chars() {
            let nibble = c.to_digit(16).expect("output should be hex") as usize;
            counts[nibble] += 1;
        }
    }

    let total = (DRAWS * BYTES_PER_DRAW * 2) as f64;
    let expected = total / 16.0;
    for (nibble, &count) in counts.iter().enumerate() {
        let deviation = (f64::from(count) - expected).abs() / expected;
        assert!(
            deviation < 0.10,
            "nibble {nibble:x} frequency deviates {:.1}% from uniform",
            deviation * 100.0
        );
    }
}
