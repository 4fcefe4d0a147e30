//! SHA-256 one-way hashing.
//!
//! This module provides:
//! - [`sha256_hex`] — digest a single string, hex-encoded
//! - [`chained_sha256_hex`] — combine several strings into one
//!   order-sensitive fingerprint
//!
//! Digests are 32 bytes, returned as 64 lowercase hex characters. Stored
//! digests are compared against recomputed ones, so the encoding is part of
//! the storage contract and must not change.

use ring::digest;

/// Digest length in bytes (SHA-256).
pub const DIGEST_LEN: usize = 32;

/// Digest length as lowercase hex characters.
pub const DIGEST_HEX_LEN: usize = 64;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute the SHA-256 digest of a string's UTF-8 bytes, lowercase hex.
///
/// Deterministic and infallible; always returns exactly 64 hex characters.
#[must_use]
pub fn sha256_hex(input: &str) -> String {
    hex::encode(digest::digest(&digest::SHA256, input.as_bytes()))
}

/// Combine multiple strings into a single order-sensitive digest.
///
/// Each part is digested independently, the hex encodings of those digests
/// are concatenated in the given order, and the concatenation is digested
/// again. Swapping two distinct parts changes the result, and no part can
/// influence another's contribution — useful for fingerprinting several
/// independent secret or identifier fields as one value.
///
/// The intermediate concatenation is over hex *text*, not raw digest bytes;
/// previously stored fingerprints depend on this exact construction.
///
/// An empty slice yields the digest of the empty string.
#[must_use]
pub fn chained_sha256_hex(parts: &[&str]) -> String {
    let mut acc = String::with_capacity(parts.len().saturating_mul(DIGEST_HEX_LEN));
    for part in parts {
        acc.push_str(&sha256_hex(part));
    }
    sha256_hex(&acc)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
