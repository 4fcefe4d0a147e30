//! CSPRNG token, salt, and key generation.
//!
//! This module provides:
//! - [`secure_random_hex`] — the single randomness primitive: n bytes from
//!   the OS CSPRNG, lowercase hex
//! - [`generate_session_token`] / [`generate_salt`] / [`generate_email_token`]
//!   / [`generate_encryption_key`] — named wrappers per use-site
//!
//! Every random value in CLAVIS flows through [`secure_random_hex`] so there
//! is exactly one audited randomness source. The wrappers exist to keep the
//! semantic distinction (and the pinned byte lengths) at the call sites, even
//! though several of them share a length today.
//!
//! If the CSPRNG cannot supply bytes the operation fails with
//! [`CryptoError::Randomness`]; there is no fallback source.

use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroize;

use crate::error::CryptoError;

/// Session token length in bytes (128 bits).
///
/// 16 bytes of CSPRNG output is sufficient for an unguessable session
/// identifier; collisions are not a practical concern at this size.
pub const SESSION_TOKEN_LEN: usize = 16;

/// Per-credential salt length in bytes.
pub const SALT_LEN: usize = 16;

/// One-time email verification token length in bytes.
pub const EMAIL_TOKEN_LEN: usize = 16;

/// Symmetric encryption key length in bytes (256 bits, AES-256).
pub const ENCRYPTION_KEY_LEN: usize = 32;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Draw `byte_len` bytes from the OS CSPRNG, returned as lowercase hex.
///
/// The output is always exactly `2 * byte_len` characters.
///
/// # Errors
///
/// Returns [`CryptoError::Randomness`] if the OS CSPRNG cannot supply bytes.
/// The failure is propagated rather than masked — no weaker source is ever
/// substituted.
pub fn secure_random_hex(byte_len: usize) -> Result<String, CryptoError> {
    let mut bytes = vec![0u8; byte_len];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| CryptoError::Randomness(format!("CSPRNG fill failed: {e}")))?;
    let encoded = hex::encode(&bytes);
    bytes.zeroize();
    Ok(encoded)
}

/// Generate a new 16-byte session token, hex-encoded.
///
/// # Errors
///
/// Returns [`CryptoError::Randomness`] if the OS CSPRNG is unavailable.
pub fn generate_session_token() -> Result<String, CryptoError> {
    secure_random_hex(SESSION_TOKEN_LEN)
}

/// Generate a new 16-byte per-credential salt, hex-encoded.
///
/// # Errors
///
/// Returns [`CryptoError::Randomness`] if the OS CSPRNG is unavailable.
pub fn generate_salt() -> Result<String, CryptoError> {
    secure_random_hex(SALT_LEN)
}

/// Generate a new 16-byte one-time email verification token, hex-encoded.
///
/// # Errors
///
/// Returns [`CryptoError::Randomness`] if the OS CSPRNG is unavailable.
pub fn generate_email_token() -> Result<String, CryptoError> {
    secure_random_hex(EMAIL_TOKEN_LEN)
}

/// Generate a new 32-byte symmetric encryption key, hex-encoded.
///
/// The key is caller-managed from the moment it is returned; this crate
/// never stores it. Keys are always random — never derived from password
/// material.
///
/// # Errors
///
/// Returns [`CryptoError::Randomness`] if the OS CSPRNG is unavailable.
pub fn generate_encryption_key() -> Result<String, CryptoError> {
    secure_random_hex(ENCRYPTION_KEY_LEN)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_hex_has_exact_requested_length() {
        for byte_len in [0, 1, 12, 16, 32, 64] {
            let value = secure_random_hex(byte_len).expect("CSPRNG should be available");
            assert_eq!(value.len(), byte_len * 2);
        }
    }

    #[test]
    fn random_hex_is_lowercase_hex() {
        let value = secure_random_hex(32).expect("CSPRNG should be available");
        assert!(value
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn consecutive_values_differ() {
        let a = secure_random_hex(16).expect("CSPRNG should be available");
        let b = secure_random_hex(16).expect("CSPRNG should be available");
        assert_ne!(a, b);
    }

    #[test]
    fn session_token_is_32_hex_chars() {
        let token = generate_session_token().expect("CSPRNG should be available");
        assert_eq!(token.len(), SESSION_TOKEN_LEN * 2);
    }

    #[test]
    fn salt_is_32_hex_chars() {
        let salt = generate_salt().expect("CSPRNG should be available");
        assert_eq!(salt.len(), SALT_LEN * 2);
    }

    #[test]
    fn email_token_is_32_hex_chars() {
        let token = generate_email_token().expect("CSPRNG should be available");
        assert_eq!(token.len(), EMAIL_TOKEN_LEN * 2);
    }

    #[test]
    fn encryption_key_is_64_hex_chars() {
        let key = generate_encryption_key().expect("CSPRNG should be available");
        assert_eq!(key.len(), ENCRYPTION_KEY_LEN * 2);
    }
}
