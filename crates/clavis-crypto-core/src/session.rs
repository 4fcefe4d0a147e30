//! Bearer token hashing for session storage.
//!
//! Session tokens are hashed before they are persisted, so a stolen storage
//! row cannot be replayed directly as a bearer credential.
//!
//! This is a plain unsalted SHA-256, *not* the slow KDF from [`crate::kdf`]:
//! session tokens are 128 bits of CSPRNG output, so there is no low-entropy
//! secret for an offline dictionary attack to recover. The threat model here
//! is a stolen row, and a single fast hash already defeats it. Routing these
//! through the slow KDF would add tens of milliseconds to every request
//! without adding security. Do not "fix" this asymmetry.

use crate::digest::sha256_hex;

/// Hash a bearer session token for persistence.
///
/// Returns the 64-character lowercase hex SHA-256 of the token. Lookup is by
/// recomputing the hash of a presented token and comparing against the
/// stored value.
#[must_use]
pub fn hash_session_token(token: &str) -> String {
    sha256_hex(token)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
