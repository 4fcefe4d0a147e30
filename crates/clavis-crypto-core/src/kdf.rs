//! Slow peppered password hashing.
//!
//! This module provides:
//! - [`slow_hash`] — derive a storable hash from a password and pepper
//! - [`verify_slow_hash`] — constant-time verification against a stored hash
//!
//! The derivation is PBKDF2-HMAC-SHA512 with 10,000 iterations and a 64-byte
//! derived key. These parameters are pinned: hashes already in credential
//! storage were produced with them, and any change would silently lock every
//! existing account out. Cost tuning belongs in a versioned migration, not
//! here.
//!
//! The pepper is a server-held secret used as the salt input. It must be the
//! same value across hash and verify calls for a given stored credential;
//! this crate never stores or manages it.

use std::num::NonZeroU32;

use ring::pbkdf2;
use zeroize::Zeroize;

/// PBKDF2 iteration count. Pinned for compatibility with stored hashes.
pub const PBKDF2_ITERATIONS: u32 = 10_000;

/// Derived key length in bytes (512 bits).
pub const DERIVED_KEY_LEN: usize = 64;

/// Iteration count as `NonZeroU32` for the `ring::pbkdf2` API.
const ROUNDS: NonZeroU32 = match NonZeroU32::new(PBKDF2_ITERATIONS) {
    Some(n) => n,
    None => panic!("iteration count must be non-zero"),
};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Derive a storable password hash, returned as 128 lowercase hex characters.
///
/// Deliberately expensive: tens of milliseconds of CPU per call, to resist
/// offline brute-force against stolen credential rows. The call is blocking
/// and CPU-bound — callers on a cooperative scheduler must offload it to a
/// blocking pool rather than run it on a reactor thread.
///
/// Empty passwords and peppers are accepted; credential policy (minimum
/// length, complexity) is enforced by the caller layer, not here.
#[must_use]
pub fn slow_hash(password: &str, pepper: &str) -> String {
    let mut derived = [0u8; DERIVED_KEY_LEN];
    pbkdf2::derive(
        pbkdf2::PBKDF2_HMAC_SHA512,
        ROUNDS,
        pepper.as_bytes(),
        password.as_bytes(),
        &mut derived,
    );
    let encoded = hex::encode(derived);
    derived.zeroize();
    encoded
}

/// Verify a password against a stored hex-encoded hash.
///
/// Recomputes the derivation and compares in constant time via
/// `ring::pbkdf2::verify`. Returns `false` for a non-matching password, a
/// wrong pepper, or a stored hash that is not valid hex of the expected
/// length — verification never panics or errors.
#[must_use]
pub fn verify_slow_hash(password: &str, pepper: &str, stored_hash: &str) -> bool {
    let Ok(stored) = hex::decode(stored_hash) else {
        return false;
    };
    if stored.len() != DERIVED_KEY_LEN {
        return false;
    }
    pbkdf2::verify(
        pbkdf2::PBKDF2_HMAC_SHA512,
        ROUNDS,
        pepper.as_bytes(),
        password.as_bytes(),
        &stored,
    )
    .is_ok()
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
