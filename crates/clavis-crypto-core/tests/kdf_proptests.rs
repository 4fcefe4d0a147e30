#![allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]

//! Property-based tests for slow password hashing.
//!
//! Case count is kept low: each case pays the full 10,000-iteration PBKDF2
//! cost by design.

use clavis_crypto_core::kdf::{slow_hash, verify_slow_hash};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Hashing is deterministic and always 128 lowercase hex characters.
    #[test]
    fn slow_hash_is_deterministic(password in any::<String>(), pepper in any::<String>()) {
        let a = slow_hash(&password, &pepper);
        let b = slow_hash(&password, &pepper);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.len(), 128);
    }

    /// Changing the pepper changes the hash.
    #[test]
    fn peppers_are_not_interchangeable(
        password in any::<String>(),
        pepper_a in any::<String>(),
        pepper_b in any::<String>(),
    ) {
        prop_assume!(pepper_a != pepper_b);
        prop_assert_ne!(
            slow_hash(&password, &pepper_a),
            slow_hash(&password, &pepper_b)
        );
    }

    /// A hash verifies with the credentials that produced it and fails with
    /// a perturbed password.
    #[test]
    fn verify_matches_only_original_credentials(
        password in ".{0,40}",
        pepper in ".{0,40}",
    ) {
        let hash = slow_hash(&password, &pepper);
        prop_assert!(verify_slow_hash(&password, &pepper, &hash));
        let perturbed = format!("{password}x");
        prop_assert!(!verify_slow_hash(&perturbed, &pepper, &hash));
    }
}
