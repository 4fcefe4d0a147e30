//! `clavis-crypto-core` — Pure cryptographic primitives for CLAVIS.
//!
//! This crate is the audit target: zero network, zero async, zero I/O
//! dependencies. It provides the stateless primitives the rest of CLAVIS
//! uses to protect credentials and session state:
//!
//! - [`digest`] — SHA-256 one-way hashing, single value and ordered chaining
//! - [`kdf`] — slow peppered password hashing (PBKDF2-HMAC-SHA512)
//! - [`token`] — CSPRNG token/salt/key generation, hex-encoded
//! - [`session`] — fast unsalted hashing of bearer tokens before storage
//! - [`envelope`] — AES-256-GCM authenticated encryption of optional fields
//! - [`compare`] — constant-time equality for secrets
//!
//! Every value crossing the API boundary is a lowercase-hex `String` (or an
//! `Option` thereof); callers own all key material and storage. Nothing in
//! this crate caches, pools, or retains state across calls.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod compare;
pub mod digest;
pub mod envelope;
pub mod kdf;
pub mod session;
pub mod token;

pub use compare::secure_equal;
pub use digest::{chained_sha256_hex, sha256_hex, DIGEST_LEN};
pub use envelope::{decrypt, encrypt, Envelope, KEY_LEN, NONCE_LEN, TAG_LEN};
pub use error::CryptoError;
pub use kdf::{slow_hash, verify_slow_hash, DERIVED_KEY_LEN, PBKDF2_ITERATIONS};
pub use session::hash_session_token;
pub use token::{
    generate_email_token, generate_encryption_key, generate_salt, generate_session_token,
    secure_random_hex, EMAIL_TOKEN_LEN, ENCRYPTION_KEY_LEN, SALT_LEN, SESSION_TOKEN_LEN,
};
