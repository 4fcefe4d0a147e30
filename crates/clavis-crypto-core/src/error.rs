//! Cryptographic error types for `clavis-crypto-core`.

use thiserror::Error;

/// Errors produced by cryptographic operations.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Authentication tag verification failed — ciphertext tampered or wrong key.
    ///
    /// The message deliberately does not distinguish the two causes.
    #[error("decryption failed: authentication tag mismatch")]
    Authentication,

    /// Invalid key material (malformed hex, wrong length).
    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(String),

    /// Ciphertext envelope could not be parsed (malformed hex, too short,
    /// or recovered plaintext is not valid UTF-8).
    #[error("envelope error: {0}")]
    Envelope(String),

    /// The OS CSPRNG could not supply bytes. The operation aborts; no
    /// fallback source is ever used.
    #[error("randomness unavailable: {0}")]
    Randomness(String),

    /// Symmetric encryption failure on the seal path (AES-256-GCM).
    #[error("encryption error: {0}")]
    Encryption(String),
}
