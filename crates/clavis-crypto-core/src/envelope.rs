//! AES-256-GCM authenticated encryption of optional string fields.
//!
//! This module provides:
//! - [`encrypt`] — seal an optional plaintext under a hex-encoded key
//! - [`decrypt`] — open an optional envelope, verifying the tag
//! - [`Envelope`] — nonce + ciphertext + tag container (serializable)
//!
//! Wire format: lowercase hex of `nonce (12 bytes) || ciphertext || tag
//! (16 bytes)`. The envelope is self-contained — decryption needs only the
//! envelope and the key. Previously stored fields depend on this exact
//! layout.
//!
//! Absence maps to absence: `None` and the empty string pass through both
//! operations unchanged, so nullable database fields never grow spurious
//! ciphertexts. This is an explicit branch, not an encoding accident.

use rand::rngs::OsRng;
use rand::RngCore;
use ring::aead;
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::error::CryptoError;

/// AES-256-GCM nonce length in bytes (96 bits).
pub const NONCE_LEN: usize = 12;

/// AES-256-GCM authentication tag length in bytes (128 bits).
pub const TAG_LEN: usize = 16;

/// AES-256-GCM key length in bytes (256 bits).
pub const KEY_LEN: usize = 32;

/// Minimum valid envelope length: nonce + empty ciphertext + tag.
const MIN_ENVELOPE_LEN: usize = NONCE_LEN + TAG_LEN;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Authenticated ciphertext container — nonce + ciphertext + tag.
///
/// Wire format: `nonce (12 bytes) || ciphertext (variable) || tag (16 bytes)`,
/// hex-encoded for storage. The nonce is randomly generated per encryption
/// call and travels with the ciphertext. The tag authenticates the whole
/// envelope — any modification to nonce, ciphertext, or tag makes decryption
/// fail.
#[must_use = "encrypted data must be stored or transmitted"]
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Envelope {
    /// 96-bit random nonce, unique per encryption.
    pub nonce: [u8; NONCE_LEN],
    /// Encrypted data (same length as original plaintext).
    pub ciphertext: Vec<u8>,
    /// 128-bit authentication tag.
    pub tag: [u8; TAG_LEN],
}

impl Envelope {
    /// Serialize to wire format: `nonce || ciphertext || tag`.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let capacity = NONCE_LEN
            .saturating_add(self.ciphertext.len())
            .saturating_add(TAG_LEN);
        let mut out = Vec::with_capacity(capacity);
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.ciphertext);
        out.extend_from_slice(&self.tag);
        out
    }

    /// Deserialize from wire format: `nonce || ciphertext || tag`.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::Envelope` if the input is shorter than 28 bytes
    /// (12-byte nonce + 0-byte ciphertext + 16-byte tag).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() < MIN_ENVELOPE_LEN {
            return Err(CryptoError::Envelope(format!(
                "envelope too short: {} bytes (minimum {MIN_ENVELOPE_LEN})",
                bytes.len()
            )));
        }

        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(&bytes[..NONCE_LEN]);

        // checked_sub cannot fail after the length guard; kept for the
        // workspace `arithmetic_side_effects = "deny"` lint.
        let ct_len = bytes
            .len()
            .checked_sub(MIN_ENVELOPE_LEN)
            .ok_or_else(|| CryptoError::Envelope("envelope length underflow".into()))?;

        let ct_start = NONCE_LEN;
        let ct_end = ct_start.saturating_add(ct_len);
        let ciphertext = bytes[ct_start..ct_end].to_vec();

        let mut tag = [0u8; TAG_LEN];
        tag.copy_from_slice(&bytes[ct_end..]);

        Ok(Self {
            nonce,
            ciphertext,
            tag,
        })
    }

    /// Encode to the lowercase-hex storage form.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Parse from the hex storage form.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::Envelope` if the input is not valid hex or the
    /// decoded bytes are shorter than the 28-byte minimum.
    pub fn from_hex(encoded: &str) -> Result<Self, CryptoError> {
        let bytes = hex::decode(encoded)
            .map_err(|e| CryptoError::Envelope(format!("envelope is not valid hex: {e}")))?;
        Self::from_bytes(&bytes)
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Encrypt an optional string field under a hex-encoded 256-bit key.
///
/// `None` and the empty string are returned unchanged — encrypting "no
/// value" is defined as "no value". Otherwise the UTF-8 bytes are sealed
/// with AES-256-GCM under a fresh 96-bit `OsRng` nonce, and the result is
/// the hex-encoded `nonce || ciphertext || tag` envelope.
///
/// # Errors
///
/// Returns `CryptoError::InvalidKeyMaterial` if `key_hex` is not 64 hex
/// characters, `CryptoError::Randomness` if the CSPRNG cannot supply a
/// nonce, or `CryptoError::Encryption` if the seal operation itself fails.
pub fn encrypt(plaintext: Option<&str>, key_hex: &str) -> Result<Option<String>, CryptoError> {
    let Some(plain) = plaintext else {
        return Ok(None);
    };
    if plain.is_empty() {
        return Ok(Some(String::new()));
    }

    let mut key = decode_key(key_hex)?;
    let sealed = seal(plain.as_bytes(), &key);
    key.zeroize();
    Ok(Some(sealed?.to_hex()))
}

/// Decrypt an optional hex envelope under a hex-encoded 256-bit key.
///
/// `None` and the empty string pass through unchanged, mirroring
/// [`encrypt`]. Otherwise the envelope is parsed by fixed offsets (first 12
/// bytes nonce, last 16 bytes tag) and opened with tag verification.
///
/// # Errors
///
/// Returns `CryptoError::Envelope` if the envelope is malformed (bad hex,
/// shorter than 28 bytes, or non-UTF-8 plaintext),
/// `CryptoError::InvalidKeyMaterial` if the key is malformed, or
/// `CryptoError::Authentication` if the tag does not verify — tampering or
/// wrong key. No plaintext is ever returned on a failed verification.
pub fn decrypt(envelope: Option<&str>, key_hex: &str) -> Result<Option<String>, CryptoError> {
    let Some(encoded) = envelope else {
        return Ok(None);
    };
    if encoded.is_empty() {
        return Ok(Some(String::new()));
    }

    let parsed = Envelope::from_hex(encoded)?;
    let mut key = decode_key(key_hex)?;
    let opened = open(&parsed, &key);
    key.zeroize();

    match String::from_utf8(opened?) {
        Ok(text) => Ok(Some(text)),
        Err(e) => {
            let mut bytes = e.into_bytes();
            bytes.zeroize();
            Err(CryptoError::Envelope(
                "recovered plaintext is not valid UTF-8".into(),
            ))
        }
    }
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

/// Decode and validate a hex-encoded 256-bit key.
fn decode_key(key_hex: &str) -> Result<[u8; KEY_LEN], CryptoError> {
    let mut raw = hex::decode(key_hex)
        .map_err(|e| CryptoError::InvalidKeyMaterial(format!("key is not valid hex: {e}")))?;
    if raw.len() != KEY_LEN {
        let got = raw.len();
        raw.zeroize();
        return Err(CryptoError::InvalidKeyMaterial(format!(
            "invalid key length: {got} bytes (expected {KEY_LEN})"
        )));
    }

    let mut key = [0u8; KEY_LEN];
    key.copy_from_slice(&raw);
    raw.zeroize();
    Ok(key)
}

/// Seal plaintext bytes under the given key with a fresh random nonce.
fn seal(plaintext: &[u8], key: &[u8; KEY_LEN]) -> Result<Envelope, CryptoError> {
    let unbound = aead::UnboundKey::new(&aead::AES_256_GCM, key)
        .map_err(|_| CryptoError::Encryption("failed to create AES-256-GCM key".into()))?;
    let less_safe_key = aead::LessSafeKey::new(unbound);

    // Fresh 96-bit nonce per call. Reuse under the same key breaks both
    // confidentiality and authenticity of GCM.
    let mut nonce_bytes = [0u8; NONCE_LEN];
    OsRng
        .try_fill_bytes(&mut nonce_bytes)
        .map_err(|e| CryptoError::Randomness(format!("CSPRNG nonce draw failed: {e}")))?;
    let nonce = aead::Nonce::assume_unique_for_key(nonce_bytes);

    // Encrypt in place — plaintext buffer becomes ciphertext.
    let mut in_out = plaintext.to_vec();
    let Ok(tag) =
        less_safe_key.seal_in_place_separate_tag(nonce, aead::Aad::empty(), &mut in_out)
    else {
        in_out.zeroize();
        return Err(CryptoError::Encryption(
            "AES-256-GCM encryption failed".into(),
        ));
    };

    let mut tag_bytes = [0u8; TAG_LEN];
    tag_bytes.copy_from_slice(tag.as_ref());

    Ok(Envelope {
        nonce: nonce_bytes,
        ciphertext: in_out,
        tag: tag_bytes,
    })
}

/// Open an envelope, verifying the authentication tag.
fn open(envelope: &Envelope, key: &[u8; KEY_LEN]) -> Result<Vec<u8>, CryptoError> {
    let unbound = aead::UnboundKey::new(&aead::AES_256_GCM, key)
        .map_err(|_| CryptoError::Encryption("failed to create AES-256-GCM key".into()))?;
    let less_safe_key = aead::LessSafeKey::new(unbound);

    let nonce = aead::Nonce::assume_unique_for_key(envelope.nonce);

    // Build ciphertext || tag buffer for open_in_place.
    let mut ct_tag = Vec::with_capacity(envelope.ciphertext.len().saturating_add(TAG_LEN));
    ct_tag.extend_from_slice(&envelope.ciphertext);
    ct_tag.extend_from_slice(&envelope.tag);

    let plaintext = less_safe_key
        .open_in_place(nonce, aead::Aad::empty(), &mut ct_tag)
        .map_err(|_| CryptoError::Authentication)?
        .to_vec();
    ct_tag.zeroize();
    Ok(plaintext)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
