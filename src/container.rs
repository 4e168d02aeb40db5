//! Authenticated encryption container
//!
//! This module implements the password-based authenticated container:
//! - PBKDF2-HMAC-SHA-256 for key derivation (see `kdf`)
//! - AES-256-GCM for authenticated encryption, no additional authenticated data
//!
//! The packed binary format is:
//! - salt: 16 bytes
//! - nonce: 12 bytes
//! - ciphertext: variable length (includes 16-byte GCM tag)
//!
//! The layout is fixed-offset and self-describing: nothing beyond the
//! password is needed to decrypt. The GCM tag is the sole authenticity
//! signal; a wrong password and a tampered blob fail identically.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::RngCore;
use rand::rngs::OsRng;

use crate::error::{ErrorCategory, ErrorKind, Result, StashError};
use crate::kdf::{self, SALT_LEN};

/// Length of nonce (GCM IV) in bytes
pub const NONCE_LEN: usize = 12;

/// Length of the GCM authentication tag in bytes
pub const TAG_LEN: usize = 16;

/// Minimum length of a packed blob: salt + nonce + tag (empty plaintext)
pub const MIN_PACKED_LEN: usize = SALT_LEN + NONCE_LEN + TAG_LEN;

/// Encrypt plaintext with a password using random salt and nonce
///
/// Both salt and nonce are drawn fresh from the OS entropy source on every
/// call, so two encryptions of the same plaintext under the same password
/// produce distinct output. The result is not a pure function of its
/// arguments and must not be treated as one (e.g. for deduplication).
///
/// Returns the packed format: salt(16) + nonce(12) + ciphertext+tag(variable)
pub fn encrypt(password: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);

    let mut nonce = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce);

    encrypt_with_params(password, plaintext, &salt, &nonce)
}

/// Encrypt plaintext with a password using provided salt and nonce
///
/// This function is ONLY for testing purposes to generate deterministic output.
/// NEVER use this in production - always use `encrypt()` which generates random salt/nonce.
pub fn encrypt_with_params(
    password: &[u8],
    plaintext: &[u8],
    salt: &[u8; SALT_LEN],
    nonce: &[u8; NONCE_LEN],
) -> Result<Vec<u8>> {
    let key = kdf::derive_key(password, salt);

    let cipher = Aes256Gcm::new_from_slice(&*key).map_err(|e| {
        StashError::with_kind_and_source(
            ErrorCategory::Internal,
            ErrorKind::InvalidParameterLength,
            "derived key has unexpected length",
            e,
        )
    })?;

    let ciphertext = cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|_| {
            StashError::with_kind(
                ErrorCategory::Internal,
                ErrorKind::InvalidParameterLength,
                "encryption failed",
            )
        })?;

    let mut packed = Vec::with_capacity(SALT_LEN + NONCE_LEN + ciphertext.len());
    packed.extend_from_slice(salt);
    packed.extend_from_slice(nonce);
    packed.extend_from_slice(&ciphertext);

    Ok(packed)
}

/// Decrypt a packed blob with a password
///
/// Length validation happens before any key derivation: a blob shorter than
/// salt + nonce + tag is a format error, not a decryption attempt. A failed
/// tag check surfaces as a single generic authentication error that never
/// reveals whether the password was wrong or the blob was tampered with.
pub fn decrypt(password: &[u8], packed: &[u8]) -> Result<Vec<u8>> {
    if packed.len() < MIN_PACKED_LEN {
        return Err(StashError::with_kind(
            ErrorCategory::User,
            ErrorKind::TruncatedBlob,
            "blob too short to contain salt, nonce and tag; likely truncated",
        ));
    }

    let salt: [u8; SALT_LEN] = packed[..SALT_LEN].try_into().map_err(|_| {
        StashError::with_kind(
            ErrorCategory::Internal,
            ErrorKind::InvalidParameterLength,
            "failed to read salt",
        )
    })?;
    let nonce: [u8; NONCE_LEN] = packed[SALT_LEN..SALT_LEN + NONCE_LEN]
        .try_into()
        .map_err(|_| {
            StashError::with_kind(
                ErrorCategory::Internal,
                ErrorKind::InvalidParameterLength,
                "failed to read nonce",
            )
        })?;
    let ciphertext = &packed[SALT_LEN + NONCE_LEN..];

    let key = kdf::derive_key(password, &salt);
    let cipher = Aes256Gcm::new_from_slice(&*key).map_err(|e| {
        StashError::with_kind_and_source(
            ErrorCategory::Internal,
            ErrorKind::InvalidParameterLength,
            "derived key has unexpected length",
            e,
        )
    })?;

    let plaintext = cipher
        .decrypt(Nonce::from_slice(&nonce), ciphertext)
        .map_err(|_| {
            StashError::with_kind(
                ErrorCategory::User,
                ErrorKind::AuthenticationFailed,
                "incorrect password or corrupted content",
            )
        })?;

    Ok(plaintext)
}
