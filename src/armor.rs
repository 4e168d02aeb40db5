//! Transport armoring for packed blobs
//!
//! Encodes the packed binary container as standard base64 (padded, not
//! URL-safe) so it can travel as a JSON string field and be stored as text.
//! This exact flavor is part of the wire contract: every interoperating
//! client and server must produce and accept it unchanged.

use base64::{Engine, engine::general_purpose::STANDARD};

use crate::error::{ErrorCategory, ErrorKind, Result, StashError};

/// Wrap bytes in armor, returning the armored string
pub fn wrap(body: &[u8]) -> String {
    STANDARD.encode(body)
}

/// Unwrap an armored string, returning the original bytes
///
/// A decoding failure is a format error ("corrupted content"), reported
/// before any decryption is attempted.
pub fn unwrap(armored: &str) -> Result<Vec<u8>> {
    STANDARD.decode(armored).map_err(|e| {
        StashError::with_kind_and_source(
            ErrorCategory::User,
            ErrorKind::ArmorDecode,
            format!("base64 decoding failed: {}", e),
            e,
        )
    })
}
