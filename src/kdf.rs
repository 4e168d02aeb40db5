//! Password-based key derivation
//!
//! Turns a password and a random salt into a 256-bit symmetric key using
//! PBKDF2-HMAC-SHA-256. The iteration count exists solely to raise the cost
//! of offline guessing against a captured blob; it is a fixed protocol
//! constant shared by every interoperating implementation.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroizing;

/// Length of salt in bytes
pub const SALT_LEN: usize = 16;

/// Length of derived key in bytes (256-bit AES key)
pub const KEY_LEN: usize = 32;

/// PBKDF2 iteration count. Changing this breaks interoperability: a peer
/// with a different count derives a different key and the GCM tag check
/// fails as if the password were wrong.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Derive a 32-byte key from a password and a 16-byte salt.
///
/// Deterministic for identical inputs. The key is returned in `Zeroizing`
/// so it is wiped when dropped; it must never be persisted or logged.
/// The salt length is enforced by the signature: callers that hold a slice
/// must have validated its length before converting.
pub fn derive_key(password: &[u8], salt: &[u8; SALT_LEN]) -> Zeroizing<[u8; KEY_LEN]> {
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2_hmac::<Sha256>(password, salt, PBKDF2_ITERATIONS, &mut *key);
    key
}
