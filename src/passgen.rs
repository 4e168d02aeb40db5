//! Random password generation
//!
//! Generates passwords drawn uniformly per character from uppercase,
//! lowercase, digits and a fixed symbol set, using the OS entropy source.

use rand::Rng;
use rand::rngs::OsRng;

/// Characters a generated password is drawn from.
const CHARSET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()";

/// Default generated password length
pub const DEFAULT_LENGTH: usize = 9;

/// Generate a password of `length` characters, each drawn uniformly from
/// the charset using a cryptographically secure source.
pub fn generate(length: usize) -> String {
    let mut rng = OsRng;
    (0..length)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}
