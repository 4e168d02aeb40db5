//! Stash - password-protected text stashing
//!
//! Protects user content with a password before it ever leaves the client:
//! a key is derived from the password with PBKDF2-HMAC-SHA-256 (100,000
//! iterations, fresh 16-byte salt), the content is sealed with AES-256-GCM
//! under a fresh 12-byte nonce, and salt, nonce and ciphertext travel as a
//! single base64 blob. Retrieval exchanges the password for the plaintext
//! through a single GCM tag check; the server never needs anything beyond
//! the blob itself.

#![forbid(unsafe_code)]

pub mod armor;
pub mod container;
pub mod error;
pub mod kdf;
pub mod ops;
pub mod passgen;
pub mod password;
pub mod stash;
