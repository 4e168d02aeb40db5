//! Stash submission and retrieval boundary
//!
//! Composes the authenticated container and the transport armor into the
//! operations the submission and retrieval endpoints are built on. The
//! submission side packages user content into a `Submission` payload; the
//! retrieval side exchanges a password for decrypted content through a
//! single authentication gate.
//!
//! Two deliberate, documented behaviors live here rather than in the
//! container: empty content is rejected before any cryptographic work, and
//! an empty password skips encryption entirely (the content is stored as
//! plain text with `protected = false`).

use serde::{Deserialize, Serialize};

use crate::armor;
use crate::container;
use crate::error::{ErrorCategory, ErrorKind, Result, StashError};

/// The submission payload persisted by the storage collaborator.
///
/// `content` is either plain text or an armored packed blob, as indicated
/// by `protected`. This is the JSON body of the upload request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub content: String,
    pub protected: bool,
}

/// Encrypt plaintext under a password, returning the armored packed blob.
///
/// This is the full protection contract: fresh salt and nonce, key
/// derivation, AES-256-GCM, packing, base64. The blob is self-describing;
/// only the password is needed to reverse it.
pub fn protect(plaintext: &[u8], password: &str) -> Result<String> {
    let packed = container::encrypt(password.as_bytes(), plaintext)?;
    Ok(armor::wrap(&packed))
}

/// Decrypt an armored packed blob with a password, returning plaintext bytes.
///
/// Armor and length validation run before any key derivation; tag-check
/// failure surfaces as the single generic authentication error.
pub fn reveal(blob: &str, password: &str) -> Result<Vec<u8>> {
    let packed = armor::unwrap(blob)?;
    container::decrypt(password.as_bytes(), &packed)
}

/// Build the submission payload for user content and an optional password.
///
/// Empty content is rejected up front. An empty password means the user
/// chose no protection: the content goes out verbatim with
/// `protected = false` and no key derivation occurs.
pub fn seal_submission(content: &str, password: &str) -> Result<Submission> {
    if content.is_empty() {
        return Err(StashError::with_kind(
            ErrorCategory::User,
            ErrorKind::EmptyContent,
            "content cannot be empty",
        ));
    }

    if password.is_empty() {
        return Ok(Submission {
            content: content.to_owned(),
            protected: false,
        });
    }

    Ok(Submission {
        content: protect(content.as_bytes(), password)?,
        protected: true,
    })
}

/// The retrieval authentication gate.
///
/// When the record is unprotected the stored content is returned verbatim
/// and no cryptographic path runs. When it is protected, decryption is the
/// sole authentication check: there is no separate credential comparison,
/// so a wrong password and a tampered blob are indistinguishable failures.
pub fn open_record(content: &str, protected: bool, password: &str) -> Result<String> {
    if !protected {
        return Ok(content.to_owned());
    }

    let plaintext = reveal(content, password)?;
    String::from_utf8(plaintext).map_err(|e| {
        StashError::with_kind_and_source(
            ErrorCategory::Internal,
            ErrorKind::MalformedContent,
            "decrypted content is not valid UTF-8",
            e,
        )
    })
}
