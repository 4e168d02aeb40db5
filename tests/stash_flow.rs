//! End-to-end protection flow tests
//!
//! Exercises the full submission/retrieval contract through the public API:
//! round-trips, rejection behavior, and the exact wire layout.

use base64::{Engine, engine::general_purpose::STANDARD};

use stash::container::{MIN_PACKED_LEN, NONCE_LEN, TAG_LEN};
use stash::error::ErrorKind;
use stash::kdf::SALT_LEN;
use stash::stash::{open_record, protect, reveal, seal_submission};
use stash::{container, passgen};

#[test]
fn test_roundtrip_hello_world() {
    // Concrete scenario: "hello world" under "correct-horse".
    let blob = protect(b"hello world", "correct-horse").unwrap();
    let plaintext = reveal(&blob, "correct-horse").unwrap();
    assert_eq!(String::from_utf8(plaintext).unwrap(), "hello world");
}

#[test]
fn test_empty_password_skips_encryption() {
    // Concrete scenario: empty password means the content goes out
    // unchanged with protected=false and no key derivation at all.
    let submission = seal_submission("no secrets", "").unwrap();
    assert!(!submission.protected);
    assert_eq!(submission.content, "no secrets");
}

#[test]
fn test_generated_password_off_by_one_fails() {
    // Concrete scenario: a 9-character generated password encrypts fine,
    // and an off-by-one-character guess fails authentication.
    let password = passgen::generate(9);
    let blob = protect(b"guarded", &password).unwrap();

    let mut wrong = password.clone();
    let last = wrong.pop().unwrap();
    wrong.push(if last == 'A' { 'B' } else { 'A' });
    assert_ne!(password, wrong);

    let err = reveal(&blob, &wrong).expect_err("expected authentication failure");
    assert_eq!(err.kind, Some(ErrorKind::AuthenticationFailed));

    let plaintext = reveal(&blob, &password).unwrap();
    assert_eq!(&plaintext[..], b"guarded");
}

#[test]
fn test_encryption_is_not_deterministic() {
    let blob1 = protect(b"same input", "same password").unwrap();
    let blob2 = protect(b"same input", "same password").unwrap();
    assert_ne!(blob1, blob2);
}

#[test]
fn test_every_byte_position_is_authenticated() {
    let blob = protect(b"tamper target", "pw").unwrap();
    let packed = STANDARD.decode(&blob).unwrap();

    for index in 0..packed.len() {
        let mut tampered = packed.clone();
        tampered[index] ^= 0x80;
        let reencoded = STANDARD.encode(&tampered);
        let err = reveal(&reencoded, "pw")
            .expect_err(&format!("byte {} accepted after tampering", index));
        assert_eq!(err.kind, Some(ErrorKind::AuthenticationFailed));
    }
}

#[test]
fn test_format_rejection_before_decryption() {
    // Invalid base64 is a format error.
    let err = reveal("!!! not base64 !!!", "pw").expect_err("expected armor error");
    assert_eq!(err.kind, Some(ErrorKind::ArmorDecode));

    // A decoded blob below salt+nonce+tag is a format error, not an
    // attempted decryption.
    let short = STANDARD.encode([0u8; MIN_PACKED_LEN - 1]);
    let err = reveal(&short, "pw").expect_err("expected truncation error");
    assert_eq!(err.kind, Some(ErrorKind::TruncatedBlob));

    // Exactly the minimum length reaches the tag check and fails there.
    let minimum = STANDARD.encode([0u8; MIN_PACKED_LEN]);
    let err = reveal(&minimum, "pw").expect_err("expected authentication failure");
    assert_eq!(err.kind, Some(ErrorKind::AuthenticationFailed));
}

#[test]
fn test_wire_layout() {
    // The blob decodes to salt(16) + nonce(12) + ciphertext+tag, with the
    // pinned parameters appearing verbatim at their fixed offsets.
    let salt = [0x11u8; SALT_LEN];
    let nonce = [0x22u8; NONCE_LEN];
    let packed = container::encrypt_with_params(b"pw", b"abc", &salt, &nonce).unwrap();

    assert_eq!(packed.len(), SALT_LEN + NONCE_LEN + 3 + TAG_LEN);
    assert_eq!(&packed[..SALT_LEN], &salt);
    assert_eq!(&packed[SALT_LEN..SALT_LEN + NONCE_LEN], &nonce);

    // And the blob-level view is just standard base64 of the same bytes.
    let blob = STANDARD.encode(&packed);
    let plaintext = reveal(&blob, "pw").unwrap();
    assert_eq!(&plaintext[..], b"abc");
}

#[test]
fn test_retrieval_gate() {
    // Protected record: the password gate is the decryption itself.
    let submission = seal_submission("the combination is 12345", "luggage").unwrap();
    assert!(submission.protected);

    let opened = open_record(&submission.content, submission.protected, "luggage").unwrap();
    assert_eq!(opened, "the combination is 12345");

    let err = open_record(&submission.content, submission.protected, "luggag3")
        .expect_err("expected authentication failure");
    assert_eq!(err.kind, Some(ErrorKind::AuthenticationFailed));

    // Unprotected record: content comes back verbatim, crypto untouched.
    let opened = open_record("plain as day", false, "").unwrap();
    assert_eq!(opened, "plain as day");
}

#[test]
fn test_unicode_content_roundtrip() {
    let content = "пароль 密码 🔒 — mixed script content";
    let submission = seal_submission(content, "secret").unwrap();
    let opened = open_record(&submission.content, submission.protected, "secret").unwrap();
    assert_eq!(opened, content);
}
