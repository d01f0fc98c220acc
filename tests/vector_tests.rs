// tests/vector_tests.rs
//! Known-answer vectors pinning the derivation and the wire format
//!
//! If any of these break, previously stored records stop verifying.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use pbkdf2_keeper::{derive, Digest, EncryptedPassword, PasswordHasher};

#[cfg(feature = "logging")]
use tracing::info;

fn init_tracing() {
    #[cfg(feature = "logging")]
    {
        static INIT: std::sync::Once = std::sync::Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_test_writer()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .try_init();
        });
    }
}

// RFC 7914 §11: PBKDF2-HMAC-SHA256 (P="passwd", S="salt", c=1, dkLen=64)
#[test]
fn pbkdf2_sha256_rfc7914_vector() {
    let expected = hex::decode(
        "55ac046e56e3089fec1691c22544b605f94185216dde0465e68b9d57c20dacbc\
         49ca9cccf179b645991664b39d77ef317c71b845b1e30bd509112041d3a19783",
    )
    .unwrap();
    let out = derive(b"passwd", b"salt", 1, 64, Digest::Sha256).unwrap();
    assert_eq!(out, expected);
}

// Widely published PBKDF2-HMAC-SHA512 vector (P="password", S="salt", c=1, dkLen=64)
#[test]
fn pbkdf2_sha512_single_iteration_vector() {
    let expected = hex::decode(
        "867f70cf1ade02cff3752599a3a53dc4af34c7a669815ae5d513554e1c8cf252\
         c02d470a285a0501bad999bfe943c08f050235d7d68b1da55e63f73b60a57fde",
    )
    .unwrap();
    let out = derive(b"password", b"salt", 1, 64, Digest::Sha512).unwrap();
    assert_eq!(out, expected);
}

// A record assembled by hand — standing in for a row written by an old
// deployment — must verify through the normal check path.
#[test]
fn handcrafted_record_verifies() {
    init_tracing();

    #[cfg(feature = "logging")]
    info!("Starting handcrafted-record verification");

    let salt = "ZPcqHKdEq1b5";
    let raw = derive(b"supersecret", salt.as_bytes(), 2_000, 24, Digest::Sha512).unwrap();
    let record = EncryptedPassword {
        salt: salt.to_string(),
        derived_key: STANDARD.encode(&raw),
        key_length: 24,
        iterations: 2_000,
    };

    // Verifier config (defaults) disagrees with the record on every
    // parameter; the record's own values must win.
    let hasher = PasswordHasher::default();
    assert!(hasher.check_sync("supersecret", &record.serialize()).unwrap());
    assert!(!hasher.check_sync("supersecreT", &record.serialize()).unwrap());
}
