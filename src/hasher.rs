// src/hasher.rs
//! The public-facing password hasher — encrypt and check
//!
//! Holds an immutable configuration for NEW encryptions. Verification
//! always re-derives with the stored record's own salt, iterations and
//! key length, so records written under older settings keep working
//! after a configuration upgrade.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::consts::{DEFAULT_ITERATIONS, DEFAULT_KEY_LENGTH, DEFAULT_SALT_LENGTH};
use crate::error::KeeperError;
use crate::kdf::{self, Digest};
use crate::record::EncryptedPassword;
use crate::uid::uid;

#[cfg(feature = "logging")]
use tracing::debug;

pub type Result<T> = std::result::Result<T, KeeperError>;

/// KDF parameters applied to new encryptions.
///
/// No hidden globals: unspecified fields come from [`Default`], which
/// mirrors the crate's long-standing stored-record base (10_000 iterations,
/// 12-char salt, 30-byte key, SHA-512).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HasherConfig {
    pub iterations: u32,
    pub salt_length: usize,
    pub key_length: usize,
    pub digest: Digest,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            salt_length: DEFAULT_SALT_LENGTH,
            key_length: DEFAULT_KEY_LENGTH,
            digest: Digest::default(),
        }
    }
}

/// Salted PBKDF2 password hasher.
///
/// Cheap to clone; holds only the immutable configuration. Concurrent
/// encrypt/check calls on one instance share nothing mutable and need no
/// coordination.
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher {
    config: HasherConfig,
}

impl PasswordHasher {
    pub fn new(config: HasherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HasherConfig {
        &self.config
    }

    /// Encrypt a password on the calling thread.
    ///
    /// Generates a fresh salt, derives a key under the current
    /// configuration and returns the serialized self-describing record.
    /// Consumes OS entropy; two calls with the same password never yield
    /// the same record.
    ///
    /// # Errors
    ///
    /// [`KeeperError::Entropy`] if the random source fails,
    /// [`KeeperError::Kdf`] if the configuration is unusable. Never
    /// retried internally.
    pub fn encrypt_sync(&self, password: &str) -> Result<String> {
        let salt = uid(self.config.salt_length)?;
        let raw = Zeroizing::new(kdf::derive(
            password.as_bytes(),
            salt.as_bytes(),
            self.config.iterations,
            self.config.key_length,
            self.config.digest,
        )?);

        #[cfg(feature = "logging")]
        debug!(
            iterations = self.config.iterations,
            key_length = self.config.key_length,
            "derived key for new record"
        );

        let record = EncryptedPassword {
            salt,
            derived_key: STANDARD.encode(raw.as_slice()),
            key_length: self.config.key_length,
            iterations: self.config.iterations,
        };
        Ok(record.serialize())
    }

    /// Non-blocking form of [`encrypt_sync`](Self::encrypt_sync).
    ///
    /// The derivation is CPU-bound and deliberately slow, so it runs on the
    /// blocking pool; the caller's task is free meanwhile. No cancellation:
    /// an in-flight derivation runs to completion.
    pub async fn encrypt(&self, password: impl Into<String>) -> Result<String> {
        let hasher = self.clone();
        let password = password.into();
        tokio::task::spawn_blocking(move || hasher.encrypt_sync(&password)).await?
    }

    /// Verify a password against a stored record, on the calling thread.
    ///
    /// Re-derives with the RECORD's salt, iterations and key length — never
    /// this hasher's configuration — then compares in constant time. A wrong
    /// password is a normal `Ok(false)`.
    ///
    /// # Errors
    ///
    /// [`KeeperError::MalformedRecord`] when the decoded record has an empty
    /// salt or derived key, or a zero iteration count or key length —
    /// corrupt data, kept distinct from a mismatch.
    pub fn check_sync(&self, password: &str, encoded: &str) -> Result<bool> {
        let record = EncryptedPassword::deserialize(encoded);
        validate_record(&record)?;

        let raw = Zeroizing::new(kdf::derive(
            password.as_bytes(),
            record.salt.as_bytes(),
            record.iterations,
            record.key_length,
            self.config.digest,
        )?);

        #[cfg(feature = "logging")]
        debug!(iterations = record.iterations, "re-derived key for check");

        // Constant-time on the decoded bytes; if the stored field is not
        // valid base64 the encoded forms are compared constant-time instead,
        // so there is no early-exit path in either case.
        let matched = match STANDARD.decode(&record.derived_key) {
            Ok(stored) => raw.ct_eq(&stored).into(),
            Err(_) => STANDARD
                .encode(raw.as_slice())
                .as_bytes()
                .ct_eq(record.derived_key.as_bytes())
                .into(),
        };
        Ok(matched)
    }

    /// Non-blocking form of [`check_sync`](Self::check_sync).
    pub async fn check(
        &self,
        password: impl Into<String>,
        encoded: impl Into<String>,
    ) -> Result<bool> {
        let hasher = self.clone();
        let password = password.into();
        let encoded = encoded.into();
        tokio::task::spawn_blocking(move || hasher.check_sync(&password, &encoded)).await?
    }
}

fn validate_record(record: &EncryptedPassword) -> Result<()> {
    if record.salt.is_empty() {
        return Err(KeeperError::MalformedRecord("empty salt".into()));
    }
    if record.derived_key.is_empty() {
        return Err(KeeperError::MalformedRecord("empty derived key".into()));
    }
    if record.key_length == 0 {
        return Err(KeeperError::MalformedRecord(
            "missing or zero derived-key length".into(),
        ));
    }
    if record.iterations == 0 {
        return Err(KeeperError::MalformedRecord(
            "missing or zero iteration count".into(),
        ));
    }
    Ok(())
}
