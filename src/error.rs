// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeeperError {
    /// The OS entropy source failed.
    ///
    /// Salts feed directly into the KDF, so a degraded random source is
    /// fatal for the call — never papered over with a weaker generator.
    #[error("Entropy source unavailable: {0}")]
    Entropy(String),

    /// Key derivation failed.
    ///
    /// Covers invalid parameters handed to the PBKDF2 primitive:
    /// - zero iterations
    /// - zero derived-key length
    /// - an unrecognized digest name
    #[error("KDF error: {0}")]
    Kdf(String),

    /// A stored record is missing required fields.
    ///
    /// Raised by verification when the decoded record has an empty salt or
    /// derived key, or a zero iteration count or key length. Deliberately
    /// distinct from a `false` match result: this is corrupt caller data,
    /// not a wrong password.
    #[error("Malformed encrypted-password record: {0}")]
    MalformedRecord(String),

    /// A background derivation task was cancelled or panicked.
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
