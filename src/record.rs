// src/record.rs
//! The encrypted-password record and its wire codec
//!
//! The serialized form is a persistence contract: four fields joined by
//! `::` in the fixed order `salt::derivedKey::derivedKeyLength::iterations`.
//! Records written years ago under weaker settings must keep parsing.

use serde::{Deserialize, Serialize};

use crate::consts::RECORD_DELIMITER;

/// One encrypted password, self-describing.
///
/// Carries every parameter needed to re-derive and verify it, so the
/// hasher's configuration can change without invalidating stored records.
/// Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedPassword {
    /// Random text salt, `salt_length` characters at creation time
    pub salt: String,
    /// Base64-encoded derived key
    pub derived_key: String,
    /// Derived-key length in bytes, duplicated for self-description
    pub key_length: usize,
    /// PBKDF2 iteration count used to derive `derived_key`
    pub iterations: u32,
}

impl EncryptedPassword {
    /// Serialize to the `salt::derivedKey::derivedKeyLength::iterations`
    /// wire string.
    pub fn serialize(&self) -> String {
        format!(
            "{salt}{sep}{key}{sep}{len}{sep}{iters}",
            salt = self.salt,
            key = self.derived_key,
            len = self.key_length,
            iters = self.iterations,
            sep = RECORD_DELIMITER,
        )
    }

    /// Parse a wire string back into a record.
    ///
    /// Deliberately permissive: missing fields come back as empty strings
    /// and unparsable numerics as 0. Verification rejects such records with
    /// [`KeeperError::MalformedRecord`](crate::KeeperError::MalformedRecord)
    /// before any key derivation runs, which keeps the corrupt-data /
    /// wrong-password distinction where callers can act on it.
    ///
    /// Round-trip law: `deserialize(&r.serialize()) == r` for every record
    /// produced by this crate.
    pub fn deserialize(encoded: &str) -> Self {
        let mut fields = encoded.split(RECORD_DELIMITER);
        let salt = fields.next().unwrap_or_default().to_string();
        let derived_key = fields.next().unwrap_or_default().to_string();
        let key_length = fields
            .next()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();
        let iterations = fields
            .next()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();

        Self {
            salt,
            derived_key,
            key_length,
            iterations,
        }
    }
}
