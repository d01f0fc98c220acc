// src/uid.rs
//! Cryptographically random text tokens — used for salts
//!
//! Output is standard base64 truncated to the requested length, so tokens
//! are text-safe and can never contain the record delimiter.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::error::KeeperError;

/// Generate a random string of exactly `length` characters.
///
/// Draws `length` bytes from the OS CSPRNG and base64-encodes them; the
/// encoded form is always at least `length` characters before any `=`
/// padding, so truncation yields a full-length, padding-free token.
///
/// # Errors
///
/// [`KeeperError::Entropy`] if the OS random source is unavailable. There
/// is no fallback generator.
pub fn uid(length: usize) -> Result<String, KeeperError> {
    let mut bytes = vec![0u8; length];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| KeeperError::Entropy(e.to_string()))?;

    let mut encoded = STANDARD.encode(&bytes);
    encoded.truncate(length);
    Ok(encoded)
}
