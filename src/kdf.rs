// src/kdf.rs
//! PBKDF2-HMAC key derivation — blocking and off-thread forms
//!
//! Derivation is pure and deterministic given its inputs. The async form
//! only moves the work to the blocking pool; concurrent calls have no
//! ordering relationship and cannot be cancelled once started.

use std::fmt;
use std::str::FromStr;

use hmac::Hmac;
use pbkdf2::pbkdf2;
use serde::{Deserialize, Serialize};
use sha2::{Sha256, Sha512};

use crate::error::KeeperError;

/// Digest algorithm used as the PBKDF2 pseudorandom function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Digest {
    Sha256,
    #[default]
    Sha512,
}

impl FromStr for Digest {
    type Err = KeeperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sha256" => Ok(Digest::Sha256),
            "sha512" => Ok(Digest::Sha512),
            other => Err(KeeperError::Kdf(format!("unsupported digest: {other}"))),
        }
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Digest::Sha256 => f.write_str("sha256"),
            Digest::Sha512 => f.write_str("sha512"),
        }
    }
}

/// Derive `key_length` bytes from a password and salt, blocking the caller
/// for the full iterated-hash duration.
///
/// Implements standard PBKDF2 with HMAC over the chosen digest. Identical
/// inputs always produce identical output.
///
/// # Errors
///
/// [`KeeperError::Kdf`] on zero iterations or a zero key length; both are
/// rejected before any hashing runs.
pub fn derive(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    key_length: usize,
    digest: Digest,
) -> Result<Vec<u8>, KeeperError> {
    if iterations == 0 {
        return Err(KeeperError::Kdf("PBKDF2 iterations must be ≥1".into()));
    }
    if key_length == 0 {
        return Err(KeeperError::Kdf("derived-key length must be ≥1".into()));
    }

    let mut out = vec![0u8; key_length];
    match digest {
        Digest::Sha256 => pbkdf2::<Hmac<Sha256>>(password, salt, iterations, &mut out),
        Digest::Sha512 => pbkdf2::<Hmac<Sha512>>(password, salt, iterations, &mut out),
    }
    .map_err(|e| KeeperError::Kdf(format!("PBKDF2 failed: {e}")))?;
    Ok(out)
}

/// Off-thread form of [`derive`]: schedules the computation on the blocking
/// pool and completes without occupying the caller's task.
///
/// Takes owned inputs because the work outlives the caller's borrow.
///
/// # Errors
///
/// Everything [`derive`] returns, plus [`KeeperError::Task`] if the pool
/// task is cancelled or panics.
pub async fn derive_async(
    password: String,
    salt: Vec<u8>,
    iterations: u32,
    key_length: usize,
    digest: Digest,
) -> Result<Vec<u8>, KeeperError> {
    tokio::task::spawn_blocking(move || {
        derive(password.as_bytes(), &salt, iterations, key_length, digest)
    })
    .await?
}
