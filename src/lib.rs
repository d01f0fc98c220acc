// src/lib.rs
//! pbkdf2-keeper — salted PBKDF2 password encryption with a
//! self-describing encoded record
//!
//! Features:
//! - PBKDF2-HMAC (SHA-256 / SHA-512) derivation, blocking or off-thread
//! - One-string record format: `salt::derivedKey::derivedKeyLength::iterations`
//! - Records embed their own KDF parameters, so raising the configured
//!   iteration count never invalidates previously stored hashes
//! - Constant-time verification, zeroized intermediate key buffers
//!
//! ```no_run
//! use pbkdf2_keeper::PasswordHasher;
//!
//! let hasher = PasswordHasher::default();
//! let stored = hasher.encrypt_sync("supersecret")?;
//! assert!(hasher.check_sync("supersecret", &stored)?);
//! assert!(!hasher.check_sync("supersecret1", &stored)?);
//! # Ok::<(), pbkdf2_keeper::KeeperError>(())
//! ```

pub mod consts;
pub mod error;
pub mod hasher;
pub mod kdf;
pub mod record;
pub mod uid;

// Re-export everything users need at the crate root
pub use error::KeeperError;
pub use hasher::{HasherConfig, PasswordHasher, Result};
pub use kdf::{derive, derive_async, Digest};
pub use record::EncryptedPassword;
pub use uid::uid;
