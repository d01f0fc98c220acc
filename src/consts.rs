// src/consts.rs
//! Shared constants — default security parameters and the wire delimiter

/// Default PBKDF2 iterations for new encryptions
// ~10ms on modern hardware. Raise freely: stored records carry their own
// count, so existing hashes stay verifiable after a bump.
pub const DEFAULT_ITERATIONS: u32 = 10_000;

/// Default salt length in characters
pub const DEFAULT_SALT_LENGTH: usize = 12;

/// Default derived-key length in bytes
pub const DEFAULT_KEY_LENGTH: usize = 30;

/// Field separator for the serialized record
// ':' is outside the base64 alphabet, so the delimiter can never collide
// with an encoded salt or derived key.
pub const RECORD_DELIMITER: &str = "::";
