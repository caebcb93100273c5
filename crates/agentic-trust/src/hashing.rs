//! Hashing utility — deterministic digests and random identifiers.
//!
//! The engine uses one-way content hashing only: SHA-256 over canonical
//! payloads, hex-encoded. There is no key material anywhere in the crate.

use rand::RngCore;
use sha2::{Digest, Sha256};

/// Compute the SHA-256 digest of a string, hex-encoded (lowercase).
pub fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

/// Generate a random identifier with the given prefix.
///
/// Format: `{prefix}_{base58(16 random bytes)}`, e.g. `trec_4fJ7...`.
/// Randomness comes from the operating system via `rand`.
pub fn random_id(prefix: &str) -> String {
    let mut buf = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut buf);
    format!("{prefix}_{}", bs58::encode(&buf).into_string())
}
