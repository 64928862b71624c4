//! Content hashing for data account payloads.

use sha2::{Digest, Sha256};

/// SHA-256 of a payload, in the 32-byte form carried by update instructions.
pub fn content_hash(bytes: &[u8]) -> [u8; 32] {
    let mut h = Sha256::new();
    h.update(bytes);
    h.finalize().into()
}

/// Lowercase hex of [`content_hash`].
pub fn content_hash_hex(bytes: &[u8]) -> String {
    hex::encode(content_hash(bytes))
}
