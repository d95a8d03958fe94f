//! Content hashing for query-cache keys.

/// Hex digest of the input, suitable as a cache-map key.
pub fn hex_digest(bytes: &[u8]) -> String {
    hex::encode(blake3::hash(bytes).as_bytes())
}
