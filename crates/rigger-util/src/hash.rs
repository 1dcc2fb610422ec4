use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of a byte slice, returning a lowercase hex string.
pub fn sha256_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}

/// Shorten a hex digest to its first `len` characters.
///
/// Returns the whole digest when it is shorter than `len`.
pub fn short_id(digest: &str, len: usize) -> &str {
    digest.get(..len).unwrap_or(digest)
}
