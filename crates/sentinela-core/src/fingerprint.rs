//! Stable content fingerprints used as cache keys.

/// Hash a sequence of byte slices into a hex blake3 digest.
///
/// Parts are length-prefixed so `["ab", "c"]` and `["a", "bc"]` never collide.
pub fn fingerprint(parts: &[&[u8]]) -> String {
    let mut hasher = blake3::Hasher::new();
    for part in parts {
        hasher.update(&(part.len() as u64).to_le_bytes());
        hasher.update(part);
    }
    hasher.finalize().to_hex().to_string()
}
