use sha2::{Digest, Sha256};

/// SHA-256 of a template body (or raw file bytes) as lowercase hex
pub fn sha256_hex(content: impl AsRef<[u8]>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_ref());
    format!("{:x}", hasher.finalize())
}

/// First 8 hex chars of the digest, used in export filenames
pub fn sha256_short(content: impl AsRef<[u8]>) -> String {
    let mut full = sha256_hex(content);
    full.truncate(8);
    full
}
