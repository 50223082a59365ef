// File: crates/board-admin/src/hash.rs
// Summary: Salted password digests; per-user random salt, SHA-256, base64 output.

use base64::Engine as _;
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Fresh per-user salt (UUID v4, simple form).
pub fn new_salt() -> String {
    Uuid::new_v4().simple().to_string()
}

/// SHA-256 over `salt || password`, base64 without padding.
/// Deterministic given the stored salt, so login checks can re-derive it.
pub fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    base64::engine::general_purpose::STANDARD_NO_PAD.encode(hasher.finalize())
}
