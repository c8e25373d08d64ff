//! Checksum validation for migrations
//!
//! SHA256 of the migration SQL, stored alongside each applied migration

use sha2::{Digest, Sha256};

/// Compute SHA256 checksum of a string as lowercase hex
pub fn compute_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
