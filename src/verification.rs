//! Deterministic verification codes printed in the certificate footer.

use sha2::{Digest, Sha256};

/// Number of digest bytes kept in a verification code.
pub const VERIFICATION_CODE_BYTES: usize = 10;

/// Returns the hex-encoded prefix of `SHA-256("{name}|{score}")`.
pub fn verification_code(name: &str, score: u32) -> String {
    let digest = Sha256::digest(format!("{name}|{score}").as_bytes());
    hex::encode(&digest[..VERIFICATION_CODE_BYTES])
}
