//! Admin password digests.
//!
//! The configuration only ever holds the hex SHA-256 digest of the password.

use sha2::{Digest, Sha256};

/// Hex SHA-256 digest of `password`.
#[must_use]
pub fn hash_password(password: &str) -> String {
    Sha256::digest(password.as_bytes())
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

/// Check `password` against a stored hex digest without short-circuiting on
/// the first differing byte.
#[must_use]
pub fn verify_password(password: &str, expected_hash: &str) -> bool {
    constant_time_eq(
        hash_password(password).as_bytes(),
        expected_hash.to_ascii_lowercase().as_bytes(),
    )
}

pub(crate) fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0_u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn known_digest() {
        assert_eq!(
            hash_password("password"),
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
    }

    #[test]
    fn verify_accepts_upper_case_digest() {
        let digest = hash_password("correct horse").to_uppercase();
        assert!(verify_password("correct horse", &digest));
        assert!(!verify_password("wrong horse", &digest));
    }

    #[test]
    fn length_mismatch_is_rejected() {
        assert!(!constant_time_eq(b"abc", b"abcd"));
        assert!(constant_time_eq(b"", b""));
    }
}
