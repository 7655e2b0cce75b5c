//! Password hashing and verification using bcrypt.

use std::sync::LazyLock;

use anyhow::anyhow;
use bcrypt::{DEFAULT_COST, hash, verify};

use crate::errors::AppError;

/// Hash checked against when the account does not exist, so an unknown email
/// costs the same bcrypt work as a wrong password.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash("alumnet-dummy-password", DEFAULT_COST).ok());

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::internal(anyhow!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal(anyhow!("Failed to verify password: {}", e)))
}

/// Burns one bcrypt verification. The outcome is always ignored.
pub fn verify_dummy(password: &str) {
    if let Some(dummy) = DUMMY_HASH.as_deref() {
        let _ = verify(password, dummy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hashed = hash_password("rahasia123").unwrap();
        assert_ne!(hashed, "rahasia123");
        assert!(hashed.starts_with("$2"));
        assert!(verify_password("rahasia123", &hashed).unwrap());
        assert!(!verify_password("rahasia124", &hashed).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("same-password").unwrap();
        let second = hash_password("same-password").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_against_malformed_hash_is_internal_error() {
        let err = verify_password("password", "not-a-bcrypt-hash").unwrap_err();
        assert_eq!(err.kind, crate::errors::ErrorKind::Internal);
    }

    #[test]
    fn test_verify_dummy_does_not_panic() {
        verify_dummy("anything");
        verify_dummy("");
    }
}
