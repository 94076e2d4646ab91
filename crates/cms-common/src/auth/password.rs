//! Password hashing and verification
//!
//! New hashes are Argon2id with a random salt. Rows written by the older
//! panel hold bcrypt hashes (`$2a$`, `$2b$`, `$2y$`); those still verify and
//! are reported by [`needs_rehash`] so login can upgrade them.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use tracing::warn;

use crate::error::AppError;

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

fn is_bcrypt(hash: &str) -> bool {
    ["$2a$", "$2b$", "$2x$", "$2y$"]
        .iter()
        .any(|prefix| hash.starts_with(prefix))
}

/// Whether a stored hash should be replaced by an Argon2id one
pub fn needs_rehash(hash: &str) -> bool {
    !hash.starts_with("$argon2")
}

/// Verify a password against a stored Argon2 or bcrypt hash
pub fn verify_password(password: &str, hash: &str) -> bool {
    if is_bcrypt(hash) {
        return bcrypt::verify(password, hash).unwrap_or_else(|e| {
            warn!(error = %e, "Stored bcrypt hash is malformed");
            false
        });
    }

    let Ok(parsed) = PasswordHash::new(hash) else {
        warn!("Stored password hash is not in PHC format");
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Password service for dependency injection
#[derive(Debug, Clone, Default)]
pub struct PasswordService;

impl PasswordService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Hash a password
    ///
    /// # Errors
    /// Returns an error if hashing fails
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        hash_password(password)
    }

    pub fn verify(&self, password: &str, hash: &str) -> bool {
        verify_password(password, hash)
    }

    pub fn needs_rehash(&self, hash: &str) -> bool {
        needs_rehash(hash)
    }

    /// Verify a password and return `InvalidCredentials` if it doesn't match
    ///
    /// # Errors
    /// Returns `AppError::InvalidCredentials` if the password doesn't match
    pub fn verify_or_error(&self, password: &str, hash: &str) -> Result<(), AppError> {
        if self.verify(password, hash) {
            Ok(())
        } else {
            Err(AppError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_salted_argon2() {
        let hash = hash_password("yayin-2024").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert_ne!(hash, hash_password("yayin-2024").unwrap());
    }

    #[test]
    fn test_verify_roundtrip() {
        let hash = hash_password("yayin-2024").unwrap();
        assert!(verify_password("yayin-2024", &hash));
        assert!(!verify_password("yayin-2025", &hash));
    }

    #[test]
    fn test_legacy_bcrypt_hash_verifies() {
        // OpenBSD reference vector
        let legacy = "$2a$05$CCCCCCCCCCCCCCCCCCCCC.E5YPO9kmyuRGyh0XouQYb4YMJKvyOeW";
        assert!(verify_password("U*U", legacy));
        assert!(!verify_password("U*V", legacy));
        assert!(needs_rehash(legacy));
    }

    #[test]
    fn test_bcrypt_generated_hash_verifies() {
        let legacy = bcrypt::hash("yayin-2024", 4).unwrap();
        assert!(legacy.starts_with("$2b$"));
        assert!(verify_password("yayin-2024", &legacy));
        assert!(!verify_password("yayin-2025", &legacy));
    }

    #[test]
    fn test_argon2_hash_is_current() {
        let hash = hash_password("yayin-2024").unwrap();
        assert!(!needs_rehash(&hash));
    }

    #[test]
    fn test_unknown_hash_never_verifies() {
        assert!(!verify_password("", "not-a-hash"));
        assert!(!verify_password("x", "$2b$10$short"));
    }

    #[test]
    fn test_verify_or_error() {
        let service = PasswordService::new();
        let hash = service.hash("gizli").unwrap();

        assert!(service.verify_or_error("gizli", &hash).is_ok());
        assert!(matches!(
            service.verify_or_error("yanlis", &hash),
            Err(AppError::InvalidCredentials)
        ));
    }
}
