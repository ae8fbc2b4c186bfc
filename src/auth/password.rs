/// Password Hashing and Verification (bcrypt)

use bcrypt::{hash, verify};

use crate::error::AppError;

/// Hash a password using bcrypt at the given cost
///
/// Used to provision user records; login only ever verifies.
pub fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    hash(password, cost).map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))
}

/// Verify a password against its stored hash
///
/// bcrypt is CPU-bound, so the check runs on the blocking pool.
///
/// # Errors
/// Returns error if the stored hash is malformed or the blocking task fails.
/// A mismatch is `Ok(false)`, not an error.
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let password = password.to_owned();
    let hash = hash.to_owned();

    tokio::task::spawn_blocking(move || verify(password, &hash))
        .await
        .map_err(|e| AppError::Internal(format!("Password verification task failed: {}", e)))?
        .map_err(|e| AppError::Internal(format!("Password verification failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_password() {
        let password = "ValidPassword123";
        let hash = hash_password(password, TEST_COST).expect("Failed to hash password");

        assert_ne!(password, hash);
        assert!(hash.starts_with("$2"));
    }

    #[tokio::test]
    async fn test_verify_password() {
        let hash = hash_password("ValidPassword123", TEST_COST).unwrap();

        let is_valid = verify_password("ValidPassword123", &hash)
            .await
            .expect("Failed to verify password");
        assert!(is_valid);
    }

    #[tokio::test]
    async fn test_verify_wrong_password() {
        let hash = hash_password("ValidPassword123", TEST_COST).unwrap();

        let is_valid = verify_password("WrongPassword123", &hash)
            .await
            .expect("Failed to verify password");
        assert!(!is_valid);
    }

    #[tokio::test]
    async fn test_malformed_hash_is_an_error() {
        let result = verify_password("ValidPassword123", "not-a-bcrypt-hash").await;
        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
