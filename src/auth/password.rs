//! # Password Hashing
//!
//! bcrypt with a random per-password salt. The salt and the cost factor are
//! embedded in the hash string (`$2b$<cost>$<salt+digest>`), so verifying
//! needs nothing but the stored hash.
//!
//! Hashing is deliberately slow. Both operations run on tokio's blocking
//! pool so a request waiting on them never stalls a runtime worker.

use crate::error::{AppError, AppResult};

/// Hashes and verifies passwords at a fixed cost factor
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher using `cost` (4..=31, validated by [`crate::config::Config`])
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash `password` with a fresh random salt
    pub async fn hash(&self, password: &str) -> AppResult<String> {
        let password = password.to_owned();
        let cost = self.cost;

        let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AppError::Internal(format!("Hashing task failed: {}", e)))??;

        Ok(hash)
    }

    /// Check `password` against a stored hash
    ///
    /// A mismatch is `Ok(false)`. Only a malformed hash is an error.
    pub async fn verify(&self, password: &str, hash: &str) -> AppResult<bool> {
        let password = password.to_owned();
        let hash = hash.to_owned();

        let matches = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| AppError::Internal(format!("Verification task failed: {}", e)))??;

        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Lowest cost bcrypt allows, to keep the tests quick
    const TEST_COST: u32 = 4;

    #[tokio::test]
    async fn verifies_the_password_it_hashed() {
        let hasher = PasswordHasher::new(TEST_COST);
        let hash = hasher.hash("correct horse").await.unwrap();

        assert!(hasher.verify("correct horse", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn rejects_a_different_password() {
        let hasher = PasswordHasher::new(TEST_COST);
        let hash = hasher.hash("correct horse").await.unwrap();

        assert!(!hasher.verify("battery staple", &hash).await.unwrap());
        assert!(!hasher.verify("", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn salts_every_hash() {
        let hasher = PasswordHasher::new(TEST_COST);
        let first = hasher.hash("p1").await.unwrap();
        let second = hasher.hash("p1").await.unwrap();

        assert_ne!(first, second);
        assert!(first.starts_with("$2b$04$"));
    }

    #[tokio::test]
    async fn malformed_hash_is_an_error() {
        let hasher = PasswordHasher::new(TEST_COST);

        let result = hasher.verify("p1", "not-a-bcrypt-hash").await;
        assert!(matches!(result, Err(AppError::Hash(_))));
    }
}
