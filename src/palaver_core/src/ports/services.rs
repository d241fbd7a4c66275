use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;

use crate::domain::password::Password;

#[derive(Debug, Error)]
pub enum PasswordHasherError {
    #[error("Failed to hash password: {0}")]
    HashingFailed(String),
    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
}

/// One-way password hashing with embedded salt and parameters.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<Secret<String>, PasswordHasherError>;

    /// `Ok(false)` means the candidate is wrong; errors are reserved for
    /// unparseable hashes and hashing failures.
    async fn verify(
        &self,
        candidate: &Secret<String>,
        expected_hash: &Secret<String>,
    ) -> Result<bool, PasswordHasherError>;

    /// Runs one verification against a fixed decoy hash and discards the outcome.
    ///
    /// Login calls this for unknown usernames so they cost as much as a wrong password.
    async fn verify_decoy(&self, candidate: &Secret<String>);
}
