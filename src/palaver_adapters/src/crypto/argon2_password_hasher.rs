use std::sync::OnceLock;

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher as _, SaltString, rand_core},
};
use async_trait::async_trait;
use palaver_core::{Password, PasswordHasher, PasswordHasherError};
use secrecy::{ExposeSecret, Secret};

/// Argon2id, 15 MiB memory, 2 iterations, 1 lane.
#[derive(Debug, Clone, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

fn argon2() -> Result<Argon2<'static>, String> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?,
    ))
}

fn compute_hash(password: &str) -> Result<String, String> {
    let salt: SaltString = SaltString::generate(rand_core::OsRng);
    argon2()?
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| e.to_string())
}

fn verify_hash(candidate: &str, expected_hash: &str) -> Result<bool, PasswordHasherError> {
    let expected_hash = PasswordHash::new(expected_hash)
        .map_err(|e| PasswordHasherError::MalformedHash(e.to_string()))?;

    match argon2()
        .map_err(PasswordHasherError::HashingFailed)?
        .verify_password(candidate.as_bytes(), &expected_hash)
    {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordHasherError::HashingFailed(e.to_string())),
    }
}

// Computed once per process; an empty string only makes the decoy check fail fast.
fn decoy_hash() -> &'static str {
    static DECOY: OnceLock<String> = OnceLock::new();
    DECOY.get_or_init(|| compute_hash("palaver-decoy-password").unwrap_or_default())
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<Secret<String>, PasswordHasherError> {
        let password = password.clone();
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| compute_hash(password.as_ref().expose_secret()))
        })
        .await
        .map_err(|e| PasswordHasherError::HashingFailed(e.to_string()))?
        .map(Secret::new)
        .map_err(PasswordHasherError::HashingFailed)
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(
        &self,
        candidate: &Secret<String>,
        expected_hash: &Secret<String>,
    ) -> Result<bool, PasswordHasherError> {
        let candidate = candidate.clone();
        let expected_hash = expected_hash.clone();
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                verify_hash(candidate.expose_secret(), expected_hash.expose_secret())
            })
        })
        .await
        .map_err(|e| PasswordHasherError::HashingFailed(e.to_string()))?
    }

    #[tracing::instrument(name = "Verify decoy hash", skip_all)]
    async fn verify_decoy(&self, candidate: &Secret<String>) {
        let candidate = candidate.clone();
        let current_span: tracing::Span = tracing::Span::current();

        let _ = tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| verify_hash(candidate.expose_secret(), decoy_hash()))
        })
        .await;
    }
}
