use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::RngCore;
use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

/// Number of random bytes behind every session and CSRF token.
pub const DEFAULT_TOKEN_BYTES: usize = 32;

#[derive(Debug, Error, PartialEq)]
pub enum TokenError {
    #[error("Token must not be empty")]
    Empty,
}

/// Draws `byte_len` bytes from the thread-local CSPRNG and encodes them as
/// unpadded base64url, so the result is safe in cookies and headers.
///
/// # Panics
///
/// Panics if the operating system cannot provide entropy to seed the generator.
pub fn generate_token(byte_len: usize) -> String {
    let mut bytes = vec![0u8; byte_len];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Bearer credential carried in the `session_token` cookie.
#[derive(Debug, Clone)]
pub struct SessionToken(Secret<String>);

impl SessionToken {
    pub fn new() -> Self {
        Self(Secret::new(generate_token(DEFAULT_TOKEN_BYTES)))
    }

    pub fn parse(value: impl Into<String>) -> Result<Self, TokenError> {
        let value = value.into();
        if value.is_empty() {
            return Err(TokenError::Empty);
        }
        Ok(Self(Secret::new(value)))
    }
}

impl Default for SessionToken {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Secret<String>> for SessionToken {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for SessionToken {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for SessionToken {}

/// Anti-forgery value a client echoes back in the `X-CSRF-Token` header.
#[derive(Debug, Clone)]
pub struct CsrfToken(Secret<String>);

impl CsrfToken {
    pub fn new() -> Self {
        Self(Secret::new(generate_token(DEFAULT_TOKEN_BYTES)))
    }

    pub fn parse(value: impl Into<String>) -> Result<Self, TokenError> {
        let value = value.into();
        if value.is_empty() {
            return Err(TokenError::Empty);
        }
        Ok(Self(Secret::new(value)))
    }
}

impl Default for CsrfToken {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Secret<String>> for CsrfToken {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for CsrfToken {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for CsrfToken {}
