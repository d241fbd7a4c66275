use secrecy::{ExposeSecret, Secret};

use super::user::UserError;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A plaintext password that satisfies the registration policy.
///
/// Only ever handed to the password hasher; the stored form is the hash.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl TryFrom<Secret<String>> for Password {
    type Error = UserError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().chars().count() < MIN_PASSWORD_LENGTH {
            return Err(UserError::InvalidPassword);
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
