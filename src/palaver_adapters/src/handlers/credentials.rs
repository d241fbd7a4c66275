use secrecy::Secret;
use serde::Deserialize;

fn empty_secret() -> Secret<String> {
    Secret::new(String::new())
}

/// Form body of `register` and `login`.
///
/// Missing fields deserialize as empty strings so they fail validation like
/// any other short value.
#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    #[serde(default)]
    pub username: String,
    #[serde(default = "empty_secret")]
    pub password: Secret<String>,
}
