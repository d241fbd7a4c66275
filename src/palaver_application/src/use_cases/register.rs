use palaver_core::{
    NewUser, Password, PasswordHasher, PasswordHasherError, UserError, UserId, UserStore,
    UserStoreError, Username,
};
use secrecy::Secret;

#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("Invalid username/password")]
    InvalidCredentials(#[from] UserError),
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
    #[error("Password hasher error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
}

impl From<UserStoreError> for RegisterError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserAlreadyExists => Self::UserAlreadyExists,
            other => Self::UserStoreError(other),
        }
    }
}

/// Register use case - validates credentials and creates the account
pub struct RegisterUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: &'a U,
    hasher: &'a H,
}

impl<'a, U, H> RegisterUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    pub fn new(user_store: &'a U, hasher: &'a H) -> Self {
        Self { user_store, hasher }
    }

    /// Both fields are validated before the store is consulted. The existence
    /// check is advisory; the store's uniqueness constraint decides races.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        username: String,
        password: Secret<String>,
    ) -> Result<UserId, RegisterError> {
        let username = Username::try_from(username)?;
        let password = Password::try_from(password)?;

        if self.user_store.user_exists(&username).await? {
            return Err(RegisterError::UserAlreadyExists);
        }

        let password_hash = self.hasher.hash(&password).await?;
        let user_id = self
            .user_store
            .add_user(NewUser::new(username, password_hash))
            .await?;

        tracing::info!(%user_id, "user registered");
        Ok(user_id)
    }
}
