use palaver_core::{PublicProfile, UserId, UserStore, UserStoreError};

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Invalid user id")]
    InvalidUserId,
    #[error("User not found")]
    UserNotFound,
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
}

impl From<UserStoreError> for ProfileError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserNotFound => Self::UserNotFound,
            other => Self::UserStoreError(other),
        }
    }
}

/// Looks up the public part of an account by id
pub struct GetProfileUseCase<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
}

impl<'a, U> GetProfileUseCase<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "GetProfileUseCase::execute", skip(self))]
    pub async fn execute(&self, raw_id: &str) -> Result<PublicProfile, ProfileError> {
        let id = UserId::parse(raw_id).map_err(|_| ProfileError::InvalidUserId)?;
        Ok(self.user_store.get_user_by_id(&id).await?)
    }
}
