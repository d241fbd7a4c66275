use palaver_core::{SessionToken, UserStore, UserStoreError, Username};

/// Error types for logout use case
#[derive(Debug, thiserror::Error)]
pub enum LogoutError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
}

/// Logout use case - ends exactly one session of the caller
pub struct LogoutUseCase<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
}

impl<'a, U> LogoutUseCase<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    /// Idempotent; other sessions of the same user survive.
    #[tracing::instrument(name = "LogoutUseCase::execute", skip(self, session_token))]
    pub async fn execute(
        &self,
        username: &Username,
        session_token: &SessionToken,
    ) -> Result<(), LogoutError> {
        self.user_store
            .remove_session(username, session_token)
            .await?;
        Ok(())
    }
}
