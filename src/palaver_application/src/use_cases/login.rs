use chrono::{DateTime, TimeDelta, Utc};
use palaver_core::{
    CsrfToken, PasswordHasher, PasswordHasherError, Session, SessionToken, UserStore,
    UserStoreError, Username,
};
use secrecy::Secret;

/// The token pair a successful login hands back to the client.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub session_token: SessionToken,
    pub csrf_token: CsrfToken,
    pub expires_at: DateTime<Utc>,
}

/// Error types specific to login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// Unknown user and wrong password are deliberately indistinguishable.
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Password hasher error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
}

/// Login use case - verifies credentials and opens a new session
pub struct LoginUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    user_store: &'a U,
    hasher: &'a H,
    session_ttl: TimeDelta,
}

impl<'a, U, H> LoginUseCase<'a, U, H>
where
    U: UserStore,
    H: PasswordHasher,
{
    pub fn new(user_store: &'a U, hasher: &'a H, session_ttl: TimeDelta) -> Self {
        Self {
            user_store,
            hasher,
            session_ttl,
        }
    }

    /// Each success appends one session; earlier sessions of the same user stay valid.
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        username: String,
        password: Secret<String>,
    ) -> Result<IssuedSession, LoginError> {
        let user = match Username::try_from(username) {
            Ok(username) => match self.user_store.get_user_by_username(&username).await {
                Ok(user) => Some(user),
                Err(UserStoreError::UserNotFound) => None,
                Err(e) => return Err(e.into()),
            },
            Err(_) => None,
        };

        let Some(user) = user else {
            self.hasher.verify_decoy(&password).await;
            return Err(LoginError::InvalidCredentials);
        };

        if !self.hasher.verify(&password, user.password_hash()).await? {
            return Err(LoginError::InvalidCredentials);
        }

        let session = Session::issue(self.session_ttl);
        let issued = IssuedSession {
            session_token: session.session_token().clone(),
            csrf_token: session.csrf_token().clone(),
            expires_at: session.expires_at(),
        };
        self.user_store
            .append_session(user.username(), session)
            .await?;

        tracing::info!(user_id = %user.id(), "session issued");
        Ok(issued)
    }
}
