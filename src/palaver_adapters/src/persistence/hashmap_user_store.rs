use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use palaver_core::{
    CsrfToken, Identity, NewUser, PublicProfile, Session, SessionToken, User, UserId, UserStore,
    UserStoreError, Username,
};

/// Process-local user store; every session mutation happens under one write lock.
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<HashMap<Username, User>>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn add_user(&self, user: NewUser) -> Result<UserId, UserStoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(user.username()) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        let id = UserId::new();
        users.insert(user.username().clone(), user.into_user(id));
        Ok(id)
    }

    async fn user_exists(&self, username: &Username) -> Result<bool, UserStoreError> {
        Ok(self.users.read().await.contains_key(username))
    }

    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserStoreError> {
        let users = self.users.read().await;
        users
            .get(username)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn get_user_by_id(&self, id: &UserId) -> Result<PublicProfile, UserStoreError> {
        let users = self.users.read().await;
        users
            .values()
            .find(|user| user.id() == *id)
            .map(User::profile)
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn append_session(
        &self,
        username: &Username,
        session: Session,
    ) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(username)
            .ok_or(UserStoreError::UserNotFound)?;
        user.push_session(session, Utc::now());
        Ok(())
    }

    async fn remove_session(
        &self,
        username: &Username,
        session_token: &SessionToken,
    ) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        if let Some(user) = users.get_mut(username) {
            user.remove_session(session_token);
        }
        Ok(())
    }

    async fn resolve_session(
        &self,
        session_token: &SessionToken,
        csrf_token: &CsrfToken,
    ) -> Result<Identity, UserStoreError> {
        let now = Utc::now();
        let users = self.users.read().await;
        users
            .values()
            .find(|user| {
                user.sessions()
                    .iter()
                    .any(|s| s.matches(session_token, csrf_token) && s.is_live_at(now))
            })
            .map(User::identity)
            .ok_or(UserStoreError::SessionNotFound)
    }
}
