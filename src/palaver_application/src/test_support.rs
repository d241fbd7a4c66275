use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use chrono::Utc;
use palaver_core::{
    CsrfToken, Identity, NewUser, Password, PasswordHasher, PasswordHasherError, PublicProfile,
    Session, SessionToken, User, UserId, UserStore, UserStoreError, Username,
};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

/// In-memory user store that counts every write it accepts.
#[derive(Clone, Default)]
pub struct MockUserStore {
    pub users: Arc<RwLock<HashMap<Username, User>>>,
    pub writes: Arc<AtomicUsize>,
}

impl MockUserStore {
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub async fn sessions_of(&self, username: &str) -> Vec<Session> {
        let username = Username::parse(username).unwrap();
        self.users.read().await[&username].sessions().to_vec()
    }
}

#[async_trait]
impl UserStore for MockUserStore {
    async fn add_user(&self, user: NewUser) -> Result<UserId, UserStoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(user.username()) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        let id = UserId::new();
        users.insert(user.username().clone(), user.into_user(id));
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(id)
    }

    async fn user_exists(&self, username: &Username) -> Result<bool, UserStoreError> {
        Ok(self.users.read().await.contains_key(username))
    }

    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserStoreError> {
        self.users
            .read()
            .await
            .get(username)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn get_user_by_id(&self, id: &UserId) -> Result<PublicProfile, UserStoreError> {
        self.users
            .read()
            .await
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
        let user = users.get_mut(username).ok_or(UserStoreError::UserNotFound)?;
        user.push_session(session, Utc::now());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn remove_session(
        &self,
        username: &Username,
        session_token: &SessionToken,
    ) -> Result<(), UserStoreError> {
        if let Some(user) = self.users.write().await.get_mut(username) {
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
        self.users
            .read()
            .await
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

/// Reversible stand-in for Argon2 that records how often it verified.
#[derive(Clone, Default)]
pub struct MockHasher {
    pub verifications: Arc<AtomicUsize>,
}

impl MockHasher {
    pub fn verifications(&self) -> usize {
        self.verifications.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PasswordHasher for MockHasher {
    async fn hash(&self, password: &Password) -> Result<Secret<String>, PasswordHasherError> {
        Ok(Secret::new(format!(
            "hashed:{}",
            password.as_ref().expose_secret()
        )))
    }

    async fn verify(
        &self,
        candidate: &Secret<String>,
        expected_hash: &Secret<String>,
    ) -> Result<bool, PasswordHasherError> {
        self.verifications.fetch_add(1, Ordering::SeqCst);
        Ok(expected_hash.expose_secret() == &format!("hashed:{}", candidate.expose_secret()))
    }

    async fn verify_decoy(&self, _candidate: &Secret<String>) {
        self.verifications.fetch_add(1, Ordering::SeqCst);
    }
}

pub fn secret(value: &str) -> Secret<String> {
    Secret::new(value.to_string())
}
