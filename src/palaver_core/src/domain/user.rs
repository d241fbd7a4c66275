use std::fmt;

use chrono::{DateTime, Utc};
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::{session::Session, token::SessionToken, username::Username};

#[derive(Debug, Error, PartialEq)]
pub enum UserError {
    #[error("Invalid username")]
    InvalidUsername,
    #[error("Invalid password")]
    InvalidPassword,
    #[error("Invalid user id")]
    InvalidUserId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(value: &str) -> Result<Self, UserError> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| UserError::InvalidUserId)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A validated registration waiting for the store to accept it.
#[derive(Debug, Clone)]
pub struct NewUser {
    username: Username,
    password_hash: Secret<String>,
    created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(username: Username, password_hash: Secret<String>) -> Self {
        Self {
            username,
            password_hash,
            created_at: Utc::now(),
        }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password_hash(&self) -> &Secret<String> {
        &self.password_hash
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            username: self.username,
            password_hash: self.password_hash,
            sessions: Vec::new(),
            created_at: self.created_at,
        }
    }
}

/// A stored account together with every session it currently owns.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    username: Username,
    password_hash: Secret<String>,
    sessions: Vec<Session>,
    created_at: DateTime<Utc>,
}

impl User {
    pub fn from_parts(
        id: UserId,
        username: Username,
        password_hash: Secret<String>,
        sessions: Vec<Session>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            password_hash,
            sessions,
            created_at,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn password_hash(&self) -> &Secret<String> {
        &self.password_hash
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Drops sessions that expired before `now`, then appends `session`.
    pub fn push_session(&mut self, session: Session, now: DateTime<Utc>) {
        self.sessions.retain(|s| s.is_live_at(now));
        self.sessions.push(session);
    }

    /// Returns whether a session with this token was present.
    pub fn remove_session(&mut self, session_token: &SessionToken) -> bool {
        let before = self.sessions.len();
        self.sessions.retain(|s| s.session_token() != session_token);
        self.sessions.len() != before
    }

    pub fn identity(&self) -> Identity {
        Identity {
            user_id: self.id,
            username: self.username.clone(),
        }
    }

    pub fn profile(&self) -> PublicProfile {
        PublicProfile {
            id: self.id,
            username: self.username.clone(),
            created_at: self.created_at,
        }
    }
}

/// The authenticated principal attached to a request that passed the session check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub user_id: UserId,
    pub username: Username,
}

/// A request that passed the session check, with the session token it presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedSession {
    pub identity: Identity,
    pub session_token: SessionToken,
}

/// What anyone may see about an account.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublicProfile {
    pub id: UserId,
    pub username: Username,
    pub created_at: DateTime<Utc>,
}
