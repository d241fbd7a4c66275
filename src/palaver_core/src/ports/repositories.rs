use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    message::{Message, MessageId, MessagePage, MessageText, Pagination},
    session::Session,
    token::{CsrfToken, SessionToken},
    user::{Identity, NewUser, PublicProfile, User, UserId},
    username::Username,
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Session not found")]
    SessionNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UserAlreadyExists, Self::UserAlreadyExists) => true,
            (Self::UserNotFound, Self::UserNotFound) => true,
            (Self::SessionNotFound, Self::SessionNotFound) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Durable user records with their embedded session lists.
///
/// Implementations must make `add_user` reject a duplicate username even when
/// two registrations race past `user_exists`, and must apply each session
/// mutation to a single user record atomically.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn add_user(&self, user: NewUser) -> Result<UserId, UserStoreError>;
    async fn user_exists(&self, username: &Username) -> Result<bool, UserStoreError>;
    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserStoreError>;
    async fn get_user_by_id(&self, id: &UserId) -> Result<PublicProfile, UserStoreError>;
    /// Appends `session` and prunes the user's expired sessions in the same write.
    async fn append_session(
        &self,
        username: &Username,
        session: Session,
    ) -> Result<(), UserStoreError>;
    /// Idempotent: removing an unknown token is not an error.
    async fn remove_session(
        &self,
        username: &Username,
        session_token: &SessionToken,
    ) -> Result<(), UserStoreError>;
    /// Finds the owner of a live session holding both tokens.
    async fn resolve_session(
        &self,
        session_token: &SessionToken,
        csrf_token: &CsrfToken,
    ) -> Result<Identity, UserStoreError>;
}

// MessageStore port trait and errors
#[derive(Debug, Error)]
pub enum MessageStoreError {
    #[error("Message not found")]
    MessageNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for MessageStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::MessageNotFound, Self::MessageNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait]
pub trait MessageStore: Send + Sync {
    async fn add_message(&self, message: Message) -> Result<(), MessageStoreError>;
    async fn get_page(&self, pagination: Pagination) -> Result<MessagePage, MessageStoreError>;
    /// Fails with `MessageNotFound` unless `author` wrote the message.
    async fn update_text(
        &self,
        id: &MessageId,
        author: &UserId,
        text: MessageText,
    ) -> Result<Message, MessageStoreError>;
    /// Fails with `MessageNotFound` unless `author` wrote the message.
    async fn delete_message(
        &self,
        id: &MessageId,
        author: &UserId,
    ) -> Result<(), MessageStoreError>;
}
