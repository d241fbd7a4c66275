use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use super::user::UserId;

pub const MAX_MESSAGE_LENGTH: usize = 500;
pub const MAX_PAGE_LIMIT: u32 = 100;

#[derive(Debug, Error, PartialEq)]
pub enum MessageError {
    #[error("Message text must not be empty")]
    EmptyText,
    #[error("Message text must be at most 500 characters")]
    TextTooLong,
    #[error("Invalid message id")]
    InvalidMessageId,
    #[error("Invalid page number")]
    InvalidPage,
    #[error("Limit must be between 1 and 100")]
    InvalidLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MessageId(Uuid);

impl MessageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(value: &str) -> Result<Self, MessageError> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| MessageError::InvalidMessageId)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for MessageId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MessageText(String);

impl MessageText {
    pub fn parse(value: impl Into<String>) -> Result<Self, MessageError> {
        let value = value.into();
        match value.chars().count() {
            0 => Err(MessageError::EmptyText),
            n if n > MAX_MESSAGE_LENGTH => Err(MessageError::TextTooLong),
            _ => Ok(Self(value)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub id: MessageId,
    pub author: UserId,
    pub text: MessageText,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(author: UserId, text: MessageText) -> Self {
        Self {
            id: MessageId::new(),
            author,
            text,
            created_at: Utc::now(),
        }
    }
}

/// One page of the board, newest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessagePage {
    pub messages: Vec<Message>,
    pub total_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    limit: u32,
}

impl Pagination {
    /// Pages are 1-based.
    pub fn new(page: u32, limit: u32) -> Result<Self, MessageError> {
        if page == 0 {
            return Err(MessageError::InvalidPage);
        }
        if limit == 0 || limit > MAX_PAGE_LIMIT {
            return Err(MessageError::InvalidLimit);
        }
        Ok(Self { page, limit })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}
