pub mod domain;
pub mod http_abstraction;
pub mod ports;
pub mod strategies;

// Re-export commonly used types for convenience
pub use domain::{
    message::{
        MAX_MESSAGE_LENGTH, MAX_PAGE_LIMIT, Message, MessageError, MessageId, MessagePage,
        MessageText, Pagination,
    },
    password::Password,
    session::{DEFAULT_SESSION_TTL_SECONDS, Session},
    token::{CsrfToken, DEFAULT_TOKEN_BYTES, SessionToken, TokenError, generate_token},
    user::{AuthenticatedSession, Identity, NewUser, PublicProfile, User, UserError, UserId},
    username::Username,
};

pub use ports::{
    repositories::{MessageStore, MessageStoreError, UserStore, UserStoreError},
    services::{PasswordHasher, PasswordHasherError},
};

pub use strategies::auth_validator::AuthValidator;

pub use http_abstraction::{AuthResponseBuilder, AuthResponseHelpers};
