pub mod auth_validation;
pub mod config;
pub mod crypto;
pub mod handlers;
pub mod http;
pub mod persistence;

pub use auth_validation::{SessionAuthConfig, SessionAuthError, SessionValidator};
pub use config::{AllowedOrigins, AppSettings};
pub use crypto::Argon2PasswordHasher;
pub use handlers::HandlerError;
pub use persistence::{
    HashMapMessageStore, HashMapUserStore, PostgresMessageStore, PostgresUserStore,
    TimeoutMessageStore, TimeoutUserStore,
};
