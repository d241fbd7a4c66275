//! # Palaver - session-authenticated chat API
//!
//! Facade crate re-exporting the public APIs of the palaver workspace.
//!
//! ## Structure
//!
//! - **Core domain types**: `Username`, `Password`, `Session`, `SessionToken`, `Message`, ...
//! - **Ports**: `UserStore`, `MessageStore`, `PasswordHasher`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, `LogoutUseCase`, ...
//! - **Adapters**: `PostgresUserStore`, `HashMapUserStore`, `Argon2PasswordHasher`, ...
//! - **Service**: `ChatService`, the router with every route mounted

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use palaver_core::*;
}

pub use palaver_core::{
    AuthenticatedSession, CsrfToken, Identity, Message, MessageId, MessageText, Password,
    PublicProfile, Session, SessionToken, User, UserError, UserId, Username,
};

// ============================================================================
// Ports
// ============================================================================

pub use palaver_core::{
    MessageStore, MessageStoreError, PasswordHasher, PasswordHasherError, UserStore,
    UserStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use palaver_application::*;
}

pub use palaver_application::{
    GetProfileUseCase, LoginUseCase, LogoutUseCase, MessageBoardUseCase, RegisterUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Framework-agnostic handlers
    pub mod handlers {
        pub use palaver_adapters::handlers::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use palaver_adapters::persistence::*;
    }

    /// Session cookie validation
    pub mod auth {
        pub use palaver_adapters::auth_validation::*;
    }

    /// Configuration
    pub mod config {
        pub use palaver_adapters::config::*;
    }
}

pub use palaver_adapters::{
    Argon2PasswordHasher, HashMapMessageStore, HashMapUserStore, PostgresMessageStore,
    PostgresUserStore, SessionAuthConfig, SessionValidator, TimeoutMessageStore, TimeoutUserStore,
};

/// Axum adapters, middleware and routes
pub mod axum_integration {
    pub use palaver_axum::*;
}

// ============================================================================
// Chat Service (Main Entry Point)
// ============================================================================

pub use palaver_service::{ChatService, configure_postgresql, get_postgres_pool, init_tracing};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the store traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use axum;
pub use http;
pub use tokio;
