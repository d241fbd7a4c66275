//! Axum integration for the palaver chat API.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  palaver_core: HTTP trait definitions    │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  palaver_axum: axum implementations      │
//! │  - AxumResponseBuilder                   │
//! │  - require_session middleware            │
//! │  - axum routes                           │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use palaver_axum::{middleware::require_session, routes};
//!
//! let app = Router::new()
//!     .route("/auth/login", post(routes::login::<U, H>))
//!     .with_state((user_store, hasher, config));
//! ```

pub mod adapters;
pub mod error;
pub mod middleware;
pub mod routes;

pub use adapters::{AxumResponseBuilder, response_builder};
pub use error::ApiError;
pub use middleware::require_session;
