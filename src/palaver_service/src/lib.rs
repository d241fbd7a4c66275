pub mod chat_service;
pub mod helpers;
pub mod telemetry;

pub use chat_service::ChatService;
pub use helpers::{StartupError, configure_postgresql, get_postgres_pool, run_migrations};
pub use telemetry::init_tracing;
