use palaver_adapters::config::PostgresSettings;
use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, postgres::PgPoolOptions};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to connect to Postgres: {0}")]
    Connect(#[from] sqlx::Error),
    #[error("Failed to run migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Connects to Postgres and applies every pending migration.
pub async fn configure_postgresql(settings: &PostgresSettings) -> Result<PgPool, StartupError> {
    let pg_pool = get_postgres_pool(&settings.url, settings.max_connections).await?;
    run_migrations(&pg_pool).await?;
    Ok(pg_pool)
}

pub async fn get_postgres_pool(
    url: &Secret<String>,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url.expose_secret())
        .await
}

pub async fn run_migrations(pg_pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pg_pool).await
}
