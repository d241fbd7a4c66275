use color_eyre::eyre::Result;
use palaver_adapters::{
    config::AppSettings,
    crypto::Argon2PasswordHasher,
    persistence::{PostgresMessageStore, PostgresUserStore, TimeoutMessageStore, TimeoutUserStore},
};
use palaver_service::{ChatService, configure_postgresql, init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let config = AppSettings::load()?;

    let pg_pool = configure_postgresql(&config.postgres).await?;

    let store_timeout = config.session.store_timeout();
    let user_store = TimeoutUserStore::new(PostgresUserStore::new(pg_pool.clone()), store_timeout);
    let message_store =
        TimeoutMessageStore::new(PostgresMessageStore::new(pg_pool), store_timeout);

    let chat_service = ChatService::new(
        user_store,
        message_store,
        Argon2PasswordHasher::new(),
        config.session.auth_config(),
    );

    let listener = tokio::net::TcpListener::bind(&config.application.address).await?;
    tracing::info!("Starting chat service...");

    chat_service
        .run_standalone(listener, Some(config.allowed_origins()))
        .await?;

    Ok(())
}
