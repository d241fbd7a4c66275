use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use palaver_core::DEFAULT_SESSION_TTL_SECONDS;
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{CONFIG_FILE, ENV_PREFIX, defaults};
use crate::auth_validation::SessionAuthConfig;

#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    pub application: ApplicationSettings,
    pub postgres: PostgresSettings,
    pub session: SessionSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    pub address: String,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    pub ttl_in_seconds: i64,
    pub cookie_secure: bool,
    pub store_timeout_in_millis: u64,
}

impl SessionSettings {
    pub fn auth_config(&self) -> SessionAuthConfig {
        SessionAuthConfig {
            session_ttl_in_seconds: self.ttl_in_seconds,
            cookie_secure: self.cookie_secure,
            ..SessionAuthConfig::default()
        }
    }

    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_in_millis)
    }
}

impl AppSettings {
    /// Defaults, then `config/base.json` if present, then `PALAVER_*` variables
    /// (`PALAVER_POSTGRES__URL`, `PALAVER_SESSION__COOKIE_SECURE`, ...).
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::builder()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("application.allowed_origins")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("application.address", defaults::APPLICATION_ADDRESS)?
            .set_default("application.allowed_origins", Vec::<String>::new())?
            .set_default(
                "postgres.max_connections",
                i64::from(defaults::POSTGRES_MAX_CONNECTIONS),
            )?
            .set_default("session.ttl_in_seconds", DEFAULT_SESSION_TTL_SECONDS)?
            .set_default("session.cookie_secure", true)?
            .set_default(
                "session.store_timeout_in_millis",
                defaults::STORE_TIMEOUT_IN_MILLIS as i64,
            )
    }

    pub fn allowed_origins(&self) -> AllowedOrigins {
        AllowedOrigins::new(self.application.allowed_origins.clone())
    }
}

/// Origins allowed to call the API with credentials. Empty means same-origin only.
#[derive(Debug, Clone, Default)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: Vec<String>) -> Self {
        Self(origins)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, origin: &http::HeaderValue) -> bool {
        origin
            .to_str()
            .map(|origin| self.0.iter().any(|allowed| allowed == origin))
            .unwrap_or(false)
    }
}
