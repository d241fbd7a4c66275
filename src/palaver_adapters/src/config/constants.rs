pub const SESSION_COOKIE_NAME: &str = "session_token";
pub const CSRF_COOKIE_NAME: &str = "csrf_token";
pub const CSRF_HEADER_NAME: &str = "X-CSRF-Token";

pub const ENV_PREFIX: &str = "PALAVER";
pub const CONFIG_FILE: &str = "config/base";

pub mod defaults {
    pub const APPLICATION_ADDRESS: &str = "0.0.0.0:3000";
    pub const POSTGRES_MAX_CONNECTIONS: u32 = 5;
    pub const STORE_TIMEOUT_IN_MILLIS: u64 = 3000;
}
