use async_trait::async_trait;
use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, Expiration, SameSite},
};
use chrono::{DateTime, TimeDelta, Utc};
use palaver_core::{
    AuthValidator, AuthenticatedSession, CsrfToken, DEFAULT_SESSION_TTL_SECONDS, SessionToken,
    UserStore, UserStoreError,
};
use secrecy::ExposeSecret;
use thiserror::Error;
use time::OffsetDateTime;

use crate::config::constants::{CSRF_COOKIE_NAME, CSRF_HEADER_NAME, SESSION_COOKIE_NAME};

#[derive(Clone, Debug)]
pub struct SessionAuthConfig {
    pub session_cookie_name: String,
    pub csrf_cookie_name: String,
    pub csrf_header_name: String,
    pub session_ttl_in_seconds: i64,
    /// Adds `Secure` to issued cookies. Only disable for plain-HTTP development.
    pub cookie_secure: bool,
}

impl Default for SessionAuthConfig {
    fn default() -> Self {
        Self {
            session_cookie_name: SESSION_COOKIE_NAME.to_string(),
            csrf_cookie_name: CSRF_COOKIE_NAME.to_string(),
            csrf_header_name: CSRF_HEADER_NAME.to_string(),
            session_ttl_in_seconds: DEFAULT_SESSION_TTL_SECONDS,
            cookie_secure: true,
        }
    }
}

impl SessionAuthConfig {
    pub fn session_ttl(&self) -> TimeDelta {
        TimeDelta::try_seconds(self.session_ttl_in_seconds)
            .unwrap_or_else(|| TimeDelta::seconds(DEFAULT_SESSION_TTL_SECONDS))
    }
}

/// Double-submit check: the session cookie and the CSRF header must name the
/// same live session.
#[derive(Clone)]
pub struct SessionValidator<U> {
    user_store: U,
    config: SessionAuthConfig,
}

impl<U> SessionValidator<U> {
    pub fn new(user_store: U, config: SessionAuthConfig) -> Self {
        Self { user_store, config }
    }
}

#[async_trait]
impl<U: UserStore + Clone + 'static> AuthValidator for SessionValidator<U> {
    type Principal = AuthenticatedSession;
    type RequestParts = http::request::Parts;
    type Error = SessionAuthError;

    async fn validate(&self, parts: &Self::RequestParts) -> Result<Self::Principal, Self::Error> {
        let cookie_jar = CookieJar::from_headers(&parts.headers);
        let session_token = extract_session_token(&cookie_jar, &self.config.session_cookie_name)?;
        let csrf_token = extract_csrf_token(&parts.headers, &self.config.csrf_header_name)?;

        let identity = self
            .user_store
            .resolve_session(&session_token, &csrf_token)
            .await
            .map_err(|e| match e {
                UserStoreError::SessionNotFound | UserStoreError::UserNotFound => {
                    SessionAuthError::SessionNotFound
                }
                other => SessionAuthError::UnexpectedError(other.to_string()),
            })?;

        Ok(AuthenticatedSession {
            identity,
            session_token,
        })
    }
}

#[derive(Debug, Error)]
pub enum SessionAuthError {
    #[error("Missing session token")]
    MissingSessionToken,
    #[error("Missing CSRF token")]
    MissingCsrfToken,
    #[error("Session not found")]
    SessionNotFound,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

pub fn extract_session_token(
    jar: &CookieJar,
    cookie_name: &str,
) -> Result<SessionToken, SessionAuthError> {
    jar.get(cookie_name)
        .and_then(|cookie| SessionToken::parse(cookie.value()).ok())
        .ok_or(SessionAuthError::MissingSessionToken)
}

pub fn extract_csrf_token(
    headers: &http::HeaderMap,
    header_name: &str,
) -> Result<CsrfToken, SessionAuthError> {
    headers
        .get(header_name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| CsrfToken::parse(value).ok())
        .ok_or(SessionAuthError::MissingCsrfToken)
}

fn base_cookie(name: &str, value: String, http_only: bool, secure: bool) -> Cookie<'static> {
    Cookie::build((name.to_string(), value))
        .path("/")
        .http_only(http_only)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build()
}

fn with_expiry(mut cookie: Cookie<'static>, expires_at: DateTime<Utc>) -> String {
    match OffsetDateTime::from_unix_timestamp(expires_at.timestamp()) {
        Ok(expires_at) => cookie.set_expires(Expiration::DateTime(expires_at)),
        Err(e) => {
            tracing::warn!(error = %e, "session expiry out of range, issuing a session cookie")
        }
    }
    cookie.to_string()
}

/// `HttpOnly` so page scripts can never read it.
pub fn create_session_cookie(
    token: &SessionToken,
    expires_at: DateTime<Utc>,
    config: &SessionAuthConfig,
) -> String {
    let cookie = base_cookie(
        &config.session_cookie_name,
        token.as_ref().expose_secret().clone(),
        true,
        config.cookie_secure,
    );
    with_expiry(cookie, expires_at)
}

/// Readable by page scripts, which echo it in the CSRF header.
pub fn create_csrf_cookie(
    token: &CsrfToken,
    expires_at: DateTime<Utc>,
    config: &SessionAuthConfig,
) -> String {
    let cookie = base_cookie(
        &config.csrf_cookie_name,
        token.as_ref().expose_secret().clone(),
        false,
        config.cookie_secure,
    );
    with_expiry(cookie, expires_at)
}

/// Empty value with `Max-Age=0` and an `Expires` in the past.
pub fn create_removal_cookie(cookie_name: &str, http_only: bool, secure: bool) -> String {
    let mut cookie = base_cookie(cookie_name, String::new(), http_only, secure);
    cookie.make_removal();
    cookie.to_string()
}
