use chrono::{DateTime, TimeDelta, Utc};
use secrecy::ExposeSecret;

use super::token::{CsrfToken, SessionToken};

/// Seven days.
pub const DEFAULT_SESSION_TTL_SECONDS: i64 = 7 * 24 * 60 * 60;

/// One logged-in device: a session token bound to its CSRF token.
#[derive(Debug, Clone)]
pub struct Session {
    session_token: SessionToken,
    csrf_token: CsrfToken,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl Session {
    /// Mints a fresh token pair valid for `ttl` from now.
    pub fn issue(ttl: TimeDelta) -> Self {
        let created_at = Utc::now();
        Self {
            session_token: SessionToken::new(),
            csrf_token: CsrfToken::new(),
            created_at,
            expires_at: created_at + ttl,
        }
    }

    pub fn from_parts(
        session_token: SessionToken,
        csrf_token: CsrfToken,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            session_token,
            csrf_token,
            created_at,
            expires_at,
        }
    }

    pub fn session_token(&self) -> &SessionToken {
        &self.session_token
    }

    pub fn csrf_token(&self) -> &CsrfToken {
        &self.csrf_token
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    /// Both tokens must belong to this same session.
    pub fn matches(&self, session_token: &SessionToken, csrf_token: &CsrfToken) -> bool {
        self.session_token.as_ref().expose_secret() == session_token.as_ref().expose_secret()
            && self.csrf_token.as_ref().expose_secret() == csrf_token.as_ref().expose_secret()
    }
}
