use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, types::Json};
use uuid::Uuid;

use palaver_core::{
    CsrfToken, Identity, NewUser, PublicProfile, Session, SessionToken, User, UserId, UserStore,
    UserStoreError, Username,
};

/// Users live in one table; each row carries its sessions as a jsonb array,
/// so every session mutation is a single-row `UPDATE`.
#[derive(Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        PostgresUserStore { pool }
    }
}

/// Stored shape of one element of `users.sessions`.
#[derive(Debug, Serialize, Deserialize)]
struct SessionDocument {
    session_token: String,
    csrf_token: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl From<&Session> for SessionDocument {
    fn from(session: &Session) -> Self {
        Self {
            session_token: session.session_token().as_ref().expose_secret().clone(),
            csrf_token: session.csrf_token().as_ref().expose_secret().clone(),
            created_at: session.created_at(),
            expires_at: session.expires_at(),
        }
    }
}

impl TryFrom<SessionDocument> for Session {
    type Error = UserStoreError;

    fn try_from(doc: SessionDocument) -> Result<Self, Self::Error> {
        let session_token = SessionToken::parse(doc.session_token)
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
        let csrf_token = CsrfToken::parse(doc.csrf_token)
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
        Ok(Session::from_parts(
            session_token,
            csrf_token,
            doc.created_at,
            doc.expires_at,
        ))
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    password_hash: String,
    sessions: Json<Vec<SessionDocument>>,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = UserStoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let username = Username::parse(row.username)
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
        let sessions = row
            .sessions
            .0
            .into_iter()
            .map(Session::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(User::from_parts(
            UserId::from(row.id),
            username,
            Secret::new(row.password_hash),
            sessions,
            row.created_at,
        ))
    }
}

#[derive(sqlx::FromRow)]
struct ProfileRow {
    id: Uuid,
    username: String,
    created_at: DateTime<Utc>,
}

fn unexpected(e: sqlx::Error) -> UserStoreError {
    UserStoreError::UnexpectedError(e.to_string())
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn add_user(&self, user: NewUser) -> Result<UserId, UserStoreError> {
        let id = UserId::new();

        sqlx::query(
            r#"
                INSERT INTO users (id, username, password_hash, sessions, created_at)
                VALUES ($1, $2, $3, '[]'::jsonb, $4)
            "#,
        )
        .bind(id.as_uuid())
        .bind(user.username().as_str())
        .bind(user.password_hash().expose_secret())
        .bind(user.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return UserStoreError::UserAlreadyExists;
                }
            }
            unexpected(e)
        })?;

        Ok(id)
    }

    #[tracing::instrument(name = "Checking username in PostgreSQL", skip_all)]
    async fn user_exists(&self, username: &Username) -> Result<bool, UserStoreError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users WHERE username = $1)")
            .bind(username.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(unexpected)
    }

    #[tracing::instrument(name = "Retrieving user from PostgreSQL", skip_all)]
    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, username, password_hash, sessions, created_at
                FROM users
                WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(unexpected)?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };
        User::try_from(row)
    }

    #[tracing::instrument(name = "Retrieving profile from PostgreSQL", skip_all)]
    async fn get_user_by_id(&self, id: &UserId) -> Result<PublicProfile, UserStoreError> {
        let row = sqlx::query_as::<_, ProfileRow>(
            "SELECT id, username, created_at FROM users WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(unexpected)?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };
        Ok(PublicProfile {
            id: UserId::from(row.id),
            username: Username::parse(row.username)
                .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?,
            created_at: row.created_at,
        })
    }

    #[tracing::instrument(name = "Appending session in PostgreSQL", skip_all)]
    async fn append_session(
        &self,
        username: &Username,
        session: Session,
    ) -> Result<(), UserStoreError> {
        let result = sqlx::query(
            r#"
                UPDATE users
                SET sessions = COALESCE(
                        (SELECT jsonb_agg(s)
                         FROM jsonb_array_elements(sessions) AS s
                         WHERE (s->>'expires_at')::timestamptz > $3),
                        '[]'::jsonb
                    ) || jsonb_build_array($2::jsonb)
                WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .bind(Json(SessionDocument::from(&session)))
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;

        if result.rows_affected() == 0 {
            return Err(UserStoreError::UserNotFound);
        }
        Ok(())
    }

    #[tracing::instrument(name = "Removing session in PostgreSQL", skip_all)]
    async fn remove_session(
        &self,
        username: &Username,
        session_token: &SessionToken,
    ) -> Result<(), UserStoreError> {
        sqlx::query(
            r#"
                UPDATE users
                SET sessions = COALESCE(
                        (SELECT jsonb_agg(s)
                         FROM jsonb_array_elements(sessions) AS s
                         WHERE s->>'session_token' <> $2),
                        '[]'::jsonb
                    )
                WHERE username = $1
            "#,
        )
        .bind(username.as_str())
        .bind(session_token.as_ref().expose_secret())
        .execute(&self.pool)
        .await
        .map_err(unexpected)?;

        Ok(())
    }

    #[tracing::instrument(name = "Resolving session in PostgreSQL", skip_all)]
    async fn resolve_session(
        &self,
        session_token: &SessionToken,
        csrf_token: &CsrfToken,
    ) -> Result<Identity, UserStoreError> {
        let row = sqlx::query_as::<_, (Uuid, String)>(
            r#"
                SELECT u.id, u.username
                FROM users AS u
                WHERE u.sessions @> jsonb_build_array(
                        jsonb_build_object('session_token', $1::text, 'csrf_token', $2::text)
                    )
                  AND EXISTS (
                        SELECT 1
                        FROM jsonb_array_elements(u.sessions) AS s
                        WHERE s->>'session_token' = $1
                          AND s->>'csrf_token' = $2
                          AND (s->>'expires_at')::timestamptz > $3
                    )
                LIMIT 1
            "#,
        )
        .bind(session_token.as_ref().expose_secret())
        .bind(csrf_token.as_ref().expose_secret())
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(unexpected)?;

        let Some((id, username)) = row else {
            return Err(UserStoreError::SessionNotFound);
        };
        Ok(Identity {
            user_id: UserId::from(id),
            username: Username::parse(username)
                .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?,
        })
    }
}
