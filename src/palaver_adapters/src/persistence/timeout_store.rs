use std::time::Duration;

use palaver_core::{
    CsrfToken, Identity, Message, MessageId, MessagePage, MessageStore, MessageStoreError,
    MessageText, NewUser, Pagination, PublicProfile, Session, SessionToken, User, UserId,
    UserStore, UserStoreError, Username,
};

async fn with_deadline<T, E>(
    timeout: Duration,
    fut: impl Future<Output = Result<T, E>>,
    on_elapsed: impl FnOnce() -> E,
) -> Result<T, E> {
    match tokio::time::timeout(timeout, fut).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(timeout_ms = timeout.as_millis() as u64, "store call timed out");
            Err(on_elapsed())
        }
    }
}

/// Bounds every call on the wrapped user store; an elapsed deadline
/// surfaces as `UnexpectedError`.
#[derive(Clone)]
pub struct TimeoutUserStore<U> {
    inner: U,
    timeout: Duration,
}

impl<U> TimeoutUserStore<U> {
    pub fn new(inner: U, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    fn elapsed(&self) -> UserStoreError {
        UserStoreError::UnexpectedError(format!("store call exceeded {:?}", self.timeout))
    }
}

#[async_trait::async_trait]
impl<U: UserStore> UserStore for TimeoutUserStore<U> {
    async fn add_user(&self, user: NewUser) -> Result<UserId, UserStoreError> {
        with_deadline(self.timeout, self.inner.add_user(user), || self.elapsed()).await
    }

    async fn user_exists(&self, username: &Username) -> Result<bool, UserStoreError> {
        with_deadline(self.timeout, self.inner.user_exists(username), || self.elapsed()).await
    }

    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserStoreError> {
        with_deadline(
            self.timeout,
            self.inner.get_user_by_username(username),
            || self.elapsed(),
        )
        .await
    }

    async fn get_user_by_id(&self, id: &UserId) -> Result<PublicProfile, UserStoreError> {
        with_deadline(self.timeout, self.inner.get_user_by_id(id), || self.elapsed()).await
    }

    async fn append_session(
        &self,
        username: &Username,
        session: Session,
    ) -> Result<(), UserStoreError> {
        with_deadline(
            self.timeout,
            self.inner.append_session(username, session),
            || self.elapsed(),
        )
        .await
    }

    async fn remove_session(
        &self,
        username: &Username,
        session_token: &SessionToken,
    ) -> Result<(), UserStoreError> {
        with_deadline(
            self.timeout,
            self.inner.remove_session(username, session_token),
            || self.elapsed(),
        )
        .await
    }

    async fn resolve_session(
        &self,
        session_token: &SessionToken,
        csrf_token: &CsrfToken,
    ) -> Result<Identity, UserStoreError> {
        with_deadline(
            self.timeout,
            self.inner.resolve_session(session_token, csrf_token),
            || self.elapsed(),
        )
        .await
    }
}

#[derive(Clone)]
pub struct TimeoutMessageStore<M> {
    inner: M,
    timeout: Duration,
}

impl<M> TimeoutMessageStore<M> {
    pub fn new(inner: M, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    fn elapsed(&self) -> MessageStoreError {
        MessageStoreError::UnexpectedError(format!("store call exceeded {:?}", self.timeout))
    }
}

#[async_trait::async_trait]
impl<M: MessageStore> MessageStore for TimeoutMessageStore<M> {
    async fn add_message(&self, message: Message) -> Result<(), MessageStoreError> {
        with_deadline(self.timeout, self.inner.add_message(message), || self.elapsed()).await
    }

    async fn get_page(&self, pagination: Pagination) -> Result<MessagePage, MessageStoreError> {
        with_deadline(self.timeout, self.inner.get_page(pagination), || self.elapsed()).await
    }

    async fn update_text(
        &self,
        id: &MessageId,
        author: &UserId,
        text: MessageText,
    ) -> Result<Message, MessageStoreError> {
        with_deadline(
            self.timeout,
            self.inner.update_text(id, author, text),
            || self.elapsed(),
        )
        .await
    }

    async fn delete_message(
        &self,
        id: &MessageId,
        author: &UserId,
    ) -> Result<(), MessageStoreError> {
        with_deadline(
            self.timeout,
            self.inner.delete_message(id, author),
            || self.elapsed(),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::HashMapUserStore;

    #[derive(Clone)]
    struct StalledStore;

    #[async_trait::async_trait]
    impl UserStore for StalledStore {
        async fn add_user(&self, _user: NewUser) -> Result<UserId, UserStoreError> {
            std::future::pending().await
        }

        async fn user_exists(&self, _username: &Username) -> Result<bool, UserStoreError> {
            std::future::pending().await
        }

        async fn get_user_by_username(&self, _username: &Username) -> Result<User, UserStoreError> {
            std::future::pending().await
        }

        async fn get_user_by_id(&self, _id: &UserId) -> Result<PublicProfile, UserStoreError> {
            std::future::pending().await
        }

        async fn append_session(
            &self,
            _username: &Username,
            _session: Session,
        ) -> Result<(), UserStoreError> {
            std::future::pending().await
        }

        async fn remove_session(
            &self,
            _username: &Username,
            _session_token: &SessionToken,
        ) -> Result<(), UserStoreError> {
            std::future::pending().await
        }

        async fn resolve_session(
            &self,
            _session_token: &SessionToken,
            _csrf_token: &CsrfToken,
        ) -> Result<Identity, UserStoreError> {
            std::future::pending().await
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_store_times_out() {
        let store = TimeoutUserStore::new(StalledStore, Duration::from_secs(3));

        let result = store
            .resolve_session(&SessionToken::new(), &CsrfToken::new())
            .await;

        assert!(matches!(result, Err(UserStoreError::UnexpectedError(_))));
    }

    #[tokio::test]
    async fn test_fast_store_passes_through() {
        let store = TimeoutUserStore::new(HashMapUserStore::new(), Duration::from_secs(3));
        let username = Username::parse("alice_wonder").unwrap();

        assert!(!store.user_exists(&username).await.unwrap());
        assert_eq!(
            store.get_user_by_username(&username).await.unwrap_err(),
            UserStoreError::UserNotFound
        );
    }
}
