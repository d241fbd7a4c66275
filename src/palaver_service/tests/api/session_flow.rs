use crate::helpers::{TestApp, TestSession, session_from};

#[tokio::test]
async fn full_session_lifecycle() {
    let app = TestApp::new().await;

    assert_eq!(app.post_register("alice123", "password1").await.status(), 201);
    assert_eq!(app.post_register("alice123", "password1").await.status(), 409);

    let first = session_from(&app.post_login("alice123", "password1").await);
    let second = session_from(&app.post_login("alice123", "password1").await);

    assert_eq!(app.post_message(&first, "hi from A").await.status(), 201);

    // A valid session cookie with the other session's CSRF token is rejected.
    let crossed = TestSession {
        session_token: first.session_token.clone(),
        csrf_token: second.csrf_token.clone(),
    };
    assert_eq!(app.get_messages(&crossed, "page=1&limit=5").await.status(), 401);

    assert_eq!(app.post_logout(&first).await.status(), 200);

    assert_eq!(app.get_messages(&first, "page=1&limit=5").await.status(), 401);
    // The gate rejects a dead session; repeat-logout idempotence is covered in LogoutUseCase tests.
    assert_eq!(app.post_logout(&first).await.status(), 401);
    assert_eq!(app.get_messages(&second, "page=1&limit=5").await.status(), 200);

    assert_eq!(app.post_login("alice123", "wrongpass").await.status(), 401);
}
