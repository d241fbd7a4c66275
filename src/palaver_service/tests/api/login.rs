use crate::helpers::{PASSWORD, TestApp, random_username, session_from, set_cookie};

#[tokio::test]
async fn login_sets_session_and_csrf_cookies() {
    let app = TestApp::new().await;
    let username = random_username();
    app.post_register(&username, PASSWORD).await;

    let response = app.post_login(&username, PASSWORD).await;

    assert_eq!(response.status(), 200);

    let session_cookie = set_cookie(&response, "session_token").unwrap();
    assert!(session_cookie.contains("HttpOnly"));
    assert!(session_cookie.contains("Path=/"));
    assert!(session_cookie.contains("SameSite=Lax"));
    assert!(session_cookie.contains("Expires="));

    let csrf_cookie = set_cookie(&response, "csrf_token").unwrap();
    assert!(!csrf_cookie.contains("HttpOnly"));
    assert!(csrf_cookie.contains("Expires="));

    let session = session_from(&response);
    assert_eq!(session.session_token.len(), 43);
    assert_eq!(session.csrf_token.len(), 43);
    assert_ne!(session.session_token, session.csrf_token);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Login successful");
}

#[tokio::test]
async fn wrong_password_and_unknown_user_look_the_same() {
    let app = TestApp::new().await;
    let username = random_username();
    app.post_register(&username, PASSWORD).await;

    let wrong_password = app.post_login(&username, "wrongpass").await;
    let unknown_user = app.post_login("nobody_registered", PASSWORD).await;

    assert_eq!(wrong_password.status(), 401);
    assert_eq!(unknown_user.status(), 401);
    assert!(set_cookie(&wrong_password, "session_token").is_none());
    assert!(set_cookie(&unknown_user, "session_token").is_none());

    let wrong_password: serde_json::Value = wrong_password.json().await.unwrap();
    let unknown_user: serde_json::Value = unknown_user.json().await.unwrap();
    assert_eq!(wrong_password, unknown_user);
    assert_eq!(wrong_password["error"], "Invalid username or password");
}

#[tokio::test]
async fn every_login_opens_an_independent_session() {
    let app = TestApp::new().await;
    let username = random_username();
    app.post_register(&username, PASSWORD).await;

    let first = session_from(&app.post_login(&username, PASSWORD).await);
    let second = session_from(&app.post_login(&username, PASSWORD).await);

    assert_ne!(first.session_token, second.session_token);
    assert_eq!(app.get_messages(&first, "page=1&limit=10").await.status(), 200);
    assert_eq!(app.get_messages(&second, "page=1&limit=10").await.status(), 200);
}
