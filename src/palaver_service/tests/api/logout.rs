use reqwest::header::COOKIE;

use crate::helpers::{TestApp, TestSession, set_cookie};

#[tokio::test]
async fn logout_clears_both_cookies() {
    let app = TestApp::new().await;
    let (_, session) = app.signed_in_user().await;

    let response = app.post_logout(&session).await;

    assert_eq!(response.status(), 200);
    for name in ["session_token", "csrf_token"] {
        let cookie = set_cookie(&response, name).unwrap();
        assert!(cookie.starts_with(&format!("{name}=;")));
        assert!(cookie.contains("Max-Age=0"));
    }
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Logged out successfully");
}

#[tokio::test]
async fn logout_without_session_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}/auth/logout", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn logout_requires_the_matching_csrf_header() {
    let app = TestApp::new().await;
    let (_, session) = app.signed_in_user().await;

    let response = app
        .http_client
        .post(format!("{}/auth/logout", app.address))
        .header(COOKIE, format!("session_token={}", session.session_token))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 401);

    let forged = TestSession {
        csrf_token: "forged".to_string(),
        ..session.clone()
    };
    assert_eq!(app.post_logout(&forged).await.status(), 401);

    // The session survived both attempts.
    assert_eq!(app.post_logout(&session).await.status(), 200);
}
