use crate::helpers::{PASSWORD, TestApp, random_username};

#[tokio::test]
async fn profile_is_public_and_hides_secrets() {
    let app = TestApp::new().await;
    let username = random_username();
    let registered: serde_json::Value = app
        .post_register(&username, PASSWORD)
        .await
        .json()
        .await
        .unwrap();
    let user_id = registered["user_id"].as_str().unwrap();

    let response = app.get_profile(user_id).await;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["id"], user_id);
    assert_eq!(body["username"], username.as_str());
    assert!(body["created_at"].is_string());
    assert!(body.get("password_hash").is_none());
    assert!(body.get("sessions").is_none());
}

#[tokio::test]
async fn profile_lookup_errors() {
    let app = TestApp::new().await;

    assert_eq!(app.get_profile("not-a-uuid").await.status(), 400);
    assert_eq!(
        app.get_profile("7f8c3d2e-7a35-4c41-9d5b-1b6d2f0a9c11")
            .await
            .status(),
        404
    );
}
