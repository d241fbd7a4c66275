use crate::helpers::{PASSWORD, TestApp, random_username};

#[tokio::test]
async fn register_returns_201_and_a_user_id() {
    let app = TestApp::new().await;

    let response = app.post_register(&random_username(), PASSWORD).await;

    assert_eq!(response.status(), 201);
    assert!(
        response.headers().get("set-cookie").is_none(),
        "registration must not log the user in"
    );
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "User registered successfully");
    assert!(body["user_id"].as_str().is_some());
}

#[tokio::test]
async fn register_rejects_short_credentials_with_406() {
    let app = TestApp::new().await;

    let test_cases = [
        ("short", PASSWORD),
        ("long_enough_name", "short"),
        ("", ""),
        ("seven77", "password1"),
    ];

    for (username, password) in test_cases {
        let response = app.post_register(username, password).await;
        assert_eq!(
            response.status(),
            406,
            "Failed for input: {username:?}/{password:?}"
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Invalid username/password");
    }
}

#[tokio::test]
async fn register_twice_returns_409() {
    let app = TestApp::new().await;
    let username = random_username();

    assert_eq!(app.post_register(&username, PASSWORD).await.status(), 201);
    let response = app.post_register(&username, "another-password").await;

    assert_eq!(response.status(), 409);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["error"], "User already exists");
}

#[tokio::test]
async fn register_with_wrong_content_type_is_rejected() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}/auth/register", app.address))
        .json(&serde_json::json!({ "username": "alice123", "password": PASSWORD }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
}
