use crate::helpers::TestApp;

#[tokio::test]
async fn post_then_list_newest_first() {
    let app = TestApp::new().await;
    let (_, session) = app.signed_in_user().await;

    for text in ["first", "second", "third"] {
        let response = app.post_message(&session, text).await;
        assert_eq!(response.status(), 201);
    }

    let response = app.get_messages(&session, "page=1&limit=2").await;
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["total_count"], 3);
    let texts: Vec<&str> = body["messages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|message| message["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, ["third", "second"]);

    let page_two: serde_json::Value = app
        .get_messages(&session, "page=2&limit=2")
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(page_two["messages"][0]["text"], "first");
}

#[tokio::test]
async fn invalid_pagination_is_a_bad_request() {
    let app = TestApp::new().await;
    let (_, session) = app.signed_in_user().await;

    let test_cases = [
        ("", "No page number provided"),
        ("page=1", "No limit number provided"),
        ("page=abc&limit=10", "Invalid page number"),
        ("page=0&limit=10", "Invalid page number"),
        ("page=1&limit=101", "Limit must be between 1 and 100"),
    ];

    for (query, expected) in test_cases {
        let response = app.get_messages(&session, query).await;
        assert_eq!(response.status(), 400, "Failed for query: {query:?}");
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["error"], expected, "Failed for query: {query:?}");
    }
}

#[tokio::test]
async fn message_text_is_validated() {
    let app = TestApp::new().await;
    let (_, session) = app.signed_in_user().await;

    assert_eq!(app.post_message(&session, "").await.status(), 400);
    assert_eq!(
        app.post_message(&session, &"x".repeat(501)).await.status(),
        400
    );
    assert_eq!(
        app.post_message(&session, &"x".repeat(500)).await.status(),
        201
    );
}

#[tokio::test]
async fn only_the_author_can_edit_or_delete() {
    let app = TestApp::new().await;
    let (_, author) = app.signed_in_user().await;
    let (_, stranger) = app.signed_in_user().await;

    let posted: serde_json::Value = app
        .post_message(&author, "hello")
        .await
        .json()
        .await
        .unwrap();
    let id = posted["id"].as_str().unwrap();

    assert_eq!(app.patch_message(&stranger, id, "hijacked").await.status(), 404);
    assert_eq!(app.delete_message(&stranger, id).await.status(), 404);

    let edited = app.patch_message(&author, id, "hello, world").await;
    assert_eq!(edited.status(), 200);
    let edited: serde_json::Value = edited.json().await.unwrap();
    assert_eq!(edited["text"], "hello, world");

    assert_eq!(app.delete_message(&author, id).await.status(), 200);
    assert_eq!(app.delete_message(&author, id).await.status(), 404);
}

#[tokio::test]
async fn malformed_message_id_is_a_bad_request() {
    let app = TestApp::new().await;
    let (_, session) = app.signed_in_user().await;

    assert_eq!(app.delete_message(&session, "nope").await.status(), 400);
}
