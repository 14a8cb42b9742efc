#![cfg(feature = "test-utils")]

mod support;
use std::sync::Arc;

use crate::support::{post_json, tracing_init};
use serde_json::json;
use wanted::api::{AdminClient, ApiError, ErrorKind, Method, Transport};
use wanted::test_support::{MockResponse, MockTransport, RecordingNavigator};

fn setup() -> (
    Arc<MockTransport>,
    RecordingNavigator,
    AdminClient<RecordingNavigator>,
) {
    tracing_init();

    let transport = Arc::new(MockTransport::new());
    let navigator = RecordingNavigator::new();
    let shared: Arc<dyn Transport> = transport.clone();
    let client = AdminClient::new(shared, navigator.clone());
    (transport, navigator, client)
}

#[tokio::test]
async fn test_every_wrapper_redirects_on_forbidden() {
    let (transport, navigator, client) = setup();
    for (method, path) in [
        (Method::Get, "/api/dashboard/stats"),
        (Method::Get, "/api/users"),
        (Method::Get, "/api/posts/all"),
        (Method::Put, "/api/users/4/ban"),
        (Method::Put, "/api/users/4/unban"),
        (Method::Put, "/api/posts/6/ban"),
        (Method::Put, "/api/posts/6/unban"),
    ] {
        transport.respond(method, path, MockResponse::Status(403));
    }

    let errors: Vec<ApiError> = vec![
        client.fetch_dashboard_data().await.map(|_| ()).unwrap_err(),
        client.fetch_dashboard_users().await.map(|_| ()).unwrap_err(),
        client.fetch_dashboard_posts().await.map(|_| ()).unwrap_err(),
        client.ban_user(4).await.map(|_| ()).unwrap_err(),
        client.unban_user(4).await.map(|_| ()).unwrap_err(),
        client.ban_post(6).await.map(|_| ()).unwrap_err(),
        client.unban_post(6).await.map(|_| ()).unwrap_err(),
    ];

    for err in &errors {
        assert_eq!(err.kind(), ErrorKind::AuthorizationFailure);
    }
    assert_eq!(navigator.visited(), vec!["/".to_string(); 7]);
}

#[tokio::test]
async fn test_moderation_round_trip() {
    let (transport, navigator, client) = setup();
    transport.respond(
        Method::Get,
        "/api/posts/all",
        MockResponse::Json(json!([post_json(6, "Spam", "Other")])),
    );
    transport.respond(
        Method::Put,
        "/api/posts/6/ban",
        MockResponse::Json(json!({"message": "Post banned"})),
    );
    transport.respond(
        Method::Get,
        "/api/posts/all",
        MockResponse::Json(json!([{
            "id": 6,
            "title": "Spam",
            "category": "Other",
            "status": "banned"
        }])),
    );

    let before = client.fetch_dashboard_posts().await.unwrap();
    assert_eq!(before[0].status.label(), "Active");

    let ack = client.ban_post(6).await.unwrap();
    assert_eq!(ack.message.as_deref(), Some("Post banned"));

    let after = client.fetch_dashboard_posts().await.unwrap();
    assert_eq!(after[0].status.label(), "Banned");
    assert!(navigator.visited().is_empty());
}

#[tokio::test]
async fn test_not_found_is_returned_without_redirect() {
    let (_, navigator, client) = setup();

    // Nothing scripted: the mock answers 404
    let err = client.unban_user(99).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OtherServerError);
    assert!(navigator.visited().is_empty());
}
