#![cfg(feature = "test-utils")]

mod support;
use std::sync::Arc;

use crate::support::{post_json, tracing_init};
use serde_json::json;
use wanted::api::{Method, PostStatus, Transport};
use wanted::search::{
    render_results, QueryController, ResultView, SharedSearchState, NO_RESULTS_LABEL,
};
use wanted::test_support::{MockResponse, MockTransport, RecordingNavigator};

fn setup() -> (
    Arc<MockTransport>,
    RecordingNavigator,
    QueryController<SharedSearchState, RecordingNavigator>,
) {
    tracing_init();

    let transport = Arc::new(MockTransport::new());
    let navigator = RecordingNavigator::new();
    let shared: Arc<dyn Transport> = transport.clone();
    let controller = QueryController::new(shared, navigator.clone(), SharedSearchState::new());
    (transport, navigator, controller)
}

#[tokio::test]
async fn test_mount_with_empty_term_shows_no_posts_found() {
    let (transport, navigator, controller) = setup();
    transport.respond(Method::Get, "/api/search/", MockResponse::Json(json!([])));

    // Page mount runs one search with whatever term is set
    controller.run_search().await;

    assert_eq!(
        transport.requests(),
        vec![(Method::Get, "/api/search/".to_string())]
    );
    let state = controller.state();
    let views: Vec<_> = render_results(state.results()).collect();
    assert_eq!(views, vec![ResultView::NoResults]);
    assert_eq!(NO_RESULTS_LABEL, "No Posts Found");
    assert!(navigator.visited().is_empty());
}

#[tokio::test]
async fn test_search_for_bike_renders_one_card() {
    let (transport, _, controller) = setup();
    transport.respond(
        Method::Get,
        "/api/search/bike",
        MockResponse::Json(json!([post_json(1, "Blue bike", "Vehicles")])),
    );

    controller.set_term("bike");
    controller.run_search().await;

    let state = controller.state();
    let views: Vec<_> = render_results(state.results()).collect();
    assert_eq!(views.len(), 1);
    match views[0] {
        ResultView::Card(card) => {
            assert_eq!(card.id, 1);
            assert_eq!(card.title, "Blue bike");
            assert_eq!(card.category, "Vehicles");
            assert_eq!(card.picture_name, Some("posts/1.jpg"));
            assert_eq!(card.reward.map(|r| r.to_string()).as_deref(), Some("20.00"));
            assert_eq!(card.status, &PostStatus::Active);
        }
        ResultView::NoResults => panic!("expected a card"),
    }
}

#[tokio::test]
async fn test_results_replace_previous_listing_in_order() {
    let (transport, _, controller) = setup();
    transport.respond(
        Method::Get,
        "/api/search/",
        MockResponse::Json(json!([
            post_json(1, "Wallet", "Personal"),
            post_json(2, "Phone", "Electronics"),
            post_json(3, "Keys", "Personal"),
        ])),
    );
    transport.respond(
        Method::Get,
        "/api/search/phone",
        MockResponse::Json(json!([
            post_json(9, "Phone charger", "Electronics"),
            post_json(2, "Phone", "Electronics"),
        ])),
    );

    controller.run_search().await;
    assert_eq!(controller.state().results().len(), 3);

    controller.set_term("phone");
    controller.run_search().await;

    let ids: Vec<u64> = controller.state().results().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![9, 2]);
}

#[tokio::test]
async fn test_failed_search_keeps_stale_results_and_reports_error() {
    let (transport, navigator, controller) = setup();
    transport.respond(
        Method::Get,
        "/api/search/",
        MockResponse::Json(json!([post_json(1, "Wallet", "Personal")])),
    );
    transport.respond(Method::Get, "/api/search/gloves", MockResponse::Unreachable);

    controller.run_search().await;
    controller.set_term("gloves");
    controller.run_search().await;

    let state = controller.state();
    assert_eq!(state.results().len(), 1);
    assert!(state
        .error_message()
        .unwrap()
        .starts_with("Could not reach the server"));
    assert!(navigator.visited().is_empty());

    // The next successful search clears the error
    transport.respond(Method::Get, "/api/search/gloves", MockResponse::Json(json!([])));
    controller.run_search().await;
    assert_eq!(controller.state().error_message(), None);
}

#[tokio::test]
async fn test_forbidden_search_redirects_home() {
    let (transport, navigator, controller) = setup();
    transport.respond(Method::Get, "/api/search/", MockResponse::Status(403));

    controller.run_search().await;

    assert_eq!(navigator.visited(), vec!["/".to_string()]);
    assert!(controller.state().results().is_empty());
}
