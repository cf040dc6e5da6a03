use super::*;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    String::from_utf8(bytes.to_vec()).expect("body is utf-8")
}

#[tokio::test]
async fn health_check_is_ok() {
    let app = stub_app(
        StubOutcome::Records(vec![record("A", "₹1", "")]),
        StubOutcome::Fault,
    );

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["target"], "https://example.com/catalog");
}

#[tokio::test]
async fn catalog_page_renders_records_on_success() {
    let app = stub_app(
        StubOutcome::Records(vec![
            record("Console X", "₹29,990", "https://img.example/a.jpg"),
            record("Console Y", "", "https://img.example/b.jpg"),
        ]),
        StubOutcome::Fault,
    );

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Console X"));
    assert!(body.contains("₹29,990"));
    assert!(body.contains("Console Y"));
}

#[tokio::test]
async fn catalog_page_renders_retry_message_with_500_on_terminal_failure() {
    let app = stub_app(StubOutcome::Fault, StubOutcome::Fault);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_string(response).await;
    assert!(body.contains("Please try again later"));
    // No internal fault detail leaks into the page.
    assert!(!body.contains("container never appeared"));
}

#[tokio::test]
async fn catalog_api_returns_records_and_timestamp() {
    let app = stub_app(
        StubOutcome::Records(vec![record("Console X", "₹29,990", "a.jpg")]),
        StubOutcome::Fault,
    );

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/catalog")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["records"][0]["title"], "Console X");
    assert_eq!(body["data"]["records"][0]["imageURL"], "a.jpg");
    assert!(body["data"]["timestamp"].is_string());
}

#[tokio::test]
async fn catalog_api_maps_terminal_failure_to_service_unavailable() {
    let app = stub_app(StubOutcome::Fault, StubOutcome::Fault);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/catalog")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "SERVICE_UNAVAILABLE");
}
