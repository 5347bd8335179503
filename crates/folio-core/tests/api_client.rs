//! Backend client and page loader against a local HTTP listener.
//!
//! Run with: `cargo test -p folio-core --test api_client`

mod common;

use common::{closed_port, serve_once};
use folio_core::{load_portfolio_page, ApiClient, ApiError, Field, FormState, Range};
use serde_json::Value;

const PORTFOLIO_JSON: &str = r#"{
    "message": "ok",
    "range": "BE",
    "title": "Payments API",
    "fileName": "3f2a",
    "extension": "webm",
    "portfolioDate": "20231105",
    "about": "Service rewrite",
    "email": "dev@example.com",
    "createdDate": "2023-11-06T09:00:00Z"
}"#;

#[tokio::test]
async fn test_fetch_portfolio_issues_single_get() {
    let (base, server) = serve_once(200, PORTFOLIO_JSON).await;
    let client = ApiClient::new(&base).unwrap();

    let content = client.fetch_portfolio().await.unwrap();
    assert_eq!(content.title, "Payments API");
    assert_eq!(content.video_key(), "3f2a.webm");

    let request = server.await.unwrap();
    assert_eq!(request.request_line(), "get /portfolios/file http/1.1");
}

#[tokio::test]
async fn test_loader_wraps_content_as_page_props() {
    let (base, _server) = serve_once(200, PORTFOLIO_JSON).await;
    let client = ApiClient::new(&base).unwrap();

    let page = load_portfolio_page(&client).await.unwrap();
    assert_eq!(page.content.range, "BE");
    assert_eq!(page.content.display_date(), "2023.11.05");
}

#[tokio::test]
async fn test_loader_propagates_status_error() {
    let (base, _server) = serve_once(500, r#"{"message":"boom"}"#).await;
    let client = ApiClient::new(&base).unwrap();

    match load_portfolio_page(&client).await {
        Err(ApiError::Status { status, url }) => {
            assert_eq!(status, 500);
            assert!(url.ends_with("/portfolios/file"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_loader_propagates_decode_error() {
    let (base, _server) = serve_once(200, r#"{"title": 42}"#).await;
    let client = ApiClient::new(&base).unwrap();

    let result = load_portfolio_page(&client).await;
    assert!(matches!(result, Err(ApiError::Decode(_))), "{result:?}");
}

#[tokio::test]
async fn test_loader_propagates_transport_error() {
    let client = ApiClient::new(&closed_port().await).unwrap();

    let result = load_portfolio_page(&client).await;
    assert!(matches!(result, Err(ApiError::Request(_))), "{result:?}");
}

#[tokio::test]
async fn test_raw_get_does_not_check_status() {
    let (base, _server) = serve_once(404, "{}").await;
    let client = ApiClient::new(&base).unwrap();

    let response = client.get("portfolios/file").await.unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn test_request_code_posts_email_as_json() {
    let (base, server) = serve_once(200, r#"{"message":"sent"}"#).await;
    let client = ApiClient::new(&base).unwrap();

    let reply = client.request_code("dev@example.com").await.unwrap();
    assert_eq!(reply["message"], "sent");

    let request = server.await.unwrap();
    assert_eq!(request.request_line(), "post /portfolios/email http/1.1");
    assert_eq!(request.header("content-type"), Some("application/json"));

    let body: Value = serde_json::from_slice(&request.body).unwrap();
    assert_eq!(body, serde_json::json!({ "email": "dev@example.com" }));
}

#[tokio::test]
async fn test_submit_portfolio_posts_gated_payload() {
    let (base, server) = serve_once(200, r#"{"message":"created"}"#).await;
    let client = ApiClient::new(&base).unwrap();

    let mut form = FormState::new();
    form.select_range(Range::BE);
    form.set_field(Field::Title, "Payments API");
    form.set_field(Field::Date, "20231105");
    form.set_field(Field::About, "Service rewrite");
    form.set_field(Field::Email, "dev@example.com");
    form.set_field(Field::Code, "123456");
    let submission = form.submission("3f2a.webm").unwrap();

    client.submit_portfolio(&submission).await.unwrap();

    let request = server.await.unwrap();
    assert_eq!(request.request_line(), "post /portfolios http/1.1");

    let body: Value = serde_json::from_slice(&request.body).unwrap();
    assert_eq!(body["range"], "BE");
    assert_eq!(body["title"], "Payments API");
    assert_eq!(body["formValid"], true);
    assert_eq!(body["fileKey"], "3f2a.webm");
}

#[tokio::test]
async fn test_post_non_success_is_status_error() {
    let (base, _server) = serve_once(403, r#"{"message":"denied"}"#).await;
    let client = ApiClient::new(&base).unwrap();

    let result = client.request_code("dev@example.com").await;
    assert!(
        matches!(result, Err(ApiError::Status { status: 403, .. })),
        "{result:?}"
    );
}
