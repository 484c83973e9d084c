//! Integration tests for the HTTP client.
//!
//! These tests verify header handling, retries, and error payloads against a
//! mock server standing in for the shop.

use std::collections::HashMap;

use serde_json::json;
use shopify_orders::clients::{
    ApiCallLimit, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse,
    HttpResponseError, MaxHttpRetriesExceededError, PaginationInfo,
};
use shopify_orders::{AccessToken, HostUrl, InvalidHttpRequestError, ShopDomain, ShopifyConfig};
use wiremock::matchers::{header, header_regex, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BASE_PATH: &str = "/admin/api/2025-10";

fn config_for(server: &MockServer, token: &str) -> ShopifyConfig {
    ShopifyConfig::builder()
        .shop(ShopDomain::new("test-shop").unwrap())
        .access_token(AccessToken::new(token).unwrap())
        .host(HostUrl::new(server.uri()).unwrap())
        .user_agent_prefix("OrderSync/2.0")
        .build()
        .unwrap()
}

fn client_for(server: &MockServer) -> HttpClient {
    HttpClient::new(BASE_PATH, &config_for(server, "shpat_test")).unwrap()
}

// ============================================================================
// Exchanges
// ============================================================================

#[tokio::test]
async fn test_request_sends_default_and_extra_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/orders/count.json"))
        .and(header("X-Shopify-Access-Token", "shpat_test"))
        .and(header("Accept", "application/json"))
        .and(header("X-Custom", "value"))
        .and(header_regex(
            "User-Agent",
            r"^OrderSync/2\.0 \| Shopify Orders Library v.+ \| Rust ",
        ))
        .and(query_param("status", "any"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 3})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = HttpRequest::builder(HttpMethod::Get, "orders/count.json")
        .query_param("status", "any")
        .header("X-Custom", "value")
        .build()
        .unwrap();
    let response = client.request(request).await.unwrap();

    assert!(response.is_ok());
    assert_eq!(response.body["count"], 3);
}

#[tokio::test]
async fn test_post_sends_json_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/api/2025-10/orders/1/close.json"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"order": {"id": 1}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = HttpRequest::builder(HttpMethod::Post, "orders/1/close.json")
        .body(json!({}))
        .build()
        .unwrap();

    assert_eq!(client.request(request).await.unwrap().code, 200);
}

#[tokio::test]
async fn test_empty_body_decodes_as_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/admin/api/2025-10/orders/1.json"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = HttpRequest::builder(HttpMethod::Delete, "orders/1.json")
        .build()
        .unwrap();

    assert_eq!(client.request(request).await.unwrap().body, json!({}));
}

#[tokio::test]
async fn test_error_response_carries_payload_and_request_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/orders/1.json"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(json!({"errors": "Forbidden", "ignored": true}))
                .insert_header("X-Request-Id", "abc-123"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = HttpRequest::builder(HttpMethod::Get, "orders/1.json")
        .tries(3)
        .build()
        .unwrap();
    let error = client.request(request).await.unwrap_err();

    match error {
        HttpError::Response(e) => {
            assert_eq!(e.code, 403);
            assert_eq!(e.error_reference.as_deref(), Some("abc-123"));
            assert!(e.message.contains("Forbidden"));
            assert!(e.message.contains("abc-123"));
            assert!(!e.message.contains("ignored"));
        }
        other => panic!("expected Response, got {other:?}"),
    }
    // 403 is never retried.
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

// ============================================================================
// Retries
// ============================================================================

#[tokio::test]
async fn test_throttled_request_is_retried_after_retry_after() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/orders.json"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(json!({"errors": "Exceeded 2 calls per second for api client."}))
                .insert_header("Retry-After", "0"),
        )
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/orders.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orders": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = HttpRequest::builder(HttpMethod::Get, "orders.json")
        .tries(2)
        .build()
        .unwrap();

    assert_eq!(client.request(request).await.unwrap().code, 200);
}

#[tokio::test]
async fn test_throttled_single_try_returns_response_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/orders.json"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = HttpRequest::builder(HttpMethod::Get, "orders.json")
        .build()
        .unwrap();

    assert!(matches!(
        client.request(request).await,
        Err(HttpError::Response(HttpResponseError { code: 429, .. }))
    ));
}

#[tokio::test]
async fn test_retries_exhausted_reports_try_count() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/orders.json"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(json!({"errors": "Throttled"}))
                .insert_header("Retry-After", "0"),
        )
        .expect(3)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = HttpRequest::builder(HttpMethod::Get, "orders.json")
        .tries(3)
        .build()
        .unwrap();

    match client.request(request).await {
        Err(HttpError::MaxRetries(MaxHttpRetriesExceededError { code, tries, message, .. })) => {
            assert_eq!(code, 429);
            assert_eq!(tries, 3);
            assert!(message.contains("Throttled"));
        }
        other => panic!("expected MaxRetries, got {other:?}"),
    }
}

// ============================================================================
// Construction and validation
// ============================================================================

#[test]
fn test_client_without_host_override_targets_shop() {
    let config = ShopifyConfig::builder()
        .shop(ShopDomain::new("shop-one").unwrap())
        .access_token(AccessToken::new("token-1").unwrap())
        .build()
        .unwrap();
    let client = HttpClient::new(BASE_PATH, &config).unwrap();

    assert_eq!(client.base_uri(), "https://shop-one.myshopify.com");
    assert_eq!(client.base_path(), BASE_PATH);
    assert!(!client.default_headers().contains_key("Host"));
    assert_eq!(
        client.default_headers().get("X-Shopify-Access-Token"),
        Some(&"token-1".to_string())
    );
}

#[tokio::test]
async fn test_client_with_host_override_sends_shop_as_host() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    assert_eq!(client.base_uri(), server.uri());
    assert_eq!(
        client.default_headers().get("Host"),
        Some(&"test-shop.myshopify.com".to_string())
    );
}

#[test]
fn test_invalid_requests_are_rejected_before_sending() {
    assert!(matches!(
        HttpRequest::builder(HttpMethod::Put, "orders/1.json").build(),
        Err(InvalidHttpRequestError::MissingBody { .. })
    ));
    assert!(matches!(
        HttpRequest::builder(HttpMethod::Get, "orders.json")
            .body(json!({"x": 1}))
            .build(),
        Err(InvalidHttpRequestError::UnexpectedBody { .. })
    ));
    assert!(matches!(
        HttpRequest::builder(HttpMethod::Get, "orders.json")
            .tries(0)
            .build(),
        Err(InvalidHttpRequestError::ZeroTries)
    ));
}

#[test]
fn test_response_parsing_all_header_fields() {
    let limit = ApiCallLimit::parse("40/80").unwrap();
    assert_eq!(limit.request_count, 40);
    assert_eq!(limit.bucket_size, 80);

    let link_header = r#"<https://shop.myshopify.com/admin/api/2025-10/orders.json?page_info=next123&limit=50>; rel="next", <https://shop.myshopify.com/admin/api/2025-10/orders.json?page_info=prev456>; rel="previous""#;
    let pagination = PaginationInfo::parse_link_header(link_header);
    assert_eq!(pagination.next.as_ref().unwrap().page_info(), "next123");
    assert_eq!(pagination.next.as_ref().unwrap().limit(), Some(50));
    assert_eq!(pagination.prev.as_ref().unwrap().page_info(), "prev456");

    let mut headers = HashMap::new();
    headers.insert(
        "x-shopify-shop-api-call-limit".to_string(),
        vec!["40/80".to_string()],
    );
    headers.insert("x-request-id".to_string(), vec!["req-12345".to_string()]);
    headers.insert("retry-after".to_string(), vec!["2.5".to_string()]);
    headers.insert("link".to_string(), vec![link_header.to_string()]);
    headers.insert(
        "x-shopify-api-deprecated-reason".to_string(),
        vec!["This endpoint is deprecated".to_string()],
    );

    let response = HttpResponse::new(200, headers, json!({"orders": []}));

    assert!(response.is_ok());
    assert_eq!(response.request_id(), Some("req-12345"));
    assert_eq!(
        response.deprecation_reason(),
        Some("This endpoint is deprecated")
    );
    assert_eq!(response.api_call_limit.unwrap().request_count, 40);
    assert!((response.retry_request_after.unwrap() - 2.5).abs() < f64::EPSILON);
    assert_eq!(response.next_page().unwrap().page_info(), "next123");
}

#[test]
fn test_http_method_display() {
    assert_eq!(HttpMethod::Get.to_string(), "get");
    assert_eq!(HttpMethod::Post.to_string(), "post");
    assert_eq!(HttpMethod::Put.to_string(), "put");
    assert_eq!(HttpMethod::Delete.to_string(), "delete");
}
