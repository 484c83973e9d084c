//! Integration tests for single-order operations against a mock Admin API.
//!
//! Covers lookup, count, create, update, delete, the order actions, error
//! mapping, and the tolerant decoding of line items and shipping lines.

use serde_json::json;
use shopify_orders::rest::resources::{
    CancelReason, FinancialStatus, FinancialStatusFilter, Order, OrderCancelOptions,
    OrderCountParams, OrderFindParams, OrderStatus,
};
use shopify_orders::rest::{ResourceError, RestResource};
use shopify_orders::{AccessToken, ApiVersion, HostUrl, RestClient, ShopDomain, ShopifyConfig};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> RestClient {
    let config = ShopifyConfig::builder()
        .shop(ShopDomain::new("test-shop").unwrap())
        .access_token(AccessToken::new("shpat_test").unwrap())
        .host(HostUrl::new(server.uri()).unwrap())
        .api_version(ApiVersion::latest())
        .build()
        .unwrap();
    RestClient::new(&config).unwrap()
}

fn order_with_id(id: u64) -> Order {
    Order {
        id: Some(id),
        ..Default::default()
    }
}

// ============================================================================
// find
// ============================================================================

#[tokio::test]
async fn test_find_decodes_order_and_normalizes_nested_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/orders/450789469.json"))
        .and(header("X-Shopify-Access-Token", "shpat_test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "order": {
                "id": 450_789_469,
                "name": "#1001",
                "financial_status": "paid",
                "total_price": "199.65",
                "line_items": [
                    {"id": 1, "title": "No properties"},
                    {"id": 2, "title": "Null properties", "properties": null},
                    {"id": 3, "title": "Empty object", "properties": {}},
                    {"id": 4, "title": "Single object", "properties": {"name": "engraving", "value": "A.B."}},
                    {"id": 5, "title": "Array", "properties": [
                        {"name": "size", "value": "L"},
                        {"name": "color", "value": "red"}
                    ]}
                ],
                "shipping_lines": [
                    {"id": 10, "requested_fulfillment_service_id": null},
                    {"id": 11, "requested_fulfillment_service_id": 12345},
                    {"id": 12, "requested_fulfillment_service_id": "third-party"},
                    {"id": 13}
                ]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let order = Order::find(&client, 450_789_469, None).await.unwrap();

    assert_eq!(order.id, Some(450_789_469));
    assert_eq!(order.financial_status, Some(FinancialStatus::Paid));

    let counts: Vec<usize> = order.line_items.iter().map(|li| li.properties.len()).collect();
    assert_eq!(counts, vec![0, 0, 0, 1, 2]);
    assert_eq!(order.line_items[3].properties[0].name, "engraving");
    assert_eq!(order.line_items[4].properties[1].name, "color");

    let service_ids: Vec<&str> = order
        .shipping_lines
        .iter()
        .map(|s| s.requested_fulfillment_service_id.as_str())
        .collect();
    assert_eq!(service_ids, vec!["", "12345", "third-party", ""]);
}

#[tokio::test]
async fn test_find_sends_field_selection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/orders/1.json"))
        .and(query_param("fields", "id,name"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"order": {"id": 1, "name": "#1"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = OrderFindParams {
        fields: Some("id,name".to_string()),
    };
    let order = Order::find(&client, 1, Some(params)).await.unwrap();

    assert_eq!(order.name.as_deref(), Some("#1"));
}

#[tokio::test]
async fn test_find_missing_order_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/orders/999.json"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errors": "Not Found"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = Order::find(&client, 999, None).await.unwrap_err();

    match error {
        ResourceError::NotFound { resource, id } => {
            assert_eq!(resource, "Order");
            assert_eq!(id, "999");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_find_with_object_service_id_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/orders/5.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "order": {
                "id": 5,
                "shipping_lines": [{"requested_fulfillment_service_id": {"id": 1}}]
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = Order::find(&client, 5, None).await.unwrap_err();

    assert!(matches!(error, ResourceError::Decode { .. }));
}

// ============================================================================
// count
// ============================================================================

#[tokio::test]
async fn test_count_sends_filters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/orders/count.json"))
        .and(query_param("status", "any"))
        .and(query_param("financial_status", "partially_paid"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 42})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = OrderCountParams {
        status: Some(OrderStatus::Any),
        financial_status: Some(FinancialStatusFilter::PartiallyPaid),
        ..Default::default()
    };

    assert_eq!(Order::count(&client, Some(params)).await.unwrap(), 42);
}

#[tokio::test]
async fn test_count_without_number_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/orders/count.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": "many"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = Order::count(&client, None).await.unwrap_err();

    assert!(matches!(error, ResourceError::Decode { .. }));
}

// ============================================================================
// save / delete
// ============================================================================

#[tokio::test]
async fn test_save_new_order_posts_wrapped_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/api/2025-10/orders.json"))
        .and(body_json(json!({"order": {"email": "jane@example.com", "note": "rush"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "order": {"id": 1001, "email": "jane@example.com", "note": "rush"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let order = Order {
        email: Some("jane@example.com".to_string()),
        note: Some("rush".to_string()),
        ..Default::default()
    };
    let saved = order.save(&client).await.unwrap();

    assert_eq!(saved.id, Some(1001));
}

#[tokio::test]
async fn test_save_existing_order_puts_without_read_only_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/admin/api/2025-10/orders/77.json"))
        .and(body_json(json!({"order": {"tags": "vip"}})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"order": {"id": 77, "tags": "vip"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let order = Order {
        id: Some(77),
        name: Some("#1077".to_string()),
        tags: Some("vip".to_string()),
        ..Default::default()
    };
    let saved = order.save(&client).await.unwrap();

    assert_eq!(saved.tags.as_deref(), Some("vip"));
}

#[tokio::test]
async fn test_save_validation_failure_reports_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/api/2025-10/orders.json"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({"errors": {"line_items": ["must have at least one"]}}))
                .insert_header("X-Request-Id", "req-422"),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = Order::default().save(&client).await.unwrap_err();

    match error {
        ResourceError::ValidationFailed { errors, request_id } => {
            assert_eq!(errors["line_items"], vec!["must have at least one".to_string()]);
            assert_eq!(request_id.as_deref(), Some("req-422"));
        }
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_delete_order() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/admin/api/2025-10/orders/88.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    order_with_id(88).delete(&client).await.unwrap();
}

#[tokio::test]
async fn test_delete_without_id_fails_before_request() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let error = Order::default().delete(&client).await.unwrap_err();

    assert!(matches!(
        error,
        ResourceError::PathResolutionFailed { operation: "delete", .. }
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Actions
// ============================================================================

#[tokio::test]
async fn test_cancel_with_sends_options_as_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/api/2025-10/orders/450789469/cancel.json"))
        .and(body_json(json!({
            "amount": "10.00",
            "currency": "USD",
            "reason": "customer",
            "email": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "order": {
                "id": 450_789_469,
                "cancel_reason": "customer",
                "cancelled_at": "2025-10-01T12:00:00Z"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = OrderCancelOptions {
        amount: Some("10.00".to_string()),
        currency: Some("USD".to_string()),
        reason: Some(CancelReason::Customer),
        email: Some(true),
        ..Default::default()
    };
    let cancelled = order_with_id(450_789_469)
        .cancel_with(&client, options)
        .await
        .unwrap();

    assert_eq!(cancelled.cancel_reason, Some(CancelReason::Customer));
    assert!(cancelled.cancelled_at.is_some());
}

#[tokio::test]
async fn test_cancel_refused_is_validation_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/api/2025-10/orders/3/cancel.json"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "errors": ["Cannot cancel an order that has already been cancelled"]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = order_with_id(3).cancel(&client).await.unwrap_err();

    match error {
        ResourceError::ValidationFailed { errors, .. } => {
            assert_eq!(errors["base"].len(), 1);
        }
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_close_and_open() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/api/2025-10/orders/9/close.json"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "order": {"id": 9, "closed_at": "2025-10-02T08:30:00-04:00"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/admin/api/2025-10/orders/9/open.json"))
        .and(body_json(json!({})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"order": {"id": 9, "closed_at": null}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let closed = order_with_id(9).close(&client).await.unwrap();
    assert!(closed.closed_at.is_some());

    let reopened = closed.open(&client).await.unwrap();
    assert!(reopened.closed_at.is_none());
}

#[tokio::test]
async fn test_actions_without_id_fail_before_request() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let error = Order::default().close(&client).await.unwrap_err();

    assert!(matches!(
        error,
        ResourceError::PathResolutionFailed { operation: "close", .. }
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}
