//! Integration tests for an order's metafields and fulfillments.
//!
//! Both are reached through [`Order::metafields`] and
//! [`Order::fulfillments`], which scope every path under `orders/{id}`.

use serde_json::json;
use shopify_orders::rest::resources::{
    FulfillmentState, Metafield, MetafieldCountParams, MetafieldListParams, Order,
};
use shopify_orders::rest::ResourceError;
use shopify_orders::{AccessToken, ApiVersion, HostUrl, RestClient, ShopDomain, ShopifyConfig};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ORDER_ID: u64 = 450_789_469;

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

fn order_path(rest: &str) -> String {
    format!("/admin/api/2025-10/orders/{ORDER_ID}/{rest}")
}

// ============================================================================
// Accessor
// ============================================================================

#[tokio::test]
async fn test_accessor_exposes_owner_scope() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let metafields = Order::metafields(&client, ORDER_ID);
    assert_eq!(metafields.owner(), "orders");
    assert_eq!(metafields.owner_id(), ORDER_ID);

    let fulfillments = Order::fulfillments(&client, 7);
    assert_eq!(fulfillments.owner_id(), 7);
}

// ============================================================================
// Metafields
// ============================================================================

#[tokio::test]
async fn test_list_order_metafields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(order_path("metafields.json")))
        .and(query_param("namespace", "loyalty"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "metafields": [
                {"id": 1, "namespace": "loyalty", "key": "points", "value": 120, "type": "number_integer"},
                {"id": 2, "namespace": "loyalty", "key": "tier", "value": "gold", "type": "single_line_text_field"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let params = MetafieldListParams {
        namespace: Some("loyalty".to_string()),
        ..Default::default()
    };
    let metafields = Order::metafields(&client, ORDER_ID)
        .list(Some(params))
        .await
        .unwrap();

    assert_eq!(metafields.len(), 2);
    assert_eq!(metafields[0].value, Some(json!(120)));
    assert_eq!(metafields[1].metafield_type.as_deref(), Some("single_line_text_field"));
}

#[tokio::test]
async fn test_list_all_order_metafields_across_pages() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(order_path("metafields.json")))
        .and(query_param("page_info", "mf2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "metafields": [{"id": 2, "namespace": "a", "key": "b"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(order_path("metafields.json")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"metafields": [{"id": 1, "namespace": "a", "key": "a"}]}))
                .insert_header(
                    "Link",
                    format!(
                        "<https://test-shop.myshopify.com/admin/api/2025-10/orders/{ORDER_ID}/metafields.json?page_info=mf2>; rel=\"next\""
                    )
                    .as_str(),
                ),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let metafields = Order::metafields(&client, ORDER_ID)
        .list_all(None)
        .await
        .unwrap();

    let ids: Vec<u64> = metafields.iter().filter_map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn test_count_find_and_delete_order_metafield() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(order_path("metafields/count.json")))
        .and(query_param("key", "points"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 1})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(order_path("metafields/1.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "metafield": {"id": 1, "namespace": "loyalty", "key": "points", "value": "120"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(order_path("metafields/1.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let metafields = Order::metafields(&client, ORDER_ID);

    let count_params = MetafieldCountParams {
        key: Some("points".to_string()),
        ..Default::default()
    };
    assert_eq!(metafields.count(Some(count_params)).await.unwrap(), 1);

    let found = metafields.find(1, None).await.unwrap();
    assert_eq!(found.key.as_deref(), Some("points"));

    metafields.delete(1).await.unwrap();
}

#[tokio::test]
async fn test_create_order_metafield_posts_to_owner_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(order_path("metafields.json")))
        .and(body_json(json!({
            "metafield": {
                "namespace": "gift",
                "key": "message",
                "value": "Happy birthday",
                "type": "single_line_text_field"
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "metafield": {
                "id": 55,
                "namespace": "gift",
                "key": "message",
                "value": "Happy birthday",
                "owner_id": ORDER_ID,
                "owner_resource": "order"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let metafield = Metafield::new("gift", "message", "Happy birthday", "single_line_text_field");
    let created = Order::metafields(&client, ORDER_ID)
        .create(&metafield)
        .await
        .unwrap();

    assert_eq!(created.id, Some(55));
    assert_eq!(created.owner_id, Some(ORDER_ID));
}

#[tokio::test]
async fn test_update_order_metafield_puts_to_record_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(order_path("metafields/55.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "metafield": {"id": 55, "value": "Congratulations"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut metafield = Metafield::new("gift", "message", "Congratulations", "single_line_text_field");
    metafield.id = Some(55);
    let updated = Order::metafields(&client, ORDER_ID)
        .update(&metafield)
        .await
        .unwrap();

    assert_eq!(updated.value, Some(json!("Congratulations")));
}

#[tokio::test]
async fn test_update_without_id_fails_before_request() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let metafield = Metafield::new("gift", "message", "Hi", "single_line_text_field");
    let error = Order::metafields(&client, ORDER_ID)
        .update(&metafield)
        .await
        .unwrap_err();

    assert!(matches!(error, ResourceError::PathResolutionFailed { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}

// ============================================================================
// Fulfillments
// ============================================================================

#[tokio::test]
async fn test_list_order_fulfillments_decodes_line_items_tolerantly() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(order_path("fulfillments.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "fulfillments": [{
                "id": 255_858_046,
                "order_id": ORDER_ID,
                "status": "success",
                "tracking_numbers": ["1Z1234"],
                "line_items": [
                    {"id": 1, "properties": {}},
                    {"id": 2, "properties": {"name": "gift_wrap", "value": "yes"}}
                ]
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let fulfillments = Order::fulfillments(&client, ORDER_ID)
        .list(None)
        .await
        .unwrap();

    assert_eq!(fulfillments.len(), 1);
    let fulfillment = &fulfillments[0];
    assert_eq!(fulfillment.status, Some(FulfillmentState::Success));
    assert_eq!(fulfillment.tracking_numbers, vec!["1Z1234".to_string()]);
    assert!(fulfillment.line_items[0].properties.is_empty());
    assert_eq!(fulfillment.line_items[1].properties.len(), 1);
}

#[tokio::test]
async fn test_count_order_fulfillments() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(order_path("fulfillments/count.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 2})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    assert_eq!(
        Order::fulfillments(&client, ORDER_ID).count(None).await.unwrap(),
        2
    );
}

#[tokio::test]
async fn test_fulfillment_actions_post_to_action_paths() {
    let server = MockServer::start().await;
    for (action, status) in [("complete", "success"), ("open", "open"), ("cancel", "cancelled")] {
        Mock::given(method("POST"))
            .and(path(order_path(&format!("fulfillments/123/{action}.json"))))
            .and(body_json(json!({})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "fulfillment": {"id": 123, "status": status}
            })))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_for(&server);
    let fulfillments = Order::fulfillments(&client, ORDER_ID);

    let completed = fulfillments.complete(123).await.unwrap();
    assert_eq!(completed.status, Some(FulfillmentState::Success));

    let opened = fulfillments.transition(123).await.unwrap();
    assert_eq!(opened.status, Some(FulfillmentState::Open));

    let cancelled = fulfillments.cancel(123).await.unwrap();
    assert_eq!(cancelled.status, Some(FulfillmentState::Cancelled));
}

#[tokio::test]
async fn test_fulfillment_action_on_unknown_id_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(order_path("fulfillments/404/complete.json")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errors": "Not Found"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = Order::fulfillments(&client, ORDER_ID)
        .complete(404)
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        ResourceError::NotFound { resource: "Fulfillment", .. }
    ));
}
