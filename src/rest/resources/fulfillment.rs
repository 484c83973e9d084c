//! Fulfillments: shipments of an order's line items.
//!
//! Fulfillments are always addressed through their order,
//! `orders/{order_id}/fulfillments[/{id}]`, so they are used through
//! [`Order::fulfillments`](super::Order::fulfillments). Besides the usual
//! operations the accessor can move a fulfillment between states:
//!
//! - [`complete`](SubResource::complete): `.../{id}/complete`
//! - [`transition`](SubResource::transition): `.../{id}/open`
//! - [`cancel`](SubResource::cancel): `.../{id}/cancel`
//!
//! ```rust,ignore
//! let fulfillments = Order::fulfillments(&client, 450789469);
//! let open = fulfillments.list(None).await?;
//! let done = fulfillments.complete(255858046).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::clients::{HttpMethod, PageCursor};
use crate::rest::{
    PageParams, ResourceError, ResourceOperation, ResourcePath, RestResource, SubResource,
};

use super::common::{Address, LineItem};

/// Processing state of a fulfillment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentState {
    #[default]
    Pending,
    Open,
    Success,
    Cancelled,
    Error,
    Failure,
}

/// Carrier-reported delivery progress.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    LabelPrinted,
    LabelPurchased,
    AttemptedDelivery,
    ReadyForPickup,
    Confirmed,
    InTransit,
    OutForDelivery,
    Delivered,
    Failure,
}

/// A fulfillment.
///
/// Line items decode through the same tolerant rules as the order's own
/// line items.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Fulfillment {
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    #[serde(skip_serializing)]
    pub order_id: Option<u64>,

    /// e.g. `"#1001.1"`.
    #[serde(skip_serializing)]
    pub name: Option<String>,

    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FulfillmentState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_status: Option<ShipmentStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_company: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tracking_numbers: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_url: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tracking_urls: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub line_items: Vec<LineItem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_customer: Option<bool>,
}

impl RestResource for Fulfillment {
    type Id = u64;
    type FindParams = FulfillmentFindParams;
    type AllParams = FulfillmentListParams;
    type CountParams = FulfillmentCountParams;

    const NAME: &'static str = "Fulfillment";
    const PLURAL: &'static str = "fulfillments";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["owner", "owner_id", "id"],
            "{owner}/{owner_id}/fulfillments/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["owner", "owner_id"],
            "{owner}/{owner_id}/fulfillments",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Count,
            &["owner", "owner_id"],
            "{owner}/{owner_id}/fulfillments/count",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &["owner", "owner_id"],
            "{owner}/{owner_id}/fulfillments",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["owner", "owner_id", "id"],
            "{owner}/{owner_id}/fulfillments/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl SubResource<'_, Fulfillment> {
    /// Marks the fulfillment as complete.
    ///
    /// # Errors
    ///
    /// [`ResourceError::NotFound`] for an unknown fulfillment, or a
    /// transport error.
    pub async fn complete(&self, id: u64) -> Result<Fulfillment, ResourceError> {
        self.action(id, "complete").await
    }

    /// Moves the fulfillment to `open`.
    ///
    /// # Errors
    ///
    /// See [`complete`](Self::complete).
    pub async fn transition(&self, id: u64) -> Result<Fulfillment, ResourceError> {
        self.action(id, "open").await
    }

    /// Cancels the fulfillment.
    ///
    /// # Errors
    ///
    /// See [`complete`](Self::complete).
    pub async fn cancel(&self, id: u64) -> Result<Fulfillment, ResourceError> {
        self.action(id, "cancel").await
    }

    async fn action(&self, id: u64, action: &str) -> Result<Fulfillment, ResourceError> {
        let path = format!(
            "{}/{}/fulfillments/{id}/{action}",
            self.owner(),
            self.owner_id()
        );
        Fulfillment::post_action(self.client(), &path, json!({}), &id.to_string()).await
    }
}

/// Query options for a single fulfillment.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FulfillmentFindParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Query options for listing fulfillments.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FulfillmentListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
}

impl PageParams for FulfillmentListParams {
    fn from_cursor(cursor: &PageCursor) -> Self {
        Self {
            limit: cursor.limit(),
            page_info: Some(cursor.page_info().to_string()),
            ..Self::default()
        }
    }
}

/// Query options for counting fulfillments.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FulfillmentCountParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,
}
