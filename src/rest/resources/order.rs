//! The [`Order`] resource.
//!
//! Besides the standard operations of [`RestResource`], orders can be
//! cancelled, closed and re-opened, and give access to their metafields and
//! fulfillments:
//!
//! - [`Order::cancel_with`] / [`Order::cancel`]: `orders/{id}/cancel`
//! - [`Order::close`]: `orders/{id}/close`
//! - [`Order::open`]: `orders/{id}/open`
//! - [`Order::metafields`]: `orders/{id}/metafields`
//! - [`Order::fulfillments`]: `orders/{id}/fulfillments`
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_orders::rest::RestResource;
//! use shopify_orders::rest::resources::{
//!     CancelReason, FinancialStatusFilter, Order, OrderCancelOptions, OrderListParams,
//! };
//!
//! let params = OrderListParams {
//!     financial_status: Some(FinancialStatusFilter::Paid),
//!     limit: Some(250),
//!     ..Default::default()
//! };
//! let orders = Order::list_all(&client, Some(params)).await?;
//!
//! let order = Order::find(&client, 450789469, None).await?.into_inner();
//! let cancelled = order
//!     .cancel_with(&client, OrderCancelOptions {
//!         reason: Some(CancelReason::Customer),
//!         email: Some(true),
//!         ..Default::default()
//!     })
//!     .await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::clients::{HttpMethod, PageCursor, RestClient};
use crate::rest::{
    PageParams, ResourceError, ResourceOperation, ResourcePath, RestResource, SubResource,
};

use super::common::{
    Address, ClientDetails, DiscountApplication, DiscountCode, LineItem, MoneySet, NoteAttribute,
    PaymentDetails, Refund, ShippingLine, TaxLine, Transaction,
};
use super::{Fulfillment, Metafield};

/// Owner segment for order sub-resources.
const ORDERS: &str = "orders";

/// `status` filter for listing orders.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Open orders only. Shopify's default.
    #[default]
    Open,
    Closed,
    Cancelled,
    /// Open, closed, cancelled and archived.
    Any,
}

/// Payment state of an order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum FinancialStatus {
    #[default]
    Pending,
    Authorized,
    PartiallyPaid,
    Paid,
    PartiallyRefunded,
    Refunded,
    Voided,
}

/// `financial_status` filter for listing and counting orders.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FinancialStatusFilter {
    Authorized,
    Pending,
    Paid,
    PartiallyPaid,
    Refunded,
    Voided,
    PartiallyRefunded,
    Any,
    /// Authorized and partially paid.
    Unpaid,
}

/// Shipping state of an order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentStatus {
    Fulfilled,
    Partial,
    Unfulfilled,
    Restocked,
}

/// `fulfillment_status` filter for listing and counting orders.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentStatusFilter {
    Shipped,
    Partial,
    Unshipped,
    Any,
    /// Unfulfilled or partially fulfilled.
    Unfulfilled,
    Fulfilled,
}

/// Why an order was cancelled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CancelReason {
    Customer,
    Fraud,
    /// Items were out of stock.
    Inventory,
    /// Payment was declined.
    Declined,
    Other,
}

/// How creating an order claims inventory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum InventoryBehaviour {
    /// Do not claim inventory.
    #[default]
    Bypass,
    /// Claim inventory regardless of the product's inventory policy.
    DecrementIgnoringPolicy,
    /// Claim inventory if the product's inventory policy allows it.
    DecrementObeyingPolicy,
}

/// An order.
///
/// Ids, names, timestamps and other fields Shopify assigns are read-only and
/// never sent in create or update requests. `send_receipt`,
/// `send_fulfillment_receipt` and `inventory_behaviour` only apply when
/// creating an order.
///
/// # Example
///
/// ```rust
/// use shopify_orders::rest::resources::{Order, FinancialStatus};
/// use shopify_orders::rest::resources::common::LineItem;
///
/// let order = Order {
///     email: Some("customer@example.com".to_string()),
///     financial_status: Some(FinancialStatus::Pending),
///     line_items: vec![LineItem {
///         variant_id: Some(447654529),
///         quantity: Some(1),
///         ..Default::default()
///     }],
///     ..Default::default()
/// };
/// ```
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Order {
    // --- Read-only ---
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    /// e.g. `"#1001"`.
    #[serde(skip_serializing)]
    pub name: Option<String>,

    /// Position of the order in the shop, starting at 1.
    #[serde(skip_serializing)]
    pub number: Option<u64>,

    /// `number` plus 1000.
    #[serde(skip_serializing)]
    pub order_number: Option<u64>,

    #[serde(skip_serializing)]
    pub token: Option<String>,

    #[serde(skip_serializing)]
    pub cart_token: Option<String>,

    #[serde(skip_serializing)]
    pub checkout_token: Option<String>,

    #[serde(skip_serializing)]
    pub checkout_id: Option<u64>,

    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing)]
    pub cancelled_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing)]
    pub closed_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing)]
    pub confirmed: Option<bool>,

    #[serde(skip_serializing)]
    pub order_status_url: Option<String>,

    #[serde(skip_serializing)]
    pub app_id: Option<u64>,

    #[serde(skip_serializing)]
    pub user_id: Option<u64>,

    #[serde(skip_serializing)]
    pub device_id: Option<u64>,

    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,

    // --- Customer ---
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// The customer record, as returned by Shopify.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_locale: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer_accepts_marketing: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_details: Option<ClientDetails>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser_ip: Option<String>,

    // --- Status ---
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<FinancialStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<FulfillmentStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_reason: Option<CancelReason>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<bool>,

    // --- Totals ---
    /// Shop currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Currency the customer saw at checkout.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presentment_currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price_set: Option<MoneySet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_total_price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal_price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_subtotal_price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_line_items_price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_shipping_price_set: Option<MoneySet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_discounts: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_discount_set: Option<MoneySet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_total_discounts: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_total_discounts_set: Option<MoneySet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxes_included: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax_set: Option<MoneySet>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_total_tax: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_total_tax_set: Option<MoneySet>,

    /// Grams.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_weight: Option<u64>,

    // --- Lines ---
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub line_items: Vec<LineItem>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shipping_lines: Vec<ShippingLine>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tax_lines: Vec<TaxLine>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub discount_codes: Vec<DiscountCode>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub discount_applications: Vec<DiscountApplication>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub note_attributes: Vec<NoteAttribute>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fulfillments: Vec<Fulfillment>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub refunds: Vec<Refund>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transactions: Vec<Transaction>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metafields: Vec<Metafield>,

    // --- Payment ---
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payment_gateway_names: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_details: Option<PaymentDetails>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_method: Option<String>,

    // --- Source ---
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_identifier: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing_site: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing_site_ref: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub referring_site: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,

    // --- Merchant ---
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Comma-separated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    // --- Create-only ---
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_receipt: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_fulfillment_receipt: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_behaviour: Option<InventoryBehaviour>,
}

impl RestResource for Order {
    type Id = u64;
    type FindParams = OrderFindParams;
    type AllParams = OrderListParams;
    type CountParams = OrderCountParams;

    const NAME: &'static str = "Order";
    const PLURAL: &'static str = "orders";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "orders/{id}"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "orders"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Count, &[], "orders/count"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "orders"),
        ResourcePath::new(HttpMethod::Put, ResourceOperation::Update, &["id"], "orders/{id}"),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "orders/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

impl Order {
    /// Cancels the order with default options.
    ///
    /// # Errors
    ///
    /// See [`cancel_with`](Self::cancel_with).
    pub async fn cancel(&self, client: &RestClient) -> Result<Self, ResourceError> {
        self.cancel_with(client, OrderCancelOptions::default()).await
    }

    /// Cancels the order.
    ///
    /// The options are sent as the request body as they are; unset fields
    /// are omitted.
    ///
    /// # Errors
    ///
    /// [`ResourceError::PathResolutionFailed`] if the order has no id,
    /// [`ResourceError::ValidationFailed`] when Shopify refuses the
    /// cancellation (for example an already-paid order without `amount`).
    pub async fn cancel_with(
        &self,
        client: &RestClient,
        options: OrderCancelOptions,
    ) -> Result<Self, ResourceError> {
        let id = self.require_id("cancel")?;
        let body =
            serde_json::to_value(&options).map_err(|e| ResourceError::decode(Self::NAME, e))?;
        Self::post_action(client, &format!("orders/{id}/cancel"), body, &id.to_string()).await
    }

    /// Closes the order.
    ///
    /// # Errors
    ///
    /// [`ResourceError::PathResolutionFailed`] if the order has no id,
    /// [`ResourceError::NotFound`] if it does not exist.
    pub async fn close(&self, client: &RestClient) -> Result<Self, ResourceError> {
        let id = self.require_id("close")?;
        Self::post_action(client, &format!("orders/{id}/close"), json!({}), &id.to_string()).await
    }

    /// Re-opens a closed order.
    ///
    /// # Errors
    ///
    /// See [`close`](Self::close).
    pub async fn open(&self, client: &RestClient) -> Result<Self, ResourceError> {
        let id = self.require_id("open")?;
        Self::post_action(client, &format!("orders/{id}/open"), json!({}), &id.to_string()).await
    }

    /// Metafields of order `order_id`.
    #[must_use]
    pub const fn metafields(client: &RestClient, order_id: u64) -> SubResource<'_, Metafield> {
        SubResource::new(client, ORDERS, order_id)
    }

    /// Fulfillments of order `order_id`.
    #[must_use]
    pub const fn fulfillments(client: &RestClient, order_id: u64) -> SubResource<'_, Fulfillment> {
        SubResource::new(client, ORDERS, order_id)
    }

    fn require_id(&self, operation: &'static str) -> Result<u64, ResourceError> {
        self.id.ok_or(ResourceError::PathResolutionFailed {
            resource: Self::NAME,
            operation,
        })
    }
}

/// Query options for a single order.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderFindParams {
    /// Comma-separated fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Query options for listing orders.
///
/// Filters apply to the first page only. Following pages are requested with
/// the server's cursor and nothing else, see [`PageParams`].
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderListParams {
    /// Sent comma-separated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<u64>>,

    /// Page size, at most 250.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<FinancialStatusFilter>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<FulfillmentStatusFilter>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution_app_id: Option<u64>,

    /// Sort order, e.g. `"created_at asc"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,

    /// Server cursor. Only set by [`PageParams::from_cursor`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
}

impl PageParams for OrderListParams {
    fn from_cursor(cursor: &PageCursor) -> Self {
        Self {
            limit: cursor.limit(),
            page_info: Some(cursor.page_info().to_string()),
            ..Self::default()
        }
    }
}

/// Query options for counting orders.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OrderCountParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_status: Option<FinancialStatusFilter>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<FulfillmentStatusFilter>,

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
}

/// Body of a cancel request.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OrderCancelOptions {
    /// Amount to refund, as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// Currency of `amount`, required with multi-currency refunds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub restock: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<CancelReason>,

    /// Email the customer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund: Option<Refund>,
}
