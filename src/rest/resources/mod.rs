//! Resource types.
//!
//! - [`Order`]: the order resource, with cancel/close/open actions
//! - [`Metafield`] and [`Fulfillment`]: records owned by an order, reached
//!   through [`Order::metafields`] and [`Order::fulfillments`]
//! - [`common`]: records embedded in orders (line items, shipping lines,
//!   money sets, refunds). Fields Shopify sends in more than one shape are
//!   normalized on decode, see [`common::tolerant`].
//!
//! ```rust,ignore
//! use shopify_orders::rest::RestResource;
//! use shopify_orders::rest::resources::{Order, OrderListParams, OrderStatus};
//!
//! let page = Order::list_page(&client, Some(OrderListParams {
//!     status: Some(OrderStatus::Any),
//!     ..Default::default()
//! })).await?;
//!
//! for order in &page.items {
//!     for item in &order.line_items {
//!         for property in &item.properties {
//!             println!("{}: {:?}", property.name, property.value_text());
//!         }
//!     }
//! }
//! ```

pub mod common;
mod fulfillment;
mod metafield;
mod order;

pub use fulfillment::{
    Fulfillment, FulfillmentCountParams, FulfillmentFindParams, FulfillmentListParams,
    FulfillmentState, ShipmentStatus,
};
pub use metafield::{Metafield, MetafieldCountParams, MetafieldFindParams, MetafieldListParams};
pub use order::{
    CancelReason, FinancialStatus, FinancialStatusFilter, FulfillmentStatus,
    FulfillmentStatusFilter, InventoryBehaviour, Order, OrderCancelOptions, OrderCountParams,
    OrderFindParams, OrderListParams, OrderStatus,
};
