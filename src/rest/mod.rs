//! REST resource layer.
//!
//! - **[`RestResource`] trait**: find, list, count, save and delete for a
//!   resource described by a path table
//! - **[`walk_pages`]**: the cursor walker behind `list_all`
//! - **[`SubResource`]**: records owned by another record, such as an order's
//!   metafields and fulfillments
//! - **[`ResourceResponse<T>`]**: a Deref wrapper carrying pagination and
//!   rate-limit metadata
//! - **[`ResourceError`]**: semantic errors for resource operations
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_orders::{RestClient, ShopifyConfig};
//! use shopify_orders::rest::RestResource;
//! use shopify_orders::rest::resources::{Order, OrderListParams, OrderStatus};
//!
//! let client = RestClient::new(&config)?;
//!
//! // One page at a time
//! let page = Order::list_page(&client, Some(OrderListParams {
//!     status: Some(OrderStatus::Any),
//!     limit: Some(250),
//!     ..Default::default()
//! })).await?;
//! if let Some(next) = page.next {
//!     let following = Order::list_page(&client, Some(next)).await?;
//! }
//!
//! // Or the whole collection
//! let orders = Order::list_all(&client, None).await?;
//!
//! // Sub-resources
//! let metafields = Order::metafields(&client, 450789469).list(None).await?;
//! ```

mod errors;
mod nested;
mod pagination;
mod path;
mod resource;
mod response;

pub mod resources;

pub use errors::ResourceError;
pub use nested::SubResource;
pub use pagination::{walk_pages, Page, PageParams, PartialResults};
pub use path::{build_path, get_path, resolve_path, ResourceOperation, ResourcePath};
pub use resource::{serialize_to_query, RestResource, Scope};
pub use response::ResourceResponse;
