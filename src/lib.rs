//! # Shopify Orders
//!
//! A typed binding for the Shopify Admin REST "orders" resource and the
//! metafields and fulfillments that hang off an order.
//!
//! ## Overview
//!
//! - Configuration via [`ShopifyConfig`] with validated newtypes
//! - An async [`RestClient`] with opt-in retries for 429 and 500 responses
//! - Cursor pagination: [`rest::RestResource::list_page`] fetches one page
//!   and the options for the next, [`rest::RestResource::list_all`] walks
//!   every page and returns what it collected even when a page fails
//! - Tolerant decoding of fields Shopify serializes inconsistently, such as
//!   line-item `properties` and `requested_fulfillment_service_id`
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_orders::{AccessToken, ApiVersion, ShopDomain, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .shop(ShopDomain::new("example-shop").unwrap())
//!     .access_token(AccessToken::new("shpat_example").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.shop().as_ref(), "example-shop.myshopify.com");
//! ```
//!
//! ## Listing Orders
//!
//! ```rust,ignore
//! use shopify_orders::RestClient;
//! use shopify_orders::rest::RestResource;
//! use shopify_orders::rest::resources::{Order, OrderListParams, OrderStatus};
//!
//! let client = RestClient::new(&config)?;
//! let params = OrderListParams {
//!     status: Some(OrderStatus::Any),
//!     limit: Some(250),
//!     ..Default::default()
//! };
//!
//! match Order::list_all(&client, Some(params)).await {
//!     Ok(orders) => println!("{} orders", orders.len()),
//!     Err(partial) => {
//!         // Records fetched before the failing page are kept.
//!         let (orders, error) = partial.into_parts();
//!         eprintln!("got {} orders before: {error}", orders.len());
//!     }
//! }
//! ```
//!
//! ## Sub-resources
//!
//! ```rust,ignore
//! let fulfillments = Order::fulfillments(&client, 450789469);
//! let count = fulfillments.count(None).await?;
//! let cancelled = fulfillments.cancel(255858046).await?;
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (page progress at `debug`, retries,
//! deprecations and partial listings at `warn`) and never installs a
//! subscriber.

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

pub use config::{AccessToken, ApiVersion, HostUrl, ShopDomain, ShopifyConfig, ShopifyConfigBuilder};
pub use error::ConfigError;

pub use clients::{
    ApiCallLimit, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
    PageCursor, PaginationInfo, RestClient, RestError,
};
