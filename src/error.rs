//! Configuration errors.
//!
//! Every validated config constructor returns `Result<T, ConfigError>`, so a
//! bad shop name or an empty token is rejected before any request is made.
//!
//! # Example
//!
//! ```rust
//! use shopify_orders::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("   ");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors raised while building a [`ShopifyConfig`](crate::ShopifyConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide an Admin API access token.")]
    EmptyAccessToken,

    /// Shop domain is invalid.
    #[error("Invalid shop domain '{domain}'. Expected format: 'shop-name' or 'shop-name.myshopify.com'.")]
    InvalidShopDomain {
        /// The rejected domain.
        domain: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected 'YYYY-MM' with month 01, 04, 07 or 10, or 'unstable'.")]
    InvalidApiVersion {
        /// The rejected version string.
        version: String,
    },

    /// A required builder field was never set.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Expected an absolute URL such as 'http://127.0.0.1:8080'.")]
    InvalidHostUrl {
        /// The rejected URL.
        url: String,
    },
}
