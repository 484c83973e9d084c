//! Client configuration.
//!
//! A [`ShopifyConfig`] names the shop, carries the access token, and picks the
//! API version every request is made against.
//!
//! # Example
//!
//! ```rust
//! use shopify_orders::{AccessToken, ApiVersion, ShopDomain, ShopifyConfig};
//!
//! let config = ShopifyConfig::builder()
//!     .shop(ShopDomain::new("my-store").unwrap())
//!     .access_token(AccessToken::new("shpat_123").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//! assert_eq!(config.shop().as_ref(), "my-store.myshopify.com");
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, HostUrl, ShopDomain};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Settings shared by every request a [`RestClient`](crate::RestClient) makes.
#[derive(Clone, Debug)]
pub struct ShopifyConfig {
    shop: ShopDomain,
    access_token: AccessToken,
    host: Option<HostUrl>,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
}

impl ShopifyConfig {
    /// Starts a new builder.
    #[must_use]
    pub fn builder() -> ShopifyConfigBuilder {
        ShopifyConfigBuilder::new()
    }

    /// The target shop.
    #[must_use]
    pub const fn shop(&self) -> &ShopDomain {
        &self.shop
    }

    /// The Admin API access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Origin override, if any.
    #[must_use]
    pub const fn host(&self) -> Option<&HostUrl> {
        self.host.as_ref()
    }

    /// The API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Prefix prepended to the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ShopifyConfig>();
};

/// Builder for [`ShopifyConfig`].
///
/// `shop` and `access_token` are required. `api_version` defaults to
/// [`ApiVersion::latest`]; `host` and `user_agent_prefix` default to `None`.
#[derive(Debug, Default)]
pub struct ShopifyConfigBuilder {
    shop: Option<ShopDomain>,
    access_token: Option<AccessToken>,
    host: Option<HostUrl>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
}

impl ShopifyConfigBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shop (required).
    #[must_use]
    pub fn shop(mut self, shop: ShopDomain) -> Self {
        self.shop = Some(shop);
        self
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sends requests to `host` instead of `https://{shop}`.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub const fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the `User-Agent` prefix.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `shop` or
    /// `access_token` was not set.
    pub fn build(self) -> Result<ShopifyConfig, ConfigError> {
        let shop = self
            .shop
            .ok_or(ConfigError::MissingRequiredField { field: "shop" })?;
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        Ok(ShopifyConfig {
            shop,
            access_token,
            host: self.host,
            api_version: self.api_version.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shop() -> ShopDomain {
        ShopDomain::new("test-shop").unwrap()
    }

    fn token() -> AccessToken {
        AccessToken::new("shpat_test").unwrap()
    }

    #[test]
    fn test_builder_requires_shop() {
        let result = ShopifyConfig::builder().access_token(token()).build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "shop" })
        ));
    }

    #[test]
    fn test_builder_requires_access_token() {
        let result = ShopifyConfig::builder().shop(shop()).build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "access_token"
            })
        ));
    }

    #[test]
    fn test_builder_defaults() {
        let config = ShopifyConfig::builder()
            .shop(shop())
            .access_token(token())
            .build()
            .unwrap();

        assert_eq!(config.api_version(), &ApiVersion::latest());
        assert!(config.host().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_fields() {
        let host = HostUrl::new("http://127.0.0.1:9000").unwrap();
        let config = ShopifyConfig::builder()
            .shop(shop())
            .access_token(token())
            .host(host.clone())
            .api_version(ApiVersion::Unstable)
            .user_agent_prefix("OrderSync/2.1")
            .build()
            .unwrap();

        assert_eq!(config.host(), Some(&host));
        assert_eq!(config.api_version(), &ApiVersion::Unstable);
        assert_eq!(config.user_agent_prefix(), Some("OrderSync/2.1"));
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let config = ShopifyConfig::builder()
            .shop(shop())
            .access_token(token())
            .build()
            .unwrap();
        let debug = format!("{config:?}");
        assert!(debug.contains("ShopifyConfig"));
        assert!(!debug.contains("shpat_test"));
    }
}
