use std::collections::HashMap;

use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::{ApiVersion, ShopifyConfig};

/// Client for `/admin/api/{version}` REST endpoints.
///
/// Paths may be given with or without a leading `/` and with or without the
/// `.json` suffix.
///
/// # Example
///
/// ```rust,ignore
/// use shopify_orders::{AccessToken, RestClient, ShopDomain, ShopifyConfig};
///
/// let config = ShopifyConfig::builder()
///     .shop(ShopDomain::new("my-store")?)
///     .access_token(AccessToken::new("shpat_123")?)
///     .build()?;
/// let client = RestClient::new(&config)?.with_tries(3);
///
/// let response = client.get("orders/count", HashMap::new()).await?;
/// println!("{}", response.body["count"]);
/// ```
#[derive(Debug)]
pub struct RestClient {
    http_client: HttpClient,
    api_version: ApiVersion,
    tries: u32,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a client for the config's shop and API version.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &ShopifyConfig) -> Result<Self, RestError> {
        let api_version = *config.api_version();
        let base_path = format!("/admin/api/{api_version}");
        tracing::debug!(shop = %config.shop(), %api_version, "Creating REST client");

        Ok(Self {
            http_client: HttpClient::new(base_path, config)?,
            api_version,
            tries: 1,
        })
    }

    /// Sets how many attempts each request gets on 429/500 responses.
    #[must_use]
    pub const fn with_tries(mut self, tries: u32) -> Self {
        self.tries = tries;
        self
    }

    /// The API version in use.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Attempts per request.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }

    /// The underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// GET `path`.
    ///
    /// # Errors
    ///
    /// [`RestError::InvalidPath`] for an empty path, [`RestError::Http`]
    /// for transport failures.
    pub async fn get(
        &self,
        path: &str,
        query: HashMap<String, String>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Get, path, None, query).await
    }

    /// POST `body` to `path`.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: HashMap<String, String>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Post, path, Some(body), query)
            .await
    }

    /// PUT `body` to `path`.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
        query: HashMap<String, String>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Put, path, Some(body), query)
            .await
    }

    /// DELETE `path`.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get).
    pub async fn delete(
        &self,
        path: &str,
        query: HashMap<String, String>,
    ) -> Result<HttpResponse, RestError> {
        self.make_request(HttpMethod::Delete, path, None, query)
            .await
    }

    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: HashMap<String, String>,
    ) -> Result<HttpResponse, RestError> {
        let path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, path)
            .query(query)
            .tries(self.tries);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        Ok(self.http_client.request(request).await?)
    }
}

/// Strips leading `/` and a trailing `.json`, then appends `.json`.
fn normalize_path(path: &str) -> Result<String, RestError> {
    let trimmed = path.trim_start_matches('/');
    let trimmed = trimmed.strip_suffix(".json").unwrap_or(trimmed);
    if trimmed.is_empty() {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }
    Ok(format!("{trimmed}.json"))
}
