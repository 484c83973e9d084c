//! Async HTTP client for the Admin API.
//!
//! Every request goes to `{origin}{base_path}/{path}` with the access token
//! header attached. 429 and 500 responses are retried while the request has
//! tries left.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::ShopifyConfig;

/// Seconds to wait before retrying when no `Retry-After` applies.
pub const RETRY_WAIT_TIME: u64 = 1;

/// Crate version sent in the `User-Agent`.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client bound to one shop and one base path.
///
/// `Send + Sync`; share it behind a reference or an `Arc`.
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_uri: String,
    base_path: String,
    default_headers: HashMap<String, String>,
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a client for `config`'s shop.
    ///
    /// The origin is `https://{shop}` unless the config carries a host
    /// override, in which case that origin is used and a `Host` header naming
    /// the shop is added.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the TLS backend cannot be initialized.
    pub fn new(base_path: impl Into<String>, config: &ShopifyConfig) -> Result<Self, HttpError> {
        let shop = config.shop().as_ref();
        let base_uri = config
            .host()
            .map_or_else(|| format!("https://{shop}"), |host| host.origin().to_string());

        let prefix = config
            .user_agent_prefix()
            .map_or_else(String::new, |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{prefix}Shopify Orders Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "X-Shopify-Access-Token".to_string(),
            config.access_token().as_ref().to_string(),
        );
        if config.host().is_some() {
            default_headers.insert("Host".to_string(), shop.to_string());
        }

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_uri,
            base_path: base_path.into(),
            default_headers,
        })
    }

    /// Origin requests are sent to.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Path prefix, e.g. `/admin/api/2025-10`.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends `request`, retrying 429/500 while tries remain.
    ///
    /// A 429 waits for `Retry-After` when present; everything else waits
    /// [`RETRY_WAIT_TIME`] seconds.
    ///
    /// # Errors
    ///
    /// - [`HttpError::InvalidRequest`] if the request fails validation
    /// - [`HttpError::Network`] on connection failure
    /// - [`HttpError::Response`] for a non-retryable status, or a retryable
    ///   one when only a single try was allowed
    /// - [`HttpError::MaxRetries`] when all tries were used up
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}/{}", self.base_uri, self.base_path, request.path);
        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        headers.extend(request.extra_headers.clone());

        let mut tries: u32 = 0;
        loop {
            tries += 1;

            let mut builder = self
                .client
                .request(request.http_method.into(), &url)
                .query(&request.query);
            for (key, value) in &headers {
                builder = builder.header(key, value);
            }
            if let Some(body) = &request.body {
                builder = builder.body(body.to_string());
            }

            let res = builder.send().await?;
            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let text = res.text().await?;
            let response = HttpResponse::new(code, res_headers, Self::parse_body(code, &text));

            if let Some(reason) = response.deprecation_reason() {
                tracing::warn!(
                    path = %request.path,
                    "Deprecated request to Shopify API, received reason: {reason}"
                );
            }

            if response.is_ok() {
                return Ok(response);
            }

            let message = Self::serialize_error(&response);
            let error_reference = response.request_id().map(String::from);

            if !matches!(code, 429 | 500) || request.tries == 1 {
                return Err(HttpResponseError {
                    code,
                    message,
                    error_reference,
                }
                .into());
            }
            if tries >= request.tries {
                return Err(MaxHttpRetriesExceededError {
                    code,
                    tries: request.tries,
                    message,
                    error_reference,
                }
                .into());
            }

            let delay = Self::retry_delay(&response);
            tracing::warn!(
                path = %request.path,
                status = code,
                attempt = tries,
                "Retrying Shopify request in {:.1}s",
                delay.as_secs_f64()
            );
            tokio::time::sleep(delay).await;
        }
    }

    fn parse_body(code: u16, text: &str) -> serde_json::Value {
        if text.trim().is_empty() {
            return serde_json::json!({});
        }
        serde_json::from_str(text).unwrap_or_else(|_| {
            if code >= 500 {
                serde_json::json!({ "raw_body": text })
            } else {
                serde_json::json!({})
            }
        })
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let value = value.to_str().unwrap_or_default().to_string();
            result
                .entry(name.as_str().to_lowercase())
                .or_default()
                .push(value);
        }
        result
    }

    fn retry_delay(response: &HttpResponse) -> Duration {
        match response.retry_request_after {
            Some(secs) if response.code == 429 => Duration::try_from_secs_f64(secs)
                .unwrap_or_else(|_| Duration::from_secs(RETRY_WAIT_TIME)),
            _ => Duration::from_secs(RETRY_WAIT_TIME),
        }
    }

    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        if let Some(errors) = response.body.get("errors") {
            error_body.insert("errors".to_string(), errors.clone());
        }
        if let Some(error) = response.body.get("error") {
            error_body.insert("error".to_string(), error.clone());
            if let Some(desc) = response.body.get("error_description") {
                error_body.insert("error_description".to_string(), desc.clone());
            }
        }
        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::Value::Object(error_body).to_string()
    }
}
