//! [`ResourceResponse`], a decoded payload plus the response metadata.
//!
//! It derefs to the payload, so a `ResourceResponse<Vec<Order>>` can be
//! iterated and indexed directly:
//!
//! ```rust,ignore
//! let orders = Order::all(&client, None).await?;
//! for order in orders.iter() {
//!     println!("{:?}", order.name);
//! }
//! if let Some(cursor) = orders.next_page() {
//!     println!("more after {}", cursor.page_info());
//! }
//! ```

use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;

use crate::clients::{ApiCallLimit, HttpResponse, PageCursor, PaginationInfo};
use crate::rest::ResourceError;

/// A decoded payload with cursors, call limit and request id.
///
/// ```rust
/// use shopify_orders::rest::ResourceResponse;
///
/// let response = ResourceResponse::new(vec![1, 2, 3], Default::default(), None, None);
/// assert_eq!(response.len(), 3);
/// assert!(!response.has_next_page());
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResponse<T> {
    data: T,
    pagination: PaginationInfo,
    rate_limit: Option<ApiCallLimit>,
    request_id: Option<String>,
}

impl<T> ResourceResponse<T> {
    /// Wraps `data` with explicit metadata.
    #[must_use]
    pub const fn new(
        data: T,
        pagination: PaginationInfo,
        rate_limit: Option<ApiCallLimit>,
        request_id: Option<String>,
    ) -> Self {
        Self {
            data,
            pagination,
            rate_limit,
            request_id,
        }
    }

    /// Drops the metadata.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Payload reference.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Mutable payload reference.
    #[must_use]
    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    /// Whether the server sent a `rel="next"` cursor.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.pagination.next.is_some()
    }

    /// Whether the server sent a `rel="previous"` cursor.
    #[must_use]
    pub const fn has_prev_page(&self) -> bool {
        self.pagination.prev.is_some()
    }

    /// The `rel="next"` cursor.
    #[must_use]
    pub const fn next_page(&self) -> Option<&PageCursor> {
        self.pagination.next.as_ref()
    }

    /// The `rel="previous"` cursor.
    #[must_use]
    pub const fn prev_page(&self) -> Option<&PageCursor> {
        self.pagination.prev.as_ref()
    }

    /// Both cursors.
    #[must_use]
    pub const fn pagination(&self) -> &PaginationInfo {
        &self.pagination
    }

    /// Call limit bucket state.
    #[must_use]
    pub const fn rate_limit(&self) -> Option<&ApiCallLimit> {
        self.rate_limit.as_ref()
    }

    /// `X-Request-Id`.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Transforms the payload, keeping the metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ResourceResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ResourceResponse {
            data: f(self.data),
            pagination: self.pagination,
            rate_limit: self.rate_limit,
            request_id: self.request_id,
        }
    }
}

impl<T: DeserializeOwned> ResourceResponse<T> {
    /// Decodes `body[key]` and takes the metadata from `response`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Decode`] when `key` is missing or the value
    /// does not decode as `T`.
    pub fn from_http_response(response: HttpResponse, key: &str) -> Result<Self, ResourceError> {
        let HttpResponse {
            mut body,
            pagination,
            api_call_limit,
            headers,
            ..
        } = response;

        let value = body
            .get_mut(key)
            .map(serde_json::Value::take)
            .ok_or_else(|| ResourceError::decode(key, format!("missing key '{key}' in response body")))?;
        let data: T = serde_json::from_value(value).map_err(|e| ResourceError::decode(key, e))?;

        let request_id = headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .cloned();

        Ok(Self {
            data,
            pagination,
            rate_limit: api_call_limit,
            request_id,
        })
    }
}

impl<T> Deref for ResourceResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> DerefMut for ResourceResponse<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}
