//! Outgoing request description.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// Verbs the Admin REST API uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Read.
    Get,
    /// Create or act.
    Post,
    /// Update.
    Put,
    /// Remove.
    Delete,
}

impl HttpMethod {
    /// Whether requests with this verb must carry a JSON body.
    #[must_use]
    pub const fn requires_body(self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
        })
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
            HttpMethod::Put => Self::PUT,
            HttpMethod::Delete => Self::DELETE,
        }
    }
}

/// A request relative to the client's base path.
///
/// Bodies are always JSON. Build one with [`HttpRequest::builder`]:
///
/// ```rust
/// use shopify_orders::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let request = HttpRequest::builder(HttpMethod::Post, "orders/1/close.json")
///     .body(json!({}))
///     .tries(3)
///     .build()
///     .unwrap();
/// assert_eq!(request.tries, 3);
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// Verb.
    pub http_method: HttpMethod,
    /// Path below the base path, without leading slash.
    pub path: String,
    /// JSON body.
    pub body: Option<serde_json::Value>,
    /// Query string parameters.
    pub query: HashMap<String, String>,
    /// Headers added on top of the client defaults.
    pub extra_headers: HashMap<String, String>,
    /// Total attempts for 429 and 500 responses.
    pub tries: u32,
}

impl HttpRequest {
    /// Starts a builder with one try and no query.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Checks body presence against the verb.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] for a POST/PUT without body, a
    /// GET/DELETE with one, or zero tries.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.tries == 0 {
            return Err(InvalidHttpRequestError::ZeroTries);
        }
        match (self.http_method.requires_body(), self.body.is_some()) {
            (true, false) => Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            }),
            (false, true) => Err(InvalidHttpRequestError::UnexpectedBody {
                method: self.http_method.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

/// Builder for [`HttpRequest`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    request: HttpRequest,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            request: HttpRequest {
                http_method: method,
                path: path.into(),
                body: None,
                query: HashMap::new(),
                extra_headers: HashMap::new(),
                tries: 1,
            },
        }
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.request.body = Some(body.into());
        self
    }

    /// Replaces all query parameters.
    #[must_use]
    pub fn query(mut self, query: HashMap<String, String>) -> Self {
        self.request.query = query;
        self
    }

    /// Adds one query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.query.insert(key.into(), value.into());
        self
    }

    /// Adds one header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.extra_headers.insert(key.into(), value.into());
        self
    }

    /// Sets the number of attempts.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.request.tries = tries;
        self
    }

    /// Validates and returns the request.
    ///
    /// # Errors
    ///
    /// See [`HttpRequest::verify`].
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        self.request.verify()?;
        Ok(self.request)
    }
}
