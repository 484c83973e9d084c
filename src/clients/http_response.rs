//! Parsed responses and the Shopify headers the client cares about.

use std::collections::HashMap;

/// `X-Shopify-Shop-Api-Call-Limit`, e.g. `"40/80"`.
///
/// ```rust
/// use shopify_orders::clients::ApiCallLimit;
///
/// let limit = ApiCallLimit::parse("40/80").unwrap();
/// assert_eq!(limit.request_count, 40);
/// assert_eq!(limit.remaining(), 40);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApiCallLimit {
    /// Calls currently in the bucket.
    pub request_count: u32,
    /// Bucket capacity.
    pub bucket_size: u32,
}

impl ApiCallLimit {
    /// Parses `"X/Y"`; anything else yields `None`.
    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let (count, size) = header_value.trim().split_once('/')?;
        Some(Self {
            request_count: count.parse().ok()?,
            bucket_size: size.parse().ok()?,
        })
    }

    /// Calls left before the bucket is full.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.bucket_size.saturating_sub(self.request_count)
    }
}

/// Continuation token for cursor pagination.
///
/// Cursors only come out of a server `Link` header. The `page_info` value is
/// kept exactly as the server issued it (after URL decoding), and `limit` is
/// the page size the server echoed in the same link, if any.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PageCursor {
    page_info: String,
    limit: Option<u32>,
}

impl PageCursor {
    /// The opaque `page_info` token.
    #[must_use]
    pub fn page_info(&self) -> &str {
        &self.page_info
    }

    /// The page size carried by the link.
    #[must_use]
    pub const fn limit(&self) -> Option<u32> {
        self.limit
    }

    /// Reads `page_info` and `limit` from a link URL's query string.
    ///
    /// Returns `None` when the URL has no `page_info`.
    fn from_link_url(url: &str) -> Option<Self> {
        let (_, query) = url.split_once('?')?;
        let mut page_info = None;
        let mut limit = None;

        for pair in query.split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key {
                "page_info" if !value.is_empty() => {
                    let decoded = urlencoding::decode(value).map_or_else(
                        |_| value.to_string(),
                        std::borrow::Cow::into_owned,
                    );
                    page_info = Some(decoded);
                }
                "limit" => limit = value.parse().ok(),
                _ => {}
            }
        }

        page_info.map(|page_info| Self { page_info, limit })
    }
}

/// Cursors parsed from a `Link` header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaginationInfo {
    /// `rel="previous"` cursor.
    pub prev: Option<PageCursor>,
    /// `rel="next"` cursor.
    pub next: Option<PageCursor>,
}

impl PaginationInfo {
    /// Parses `<url>; rel="next", <url>; rel="previous"`.
    ///
    /// Links with another `rel` or without a `page_info` parameter are
    /// ignored.
    #[must_use]
    pub fn parse_link_header(header_value: &str) -> Self {
        let mut info = Self::default();

        for link in split_links(header_value) {
            let mut parts = link.split(';').map(str::trim);
            let Some(url) = parts
                .next()
                .and_then(|u| u.strip_prefix('<'))
                .and_then(|u| u.strip_suffix('>'))
            else {
                continue;
            };
            let rel = parts.find_map(|p| p.strip_prefix("rel=")).map(|r| r.trim_matches('"'));

            let slot = match rel {
                Some("next") => &mut info.next,
                Some("previous") => &mut info.prev,
                _ => continue,
            };
            *slot = PageCursor::from_link_url(url);
        }

        info
    }
}

/// Splits a `Link` header on the commas between entries. Commas inside
/// `<...>` belong to the URL, e.g. `fields=id,name`.
fn split_links(header_value: &str) -> impl Iterator<Item = &str> {
    let mut depth = 0usize;
    header_value
        .split(move |c: char| match c {
            '<' => {
                depth += 1;
                false
            }
            '>' => {
                depth = depth.saturating_sub(1);
                false
            }
            ',' => depth == 0,
            _ => false,
        })
        .filter(|link| !link.trim().is_empty())
}

/// A response with Shopify headers already parsed.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// HTTP status code.
    pub code: u16,
    /// Headers, lowercased names, every value kept.
    pub headers: HashMap<String, Vec<String>>,
    /// JSON body, `{}` when the body was empty.
    pub body: serde_json::Value,
    /// `Link` cursors.
    pub pagination: PaginationInfo,
    /// Call limit bucket state.
    pub api_call_limit: Option<ApiCallLimit>,
    /// Seconds from `Retry-After`.
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Builds a response and parses `Link`, the call limit and `Retry-After`.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let first = |name: &str| headers.get(name).and_then(|v| v.first()).cloned();

        let pagination = first("link")
            .map(|link| PaginationInfo::parse_link_header(&link))
            .unwrap_or_default();
        let api_call_limit =
            first("x-shopify-shop-api-call-limit").and_then(|v| ApiCallLimit::parse(&v));
        let retry_request_after = first("retry-after").and_then(|v| v.trim().parse().ok());

        Self {
            code,
            headers,
            body,
            pagination,
            api_call_limit,
            retry_request_after,
        }
    }

    /// 2xx status.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// `X-Request-Id`.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// `X-Shopify-API-Deprecated-Reason`.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.header("x-shopify-api-deprecated-reason")
    }

    /// Cursor for the following page, if the server sent one.
    #[must_use]
    pub const fn next_page(&self) -> Option<&PageCursor> {
        self.pagination.next.as_ref()
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
