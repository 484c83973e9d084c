//! HTTP plumbing shared by every resource.
//!
//! - [`HttpClient`] sends requests, retries 429/500 and parses Shopify headers
//! - [`HttpResponse`] exposes the body, call limit and [`PageCursor`]s
//! - [`rest::RestClient`] maps resource paths onto `/admin/api/{version}`
//!
//! Retries are off by default (`tries == 1`); raise them with
//! [`RestClient::with_tries`](rest::RestClient::with_tries).

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{HttpClient, RETRY_WAIT_TIME, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{ApiCallLimit, HttpResponse, PageCursor, PaginationInfo};

pub use rest::{RestClient, RestError};
