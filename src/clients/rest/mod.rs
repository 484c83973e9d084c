//! Admin REST API client.
//!
//! [`RestClient`] adds the `/admin/api/{version}` prefix and the `.json`
//! suffix to every path and hands the request to [`HttpClient`](super::HttpClient).

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
