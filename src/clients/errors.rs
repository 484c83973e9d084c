//! Transport errors.
//!
//! [`HttpError`] is what every call through [`HttpClient`](super::HttpClient)
//! can fail with. The resource layer wraps it unchanged.

use thiserror::Error;

/// A non-2xx response.
///
/// `message` holds a compact JSON object built from whichever of `errors`,
/// `error`, `error_description` the body carried, plus an `error_reference`
/// naming the request id when Shopify sent one.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// HTTP status code.
    pub code: u16,
    /// Serialized error payload.
    pub message: String,
    /// `X-Request-Id` of the failed request.
    pub error_reference: Option<String>,
}

/// A request kept receiving 429 or 500 until its tries ran out.
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {tries}. Last message: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// Status of the last response.
    pub code: u16,
    /// Number of attempts made.
    pub tries: u32,
    /// Serialized error payload of the last response.
    pub message: String,
    /// `X-Request-Id` of the last response.
    pub error_reference: Option<String>,
}

/// A request rejected before it was sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// POST or PUT without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// Lowercase method name.
        method: String,
    },

    /// GET or DELETE with a body.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// Lowercase method name.
        method: String,
    },

    /// Zero tries requested.
    #[error("A request needs at least one try.")]
    ZeroTries,
}

/// Any failure of a single HTTP exchange.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Non-2xx response.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Retries exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// Request failed validation.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Connection, TLS or body read failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// HTTP status code, when the failure came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::MaxRetries(e) => Some(e.code),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }
}
