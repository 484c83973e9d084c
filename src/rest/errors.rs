//! Resource-level errors.
//!
//! Transport failures are mapped to semantic variants where the status says
//! more than the raw response does:
//!
//! - **404** becomes [`ResourceError::NotFound`]
//! - **422** becomes [`ResourceError::ValidationFailed`]
//! - anything else stays a wrapped [`HttpError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_orders::rest::{ResourceError, RestResource};
//!
//! match Order::find(&client, 450789469, None).await {
//!     Ok(order) => println!("{:?}", order.name),
//!     Err(ResourceError::NotFound { resource, id }) => println!("no {resource} {id}"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

use std::collections::HashMap;

use crate::clients::{HttpError, RestError};
use thiserror::Error;

/// Failure of a resource operation.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// HTTP 404.
    #[error("{resource} with id {id} not found")]
    NotFound {
        /// Resource name, e.g. `"Order"`.
        resource: &'static str,
        /// Requested id, or `"unknown"` for collection calls.
        id: String,
    },

    /// HTTP 422.
    #[error("Validation failed: {errors:?}")]
    ValidationFailed {
        /// Field name to messages; list-style errors land under `"base"`.
        errors: HashMap<String, Vec<String>>,
        /// `X-Request-Id`.
        request_id: Option<String>,
    },

    /// No path in the resource's table fits the ids at hand.
    #[error("Cannot resolve path for {resource}::{operation} with provided IDs")]
    PathResolutionFailed {
        /// Resource name.
        resource: &'static str,
        /// Operation name, e.g. `"find"`.
        operation: &'static str,
    },

    /// A payload did not have the expected shape, or a record could not be
    /// encoded.
    #[error("Failed to decode {resource}: {message}")]
    Decode {
        /// Resource name or response key.
        resource: String,
        /// What went wrong.
        message: String,
    },

    /// A multi-page listing was stopped between pages.
    #[error("Pagination cancelled after {pages} page(s)")]
    Cancelled {
        /// Pages fetched before the stop was observed.
        pages: usize,
    },

    /// Transport failure without a more specific mapping.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// REST client failure.
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl ResourceError {
    /// Maps a status code and error body onto the semantic variants.
    #[must_use]
    pub fn from_http_response(
        code: u16,
        body: &serde_json::Value,
        resource: &'static str,
        id: Option<&str>,
        request_id: Option<&str>,
    ) -> Self {
        match code {
            404 => Self::NotFound {
                resource,
                id: id.unwrap_or("unknown").to_string(),
            },
            422 => Self::ValidationFailed {
                errors: parse_validation_errors(body),
                request_id: request_id.map(ToString::to_string),
            },
            _ => Self::Http(HttpError::Response(crate::clients::HttpResponseError {
                code,
                message: body.to_string(),
                error_reference: request_id.map(ToString::to_string),
            })),
        }
    }

    /// Converts a REST client error, promoting 404 and 422 responses.
    ///
    /// The response's serialized error message is re-read as JSON to recover
    /// field-level validation messages.
    #[must_use]
    pub fn from_rest(error: RestError, resource: &'static str, id: Option<&str>) -> Self {
        match error {
            RestError::Http(HttpError::Response(response)) if matches!(response.code, 404 | 422) => {
                let body = serde_json::from_str(&response.message)
                    .unwrap_or(serde_json::Value::Null);
                Self::from_http_response(
                    response.code,
                    &body,
                    resource,
                    id,
                    response.error_reference.as_deref(),
                )
            }
            other => Self::Rest(other),
        }
    }

    /// Builds a [`ResourceError::Decode`] from any displayable cause.
    pub fn decode(resource: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self::Decode {
            resource: resource.into(),
            message: cause.to_string(),
        }
    }

    /// `X-Request-Id` of the failed request, when known.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        let http = match self {
            Self::ValidationFailed { request_id, .. } => return request_id.as_deref(),
            Self::Http(http) | Self::Rest(RestError::Http(http)) => http,
            _ => return None,
        };
        match http {
            HttpError::Response(e) => e.error_reference.as_deref(),
            HttpError::MaxRetries(e) => e.error_reference.as_deref(),
            _ => None,
        }
    }
}

/// Reads `errors` as an object of fields, an array, or a single string.
fn parse_validation_errors(body: &serde_json::Value) -> HashMap<String, Vec<String>> {
    use serde_json::Value;

    let strings = |values: &[Value]| -> Vec<String> {
        values
            .iter()
            .filter_map(|v| v.as_str().map(ToString::to_string))
            .collect()
    };

    let mut result = HashMap::new();
    match body.get("errors") {
        Some(Value::Object(map)) => {
            for (field, messages) in map {
                let messages = match messages {
                    Value::Array(values) => strings(values),
                    Value::String(s) => vec![s.clone()],
                    other => vec![other.to_string()],
                };
                result.insert(field.clone(), messages);
            }
        }
        Some(Value::Array(values)) => {
            let messages = strings(values);
            if !messages.is_empty() {
                result.insert("base".to_string(), messages);
            }
        }
        Some(Value::String(s)) => {
            result.insert("base".to_string(), vec![s.clone()]);
        }
        _ => {}
    }
    result
}

const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceError>();
};
