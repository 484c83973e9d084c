//! REST client errors.

use crate::clients::HttpError;
use thiserror::Error;

/// Failure of a [`RestClient`](super::RestClient) call.
#[derive(Debug, Error)]
pub enum RestError {
    /// The path was empty after normalization.
    #[error("Invalid REST API path: {path}")]
    InvalidPath {
        /// The path as given.
        path: String,
    },

    /// Transport failure.
    #[error(transparent)]
    Http(#[from] HttpError),
}
