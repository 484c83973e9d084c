//! Cursor pagination.
//!
//! A listing is fetched one page at a time. Each page carries the options for
//! the next call, built only from the server's `rel="next"` cursor, and the
//! walk ends when a page arrives without one. [`walk_pages`] drives that loop
//! for any fetch function and keeps whatever it collected if a page fails.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use shopify_orders::rest::RestResource;
//!
//! let stop = AtomicBool::new(false);
//! match Order::list_all_until(&client, Some(params), &stop).await {
//!     Ok(orders) => println!("{} orders", orders.len()),
//!     Err(partial) => {
//!         eprintln!("stopped after {} orders: {}", partial.records().len(), partial.error());
//!     }
//! }
//! ```

use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::clients::PageCursor;
use crate::rest::ResourceError;

/// Query options that can continue a listing from a server cursor.
///
/// Implementations set only the cursor fields. Shopify rejects filters next
/// to `page_info`, so nothing from the first call's options is carried over.
pub trait PageParams: Default {
    /// Options for the page `cursor` points at.
    fn from_cursor(cursor: &PageCursor) -> Self;
}

/// One page of records and the options for the following call.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T, P> {
    /// Records in server order.
    pub items: Vec<T>,
    /// Options for the next call, `None` on the last page.
    pub next: Option<P>,
}

impl<T, P> Page<T, P> {
    /// A page followed by `next`.
    #[must_use]
    pub const fn new(items: Vec<T>, next: Option<P>) -> Self {
        Self { items, next }
    }

    /// The final page.
    #[must_use]
    pub const fn last(items: Vec<T>) -> Self {
        Self { items, next: None }
    }

    /// Whether another page follows.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

/// Records collected before a listing failed or was cancelled.
///
/// Returned as the error of a multi-page listing so callers can decide
/// whether the partial data is usable.
pub struct PartialResults<T> {
    records: Vec<T>,
    error: ResourceError,
}

impl<T> PartialResults<T> {
    /// Pairs collected records with the error that ended the walk.
    #[must_use]
    pub const fn new(records: Vec<T>, error: ResourceError) -> Self {
        Self { records, error }
    }

    /// Records from every page that arrived, in page order.
    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// The error that ended the walk.
    #[must_use]
    pub const fn error(&self) -> &ResourceError {
        &self.error
    }

    /// Whether the walk ended because it was asked to stop.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self.error, ResourceError::Cancelled { .. })
    }

    /// Splits into records and error.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, ResourceError) {
        (self.records, self.error)
    }

    /// Discards the records.
    #[must_use]
    pub fn into_error(self) -> ResourceError {
        self.error
    }
}

impl<T> fmt::Debug for PartialResults<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartialResults")
            .field("records", &self.records.len())
            .field("error", &self.error)
            .finish()
    }
}

impl<T> fmt::Display for PartialResults<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "listing stopped after {} record(s): {}",
            self.records.len(),
            self.error
        )
    }
}

impl<T> std::error::Error for PartialResults<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl<T> From<PartialResults<T>> for ResourceError {
    fn from(partial: PartialResults<T>) -> Self {
        partial.error
    }
}

fn should_stop(stop: Option<&AtomicBool>) -> bool {
    stop.is_some_and(|flag| flag.load(Ordering::Acquire))
}

/// Fetches pages until one arrives without a continuation.
///
/// `fetch` gets `initial` on the first call and afterwards exactly the
/// `next` value of the previous page. Records are appended in arrival order
/// with no deduplication and no page limit. Pages are fetched one after
/// another.
///
/// `stop` is checked before every fetch except the first; once set, the walk
/// ends with [`ResourceError::Cancelled`].
///
/// # Errors
///
/// The first fetch error, or the cancellation, is returned as
/// [`PartialResults`] holding every record collected so far.
pub async fn walk_pages<T, P, F, Fut>(
    initial: Option<P>,
    mut fetch: F,
    stop: Option<&AtomicBool>,
) -> Result<Vec<T>, PartialResults<T>>
where
    F: FnMut(Option<P>) -> Fut,
    Fut: Future<Output = Result<Page<T, P>, ResourceError>>,
{
    let mut records = Vec::new();
    let mut options = initial;
    let mut pages: usize = 0;

    loop {
        if pages > 0 && should_stop(stop) {
            tracing::debug!(pages, records = records.len(), "Pagination cancelled");
            return Err(PartialResults::new(
                records,
                ResourceError::Cancelled { pages },
            ));
        }

        let page = match fetch(options.take()).await {
            Ok(page) => page,
            Err(error) => {
                if !records.is_empty() {
                    tracing::warn!(
                        page = pages + 1,
                        records = records.len(),
                        "Page fetch failed, returning partial results: {error}"
                    );
                }
                return Err(PartialResults::new(records, error));
            }
        };
        pages += 1;

        tracing::debug!(
            page = pages,
            count = page.items.len(),
            has_next = page.has_next(),
            "Fetched page"
        );
        records.extend(page.items);

        match page.next {
            Some(next) => options = Some(next),
            None => return Ok(records),
        }
    }
}
