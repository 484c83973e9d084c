//! Path tables for REST resources.
//!
//! Each resource lists its endpoints as [`ResourcePath`] templates. A call
//! picks the most specific template whose ids are all known, then fills the
//! `{placeholders}` in.
//!
//! ```rust
//! use shopify_orders::clients::HttpMethod;
//! use shopify_orders::rest::{get_path, build_path, ResourceOperation, ResourcePath};
//! use std::collections::HashMap;
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["owner", "owner_id", "id"], "{owner}/{owner_id}/metafields/{id}"),
//!     ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "metafields/{id}"),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Find, &["owner", "owner_id", "id"]).unwrap();
//! let ids = HashMap::from([("owner", "orders"), ("owner_id", "1"), ("id", "2")]);
//! assert_eq!(build_path(path.template, &ids), "orders/1/metafields/2");
//! ```

use crate::clients::HttpMethod;
use crate::rest::ResourceError;
use std::collections::HashMap;
use std::fmt::Display;

/// The CRUD operation a path serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// GET one record.
    Find,
    /// GET a collection page.
    All,
    /// POST a new record.
    Create,
    /// PUT an existing record.
    Update,
    /// DELETE a record.
    Delete,
    /// GET the collection size.
    Count,
}

impl ResourceOperation {
    /// Verb normally used for the operation.
    #[must_use]
    pub const fn default_http_method(&self) -> HttpMethod {
        match self {
            Self::Find | Self::All | Self::Count => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::Update => HttpMethod::Put,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Lowercase name, used in errors.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Find => "find",
            Self::All => "all",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Count => "count",
        }
    }
}

/// One endpoint of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// Verb.
    pub http_method: HttpMethod,
    /// Operation served.
    pub operation: ResourceOperation,
    /// Placeholders the template needs, in order.
    pub ids: &'static [&'static str],
    /// Template such as `orders/{id}`.
    pub template: &'static str,
}

impl ResourcePath {
    /// `const` constructor so tables can live in `const` items.
    #[must_use]
    pub const fn new(
        http_method: HttpMethod,
        operation: ResourceOperation,
        ids: &'static [&'static str],
        template: &'static str,
    ) -> Self {
        Self {
            http_method,
            operation,
            ids,
            template,
        }
    }

    /// Number of placeholders.
    #[must_use]
    pub const fn id_count(&self) -> usize {
        self.ids.len()
    }

    /// Whether every placeholder is in `available_ids`.
    #[must_use]
    pub fn matches_ids(&self, available_ids: &[&str]) -> bool {
        self.ids.iter().all(|id| available_ids.contains(id))
    }
}

/// Most specific path for `operation` whose ids are all available.
#[must_use]
pub fn get_path<'a>(
    paths: &'a [ResourcePath],
    operation: ResourceOperation,
    available_ids: &[&str],
) -> Option<&'a ResourcePath> {
    paths
        .iter()
        .filter(|p| p.operation == operation && p.matches_ids(available_ids))
        .max_by_key(|p| p.id_count())
}

/// Replaces `{name}` placeholders; unknown placeholders are left as they are.
#[must_use]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    ids.iter().fold(template.to_string(), |path, (name, value)| {
        path.replace(&format!("{{{name}}}"), &value.to_string())
    })
}

/// Picks and fills the path for `operation` from `(placeholder, value)` pairs.
///
/// # Errors
///
/// Returns [`ResourceError::PathResolutionFailed`] when no template fits.
pub fn resolve_path(
    paths: &[ResourcePath],
    operation: ResourceOperation,
    ids: &[(&'static str, String)],
    resource: &'static str,
) -> Result<String, ResourceError> {
    let available: Vec<&str> = ids.iter().map(|(name, _)| *name).collect();
    let path = get_path(paths, operation, &available).ok_or(
        ResourceError::PathResolutionFailed {
            resource,
            operation: operation.as_str(),
        },
    )?;
    let values: HashMap<&str, &str> = ids
        .iter()
        .map(|(name, value)| (*name, value.as_str()))
        .collect();
    Ok(build_path(path.template, &values))
}
