//! Metafields: namespaced key/value metadata attached to a record.
//!
//! Metafields are reached through their owner:
//! - `{owner}/{owner_id}/metafields[/{id}]`, e.g. `orders/450789469/metafields`
//! - `metafields[/{id}]` for shop-level metafields
//!
//! ```rust,ignore
//! use shopify_orders::rest::resources::{Metafield, Order};
//!
//! let metafields = Order::metafields(&client, 450789469);
//! let created = metafields
//!     .create(&Metafield::new("warehouse", "bin", "A-12", "single_line_text_field"))
//!     .await?;
//! metafields.delete(created.id.unwrap_or_default()).await?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::{HttpMethod, PageCursor};
use crate::rest::{PageParams, ResourceOperation, ResourcePath, RestResource};

/// A metafield.
///
/// `id`, `owner_id`, `owner_resource` and the timestamps are assigned by
/// Shopify and never sent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Metafield {
    #[serde(skip_serializing)]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Stored value. Usually a string; legacy integer metafields come back
    /// as numbers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,

    /// Content type, e.g. `single_line_text_field` or `number_integer`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub metafield_type: Option<String>,

    /// Pre-2023 equivalent of `type` (`string`, `integer`, `json_string`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing)]
    pub owner_id: Option<u64>,

    #[serde(skip_serializing)]
    pub owner_resource: Option<String>,

    #[serde(skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing)]
    pub admin_graphql_api_id: Option<String>,
}

impl Metafield {
    /// A new, unsaved metafield with a string value.
    #[must_use]
    pub fn new(
        namespace: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
        metafield_type: impl Into<String>,
    ) -> Self {
        Self {
            namespace: Some(namespace.into()),
            key: Some(key.into()),
            value: Some(Value::String(value.into())),
            metafield_type: Some(metafield_type.into()),
            ..Self::default()
        }
    }
}

impl RestResource for Metafield {
    type Id = u64;
    type FindParams = MetafieldFindParams;
    type AllParams = MetafieldListParams;
    type CountParams = MetafieldCountParams;

    const NAME: &'static str = "Metafield";
    const PLURAL: &'static str = "metafields";

    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Find,
            &["owner", "owner_id", "id"],
            "{owner}/{owner_id}/metafields/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::All,
            &["owner", "owner_id"],
            "{owner}/{owner_id}/metafields",
        ),
        ResourcePath::new(
            HttpMethod::Get,
            ResourceOperation::Count,
            &["owner", "owner_id"],
            "{owner}/{owner_id}/metafields/count",
        ),
        ResourcePath::new(
            HttpMethod::Post,
            ResourceOperation::Create,
            &["owner", "owner_id"],
            "{owner}/{owner_id}/metafields",
        ),
        ResourcePath::new(
            HttpMethod::Put,
            ResourceOperation::Update,
            &["owner", "owner_id", "id"],
            "{owner}/{owner_id}/metafields/{id}",
        ),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["owner", "owner_id", "id"],
            "{owner}/{owner_id}/metafields/{id}",
        ),
        // Shop-level
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "metafields/{id}"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "metafields"),
        ResourcePath::new(HttpMethod::Get, ResourceOperation::Count, &[], "metafields/count"),
        ResourcePath::new(HttpMethod::Post, ResourceOperation::Create, &[], "metafields"),
        ResourcePath::new(HttpMethod::Put, ResourceOperation::Update, &["id"], "metafields/{id}"),
        ResourcePath::new(
            HttpMethod::Delete,
            ResourceOperation::Delete,
            &["id"],
            "metafields/{id}",
        ),
    ];

    fn get_id(&self) -> Option<Self::Id> {
        self.id
    }
}

/// Query options for a single metafield.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MetafieldFindParams {
    /// Comma-separated fields to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
}

/// Query options for listing metafields.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MetafieldListParams {
    /// Page size, at most 250.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub metafield_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_min: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_max: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,

    /// Cursor from a previous page. Set by [`PageParams::from_cursor`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<String>,
}

impl PageParams for MetafieldListParams {
    fn from_cursor(cursor: &PageCursor) -> Self {
        Self {
            limit: cursor.limit(),
            page_info: Some(cursor.page_info().to_string()),
            ..Self::default()
        }
    }
}

/// Query options for counting metafields.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MetafieldCountParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::{get_path, resolve_path, serialize_to_query};
    use serde_json::json;

    fn order_scope(id: &str) -> Vec<(&'static str, String)> {
        vec![("owner", "orders".to_string()), ("owner_id", "450789469".to_string()), ("id", id.to_string())]
    }

    #[test]
    fn test_metafield_read_only_fields_not_serialized() {
        let metafield = Metafield {
            id: Some(1),
            owner_id: Some(450789469),
            owner_resource: Some("order".to_string()),
            ..Metafield::new("warehouse", "bin", "A-12", "single_line_text_field")
        };

        let json = serde_json::to_value(&metafield).unwrap();
        assert_eq!(json["namespace"], "warehouse");
        assert_eq!(json["type"], "single_line_text_field");
        assert!(json.get("id").is_none());
        assert!(json.get("owner_id").is_none());
        assert!(json.get("owner_resource").is_none());
    }

    #[test]
    fn test_metafield_accepts_numeric_value() {
        let metafield: Metafield = serde_json::from_value(json!({
            "id": 915396079,
            "namespace": "inventory",
            "key": "warehouse",
            "value": 25,
            "value_type": "integer",
            "owner_id": 450789469,
            "owner_resource": "order"
        }))
        .unwrap();
        assert_eq!(metafield.value, Some(json!(25)));
        assert_eq!(metafield.owner_resource.as_deref(), Some("order"));
    }

    #[test]
    fn test_metafield_owner_paths() {
        let scope = order_scope("7");
        assert_eq!(
            resolve_path(Metafield::PATHS, ResourceOperation::Find, &scope, "Metafield").unwrap(),
            "orders/450789469/metafields/7"
        );
        assert_eq!(
            resolve_path(Metafield::PATHS, ResourceOperation::Count, &scope[..2], "Metafield")
                .unwrap(),
            "orders/450789469/metafields/count"
        );
        assert_eq!(
            resolve_path(Metafield::PATHS, ResourceOperation::Delete, &scope, "Metafield").unwrap(),
            "orders/450789469/metafields/7"
        );
    }

    #[test]
    fn test_metafield_shop_level_paths() {
        let path = get_path(Metafield::PATHS, ResourceOperation::All, &[]).unwrap();
        assert_eq!(path.template, "metafields");
        let path = get_path(Metafield::PATHS, ResourceOperation::Find, &["id"]).unwrap();
        assert_eq!(path.template, "metafields/{id}");
    }

    #[test]
    fn test_metafield_list_params_query() {
        let params = MetafieldListParams {
            namespace: Some("warehouse".to_string()),
            metafield_type: Some("number_integer".to_string()),
            limit: Some(10),
            ..Default::default()
        };
        let query = serialize_to_query(&params).unwrap();
        assert_eq!(query["namespace"], "warehouse");
        assert_eq!(query["type"], "number_integer");
        assert_eq!(query["limit"], "10");
        assert_eq!(query.len(), 3);
    }
}
