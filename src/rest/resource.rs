//! The [`RestResource`] trait.
//!
//! A resource declares its name, collection key and path table; the trait
//! supplies find/list/count/save/delete on top of [`RestClient`], plus the
//! cursor walkers `list_page` and `list_all`.
//!
//! Every operation has a scoped `*_in` form taking extra placeholder values
//! (for example `owner` and `owner_id` for metafields). The unscoped forms
//! call it with an empty scope.
//!
//! # Implementing a resource
//!
//! ```rust,ignore
//! impl RestResource for Order {
//!     type Id = u64;
//!     type FindParams = OrderFindParams;
//!     type AllParams = OrderListParams;
//!     type CountParams = OrderCountParams;
//!
//!     const NAME: &'static str = "Order";
//!     const PLURAL: &'static str = "orders";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "orders/{id}"),
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "orders"),
//!         // ...
//!     ];
//!
//!     fn get_id(&self) -> Option<Self::Id> {
//!         self.id
//!     }
//! }
//! ```

use std::collections::HashMap;
use std::fmt::Display;
use std::sync::atomic::AtomicBool;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::clients::RestClient;
use crate::rest::path::resolve_path;
use crate::rest::{
    walk_pages, Page, PageParams, PartialResults, ResourceError, ResourceOperation, ResourcePath,
    ResourceResponse,
};

/// Placeholder values supplied by an enclosing resource, e.g.
/// `[("owner", "orders"), ("owner_id", "450789469")]`.
pub type Scope<'a> = &'a [(&'static str, String)];

/// A Shopify REST resource.
#[allow(async_fn_in_trait)]
pub trait RestResource: Serialize + DeserializeOwned + Clone + Send + Sync + Sized {
    /// Identifier type.
    type Id: Display + Clone + Send + Sync;

    /// Query options for `find`.
    type FindParams: Serialize + Default + Send + Sync;

    /// Query options for listings. Must be able to continue from a cursor.
    type AllParams: Serialize + PageParams + Send + Sync;

    /// Query options for `count`.
    type CountParams: Serialize + Default + Send + Sync;

    /// Singular name, e.g. `"Order"`. Lowercased, it is the body key for
    /// single records.
    const NAME: &'static str;

    /// Collection name and body key for lists, e.g. `"orders"`.
    const PLURAL: &'static str;

    /// Endpoint table.
    const PATHS: &'static [ResourcePath];

    /// The record's id, `None` for records not yet created.
    fn get_id(&self) -> Option<Self::Id>;

    /// Body key for a single record.
    #[must_use]
    fn resource_key() -> String {
        Self::NAME.to_lowercase()
    }

    /// GET one record by id.
    ///
    /// # Errors
    ///
    /// [`ResourceError::NotFound`] on 404, [`ResourceError::Decode`] when the
    /// payload does not decode, or a transport error.
    async fn find(
        client: &RestClient,
        id: Self::Id,
        params: Option<Self::FindParams>,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        Self::find_in(client, &[], id, params).await
    }

    /// GET one page of the collection, with its metadata.
    ///
    /// # Errors
    ///
    /// See [`find`](Self::find).
    async fn all(
        client: &RestClient,
        params: Option<Self::AllParams>,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        Self::all_in(client, &[], params).await
    }

    /// GET one page and the options for the next one.
    ///
    /// `next` is built from the server's `rel="next"` cursor only, and is
    /// `None` on the last page.
    ///
    /// # Errors
    ///
    /// See [`find`](Self::find).
    async fn list_page(
        client: &RestClient,
        params: Option<Self::AllParams>,
    ) -> Result<Page<Self, Self::AllParams>, ResourceError> {
        Self::list_page_in(client, &[], params).await
    }

    /// Fetches every page, starting from `params`.
    ///
    /// # Errors
    ///
    /// The first failing page ends the walk; the error carries every record
    /// collected before it.
    async fn list_all(
        client: &RestClient,
        params: Option<Self::AllParams>,
    ) -> Result<Vec<Self>, PartialResults<Self>> {
        Self::list_all_in(client, &[], params, None).await
    }

    /// Like [`list_all`](Self::list_all), checking `stop` between pages.
    ///
    /// # Errors
    ///
    /// As `list_all`, plus [`ResourceError::Cancelled`] once `stop` is set.
    async fn list_all_until(
        client: &RestClient,
        params: Option<Self::AllParams>,
        stop: &AtomicBool,
    ) -> Result<Vec<Self>, PartialResults<Self>> {
        Self::list_all_in(client, &[], params, Some(stop)).await
    }

    /// GET the collection size.
    ///
    /// # Errors
    ///
    /// [`ResourceError::Decode`] if the body has no numeric `count`.
    async fn count(
        client: &RestClient,
        params: Option<Self::CountParams>,
    ) -> Result<u64, ResourceError> {
        Self::count_in(client, &[], params).await
    }

    /// POST a new record, or PUT an existing one, and return the server's
    /// version of it.
    ///
    /// # Errors
    ///
    /// [`ResourceError::ValidationFailed`] on 422, [`ResourceError::NotFound`]
    /// when updating a missing record.
    async fn save(&self, client: &RestClient) -> Result<Self, ResourceError> {
        self.save_in(client, &[]).await
    }

    /// DELETE the record.
    ///
    /// # Errors
    ///
    /// [`ResourceError::PathResolutionFailed`] for a record without id.
    async fn delete(&self, client: &RestClient) -> Result<(), ResourceError> {
        self.delete_in(client, &[]).await
    }

    /// [`find`](Self::find) within `scope`.
    ///
    /// # Errors
    ///
    /// See [`find`](Self::find).
    async fn find_in(
        client: &RestClient,
        scope: Scope<'_>,
        id: Self::Id,
        params: Option<Self::FindParams>,
    ) -> Result<ResourceResponse<Self>, ResourceError> {
        let id = id.to_string();
        let path = Self::path_for(ResourceOperation::Find, scope, Some(&id))?;
        let query = optional_query(params.as_ref())?;

        let response = client
            .get(&path, query)
            .await
            .map_err(|e| ResourceError::from_rest(e, Self::NAME, Some(&id)))?;
        ResourceResponse::from_http_response(response, &Self::resource_key())
    }

    /// [`all`](Self::all) within `scope`.
    ///
    /// # Errors
    ///
    /// See [`find`](Self::find).
    async fn all_in(
        client: &RestClient,
        scope: Scope<'_>,
        params: Option<Self::AllParams>,
    ) -> Result<ResourceResponse<Vec<Self>>, ResourceError> {
        let path = Self::path_for(ResourceOperation::All, scope, None)?;
        let query = optional_query(params.as_ref())?;

        let response = client
            .get(&path, query)
            .await
            .map_err(|e| ResourceError::from_rest(e, Self::NAME, None))?;
        ResourceResponse::from_http_response(response, Self::PLURAL)
    }

    /// [`list_page`](Self::list_page) within `scope`.
    ///
    /// # Errors
    ///
    /// See [`find`](Self::find).
    async fn list_page_in(
        client: &RestClient,
        scope: Scope<'_>,
        params: Option<Self::AllParams>,
    ) -> Result<Page<Self, Self::AllParams>, ResourceError> {
        let response = Self::all_in(client, scope, params).await?;
        let next = response.next_page().map(Self::AllParams::from_cursor);
        Ok(Page::new(response.into_inner(), next))
    }

    /// [`list_all`](Self::list_all) within `scope`, with an optional stop flag.
    ///
    /// # Errors
    ///
    /// See [`list_all_until`](Self::list_all_until).
    async fn list_all_in(
        client: &RestClient,
        scope: Scope<'_>,
        params: Option<Self::AllParams>,
        stop: Option<&AtomicBool>,
    ) -> Result<Vec<Self>, PartialResults<Self>> {
        walk_pages(
            params,
            |options| Self::list_page_in(client, scope, options),
            stop,
        )
        .await
    }

    /// [`count`](Self::count) within `scope`.
    ///
    /// # Errors
    ///
    /// See [`count`](Self::count).
    async fn count_in(
        client: &RestClient,
        scope: Scope<'_>,
        params: Option<Self::CountParams>,
    ) -> Result<u64, ResourceError> {
        let path = Self::path_for(ResourceOperation::Count, scope, None)?;
        let query = optional_query(params.as_ref())?;

        let response = client
            .get(&path, query)
            .await
            .map_err(|e| ResourceError::from_rest(e, Self::NAME, None))?;
        response
            .body
            .get("count")
            .and_then(Value::as_u64)
            .ok_or_else(|| ResourceError::decode("count", "missing numeric 'count' in response body"))
    }

    /// [`save`](Self::save) within `scope`.
    ///
    /// # Errors
    ///
    /// See [`save`](Self::save).
    async fn save_in(&self, client: &RestClient, scope: Scope<'_>) -> Result<Self, ResourceError> {
        if self.get_id().is_some() {
            self.update_in(client, scope).await
        } else {
            self.create_in(client, scope).await
        }
    }

    /// POSTs the record to the collection within `scope`, whether or not it
    /// carries an id.
    ///
    /// # Errors
    ///
    /// See [`save`](Self::save).
    async fn create_in(&self, client: &RestClient, scope: Scope<'_>) -> Result<Self, ResourceError> {
        let body = self.wrapped_body()?;
        let path = Self::path_for(ResourceOperation::Create, scope, None)?;
        let response = client
            .post(&path, body, HashMap::new())
            .await
            .map_err(|e| ResourceError::from_rest(e, Self::NAME, None))?;
        ResourceResponse::<Self>::from_http_response(response, &Self::resource_key())
            .map(ResourceResponse::into_inner)
    }

    /// PUTs the record to its own path within `scope`.
    ///
    /// # Errors
    ///
    /// [`ResourceError::PathResolutionFailed`] for a record without id,
    /// otherwise see [`save`](Self::save).
    async fn update_in(&self, client: &RestClient, scope: Scope<'_>) -> Result<Self, ResourceError> {
        let id = self
            .get_id()
            .ok_or(ResourceError::PathResolutionFailed {
                resource: Self::NAME,
                operation: ResourceOperation::Update.as_str(),
            })?
            .to_string();
        let body = self.wrapped_body()?;
        let path = Self::path_for(ResourceOperation::Update, scope, Some(&id))?;
        let response = client
            .put(&path, body, HashMap::new())
            .await
            .map_err(|e| ResourceError::from_rest(e, Self::NAME, Some(&id)))?;
        ResourceResponse::<Self>::from_http_response(response, &Self::resource_key())
            .map(ResourceResponse::into_inner)
    }

    /// [`delete`](Self::delete) within `scope`.
    ///
    /// # Errors
    ///
    /// See [`delete`](Self::delete).
    async fn delete_in(&self, client: &RestClient, scope: Scope<'_>) -> Result<(), ResourceError> {
        let id = self.get_id().ok_or(ResourceError::PathResolutionFailed {
            resource: Self::NAME,
            operation: ResourceOperation::Delete.as_str(),
        })?;
        Self::delete_by_id_in(client, scope, id).await
    }

    /// DELETE by id within `scope`, without a record in hand.
    ///
    /// # Errors
    ///
    /// [`ResourceError::NotFound`] on 404.
    async fn delete_by_id_in(
        client: &RestClient,
        scope: Scope<'_>,
        id: Self::Id,
    ) -> Result<(), ResourceError> {
        let id = id.to_string();
        let path = Self::path_for(ResourceOperation::Delete, scope, Some(&id))?;

        client
            .delete(&path, HashMap::new())
            .await
            .map_err(|e| ResourceError::from_rest(e, Self::NAME, Some(&id)))?;
        Ok(())
    }

    /// The record wrapped under its body key, e.g. `{"order": {...}}`.
    ///
    /// # Errors
    ///
    /// [`ResourceError::Decode`] if the record cannot be serialized.
    fn wrapped_body(&self) -> Result<Value, ResourceError> {
        let record = serde_json::to_value(self).map_err(|e| ResourceError::decode(Self::NAME, e))?;
        Ok(Value::Object(serde_json::Map::from_iter([(
            Self::resource_key(),
            record,
        )])))
    }

    /// POSTs `body` to an action endpoint such as `orders/{id}/close` and
    /// decodes the record returned under [`resource_key`](Self::resource_key).
    ///
    /// # Errors
    ///
    /// See [`save`](Self::save).
    async fn post_action(
        client: &RestClient,
        path: &str,
        body: Value,
        id: &str,
    ) -> Result<Self, ResourceError> {
        let response = client
            .post(path, body, HashMap::new())
            .await
            .map_err(|e| ResourceError::from_rest(e, Self::NAME, Some(id)))?;
        ResourceResponse::<Self>::from_http_response(response, &Self::resource_key())
            .map(ResourceResponse::into_inner)
    }

    /// Resolves the path for `operation` from `scope` plus an optional `id`.
    ///
    /// # Errors
    ///
    /// [`ResourceError::PathResolutionFailed`] when no template fits.
    fn path_for(
        operation: ResourceOperation,
        scope: Scope<'_>,
        id: Option<&str>,
    ) -> Result<String, ResourceError> {
        let mut ids = scope.to_vec();
        if let Some(id) = id {
            ids.push(("id", id.to_string()));
        }
        resolve_path(Self::PATHS, operation, &ids, Self::NAME)
    }
}

fn optional_query<T: Serialize>(
    params: Option<&T>,
) -> Result<HashMap<String, String>, ResourceError> {
    params.map_or_else(|| Ok(HashMap::new()), serialize_to_query)
}

/// Flattens a params struct into query pairs.
///
/// `null` fields are skipped, arrays become comma-separated lists, and nested
/// objects are sent as JSON text.
///
/// # Errors
///
/// [`ResourceError::Decode`] if `params` cannot be serialized.
pub fn serialize_to_query<T: Serialize>(
    params: &T,
) -> Result<HashMap<String, String>, ResourceError> {
    let value = serde_json::to_value(params).map_err(|e| ResourceError::decode("query", e))?;

    let mut query = HashMap::new();
    let Value::Object(map) = value else {
        return Ok(query);
    };

    for (key, value) in map {
        let rendered = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Array(items) => {
                let parts: Vec<String> = items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s.clone()),
                        Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .collect();
                if parts.is_empty() {
                    continue;
                }
                parts.join(",")
            }
            object @ Value::Object(_) => object.to_string(),
        };
        query.insert(key, rendered);
    }

    Ok(query)
}
