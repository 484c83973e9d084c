//! Records owned by another record.
//!
//! Metafields and fulfillments live under an order's path
//! (`orders/{owner_id}/metafields`). [`SubResource`] borrows the client and
//! remembers the owner, so every call resolves the owner-scoped paths of `R`.
//!
//! ```rust,ignore
//! let fulfillments = Order::fulfillments(&client, 450789469);
//! let count = fulfillments.count(None).await?;
//! let first = fulfillments.find(255858046, None).await?;
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::AtomicBool;

use crate::clients::RestClient;
use crate::rest::{Page, PartialResults, ResourceError, RestResource};

/// Accessor for the `R` records of one owner.
pub struct SubResource<'c, R> {
    client: &'c RestClient,
    owner: &'static str,
    owner_id: u64,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for SubResource<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for SubResource<'_, R> {}

impl<R> fmt::Debug for SubResource<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubResource")
            .field("owner", &self.owner)
            .field("owner_id", &self.owner_id)
            .finish_non_exhaustive()
    }
}

impl<'c, R: RestResource> SubResource<'c, R> {
    /// Creates an accessor for the records under `{owner}/{owner_id}`.
    #[must_use]
    pub const fn new(client: &'c RestClient, owner: &'static str, owner_id: u64) -> Self {
        Self {
            client,
            owner,
            owner_id,
            _resource: PhantomData,
        }
    }

    /// The borrowed client.
    #[must_use]
    pub const fn client(&self) -> &'c RestClient {
        self.client
    }

    /// Owner collection, e.g. `"orders"`.
    #[must_use]
    pub const fn owner(&self) -> &'static str {
        self.owner
    }

    /// Owner id.
    #[must_use]
    pub const fn owner_id(&self) -> u64 {
        self.owner_id
    }

    /// Placeholder values for the owner-scoped paths.
    #[must_use]
    pub fn scope(&self) -> [(&'static str, String); 2] {
        [
            ("owner", self.owner.to_string()),
            ("owner_id", self.owner_id.to_string()),
        ]
    }

    /// First page of records.
    ///
    /// # Errors
    ///
    /// See [`RestResource::all`].
    pub async fn list(&self, params: Option<R::AllParams>) -> Result<Vec<R>, ResourceError> {
        Ok(R::all_in(self.client, &self.scope(), params).await?.into_inner())
    }

    /// One page and the options for the next.
    ///
    /// # Errors
    ///
    /// See [`RestResource::list_page`].
    pub async fn list_page(
        &self,
        params: Option<R::AllParams>,
    ) -> Result<Page<R, R::AllParams>, ResourceError> {
        R::list_page_in(self.client, &self.scope(), params).await
    }

    /// Every page.
    ///
    /// # Errors
    ///
    /// See [`RestResource::list_all`].
    pub async fn list_all(&self, params: Option<R::AllParams>) -> Result<Vec<R>, PartialResults<R>> {
        R::list_all_in(self.client, &self.scope(), params, None).await
    }

    /// Every page, checking `stop` between them.
    ///
    /// # Errors
    ///
    /// See [`RestResource::list_all_until`].
    pub async fn list_all_until(
        &self,
        params: Option<R::AllParams>,
        stop: &AtomicBool,
    ) -> Result<Vec<R>, PartialResults<R>> {
        R::list_all_in(self.client, &self.scope(), params, Some(stop)).await
    }

    /// Number of records.
    ///
    /// # Errors
    ///
    /// See [`RestResource::count`].
    pub async fn count(&self, params: Option<R::CountParams>) -> Result<u64, ResourceError> {
        R::count_in(self.client, &self.scope(), params).await
    }

    /// One record by id.
    ///
    /// # Errors
    ///
    /// See [`RestResource::find`].
    pub async fn find(&self, id: R::Id, params: Option<R::FindParams>) -> Result<R, ResourceError> {
        Ok(R::find_in(self.client, &self.scope(), id, params)
            .await?
            .into_inner())
    }

    /// POSTs a new record.
    ///
    /// # Errors
    ///
    /// See [`RestResource::save`].
    pub async fn create(&self, record: &R) -> Result<R, ResourceError> {
        record.create_in(self.client, &self.scope()).await
    }

    /// PUTs an existing record.
    ///
    /// # Errors
    ///
    /// [`ResourceError::PathResolutionFailed`] when `record` has no id.
    pub async fn update(&self, record: &R) -> Result<R, ResourceError> {
        record.update_in(self.client, &self.scope()).await
    }

    /// Deletes a record by id.
    ///
    /// # Errors
    ///
    /// See [`RestResource::delete`].
    pub async fn delete(&self, id: R::Id) -> Result<(), ResourceError> {
        R::delete_by_id_in(self.client, &self.scope(), id).await
    }
}
