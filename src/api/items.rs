use std::sync::Arc;

use poem_openapi::{
    param::{Path, Query},
    payload::Json,
    OpenApi, Tags,
};

use crate::errors::ItemError;
use crate::stores::ItemStore;
use crate::types::dto::items::{DeleteItemResponse, ItemRequest, ItemResponse};

pub const DEFAULT_SKIP: u64 = 0;
pub const DEFAULT_LIMIT: u64 = 100;

/// Items API
///
/// Every handler makes exactly one store call. Payload validation happens in
/// poem-openapi before the handler runs; failures surface through
/// `ItemError::ValidationFailed`.
pub struct ItemsApi {
    item_store: Arc<dyn ItemStore>,
}

impl ItemsApi {
    /// Create a new ItemsApi backed by the given store
    pub fn new(item_store: Arc<dyn ItemStore>) -> Self {
        Self { item_store }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ApiTags {
    /// Item management endpoints
    Items,
}

#[OpenApi]
impl ItemsApi {
    /// List items
    ///
    /// Returns up to `limit` items (default 100) after skipping `skip` (default 0), in creation order
    #[oai(path = "/items", method = "get", tag = "ApiTags::Items")]
    async fn list_items(
        &self,
        skip: Query<Option<u64>>,
        limit: Query<Option<u64>>,
    ) -> Result<Json<Vec<ItemResponse>>, ItemError> {
        let skip = skip.0.unwrap_or(DEFAULT_SKIP);
        let limit = limit.0.unwrap_or(DEFAULT_LIMIT);
        tracing::debug!(skip, limit, "Listing items");

        let items = self.item_store.list(skip, limit).await?;

        Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
    }

    /// Get a single item
    #[oai(path = "/items/:id", method = "get", tag = "ApiTags::Items")]
    async fn get_item(&self, id: Path<i32>) -> Result<Json<ItemResponse>, ItemError> {
        let item = self.item_store.get(id.0).await?.ok_or_else(|| {
            tracing::debug!(item_id = id.0, "Item not found");
            ItemError::not_found()
        })?;

        Ok(Json(item.into()))
    }

    /// Create a new item
    ///
    /// The id is assigned by the server; `is_available` defaults to true
    #[oai(path = "/items", method = "post", tag = "ApiTags::Items")]
    async fn create_item(&self, body: Json<ItemRequest>) -> Result<Json<ItemResponse>, ItemError> {
        let created = self.item_store.create(body.0.into()).await?;

        tracing::info!(item_id = created.id, "Created item");
        Ok(Json(created.into()))
    }

    /// Replace an existing item
    ///
    /// Every field is overwritten from the payload; omitted optional fields are
    /// reset to their defaults
    #[oai(path = "/items/:id", method = "put", tag = "ApiTags::Items")]
    async fn update_item(
        &self,
        id: Path<i32>,
        body: Json<ItemRequest>,
    ) -> Result<Json<ItemResponse>, ItemError> {
        let updated = self
            .item_store
            .update(id.0, body.0.into())
            .await?
            .ok_or_else(|| {
                tracing::debug!(item_id = id.0, "Update target not found");
                ItemError::not_found()
            })?;

        tracing::info!(item_id = updated.id, "Updated item");
        Ok(Json(updated.into()))
    }

    /// Delete an item
    ///
    /// Returns a confirmation message together with the removed record
    #[oai(path = "/items/:id", method = "delete", tag = "ApiTags::Items")]
    async fn delete_item(&self, id: Path<i32>) -> Result<Json<DeleteItemResponse>, ItemError> {
        let deleted = self.item_store.delete(id.0).await?.ok_or_else(|| {
            tracing::debug!(item_id = id.0, "Delete target not found");
            ItemError::not_found()
        })?;

        tracing::info!(item_id = deleted.id, "Deleted item");
        Ok(Json(DeleteItemResponse::new(deleted)))
    }
}
