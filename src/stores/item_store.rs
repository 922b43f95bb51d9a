use async_trait::async_trait;

use crate::errors::InternalError;
use crate::types::db::item;
use crate::types::internal::item::ItemDraft;

/// Storage backend contract for items
///
/// Every implementation owns the canonical set of item records. Absence is an
/// `Ok(None)`, never an error; `Err` is reserved for infrastructure failures.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Short backend identifier reported by the health endpoint
    fn backend_name(&self) -> &'static str;

    /// Items in creation order, skipping `skip` and returning at most `limit`
    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<item::Model>, InternalError>;

    /// Look up a single item
    async fn get(&self, id: i32) -> Result<Option<item::Model>, InternalError>;

    /// Persist a new item and return it with its assigned id
    async fn create(&self, draft: ItemDraft) -> Result<item::Model, InternalError>;

    /// Replace every client field of an existing item
    async fn update(&self, id: i32, draft: ItemDraft) -> Result<Option<item::Model>, InternalError>;

    /// Remove an item, returning the removed record
    async fn delete(&self, id: i32) -> Result<Option<item::Model>, InternalError>;

    /// Number of live items
    async fn count(&self) -> Result<u64, InternalError>;
}
