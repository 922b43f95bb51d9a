use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::errors::InternalError;
use crate::errors::internal::ItemStoreError;
use crate::stores::ItemStore;
use crate::types::db::item;
use crate::types::internal::item::ItemDraft;

struct MemoryState {
    items: Vec<item::Model>,
    next_id: i32,
}

/// Process-local item storage
///
/// Items live in an ordered `Vec` and are found by linear scan. Ids come from a
/// counter starting at 1 and are never handed out twice, even after deletes.
/// The whole collection sits behind one lock; no `.await` happens while it is held.
pub struct MemoryItemStore {
    state: RwLock<MemoryState>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                items: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<item::Model>, InternalError> {
        let state = self.state.read().await;
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(state.items.iter().skip(skip).take(limit).cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Option<item::Model>, InternalError> {
        let state = self.state.read().await;
        Ok(state.items.iter().find(|item| item.id == id).cloned())
    }

    async fn create(&self, draft: ItemDraft) -> Result<item::Model, InternalError> {
        let mut state = self.state.write().await;

        let id = state.next_id;
        state.next_id = id
            .checked_add(1)
            .ok_or(ItemStoreError::IdSpaceExhausted)?;

        let model = item::Model {
            id,
            name: draft.name,
            description: draft.description,
            price: draft.price,
            is_available: draft.is_available,
            created_at: Utc::now().timestamp(),
            updated_at: None,
        };
        state.items.push(model.clone());

        tracing::debug!(item_id = id, "Stored item in memory");
        Ok(model)
    }

    async fn update(&self, id: i32, draft: ItemDraft) -> Result<Option<item::Model>, InternalError> {
        let mut state = self.state.write().await;

        let Some(existing) = state.items.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };

        existing.name = draft.name;
        existing.description = draft.description;
        existing.price = draft.price;
        existing.is_available = draft.is_available;
        existing.updated_at = Some(Utc::now().timestamp());

        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: i32) -> Result<Option<item::Model>, InternalError> {
        let mut state = self.state.write().await;

        let removed = state
            .items
            .iter()
            .position(|item| item.id == id)
            .map(|index| state.items.remove(index));

        Ok(removed)
    }

    async fn count(&self) -> Result<u64, InternalError> {
        let state = self.state.read().await;
        Ok(state.items.len() as u64)
    }
}
