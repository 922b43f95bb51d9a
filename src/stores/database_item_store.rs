use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, PaginatorTrait, QueryOrder,
    QuerySelect, Set,
};

use crate::errors::InternalError;
use crate::stores::ItemStore;
use crate::types::db::item::{self, ActiveModel, Entity as Item};
use crate::types::internal::item::ItemDraft;

/// Repository for items stored in the relational `items` table
///
/// Each operation runs its statements directly on the pooled connection, so
/// every write commits on its own.
pub struct DatabaseItemStore {
    db: DatabaseConnection,
}

impl DatabaseItemStore {
    /// Create a new DatabaseItemStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Write a modified row back, treating a vanished row as absent
    async fn save_changes(&self, active_model: ActiveModel) -> Result<Option<item::Model>, InternalError> {
        match active_model.update(&self.db).await {
            Ok(updated) => Ok(Some(updated)),
            // Another request may have removed the row between the select and the update
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(InternalError::database("update_item", e)),
        }
    }
}

/// Row offsets and limits are bound as signed 64-bit integers
fn clamp_to_i64(value: u64) -> u64 {
    value.min(i64::MAX as u64)
}

#[async_trait]
impl ItemStore for DatabaseItemStore {
    fn backend_name(&self) -> &'static str {
        "database"
    }

    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<item::Model>, InternalError> {
        Item::find()
            .order_by_asc(item::Column::Id)
            .offset(clamp_to_i64(skip))
            .limit(clamp_to_i64(limit))
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_items", e))
    }

    async fn get(&self, id: i32) -> Result<Option<item::Model>, InternalError> {
        Item::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("get_item", e))
    }

    /// Insert a new row
    ///
    /// The primary key is left to the database's auto-increment.
    async fn create(&self, draft: ItemDraft) -> Result<item::Model, InternalError> {
        let new_item = ActiveModel {
            id: NotSet,
            name: Set(draft.name),
            description: Set(draft.description),
            price: Set(draft.price),
            is_available: Set(draft.is_available),
            created_at: Set(Utc::now().timestamp()),
            updated_at: Set(None),
        };

        let model = new_item
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_item", e))?;

        tracing::debug!(item_id = model.id, "Inserted item row");
        Ok(model)
    }

    async fn update(&self, id: i32, draft: ItemDraft) -> Result<Option<item::Model>, InternalError> {
        let Some(existing) = self.get(id).await? else {
            return Ok(None);
        };

        let mut active_model: ActiveModel = existing.into();
        active_model.name = Set(draft.name);
        active_model.description = Set(draft.description);
        active_model.price = Set(draft.price);
        active_model.is_available = Set(draft.is_available);
        active_model.updated_at = Set(Some(Utc::now().timestamp()));

        self.save_changes(active_model).await
    }

    async fn delete(&self, id: i32) -> Result<Option<item::Model>, InternalError> {
        let Some(existing) = self.get(id).await? else {
            return Ok(None);
        };

        let result = Item::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_item", e))?;

        // Another request may have removed the row between the select and the delete
        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(existing))
    }

    async fn count(&self) -> Result<u64, InternalError> {
        Item::find()
            .count(&self.db)
            .await
            .map_err(|e| InternalError::database("count_items", e))
    }
}

impl std::fmt::Debug for DatabaseItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseItemStore")
            .field("db", &"<connection>")
            .finish()
    }
}
