use chrono::DateTime;
use poem_openapi::Object;

use crate::types::db::item;
use crate::types::internal::item::ItemDraft;

fn default_is_available() -> bool {
    true
}

/// Request model for creating or fully replacing an item
#[derive(Object, Debug, Clone)]
pub struct ItemRequest {
    /// Name of the item (must not be empty)
    #[oai(validator(min_length = 1))]
    pub name: String,

    /// Optional description of the item
    pub description: Option<String>,

    /// Price of the item
    pub price: f64,

    /// Whether the item can currently be ordered (defaults to true)
    #[oai(default = "default_is_available")]
    pub is_available: bool,
}

impl From<ItemRequest> for ItemDraft {
    fn from(request: ItemRequest) -> Self {
        ItemDraft {
            name: request.name,
            description: request.description,
            price: request.price,
            is_available: request.is_available,
        }
    }
}

/// Response model representing a stored item
#[derive(Object, Debug, Clone, PartialEq)]
pub struct ItemResponse {
    /// Server-assigned identifier
    pub id: i32,

    /// Name of the item
    pub name: String,

    /// Optional description of the item
    pub description: Option<String>,

    /// Price of the item
    pub price: f64,

    /// Whether the item can currently be ordered
    pub is_available: bool,

    /// Timestamp when the item was created (ISO 8601 format)
    pub created_at: String,

    /// Timestamp of the last update (ISO 8601 format), absent until first update
    pub updated_at: Option<String>,
}

impl From<item::Model> for ItemResponse {
    fn from(model: item::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
            is_available: model.is_available,
            created_at: format_timestamp(model.created_at),
            updated_at: model.updated_at.map(format_timestamp),
        }
    }
}

/// Response model for a successful delete
#[derive(Object, Debug)]
pub struct DeleteItemResponse {
    /// Confirmation message
    pub message: String,

    /// The record that was removed
    pub deleted_item: ItemResponse,
}

impl DeleteItemResponse {
    pub fn new(deleted: item::Model) -> Self {
        Self {
            message: format!("Item {} deleted successfully", deleted.id),
            deleted_item: deleted.into(),
        }
    }
}

/// Render a Unix timestamp (seconds) as RFC 3339
///
/// Out-of-range values fall back to the raw number rather than failing the response.
pub fn format_timestamp(seconds: i64) -> String {
    DateTime::from_timestamp(seconds, 0)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| seconds.to_string())
}
