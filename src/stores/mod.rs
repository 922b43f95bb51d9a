// Stores layer - Data access and repository pattern
pub mod item_store;
pub mod memory_item_store;
pub mod database_item_store;
pub mod seed;

pub use item_store::ItemStore;
pub use memory_item_store::MemoryItemStore;
pub use database_item_store::DatabaseItemStore;
