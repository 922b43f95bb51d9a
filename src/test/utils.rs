// Only compiled when running tests

use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::app_data::AppData;
use crate::stores::{DatabaseItemStore, ItemStore, MemoryItemStore};

/// Creates an in-memory SQLite database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Creates a database-backed store on a fresh migrated database
///
/// Returns (db, store) so callers can inspect rows directly.
pub async fn setup_test_database_store() -> (DatabaseConnection, Arc<DatabaseItemStore>) {
    let db = setup_test_db().await;
    let store = Arc::new(DatabaseItemStore::new(db.clone()));
    (db, store)
}

/// Creates AppData around an isolated in-memory store
pub fn memory_app_data() -> AppData {
    let store: Arc<dyn ItemStore> = Arc::new(MemoryItemStore::new());
    AppData::with_store("item-catalog-test", store)
}
