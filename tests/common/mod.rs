// Common test utilities for integration tests
#![allow(dead_code)]

use std::sync::Arc;

use item_catalog_backend::api;
use item_catalog_backend::app_data::AppData;
use item_catalog_backend::stores::{DatabaseItemStore, ItemStore, MemoryItemStore};
use migration::{Migrator, MigratorTrait};
use poem::Endpoint;
use poem::test::{TestClient, TestResponse};
use sea_orm::{Database, DatabaseConnection};
use serde_json::Value;

/// Creates a test database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// AppData over a fresh in-memory store
pub fn memory_app_data() -> AppData {
    let store: Arc<dyn ItemStore> = Arc::new(MemoryItemStore::new());
    AppData::with_store("item-catalog-test", store)
}

/// AppData over a fresh migrated SQLite database
pub async fn database_app_data() -> AppData {
    let db = setup_test_db().await;
    let store: Arc<dyn ItemStore> = Arc::new(DatabaseItemStore::new(db.clone()));
    let mut app_data = AppData::with_store("item-catalog-test", store);
    app_data.db = Some(db);
    app_data
}

/// HTTP test client for the composed application
pub fn test_client(app_data: &AppData) -> TestClient<impl Endpoint> {
    TestClient::new(api::build_app(app_data, "http://localhost:8000"))
}

/// Read the response body as JSON
pub async fn json_body(resp: TestResponse) -> Value {
    resp.0
        .into_body()
        .into_json::<Value>()
        .await
        .expect("Response body should be JSON")
}
