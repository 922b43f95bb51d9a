use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::{connect_database, migrate_database, BootstrapSettings, StorageBackend};
use crate::errors::InternalError;
use crate::stores::{seed, DatabaseItemStore, ItemStore, MemoryItemStore};

/// Centralized application data following the main-owned stores pattern
///
/// Everything is created once in main.rs and shared with the API layer.
///
/// ```text
/// main.rs
///   ↓
/// AppData::init(settings)
///   ↓ creates once
///   ├─ db (Option<DatabaseConnection>, database backend only)
///   └─ item_store (Arc<dyn ItemStore>)
///   ↓
/// api::build_app(&app_data, ...)
/// ```
pub struct AppData {
    pub service_name: String,
    pub db: Option<DatabaseConnection>,
    pub item_store: Arc<dyn ItemStore>,
}

impl AppData {
    /// Initialize all application data
    ///
    /// For the database backend this connects and applies pending migrations
    /// before the store is created. Seed items are inserted afterwards when enabled.
    ///
    /// # Errors
    ///
    /// Returns `InternalError` when no database URL is configured, the database
    /// is unreachable, migrations fail or seeding fails
    pub async fn init(settings: &BootstrapSettings) -> Result<Self, InternalError> {
        tracing::info!("Initializing AppData with {} storage...", settings.storage_backend().as_str());

        let (db, item_store): (Option<DatabaseConnection>, Arc<dyn ItemStore>) =
            match settings.storage_backend() {
                StorageBackend::Memory => (None, Arc::new(MemoryItemStore::new())),
                StorageBackend::Database => {
                    let database_url = settings.require_database_url()?;

                    let db = connect_database(database_url).await?;
                    migrate_database(&db).await?;

                    (Some(db.clone()), Arc::new(DatabaseItemStore::new(db)))
                }
            };

        if settings.seed_items() {
            tracing::debug!("Seeding items...");
            seed::seed_if_empty(item_store.as_ref()).await?;
        }

        tracing::info!("AppData initialization complete");

        Ok(Self {
            service_name: settings.service_name().to_string(),
            db,
            item_store,
        })
    }

    /// Assemble AppData around an already constructed store
    pub fn with_store(service_name: impl Into<String>, item_store: Arc<dyn ItemStore>) -> Self {
        Self {
            service_name: service_name.into(),
            db: None,
            item_store,
        }
    }
}
