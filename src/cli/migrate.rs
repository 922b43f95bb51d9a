use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;

use crate::cli::MigrateCommands;
use crate::config::{connect_database, migrate_database, BootstrapSettings};
use crate::errors::InternalError;
use crate::errors::internal::DatabaseError;

/// Run a migration command against the configured database
///
/// Connects without building AppData, so no store is created and no seed
/// data is inserted.
///
/// # Returns
/// * `Ok(())` - Command completed
/// * `Err(...)` - Configuration, connection or migration failure
pub async fn run_migration_command(
    settings: &BootstrapSettings,
    command: MigrateCommands,
) -> Result<(), Box<dyn std::error::Error>> {
    let database_url = settings.require_database_url()?;

    tracing::info!("Connecting to item database...");
    let db = connect_database(database_url).await?;

    apply(&db, command).await?;

    Ok(())
}

/// Execute a migration command on an open connection
pub async fn apply(db: &DatabaseConnection, command: MigrateCommands) -> Result<(), InternalError> {
    match command {
        MigrateCommands::Up => {
            tracing::info!("Applying pending migrations...");
            migrate_database(db).await?;
        }
        MigrateCommands::Down { steps } => {
            tracing::info!("Rolling back {} migration(s)...", steps);
            Migrator::down(db, Some(steps))
                .await
                .map_err(|source| DatabaseError::Migration { source })?;
        }
        MigrateCommands::Status => {
            Migrator::status(db)
                .await
                .map_err(|source| DatabaseError::Migration { source })?;
        }
        MigrateCommands::Fresh => {
            tracing::warn!("Dropping all tables and re-applying migrations");
            Migrator::fresh(db)
                .await
                .map_err(|source| DatabaseError::Migration { source })?;
        }
    }

    tracing::info!("Migration command completed");
    Ok(())
}
