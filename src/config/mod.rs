mod config_file;
mod config_spec;
mod env_provider;
mod errors;
mod logging;
pub mod bootstrap_settings;
pub mod database;

pub use bootstrap_settings::{BootstrapSettings, StorageBackend};
pub use config_file::{CatalogFile, CatalogSection};
pub use config_spec::{ConfigSource, ConfigSpec, ConfigValue, ConfigValueSource};
pub use database::{connect_database, migrate_database};
pub use env_provider::{EnvironmentProvider, SystemEnvironment};
#[cfg(test)]
pub use env_provider::MockEnvironment;
pub use errors::ApplicationError;
pub use logging::{init_logging, LoggingConfig, LoggingError};
