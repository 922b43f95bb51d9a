use std::path::Path;

use serde::Deserialize;

use crate::config::errors::ApplicationError;

/// Fallback configuration file read when a setting is not in the environment
///
/// ```toml
/// [catalog]
/// database_url = "sqlite://items.db?mode=rwc"
/// ```
///
/// Unknown tables and keys are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub catalog: CatalogSection,
}

#[derive(Debug, Default, Deserialize)]
pub struct CatalogSection {
    pub database_url: Option<String>,
}

impl CatalogFile {
    /// Read and parse the file at `path`
    ///
    /// # Returns
    /// * `Ok(Some(file))` - File parsed
    /// * `Ok(None)` - File does not exist
    /// * `Err(ApplicationError)` - File exists but is unreadable or not valid TOML
    pub fn load(path: &Path) -> Result<Option<Self>, ApplicationError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ApplicationError::FileRead {
                    path: path.display().to_string(),
                    source,
                });
            }
        };

        let file = toml::from_str(&content).map_err(|source| ApplicationError::FileParse {
            path: path.display().to_string(),
            source,
        })?;

        Ok(Some(file))
    }

    /// Value of `key` in the `[catalog]` table
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "database_url" => self.catalog.database_url.as_deref(),
            _ => None,
        }
    }
}
