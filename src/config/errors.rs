use thiserror::Error;

/// Configuration failures detected while loading settings
///
/// Any of these at startup is fatal: the service refuses to bind its listener.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Invalid setting '{setting_name}': {reason}")]
    InvalidSetting { setting_name: String, reason: String },

    #[error("Failed to parse setting '{setting_name}': {error}")]
    ParseError { setting_name: String, error: String },

    #[error("Failed to read configuration file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration file '{path}': {source}")]
    FileParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
