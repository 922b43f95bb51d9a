use poem_openapi::Object;

/// Response model for the root endpoint
#[derive(Object, Debug)]
pub struct WelcomeResponse {
    /// Greeting shown to API consumers
    pub message: String,
}

/// Response model for health check endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,

    /// Name of the running service
    pub service: String,

    /// Active storage backend (`memory` or `database`)
    pub storage: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}
