use poem_openapi::{payload::Json, OpenApi, Tags};
use crate::types::dto::common::{HealthResponse, WelcomeResponse};
use chrono::Utc;

/// Root and health check API
pub struct HealthApi {
    service_name: String,
    storage: &'static str,
}

impl HealthApi {
    pub fn new(service_name: impl Into<String>, storage: &'static str) -> Self {
        Self {
            service_name: service_name.into(),
            storage,
        }
    }
}

/// API tags for health endpoints
#[derive(Tags)]
enum ApiTags {
    /// Health check endpoints
    Health,
}

#[OpenApi]
impl HealthApi {
    /// Welcome message
    #[oai(path = "/", method = "get", tag = "ApiTags::Health")]
    async fn root(&self) -> Json<WelcomeResponse> {
        Json(WelcomeResponse {
            message: "Welcome to the Item Catalog API!".to_string(),
        })
    }

    /// Health check endpoint
    ///
    /// Returns the current status of the API service
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health(&self) -> Json<HealthResponse> {
        Json(HealthResponse {
            status: "healthy".to_string(),
            service: self.service_name.clone(),
            storage: self.storage.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}
