use crate::errors::internal::InternalError;
use poem_openapi::{ApiResponse, Object, payload::Json};
use std::fmt;

/// Standardized error response for item endpoints
#[derive(Object, Debug)]
pub struct ItemErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Item operation error types
#[derive(ApiResponse, Debug)]
#[oai(bad_request_handler = "validation_error_handler")]
pub enum ItemError {
    /// Request payload, path or query failed validation
    #[oai(status = 400)]
    ValidationFailed(Json<ItemErrorResponse>),

    /// No item exists with the requested id
    #[oai(status = 404)]
    NotFound(Json<ItemErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ItemErrorResponse>),
}

/// Maps poem-openapi request parsing failures onto the item error body
fn validation_error_handler(err: poem::Error) -> ItemError {
    ItemError::validation_failed(err.to_string())
}

impl ItemError {
    /// Create a ValidationFailed error
    pub fn validation_failed(reason: impl Into<String>) -> Self {
        ItemError::ValidationFailed(Json(ItemErrorResponse {
            error: "validation_error".to_string(),
            message: reason.into(),
            status_code: 400,
        }))
    }

    /// Create a NotFound error
    pub fn not_found() -> Self {
        ItemError::NotFound(Json(ItemErrorResponse {
            error: "item_not_found".to_string(),
            message: "Item not found".to_string(),
            status_code: 404,
        }))
    }

    /// Create an InternalError
    pub fn internal_error() -> Self {
        ItemError::InternalError(Json(ItemErrorResponse {
            error: "internal_error".to_string(),
            message: "An internal error occurred".to_string(),
            status_code: 500,
        }))
    }

    /// Convert a store failure into an API error
    ///
    /// Store failures never carry client-facing meaning, so every variant maps
    /// to a 500. The full error goes to the log only.
    pub fn from_internal_error(err: InternalError) -> Self {
        tracing::error!("Item store operation failed: {}", err);
        Self::internal_error()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        match self {
            ItemError::ValidationFailed(json) => &json.0.message,
            ItemError::NotFound(json) => &json.0.message,
            ItemError::InternalError(json) => &json.0.message,
        }
    }

    /// Get the HTTP status code carried in the body
    pub fn status_code(&self) -> u16 {
        match self {
            ItemError::ValidationFailed(json) => json.0.status_code,
            ItemError::NotFound(json) => json.0.status_code,
            ItemError::InternalError(json) => json.0.status_code,
        }
    }
}

impl From<InternalError> for ItemError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for ItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ItemError {}
