use thiserror::Error;

use crate::config::ApplicationError;

pub mod database;
pub mod item;

pub use database::DatabaseError;
pub use item::ItemStoreError;

/// Internal error type for store operations
///
/// Infrastructure errors (database) are shared by every store; domain errors are
/// store specific. Not exposed via API - endpoints must convert to ItemError.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Config(#[from] ApplicationError),

    #[error(transparent)]
    ItemStore(#[from] ItemStoreError),
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }
}
