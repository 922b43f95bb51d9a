use thiserror::Error;

#[derive(Error, Debug)]
pub enum ItemStoreError {
    /// The in-memory id counter ran past `i32::MAX`
    #[error("Item id space exhausted")]
    IdSpaceExhausted,
}
