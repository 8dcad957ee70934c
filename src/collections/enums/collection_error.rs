use thiserror::Error;
use crate::store::enums::store_error::StoreError;

#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("Invalid collection: field '{field}' is missing")]
    ValidationError { field: &'static str },

    #[error("Invalid collection: '{0}' is not a hostname or one-level wildcard pattern")]
    InvalidDomain(String),

    #[error("Collection not found: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
