/// Errors returned by the collection store.
pub mod collection_error;
