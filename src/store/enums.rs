/// Errors returned by object store backends.
pub mod store_error;
