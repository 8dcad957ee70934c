/// Async object store interface.
pub mod object_store;
