/// Change notification delivered to subscribers.
pub mod object_change;

/// In-memory object store.
pub mod memory_object_store;

/// Directory backed object store.
pub mod file_object_store;
