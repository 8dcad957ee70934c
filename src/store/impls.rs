/// MemoryObjectStore: constructor and ObjectStore implementation.
pub mod memory_object_store;

/// FileObjectStore: constructor and ObjectStore implementation.
pub mod file_object_store;
