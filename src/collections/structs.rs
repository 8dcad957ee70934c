/// A single certificate collection.
pub mod certificate_collection;

/// CRUD access to the persisted collections record.
pub mod collection_store;

/// Change feed over the persisted collections record.
pub mod collection_subscription;
