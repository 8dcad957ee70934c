//! Object store module.
//!
//! The host platform keeps its state as addressable JSON objects and lets
//! interested parties subscribe to object changes. This module models that
//! platform service so the certificate collections can be persisted and
//! watched.
//!
//! # Backends
//!
//! - `MemoryObjectStore`: process-local, used for embedding and tests
//! - `FileObjectStore`: one JSON document per object in a directory
//!
//! Every successful write publishes an `ObjectChange` to all subscribers.

/// Store error enumeration.
pub mod enums;

/// Implementation blocks for the store backends.
pub mod impls;

/// Data structures for the store backends.
pub mod structs;

/// Object store trait definition.
pub mod traits;

/// Shared constants and helpers.
#[allow(clippy::module_inception)]
pub mod store;
