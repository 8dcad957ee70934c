/// A compiled TLS credential bound to one collection.
pub mod secure_context;

/// Hostname pattern -> secure context mapping.
pub mod secure_context_table;

/// Versioned snapshot pointer holding the table in use.
pub mod context_table_cell;

/// rustls certificate resolver backed by the table cell.
pub mod collection_certificate_resolver;
