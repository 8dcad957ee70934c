/// SecureContext: Debug.
pub mod secure_context;

/// SecureContextTable: lookups and accessors.
pub mod secure_context_table;

/// ContextTableCell: snapshot and replace.
pub mod context_table_cell;

/// CollectionCertificateResolver: ResolvesServerCert.
pub mod collection_certificate_resolver;

/// Resolution: accessors.
pub mod resolution;
