/// PEM key, certificate and optional CA chain.
pub mod pem_material;

/// The compiled fallback certificate.
pub mod fallback_context;

/// Certificate lookup against the persisted certificates record.
pub mod record_certificate_source;

/// Best-effort loader for the fallback certificate.
pub mod fallback_certificate_provider;
