/// Errors raised while loading the fallback certificate.
pub mod fallback_error;

/// Where the fallback certificate came from.
pub mod fallback_source;
