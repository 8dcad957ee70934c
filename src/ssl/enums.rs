/// Errors raised while compiling or selecting certificates.
pub mod certificate_error;

/// Outcome of resolving a handshake hostname.
pub mod resolution;
