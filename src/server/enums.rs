/// Errors that abort the bootstrap.
pub mod bootstrap_error;

/// How the listener is secured.
pub mod server_mode;
