/// Errors raised while reading, parsing or validating the configuration.
pub mod configuration_error;

/// Which certificate collections the HTTPS listener should use.
pub mod collection_selector;
