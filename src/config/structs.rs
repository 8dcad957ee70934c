//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Web server listener settings.
pub mod web_server_config;

/// Certificate selection settings for the HTTPS listener.
pub mod certificates_config;

/// Object store location settings.
pub mod store_config;

/// Sentry error reporting configuration.
pub mod sentry_config;
