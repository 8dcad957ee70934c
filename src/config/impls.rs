/// Configuration: defaults, loading, saving, validation.
pub mod configuration;

/// ConfigurationError: Display and Error.
pub mod configuration_error;

/// CollectionSelector: parsing and serde.
pub mod collection_selector;

/// CertificatesConfig and WebServerConfig defaults.
pub mod certificates_config;
