//! Configuration management module.
//!
//! Loads, validates and writes the `config.toml` file that drives the web
//! server bootstrap.
//!
//! # Configuration Structure
//!
//! - **log_level**: verbosity of the fern logger
//! - **web_server**: listener address, `secure` flag, timeouts and the
//!   `certificates` section (collection selector, custom certificate names,
//!   self-signed fallback)
//! - **store**: location of the persisted object store and the record id
//!   holding the certificate collections
//! - **sentry_config**: optional error reporting
//!
//! # Example
//!
//! ```rust,ignore
//! use vhost_tls::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file(false, "config.toml")?;
//! ```

/// Configuration enumerations (errors, collection selector).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

/// Unit tests for configuration parsing.
pub mod tests;
