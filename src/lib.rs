//! # vhost-tls
//!
//! Multi-domain TLS termination for an actix-web listener, driven by
//! certificate collections kept in an object store.
//!
//! ## Overview
//!
//! A certificate collection bundles a private key, a certificate (chain) and
//! the hostnames it covers. Collections live in a single persisted record and
//! are compiled into a table of rustls signing keys. Every TLS handshake picks
//! its certificate from that table by SNI hostname; when collections change,
//! the table is rebuilt and swapped without restarting the listener.
//!
//! ## Features
//!
//! - **SNI Resolution**: exact hostnames and one-level wildcards
//! - **Hot Swap**: live collection updates, handshakes never see a torn table
//! - **Fallback Certificate**: user supplied or generated self-signed
//! - **Graceful Degradation**: plain HTTP when TLS is requested but impossible
//! - **Storage**: in-memory or JSON file object store with change notifications
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vhost_tls::collections::structs::collection_store::CollectionStore;
//! use vhost_tls::server::structs::server_bootstrap::ServerBootstrap;
//!
//! let collections = Arc::new(CollectionStore::new(object_store));
//! let bootstrap = ServerBootstrap::from_store(config.web_server.clone(), collections);
//! let running = bootstrap.start(routes).await?;
//! running.run().await?;
//! ```
//!
//! ## Modules
//!
//! - [`collections`] - Certificate collection records, validation and subscriptions
//! - [`common`] - Logging setup and shared helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`fallback`] - Fallback certificate loading and self-signed generation
//! - [`server`] - Bootstrap decision tree and the actix-web listener
//! - [`ssl`] - Secure context compilation and SNI resolution
//! - [`store`] - Object store abstraction with change notifications
//! - [`structs`] - CLI argument parsing

/// Certificate collections.
///
/// CRUD over the `collections` field of the certificates record, with
/// validation on write and change subscriptions filtered by collection id.
pub mod collections;

/// Common utilities and shared functionality.
///
/// Logging setup, error type for configuration bootstrap and PEM helpers.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, validating and writing the TOML configuration.
pub mod config;

/// Fallback certificate module.
///
/// Loads the certificate served when no collection matches, either from the
/// named certificates of the record or freshly self-signed.
pub mod fallback;

/// Server bootstrap module.
///
/// Chooses plain HTTP, fallback-only HTTPS or collection HTTPS, binds the
/// listener and keeps the certificate table current.
pub mod server;

/// SSL/TLS module.
///
/// Compiles collections into rustls keys, holds the swappable context table
/// and resolves certificates per handshake.
pub mod ssl;

/// Object store module.
///
/// Async key/value store of JSON objects with broadcast change notifications.
pub mod store;

/// CLI structures.
pub mod structs;
