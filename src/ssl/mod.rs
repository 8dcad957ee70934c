//! Secure context resolution.
//!
//! Turns certificate collections into a `SecureContextTable`
//! (hostname pattern -> compiled rustls `CertifiedKey`) and selects the
//! certificate for each TLS handshake from the SNI hostname.
//!
//! # Resolution order
//!
//! 1. exact hostname match
//! 2. one-level wildcard (`foo.example.com` -> `*.example.com`)
//! 3. the fallback certificate, when one was loaded
//! 4. the last-resort entry of a non-empty table (name mismatch accepted)
//! 5. handshake failure
//!
//! # Hot swap
//!
//! The table in use lives in a `ContextTableCell`. Rebuilds replace the
//! whole table; every handshake works on the snapshot it captured, so a
//! swap never tears a handshake in progress.
//!
//! # Example
//!
//! ```rust,ignore
//! use vhost_tls::ssl::ssl::{build_secure_context_table, resolve_certificate};
//!
//! let table = build_secure_context_table(&collections);
//! let resolution = resolve_certificate(Some("foo.example.com"), &table, None)?;
//! ```

/// Certificate error and resolution enumerations.
pub mod enums;

/// Implementation blocks for the resolution structs.
pub mod impls;

/// Compiled contexts, tables, the swap cell and the rustls resolver.
pub mod structs;

/// Compilation, table building and hostname resolution.
#[allow(clippy::module_inception)]
pub mod ssl;
