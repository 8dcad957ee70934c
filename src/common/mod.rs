//! Common utilities and shared functionality.
//!
//! Helpers used across the crate: logging setup, PEM text detection and
//! the `CustomError` type used while bootstrapping the configuration.

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
