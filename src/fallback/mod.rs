//! Fallback certificate loading.
//!
//! The fallback certificate is served whenever no collection matches the
//! requested hostname. It comes from the user-supplied named certificates
//! kept next to the collections, or, when none are available, from a freshly
//! generated self-signed certificate. It is loaded once during bootstrap and
//! never reloaded.

/// Fallback error and source enumerations.
pub mod enums;

/// Implementation blocks for the fallback structs.
pub mod impls;

/// Fallback data structures and the provider.
pub mod structs;

/// Host-provided certificate lookup trait.
pub mod traits;

/// Self-signed generation helpers.
#[allow(clippy::module_inception)]
pub mod fallback;
