//! Server bootstrap.
//!
//! Decides once, at startup, how the listener is secured:
//!
//! - `secure = false` -> plain HTTP
//! - selector `Disabled` -> HTTPS with the fallback certificate only, or plain
//!   HTTP when no fallback could be loaded
//! - selector `Specific(id)` -> HTTPS with that single collection; a missing
//!   collection aborts the bootstrap
//! - selector `All` -> HTTPS with every collection, degrading like `Disabled`
//!   when the store holds none
//!
//! In collection mode a coordinator task keeps the secure context table in
//! step with the store for the lifetime of the listener.

/// Server mode and bootstrap error enumerations.
pub mod enums;

/// Implementation blocks for the bootstrap structs.
pub mod impls;

/// Bootstrap, plan and running server structs.
pub mod structs;

/// Route configuration type.
pub mod types;

/// Listener construction, status routes and the collection coordinator.
#[allow(clippy::module_inception)]
pub mod server;
