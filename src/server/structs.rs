/// Inputs of the bootstrap decision.
pub mod server_bootstrap;

/// Outcome of the bootstrap decision, before the listener exists.
pub mod bootstrap_plan;

/// A started listener and its coordinator.
pub mod running_server;

/// Shared state behind the status routes.
pub mod server_status;
