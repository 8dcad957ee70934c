/// ServerBootstrap: prepare and start.
pub mod server_bootstrap;

/// BootstrapPlan: resolver, TLS config and coordinator spawning.
pub mod bootstrap_plan;

/// RunningServer: run.
pub mod running_server;

/// ServerMode: Display.
pub mod server_mode;
