use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info};
use parking_lot::deadlock;
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use vhost_tls::collections::structs::collection_store::CollectionStore;
use vhost_tls::common::common::setup_logging;
use vhost_tls::config::structs::configuration::Configuration;
use vhost_tls::fallback::fallback::write_self_signed_files;
use vhost_tls::server::server::status_routes;
use vhost_tls::server::structs::server_bootstrap::ServerBootstrap;
use vhost_tls::store::structs::file_object_store::FileObjectStore;
use vhost_tls::structs::Cli;

/// Runs the collection management flags; `true` when one was given.
async fn run_collection_commands(args: &Cli, collections: &CollectionStore) -> bool
{
    if args.list_collections {
        match collections.list().await {
            Ok(ids) if ids.is_empty() => println!("No certificate collections stored."),
            Ok(ids) => ids.iter().for_each(|id| println!("{}", id)),
            Err(e) => error!("[COLLECTIONS] Could not list collections: {}", e),
        }
        return true;
    }
    if let Some(id) = &args.show_collection {
        match collections.show(id).await {
            Ok(value) => println!("{}", serde_json::to_string_pretty(&value).unwrap_or_default()),
            Err(e) => error!("[COLLECTIONS] {}", e),
        }
        return true;
    }
    if let Some(id) = &args.delete_collection {
        if let Err(e) = collections.delete(id).await {
            error!("[COLLECTIONS] Could not delete collection {}: {}", id, e);
        }
        return true;
    }
    if let (Some(id), Some(file)) = (&args.import_collection, &args.collection_file) {
        if let Err(e) = collections.import_file(id, file).await {
            error!("[IMPORT] {}", e);
        }
        return true;
    }
    false
}

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(args.create_config, &args.config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    setup_logging(&config.log_level);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    if args.create_selfsigned {
        let mut domains = vec![String::from("localhost")];
        if args.selfsigned_domain != "localhost" {
            domains.push(args.selfsigned_domain.clone());
        }
        if let Err(e) = write_self_signed_files(&domains, &args.selfsigned_keyfile, &args.selfsigned_certfile) {
            error!("[CERTGEN] {}", e);
            exit(1);
        }
        return Ok(());
    }

    #[warn(unused_variables)]
    let _sentry_guard: ClientInitGuard;
    if config.sentry_config.enabled {
        _sentry_guard = sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            max_breadcrumbs: config.sentry_config.max_breadcrumbs,
            attach_stacktrace: config.sentry_config.attach_stacktrace,
            send_default_pii: config.sentry_config.send_default_pii,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            session_mode: sentry::SessionMode::Request,
            auto_session_tracking: true,
            ..Default::default()
        }));
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let object_store = match FileObjectStore::open(&config.store.path).await {
                Ok(store) => Arc::new(store),
                Err(e) => {
                    error!("[STORE] Unable to open object store at {}: {}", config.store.path, e);
                    exit(1);
                }
            };
            let collections = Arc::new(CollectionStore::with_record_id(object_store.clone(), &config.store.record_id));

            if run_collection_commands(&args, &collections).await {
                return Ok(());
            }

            // Issuers and `--import-collection` runs write the directory from other processes.
            if let Err(e) = object_store.watch() {
                error!("[STORE] Unable to watch {}, external changes need a restart: {}", config.store.path, e);
            }

            let tokio_shutdown = Shutdown::new().expect("shutdown creation works on first call");

            let deadlocks_handler = tokio_shutdown.clone();
            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                let mut interval = tokio::time::interval(Duration::from_secs(30));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let deadlocks = deadlock::check_deadlock();
                            if !deadlocks.is_empty() {
                                info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                                for (i, threads) in deadlocks.iter().enumerate() {
                                    info!("[DEADLOCK] #{i}");
                                    for t in threads {
                                        info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                        info!("[DEADLOCK] {:#?}", t.backtrace());
                                        sentry::capture_message(&format!("{:#?}", t.backtrace()), sentry::Level::Error);
                                    }
                                }
                            }
                        }
                        _ = deadlocks_handler.handle() => {
                            info!("[BOOT] Shutting down thread for deadlocks...");
                            return;
                        }
                    }
                }
            });

            let bootstrap = ServerBootstrap::from_store(config.web_server.clone(), collections.clone());
            let mut plan = match bootstrap.prepare().await {
                Ok(plan) => plan,
                Err(e) => {
                    error!("[BOOT] {}", e);
                    sentry::capture_error(&e);
                    exit(1);
                }
            };
            let routes = status_routes(plan.status());
            let running = match bootstrap.start_plan(&mut plan, routes) {
                Ok(running) => running,
                Err(e) => {
                    error!("[BOOT] {}", e);
                    sentry::capture_error(&e);
                    exit(1);
                }
            };

            let handle = running.handle.clone();
            let mode = running.mode;
            let server_task = tokio::spawn(running.run());

            tokio::select! {
                _ = tokio_shutdown.handle() => {
                    info!("Shutdown request received, shutting down...");
                    info!("[BOOT] Stopping {} listener...", mode);
                    handle.stop(true).await;
                }
                result = server_task => {
                    match result {
                        Ok(Ok(())) => info!("[BOOT] Listener stopped"),
                        Ok(Err(e)) => error!("[BOOT] Listener failed: {}", e),
                        Err(e) => error!("[BOOT] Listener task failed: {}", e),
                    }
                }
            }

            info!("Server shutting down completed");
            Ok(())
        })
}
