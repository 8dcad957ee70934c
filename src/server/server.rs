use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix_web::{web, App, HttpResponse, HttpServer};
use actix_web::dev::Server;
use actix_web::middleware::Compress;
use actix_web::web::{Data, ServiceConfig};
use log::{error, info, warn};
use serde_json::json;
use crate::collections::enums::collection_error::CollectionError;
use crate::collections::structs::collection_subscription::CollectionSubscription;
use crate::config::structs::web_server_config::WebServerConfig;
use crate::server::enums::bootstrap_error::BootstrapError;
use crate::server::structs::server_status::ServerStatus;
use crate::server::types::RouteConfig;
use crate::ssl::ssl::build_secure_context_table;
use crate::ssl::structs::context_table_cell::ContextTableCell;
use crate::ssl::structs::secure_context_table::SecureContextTable;

pub fn parse_bind_address(bind_address: &str) -> Result<SocketAddr, BootstrapError> {
    bind_address.parse::<SocketAddr>().map_err(|e| {
        BootstrapError::ListenerConstruction(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("{}: {}", bind_address, e),
        ))
    })
}

/// Binds the listener; TLS when `tls_config` is given. The returned server
/// must be awaited or spawned to accept connections.
pub fn web_service(
    config: &WebServerConfig,
    tls_config: Option<rustls::ServerConfig>,
    routes: RouteConfig,
) -> Result<Server, BootstrapError> {
    let addr = parse_bind_address(&config.bind_address)?;
    let http_server = HttpServer::new(move || {
        let routes = routes.clone();
        App::new()
            .wrap(Compress::default())
            .configure(move |cfg: &mut ServiceConfig| (*routes)(cfg))
    })
        .keep_alive(Duration::from_secs(config.keep_alive))
        .client_request_timeout(Duration::from_secs(config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(config.disconnect_timeout))
        .workers(config.threads.max(1) as usize)
        .max_connections(config.max_connections as usize);

    let server = match tls_config {
        Some(tls_config) => {
            info!("[HTTPS] Starting server listener with TLS on {}", addr);
            http_server
                .max_connection_rate(config.tls_connection_rate as usize)
                .bind_rustls_0_23((addr.ip(), addr.port()), tls_config)?
                .disable_signals()
                .run()
        }
        None => {
            info!("[HTTP] Starting server listener on {}", addr);
            http_server
                .bind((addr.ip(), addr.port()))?
                .disable_signals()
                .run()
        }
    };
    Ok(server)
}

/// Default routes of the binary: a status document and 404 for the rest.
pub fn status_routes(status: ServerStatus) -> RouteConfig {
    Arc::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(status.clone()));
        cfg.service(web::resource("/status").route(web::get().to(status_service)));
        cfg.default_service(web::route().to(not_found_service));
    })
}

/// Counts only; the served hostnames are not disclosed to anonymous clients.
pub async fn status_service(status: Data<ServerStatus>) -> HttpResponse {
    let (table, version) = status.table.snapshot_with_version();
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "mode": status.mode,
        "secure": status.mode.is_secure(),
        "fallback": status.has_fallback,
        "table_version": version,
        "domains_count": table.len(),
        "collections_count": table.collection_ids().len(),
    }))
}

pub async fn not_found_service() -> HttpResponse {
    HttpResponse::NotFound().json(json!({"status": "not found"}))
}

/// Rebuilds the table on every collection change until the store goes away.
/// Bursts are collapsed so the table always ends on the newest state.
pub async fn run_coordinator(
    mut subscription: CollectionSubscription,
    table: Arc<ContextTableCell>,
    debounce: Duration,
) {
    info!(
        "[BOOT] Watching collections{} for changes",
        subscription.filter().map(|id| format!(" ({})", id)).unwrap_or_default()
    );
    while let Some(update) = subscription.recv_latest(debounce).await {
        match update {
            Ok(collections) => {
                table.replace(build_secure_context_table(&collections));
            }
            Err(CollectionError::NotFound(id)) => {
                warn!("[CERTIFICATE] Collection {} is gone, serving without it", id);
                table.replace(SecureContextTable::empty());
            }
            Err(e) => {
                error!("[CERTIFICATE] Could not refresh collections, keeping the current table: {}", e);
            }
        }
    }
    info!("[BOOT] Collection change stream closed, stopping watcher");
}
