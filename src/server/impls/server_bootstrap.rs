use std::sync::Arc;
use std::time::Duration;
use log::{error, info, warn};
use crate::collections::structs::collection_store::CollectionStore;
use crate::collections::structs::collection_subscription::CollectionSubscription;
use crate::collections::types::CollectionMap;
use crate::config::enums::collection_selector::CollectionSelector;
use crate::config::structs::web_server_config::WebServerConfig;
use crate::fallback::structs::fallback_certificate_provider::FallbackCertificateProvider;
use crate::fallback::structs::fallback_context::FallbackContext;
use crate::fallback::structs::record_certificate_source::RecordCertificateSource;
use crate::server::enums::bootstrap_error::BootstrapError;
use crate::server::enums::server_mode::ServerMode;
use crate::server::server::web_service;
use crate::server::structs::bootstrap_plan::BootstrapPlan;
use crate::server::structs::running_server::RunningServer;
use crate::server::structs::server_bootstrap::ServerBootstrap;
use crate::server::types::RouteConfig;
use crate::ssl::ssl::build_secure_context_table;
use crate::ssl::structs::context_table_cell::ContextTableCell;
use crate::ssl::structs::secure_context_table::SecureContextTable;

impl ServerBootstrap {
    pub fn new(config: WebServerConfig, collections: Arc<CollectionStore>, fallback: FallbackCertificateProvider) -> Self {
        Self { config, collections, fallback }
    }

    /// Fallback certificates are read from the same record as the collections.
    pub fn from_store(config: WebServerConfig, collections: Arc<CollectionStore>) -> Self {
        let source = RecordCertificateSource::new(collections.object_store(), collections.record_id());
        let fallback = FallbackCertificateProvider::new(Some(Arc::new(source)), config.certificates.clone());
        Self::new(config, collections, fallback)
    }

    pub fn config(&self) -> &WebServerConfig {
        &self.config
    }

    /// Runs the decision tree. Only a missing specific collection is an error;
    /// every other failure degrades.
    pub async fn prepare(&self) -> Result<BootstrapPlan, BootstrapError> {
        if !self.config.secure {
            info!("[BOOT] TLS disabled in configuration, serving plain HTTP");
            return Ok(BootstrapPlan::plain());
        }

        let fallback = self.fallback.load().await;
        let selector = &self.config.certificates.collection_selector;
        info!("[BOOT] Collection selector: {}", selector);

        match selector {
            CollectionSelector::Disabled => Ok(Self::without_collections(fallback, "collections are disabled")),
            CollectionSelector::Specific(id) => {
                let subscription = self.collections.subscribe(Some(id.as_str()));
                let table = match self.collections.get(id).await {
                    Ok(Some(collection)) => {
                        build_secure_context_table(&CollectionMap::from([(id.clone(), collection)]))
                    }
                    Ok(None) => {
                        error!("[BOOT] Configured collection {} does not exist", id);
                        return Err(BootstrapError::CollectionNotFound(id.clone()));
                    }
                    Err(e) => {
                        error!("[BOOT] Could not read collection {}, starting with an empty table: {}", id, e);
                        SecureContextTable::empty()
                    }
                };
                Ok(Self::with_collections(table, fallback, subscription))
            }
            CollectionSelector::All => {
                let subscription = self.collections.subscribe(None);
                match self.collections.get_all().await {
                    Ok(Some(collections)) if !collections.is_empty() => {
                        let table = build_secure_context_table(&collections);
                        Ok(Self::with_collections(table, fallback, subscription))
                    }
                    Ok(_) => Ok(Self::without_collections(fallback, "no collections found")),
                    Err(e) => {
                        error!("[BOOT] Could not read collections: {}", e);
                        Ok(Self::without_collections(fallback, "collections could not be read"))
                    }
                }
            }
        }
    }

    fn with_collections(
        table: SecureContextTable,
        fallback: Option<Arc<FallbackContext>>,
        subscription: CollectionSubscription,
    ) -> BootstrapPlan {
        if table.is_empty() && fallback.is_none() {
            warn!("[BOOT] No usable certificate yet, handshakes fail until a collection arrives");
        }
        BootstrapPlan {
            mode: ServerMode::CollectionsHttps,
            table: Arc::new(ContextTableCell::new(table)),
            fallback,
            subscription: Some(subscription),
        }
    }

    fn without_collections(fallback: Option<Arc<FallbackContext>>, reason: &str) -> BootstrapPlan {
        match fallback {
            Some(fallback) => {
                info!("[BOOT] {}, serving HTTPS with the fallback certificate only", reason);
                BootstrapPlan::fallback_only(fallback)
            }
            None => {
                let message = format!("TLS requested but {} and no fallback certificate is available, serving plain HTTP", reason);
                error!("[BOOT] {}", message);
                sentry::capture_message(&message, sentry::Level::Warning);
                BootstrapPlan::plain()
            }
        }
    }

    /// Prepares, binds and starts watching collections.
    pub async fn start(&self, routes: RouteConfig) -> Result<RunningServer, BootstrapError> {
        let mut plan = self.prepare().await?;
        self.start_plan(&mut plan, routes)
    }

    pub fn start_plan(&self, plan: &mut BootstrapPlan, routes: RouteConfig) -> Result<RunningServer, BootstrapError> {
        let server = web_service(&self.config, plan.tls_config()?, routes)?;
        let coordinator = plan.spawn_coordinator(Duration::from_millis(self.config.collection_debounce_ms));
        info!("[BOOT] Listening on {} in {} mode", self.config.bind_address, plan.mode);
        Ok(RunningServer {
            mode: plan.mode,
            handle: server.handle(),
            server,
            table: Arc::clone(&plan.table),
            coordinator,
        })
    }
}
