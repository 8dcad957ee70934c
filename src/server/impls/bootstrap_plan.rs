use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use crate::fallback::structs::fallback_context::FallbackContext;
use crate::server::enums::bootstrap_error::BootstrapError;
use crate::server::enums::server_mode::ServerMode;
use crate::server::server::run_coordinator;
use crate::server::structs::bootstrap_plan::BootstrapPlan;
use crate::server::structs::server_status::ServerStatus;
use crate::ssl::ssl::create_server_config_with_resolver;
use crate::ssl::structs::collection_certificate_resolver::CollectionCertificateResolver;
use crate::ssl::structs::context_table_cell::ContextTableCell;

impl std::fmt::Debug for BootstrapPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootstrapPlan")
            .field("mode", &self.mode)
            .field("table", &self.table)
            .field("has_fallback", &self.fallback.is_some())
            .field("subscribed", &self.subscription.is_some())
            .finish()
    }
}

impl BootstrapPlan {
    pub fn plain() -> Self {
        Self {
            mode: ServerMode::PlainHttp,
            table: Arc::new(ContextTableCell::default()),
            fallback: None,
            subscription: None,
        }
    }

    pub fn fallback_only(fallback: Arc<FallbackContext>) -> Self {
        Self {
            mode: ServerMode::FallbackOnlyHttps,
            table: Arc::new(ContextTableCell::default()),
            fallback: Some(fallback),
            subscription: None,
        }
    }

    pub fn resolver(&self) -> Arc<CollectionCertificateResolver> {
        Arc::new(CollectionCertificateResolver::new(Arc::clone(&self.table), self.fallback.clone()))
    }

    /// `None` in plain HTTP mode.
    pub fn tls_config(&self) -> Result<Option<rustls::ServerConfig>, BootstrapError> {
        if !self.mode.is_secure() {
            return Ok(None);
        }
        let config = create_server_config_with_resolver(self.resolver())
            .map_err(std::io::Error::other)?;
        Ok(Some(config))
    }

    pub fn status(&self) -> ServerStatus {
        ServerStatus {
            mode: self.mode,
            table: Arc::clone(&self.table),
            has_fallback: self.fallback.is_some(),
        }
    }

    /// Starts the coordinator once; later calls return `None`.
    pub fn spawn_coordinator(&mut self, debounce: Duration) -> Option<JoinHandle<()>> {
        let subscription = self.subscription.take()?;
        let table = Arc::clone(&self.table);
        Some(tokio::spawn(run_coordinator(subscription, table, debounce)))
    }
}
