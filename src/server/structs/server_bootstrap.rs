use std::sync::Arc;
use crate::collections::structs::collection_store::CollectionStore;
use crate::config::structs::web_server_config::WebServerConfig;
use crate::fallback::structs::fallback_certificate_provider::FallbackCertificateProvider;

pub struct ServerBootstrap {
    pub(crate) config: WebServerConfig,
    pub(crate) collections: Arc<CollectionStore>,
    pub(crate) fallback: FallbackCertificateProvider,
}
