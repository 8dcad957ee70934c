use std::sync::Arc;
use log::debug;
use rustls::server::{ClientHello, ResolvesServerCert};
use rustls::sign::CertifiedKey;
use crate::fallback::structs::fallback_context::FallbackContext;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::enums::resolution::Resolution;
use crate::ssl::ssl::resolve_certificate;
use crate::ssl::structs::collection_certificate_resolver::CollectionCertificateResolver;
use crate::ssl::structs::context_table_cell::ContextTableCell;

impl std::fmt::Debug for CollectionCertificateResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionCertificateResolver")
            .field("table_version", &self.table.version())
            .field("has_fallback", &self.fallback.is_some())
            .finish()
    }
}

impl CollectionCertificateResolver {
    pub fn new(table: Arc<ContextTableCell>, fallback: Option<Arc<FallbackContext>>) -> Self {
        Self { table, fallback }
    }

    pub fn table(&self) -> &Arc<ContextTableCell> {
        &self.table
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// Resolution against the snapshot current at call time.
    pub fn resolve_server_name(&self, server_name: Option<&str>) -> Result<Resolution, CertificateError> {
        let snapshot = self.table.snapshot();
        resolve_certificate(server_name, &snapshot, self.fallback.as_ref())
    }
}

impl ResolvesServerCert for CollectionCertificateResolver {
    fn resolve(&self, client_hello: ClientHello<'_>) -> Option<Arc<CertifiedKey>> {
        let server_name = client_hello.server_name();
        match self.resolve_server_name(server_name) {
            Ok(resolution) => {
                debug!(
                    "[CERTIFICATE] {} -> {} ({})",
                    server_name.unwrap_or("<no sni>"),
                    resolution.collection_id().unwrap_or("fallback"),
                    resolution.kind()
                );
                Some(resolution.certified_key())
            }
            Err(_) => None,
        }
    }
}
