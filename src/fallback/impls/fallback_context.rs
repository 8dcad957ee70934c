use std::sync::Arc;
use chrono::Utc;
use crate::fallback::enums::fallback_source::FallbackSource;
use crate::fallback::structs::fallback_context::FallbackContext;
use crate::fallback::structs::pem_material::PemMaterial;
use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::ssl::compile_certified_key;

impl std::fmt::Debug for FallbackContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackContext")
            .field("certs_count", &self.certified_key.cert.len())
            .field("source", &self.source)
            .field("loaded_at", &self.loaded_at)
            .finish()
    }
}

impl FallbackContext {
    pub fn from_pem(material: &PemMaterial, source: FallbackSource) -> Result<Self, CertificateError> {
        let certified_key = compile_certified_key(&material.key, &material.cert, material.ca.as_deref())?;
        Ok(Self {
            certified_key: Arc::new(certified_key),
            source,
            loaded_at: Utc::now(),
        })
    }

    pub fn is_self_signed(&self) -> bool {
        matches!(self.source, FallbackSource::SelfSigned { .. })
    }
}
