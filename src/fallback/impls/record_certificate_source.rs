use std::sync::Arc;
use async_trait::async_trait;
use log::{debug, warn};
use serde_json::Value;
use crate::collections::collections::CERTIFICATES_FIELD;
use crate::common::common::{is_pem_text, looks_like_path};
use crate::fallback::enums::fallback_error::FallbackError;
use crate::fallback::fallback::{DEFAULT_PRIVATE_NAME, DEFAULT_PUBLIC_NAME};
use crate::fallback::structs::pem_material::PemMaterial;
use crate::fallback::structs::record_certificate_source::RecordCertificateSource;
use crate::fallback::traits::certificate_source::CertificateSource;
use crate::store::traits::object_store::ObjectStore;

impl RecordCertificateSource {
    pub fn new(object_store: Arc<dyn ObjectStore>, record_id: &str) -> Self {
        Self {
            object_store,
            record_id: record_id.to_string(),
        }
    }

    fn pem_entry(certificates: &Value, name: &str) -> Result<Option<String>, FallbackError> {
        let Some(value) = certificates.get(name).and_then(Value::as_str) else {
            return Ok(None);
        };
        if looks_like_path(value) {
            return Err(FallbackError::PathNotAllowed(name.to_string()));
        }
        if !is_pem_text(value) {
            return Err(FallbackError::NotPem(name.to_string()));
        }
        Ok(Some(value.to_string()))
    }
}

fn name_or<'a>(name: Option<&'a str>, default: &'a str) -> &'a str {
    name.map(str::trim).filter(|n| !n.is_empty()).unwrap_or(default)
}

#[async_trait]
impl CertificateSource for RecordCertificateSource {
    async fn get_certificates(
        &self,
        public_name: Option<&str>,
        private_name: Option<&str>,
        chain_name: Option<&str>,
    ) -> Result<Option<PemMaterial>, FallbackError> {
        let Some(record) = self.object_store.get_object(&self.record_id).await? else {
            debug!("[FALLBACK] No record {} found", self.record_id);
            return Ok(None);
        };
        let Some(certificates) = record.get(CERTIFICATES_FIELD) else {
            debug!("[FALLBACK] Record {} holds no named certificates", self.record_id);
            return Ok(None);
        };

        let public_name = name_or(public_name, DEFAULT_PUBLIC_NAME);
        let private_name = name_or(private_name, DEFAULT_PRIVATE_NAME);
        let (Some(cert), Some(key)) = (
            Self::pem_entry(certificates, public_name)?,
            Self::pem_entry(certificates, private_name)?,
        ) else {
            debug!("[FALLBACK] Certificates {} / {} not found", public_name, private_name);
            return Ok(None);
        };

        let ca = match chain_name.map(str::trim).filter(|n| !n.is_empty()) {
            None => None,
            Some(chain_name) => {
                let chain = Self::pem_entry(certificates, chain_name)?;
                if chain.is_none() {
                    warn!("[FALLBACK] Chain certificate {} not found, continuing without it", chain_name);
                }
                chain
            }
        };
        Ok(Some(PemMaterial { key, cert, ca }))
    }
}
