use std::sync::Arc;
use log::{error, info, warn};
use crate::config::structs::certificates_config::CertificatesConfig;
use crate::fallback::enums::fallback_error::FallbackError;
use crate::fallback::enums::fallback_source::FallbackSource;
use crate::fallback::fallback::{generate_self_signed, DEFAULT_PRIVATE_NAME, DEFAULT_PUBLIC_NAME};
use crate::fallback::structs::fallback_certificate_provider::FallbackCertificateProvider;
use crate::fallback::structs::fallback_context::FallbackContext;
use crate::fallback::traits::certificate_source::CertificateSource;

impl std::fmt::Debug for FallbackCertificateProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackCertificateProvider")
            .field("has_source", &self.source.is_some())
            .field("self_signed", &self.config.self_signed)
            .finish()
    }
}

impl FallbackCertificateProvider {
    pub fn new(source: Option<Arc<dyn CertificateSource>>, config: CertificatesConfig) -> Self {
        Self { source, config }
    }

    /// User-supplied material, if the source has any.
    pub async fn load_user_supplied(&self) -> Result<Option<FallbackContext>, FallbackError> {
        let Some(source) = &self.source else {
            return Ok(None);
        };
        let public_name = self.config.custom_cert_public_name.as_deref();
        let private_name = self.config.custom_cert_private_name.as_deref();
        let Some(material) = source
            .get_certificates(public_name, private_name, self.config.custom_cert_chain_name.as_deref())
            .await?
        else {
            return Ok(None);
        };
        let context = FallbackContext::from_pem(&material, FallbackSource::UserSupplied {
            public_name: public_name.unwrap_or(DEFAULT_PUBLIC_NAME).to_string(),
            private_name: private_name.unwrap_or(DEFAULT_PRIVATE_NAME).to_string(),
        })?;
        Ok(Some(context))
    }

    pub fn load_self_signed(&self) -> Result<FallbackContext, FallbackError> {
        let material = generate_self_signed(&self.config.self_signed_domains)?;
        Ok(FallbackContext::from_pem(&material, FallbackSource::SelfSigned {
            domains: self.config.self_signed_domains.clone(),
        })?)
    }

    /// Best effort: every failure is logged and results in `None`.
    pub async fn load(&self) -> Option<Arc<FallbackContext>> {
        match self.load_user_supplied().await {
            Ok(Some(context)) => {
                info!("[FALLBACK] Loaded user supplied fallback certificate ({:?})", context.source);
                return Some(Arc::new(context));
            }
            Ok(None) => info!("[FALLBACK] No user supplied fallback certificate configured"),
            Err(e) => warn!("[FALLBACK] User supplied fallback certificate unusable: {}", e),
        }

        if !self.config.self_signed {
            info!("[FALLBACK] Self-signed fallback disabled, continuing without fallback certificate");
            return None;
        }
        match self.load_self_signed() {
            Ok(context) => {
                warn!(
                    "[FALLBACK] Using a generated self-signed certificate for {:?}; clients will not trust it",
                    self.config.self_signed_domains
                );
                Some(Arc::new(context))
            }
            Err(e) => {
                error!("[FALLBACK] Self-signed fallback certificate could not be generated: {}", e);
                None
            }
        }
    }
}
