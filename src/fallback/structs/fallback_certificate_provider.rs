use std::sync::Arc;
use crate::config::structs::certificates_config::CertificatesConfig;
use crate::fallback::traits::certificate_source::CertificateSource;

pub struct FallbackCertificateProvider {
    pub(crate) source: Option<Arc<dyn CertificateSource>>,
    pub(crate) config: CertificatesConfig,
}
