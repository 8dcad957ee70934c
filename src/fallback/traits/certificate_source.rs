use async_trait::async_trait;
use crate::fallback::enums::fallback_error::FallbackError;
use crate::fallback::structs::pem_material::PemMaterial;

#[async_trait]
pub trait CertificateSource: Send + Sync {
    /// Looks up key, certificate and optional chain by name. `None` names
    /// select the host defaults. `Ok(None)` when the material does not exist.
    async fn get_certificates(
        &self,
        public_name: Option<&str>,
        private_name: Option<&str>,
        chain_name: Option<&str>,
    ) -> Result<Option<PemMaterial>, FallbackError>;
}
