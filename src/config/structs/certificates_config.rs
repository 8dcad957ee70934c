use serde::{Deserialize, Serialize};
use crate::config::enums::collection_selector::CollectionSelector;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CertificatesConfig {
    #[serde(default)]
    pub collection_selector: CollectionSelector,
    #[serde(default)]
    pub custom_cert_public_name: Option<String>,
    #[serde(default)]
    pub custom_cert_private_name: Option<String>,
    #[serde(default)]
    pub custom_cert_chain_name: Option<String>,
    /// Generate a self-signed fallback when no user certificate is available.
    #[serde(default = "CertificatesConfig::default_self_signed")]
    pub self_signed: bool,
    #[serde(default = "CertificatesConfig::default_self_signed_domains")]
    pub self_signed_domains: Vec<String>,
}
