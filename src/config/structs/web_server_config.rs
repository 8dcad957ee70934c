use serde::{Deserialize, Serialize};
use crate::config::structs::certificates_config::CertificatesConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WebServerConfig {
    pub bind_address: String,
    pub secure: bool,
    pub threads: u64,
    pub keep_alive: u64,
    pub request_timeout: u64,
    pub disconnect_timeout: u64,
    pub max_connections: u64,
    pub tls_connection_rate: u64,
    /// Quiet period after a collection change before the table is rebuilt.
    #[serde(default)]
    pub collection_debounce_ms: u64,
    #[serde(default)]
    pub certificates: CertificatesConfig,
}
