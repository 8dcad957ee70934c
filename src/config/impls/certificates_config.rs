use std::thread::available_parallelism;
use crate::config::enums::collection_selector::CollectionSelector;
use crate::config::structs::certificates_config::CertificatesConfig;
use crate::config::structs::web_server_config::WebServerConfig;

impl CertificatesConfig {
    pub(crate) fn default_self_signed() -> bool {
        true
    }

    pub(crate) fn default_self_signed_domains() -> Vec<String> {
        vec![String::from("localhost")]
    }
}

impl Default for CertificatesConfig {
    fn default() -> Self {
        CertificatesConfig {
            collection_selector: CollectionSelector::All,
            custom_cert_public_name: None,
            custom_cert_private_name: None,
            custom_cert_chain_name: None,
            self_signed: Self::default_self_signed(),
            self_signed_domains: Self::default_self_signed_domains(),
        }
    }
}

impl Default for WebServerConfig {
    fn default() -> Self {
        WebServerConfig {
            bind_address: String::from("0.0.0.0:8443"),
            secure: true,
            threads: available_parallelism().map(|n| n.get() as u64).unwrap_or(4),
            keep_alive: 60,
            request_timeout: 15,
            disconnect_timeout: 15,
            max_connections: 25000,
            tls_connection_rate: 256,
            collection_debounce_ms: 0,
            certificates: CertificatesConfig::default(),
        }
    }
}
