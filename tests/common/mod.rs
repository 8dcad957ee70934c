#![allow(dead_code)]
use std::sync::Arc;
use chrono::{Duration, Utc};
use tempfile::TempDir;
use vhost_tls::collections::structs::certificate_collection::CertificateCollection;
use vhost_tls::collections::structs::collection_store::CollectionStore;
use vhost_tls::config::enums::collection_selector::CollectionSelector;
use vhost_tls::config::structs::configuration::Configuration;
use vhost_tls::config::structs::web_server_config::WebServerConfig;
use vhost_tls::fallback::fallback::generate_self_signed;
use vhost_tls::ssl::structs::context_table_cell::ContextTableCell;
use vhost_tls::store::structs::file_object_store::FileObjectStore;
use vhost_tls::store::structs::memory_object_store::MemoryObjectStore;

pub type TestCollections = Arc<CollectionStore>;

pub fn create_test_config() -> Configuration {
    let mut config = Configuration::init();
    config.web_server.bind_address = String::from("127.0.0.1:0");
    config.web_server.threads = 1;
    config
}

pub fn create_web_config(selector: CollectionSelector, self_signed: bool) -> WebServerConfig {
    let mut config = create_test_config().web_server;
    config.certificates.collection_selector = selector;
    config.certificates.self_signed = self_signed;
    config
}

pub fn create_memory_collections() -> TestCollections {
    Arc::new(CollectionStore::new(Arc::new(MemoryObjectStore::new())))
}

pub async fn create_file_collections() -> (TempDir, TestCollections) {
    let temp_dir = TempDir::new().unwrap();
    let store = FileObjectStore::open(temp_dir.path()).await.unwrap();
    (temp_dir, Arc::new(CollectionStore::new(Arc::new(store))))
}

/// A collection backed by a freshly generated self-signed certificate.
pub fn create_collection(domains: &[&str]) -> CertificateCollection {
    let domains: Vec<String> = domains.iter().map(|d| d.to_string()).collect();
    let material = generate_self_signed(&domains).unwrap();
    CertificateCollection::new(
        "system.adapter.acme.0",
        Utc::now() + Duration::days(90),
        &material.key,
        &material.cert,
        domains,
    )
}

pub async fn wait_for_version(table: &ContextTableCell, version: u64) {
    for _ in 0..300 {
        if table.version() >= version {
            return;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    panic!("table never reached version {}", version);
}
