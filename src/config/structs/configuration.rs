use serde::{Deserialize, Serialize};
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::store_config::StoreConfig;
use crate::config::structs::web_server_config::WebServerConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub web_server: WebServerConfig,
    pub store: StoreConfig,
    pub sentry_config: SentryConfig,
}
