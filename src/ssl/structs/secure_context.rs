use std::sync::Arc;
use chrono::{DateTime, Utc};
use rustls::sign::CertifiedKey;

pub struct SecureContext {
    pub collection_id: String,
    pub certified_key: Arc<CertifiedKey>,
    pub domains: Vec<String>,
    pub expires_at: DateTime<Utc>,
    pub compiled_at: DateTime<Utc>,
}
