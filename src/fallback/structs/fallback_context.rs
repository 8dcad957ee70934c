use std::sync::Arc;
use chrono::{DateTime, Utc};
use rustls::sign::CertifiedKey;
use crate::fallback::enums::fallback_source::FallbackSource;

pub struct FallbackContext {
    pub certified_key: Arc<CertifiedKey>,
    pub source: FallbackSource,
    pub loaded_at: DateTime<Utc>,
}
