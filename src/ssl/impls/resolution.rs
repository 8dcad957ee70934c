use std::sync::Arc;
use rustls::sign::CertifiedKey;
use crate::ssl::enums::resolution::Resolution;

impl Resolution {
    pub fn certified_key(&self) -> Arc<CertifiedKey> {
        match self {
            Resolution::Exact(context)
            | Resolution::Wildcard(context)
            | Resolution::LastResort(context) => Arc::clone(&context.certified_key),
            Resolution::Fallback(fallback) => Arc::clone(&fallback.certified_key),
        }
    }

    /// Collection behind the selected certificate; `None` for the fallback.
    pub fn collection_id(&self) -> Option<&str> {
        match self {
            Resolution::Exact(context)
            | Resolution::Wildcard(context)
            | Resolution::LastResort(context) => Some(context.collection_id.as_str()),
            Resolution::Fallback(_) => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Resolution::Exact(_) => "exact",
            Resolution::Wildcard(_) => "wildcard",
            Resolution::Fallback(_) => "fallback",
            Resolution::LastResort(_) => "last-resort",
        }
    }
}
