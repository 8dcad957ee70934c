use std::sync::Arc;
use crate::fallback::structs::fallback_context::FallbackContext;
use crate::ssl::structs::secure_context::SecureContext;

#[derive(Debug, Clone)]
pub enum Resolution {
    Exact(Arc<SecureContext>),
    Wildcard(Arc<SecureContext>),
    Fallback(Arc<FallbackContext>),
    LastResort(Arc<SecureContext>),
}
