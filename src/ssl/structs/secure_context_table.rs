use std::collections::BTreeMap;
use std::sync::Arc;
use crate::ssl::structs::secure_context::SecureContext;

/// Immutable once built; replaced wholesale on every collection change.
#[derive(Default)]
pub struct SecureContextTable {
    pub(crate) contexts: BTreeMap<String, Arc<SecureContext>>,
    pub(crate) last_resort: Option<Arc<SecureContext>>,
}
