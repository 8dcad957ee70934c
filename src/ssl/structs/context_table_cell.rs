use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use parking_lot::RwLock;
use crate::ssl::structs::secure_context_table::SecureContextTable;

pub struct ContextTableCell {
    pub(crate) current: RwLock<Arc<SecureContextTable>>,
    pub(crate) version: AtomicU64,
}
