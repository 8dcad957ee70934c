use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use log::info;
use parking_lot::RwLock;
use crate::ssl::structs::context_table_cell::ContextTableCell;
use crate::ssl::structs::secure_context_table::SecureContextTable;

impl std::fmt::Debug for ContextTableCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextTableCell")
            .field("version", &self.version())
            .field("domains_count", &self.current.read().len())
            .finish()
    }
}

impl Default for ContextTableCell {
    fn default() -> Self {
        Self::new(SecureContextTable::empty())
    }
}

impl ContextTableCell {
    pub fn new(table: SecureContextTable) -> Self {
        Self {
            current: RwLock::new(Arc::new(table)),
            version: AtomicU64::new(0),
        }
    }

    /// The table in use right now. The snapshot stays valid after later swaps.
    pub fn snapshot(&self) -> Arc<SecureContextTable> {
        Arc::clone(&self.current.read())
    }

    pub fn snapshot_with_version(&self) -> (Arc<SecureContextTable>, u64) {
        let current = self.current.read();
        (Arc::clone(&current), self.version.load(Ordering::Acquire))
    }

    /// Installs `table` and returns the new version.
    pub fn replace(&self, table: SecureContextTable) -> u64 {
        let table = Arc::new(table);
        let mut current = self.current.write();
        let domains = table.len();
        *current = table;
        let version = self.version.fetch_add(1, Ordering::AcqRel) + 1;
        drop(current);
        info!("[CERTIFICATE] Installed secure context table v{} with {} domains", version, domains);
        version
    }

    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }
}
