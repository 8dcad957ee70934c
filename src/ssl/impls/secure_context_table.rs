use std::sync::Arc;
use crate::ssl::structs::secure_context::SecureContext;
use crate::ssl::structs::secure_context_table::SecureContextTable;

impl std::fmt::Debug for SecureContextTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureContextTable")
            .field("domains", &self.contexts.keys().collect::<Vec<_>>())
            .field("last_resort", &self.last_resort.as_ref().map(|c| c.collection_id.as_str()))
            .finish()
    }
}

impl SecureContextTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    /// Context registered under exactly this (lowercase) pattern.
    pub fn get(&self, pattern: &str) -> Option<Arc<SecureContext>> {
        self.contexts.get(pattern).cloned()
    }

    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.contexts.keys().map(String::as_str)
    }

    /// Collection ids present in the table, sorted and deduplicated.
    pub fn collection_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.contexts.values().map(|c| c.collection_id.clone()).collect();
        ids.sort();
        ids.dedup();
        ids
    }

    /// Deterministic pick used when nothing matches and no fallback exists.
    pub fn last_resort(&self) -> Option<Arc<SecureContext>> {
        self.last_resort.clone()
    }
}
