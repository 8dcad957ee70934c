use std::collections::HashMap;
use async_trait::async_trait;
use log::debug;
use parking_lot::RwLock;
use serde_json::Value;
use tokio::sync::broadcast;
use crate::store::enums::store_error::StoreError;
use crate::store::store::change_channel;
use crate::store::structs::memory_object_store::MemoryObjectStore;
use crate::store::structs::object_change::ObjectChange;
use crate::store::traits::object_store::ObjectStore;

impl std::fmt::Debug for MemoryObjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryObjectStore")
            .field("objects_count", &self.objects.read().len())
            .field("subscribers", &self.changes.receiver_count())
            .finish()
    }
}

impl Default for MemoryObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
            changes: change_channel(),
        }
    }

    fn publish(&self, id: &str, value: Option<Value>) {
        // No subscribers is not an error.
        let _ = self.changes.send(ObjectChange { id: id.to_string(), value });
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn get_object(&self, id: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.objects.read().get(id).cloned())
    }

    async fn set_object(&self, id: &str, value: Value) -> Result<(), StoreError> {
        // Publishing under the write guard keeps notification order equal to write order.
        let mut objects = self.objects.write();
        objects.insert(id.to_string(), value.clone());
        self.publish(id, Some(value));
        drop(objects);
        debug!("[STORE] Object {} written", id);
        Ok(())
    }

    async fn delete_object(&self, id: &str) -> Result<(), StoreError> {
        let mut objects = self.objects.write();
        if objects.remove(id).is_some() {
            self.publish(id, None);
            drop(objects);
            debug!("[STORE] Object {} deleted", id);
        }
        Ok(())
    }

    fn subscribe_objects(&self) -> broadcast::Receiver<ObjectChange> {
        self.changes.subscribe()
    }
}
