use std::collections::HashMap;
use parking_lot::RwLock;
use serde_json::Value;
use tokio::sync::broadcast;
use crate::store::structs::object_change::ObjectChange;

pub struct MemoryObjectStore {
    pub(crate) objects: RwLock<HashMap<String, Value>>,
    pub(crate) changes: broadcast::Sender<ObjectChange>,
}
