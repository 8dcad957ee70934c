use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::broadcast;
use crate::store::enums::store_error::StoreError;
use crate::store::structs::object_change::ObjectChange;

#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn get_object(&self, id: &str) -> Result<Option<Value>, StoreError>;

    async fn set_object(&self, id: &str, value: Value) -> Result<(), StoreError>;

    async fn delete_object(&self, id: &str) -> Result<(), StoreError>;

    /// Receiver for every change published after this call.
    fn subscribe_objects(&self) -> broadcast::Receiver<ObjectChange>;
}
