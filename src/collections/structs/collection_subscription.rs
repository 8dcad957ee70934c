use std::sync::Arc;
use tokio::sync::broadcast;
use crate::store::structs::object_change::ObjectChange;
use crate::store::traits::object_store::ObjectStore;

pub struct CollectionSubscription {
    pub(crate) object_store: Arc<dyn ObjectStore>,
    pub(crate) receiver: broadcast::Receiver<ObjectChange>,
    pub(crate) record_id: String,
    pub(crate) filter: Option<String>,
}
