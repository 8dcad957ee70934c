use std::sync::Arc;
use crate::store::traits::object_store::ObjectStore;

pub struct CollectionStore {
    pub(crate) object_store: Arc<dyn ObjectStore>,
    pub(crate) record_id: String,
}
