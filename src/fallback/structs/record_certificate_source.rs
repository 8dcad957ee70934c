use std::sync::Arc;
use crate::store::traits::object_store::ObjectStore;

/// Reads named PEM certificates from the `certificates` field of a record.
pub struct RecordCertificateSource {
    pub(crate) object_store: Arc<dyn ObjectStore>,
    pub(crate) record_id: String,
}
