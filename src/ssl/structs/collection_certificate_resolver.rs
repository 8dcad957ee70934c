use std::sync::Arc;
use crate::fallback::structs::fallback_context::FallbackContext;
use crate::ssl::structs::context_table_cell::ContextTableCell;

pub struct CollectionCertificateResolver {
    pub(crate) table: Arc<ContextTableCell>,
    pub(crate) fallback: Option<Arc<FallbackContext>>,
}
