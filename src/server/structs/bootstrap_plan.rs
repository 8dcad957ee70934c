use std::sync::Arc;
use crate::collections::structs::collection_subscription::CollectionSubscription;
use crate::fallback::structs::fallback_context::FallbackContext;
use crate::server::enums::server_mode::ServerMode;
use crate::ssl::structs::context_table_cell::ContextTableCell;

pub struct BootstrapPlan {
    pub mode: ServerMode,
    pub table: Arc<ContextTableCell>,
    pub fallback: Option<Arc<FallbackContext>>,
    /// Present only in `CollectionsHttps` until the coordinator takes it.
    pub subscription: Option<CollectionSubscription>,
}
