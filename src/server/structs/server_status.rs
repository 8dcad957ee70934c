use std::sync::Arc;
use crate::server::enums::server_mode::ServerMode;
use crate::ssl::structs::context_table_cell::ContextTableCell;

#[derive(Debug, Clone)]
pub struct ServerStatus {
    pub mode: ServerMode,
    pub table: Arc<ContextTableCell>,
    pub has_fallback: bool,
}
