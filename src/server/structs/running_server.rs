use std::sync::Arc;
use actix_web::dev::{Server, ServerHandle};
use tokio::task::JoinHandle;
use crate::server::enums::server_mode::ServerMode;
use crate::ssl::structs::context_table_cell::ContextTableCell;

pub struct RunningServer {
    pub mode: ServerMode,
    pub handle: ServerHandle,
    pub server: Server,
    pub table: Arc<ContextTableCell>,
    pub coordinator: Option<JoinHandle<()>>,
}
