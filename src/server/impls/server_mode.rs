use std::fmt;
use crate::server::enums::server_mode::ServerMode;

impl ServerMode {
    pub fn is_secure(&self) -> bool {
        !matches!(self, ServerMode::PlainHttp)
    }
}

impl fmt::Display for ServerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerMode::PlainHttp => write!(f, "plain HTTP"),
            ServerMode::FallbackOnlyHttps => write!(f, "HTTPS (fallback certificate only)"),
            ServerMode::CollectionsHttps => write!(f, "HTTPS (certificate collections)"),
        }
    }
}
