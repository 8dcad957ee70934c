use std::sync::Arc;
use actix_web::web::ServiceConfig;

/// Host-supplied routes, applied to every worker's `App`.
pub type RouteConfig = Arc<dyn Fn(&mut ServiceConfig) + Send + Sync>;
