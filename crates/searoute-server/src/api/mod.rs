//! API routes for the sea route server.

mod routes;

pub use routes::{ApiError, PlanRouteRequest};

use axum::Router;

pub fn routes() -> Router<std::sync::Arc<crate::state::AppState>> {
    routes::create_router()
}
