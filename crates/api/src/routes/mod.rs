//! HTTP routes

pub mod health;
pub mod leads;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::context::AppContext;

/// Build the service router with tracing and permissive CORS, mirroring the
/// public website's cross-origin access.
pub fn build_router(context: Arc<AppContext>) -> Router {
    Router::new()
        .route("/sf_api/lead", post(leads::create_lead))
        .route("/sf_api/lead/become-a-dealer", post(leads::create_dealer_lead))
        .route("/sf_api/health_check", get(health::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(context)
}
