//! HTTP server module

mod api;
mod recommendations;

use std::sync::Arc;

use axum::{Router, middleware, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;
use crate::middleware::identity_middleware;

pub use api::{HealthResponse, RulesResponse};
pub use recommendations::{ErrorResponse, validated_payload};

/// Create the HTTP router with all routes configured
pub fn create_router(state: Arc<AppState>) -> Router {
    let learner_routes = Router::new()
        .route(
            "/api/recommendations",
            get(recommendations::get_recommendations),
        )
        .route_layer(middleware::from_fn(identity_middleware));

    Router::new()
        .route("/api/health", get(api::health))
        .route("/api/rules", get(api::list_rules))
        .merge(learner_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
