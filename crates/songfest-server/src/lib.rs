//! Songfest server library logic.
//!
//! Exposes the voting-results and fantasy-draft operations over HTTP. The
//! handlers are thin: each bridges onto the synchronous query layer with
//! `spawn_blocking` and translates the crate errors into status codes. All
//! failure translation for callers happens here; the query crates never log
//! or retry.

pub mod api_fantasy;
pub mod api_results;
pub mod config;

use axum::{
    routing::{get, post},
    Extension, Json, Router,
};
use serde_json::{json, Value};
use songfest_db::DbPool;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: DbPool,
}

/// Health check handler.
///
/// Returns `200 OK` with server status and version. Used by load balancers,
/// monitoring, and CI to verify the server is running.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Builds the application router with all routes.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/events", get(api_results::list_events_handler))
        .route(
            "/api/events/{eventId}/results",
            get(api_results::event_results_handler),
        )
        .route(
            "/api/fantasy/{eventId}/participants/available",
            get(api_fantasy::available_participants_handler),
        )
        .route(
            "/api/fantasy/{eventId}/users",
            get(api_fantasy::fantasy_users_handler),
        )
        .route(
            "/api/fantasy/{eventId}/round",
            get(api_fantasy::round_details_handler),
        )
        .route(
            "/api/fantasy/{eventId}/advance",
            post(api_fantasy::advance_turn_handler),
        )
        .route(
            "/api/fantasy/{eventId}/predictions",
            post(api_fantasy::create_prediction_handler),
        )
        .route(
            "/api/fantasy/{eventId}/results",
            get(api_fantasy::fantasy_results_handler),
        )
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(Extension(Arc::new(state)))
}
