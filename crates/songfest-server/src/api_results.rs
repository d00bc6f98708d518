//! Handlers for the voting-results endpoints.

use crate::AppState;
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::Json,
};
use songfest_results::{list_events, load_table_data, ResultRow, ResultsError};
use songfest_types::Event;
use std::sync::Arc;

/// Maps a [`ResultsError`] to an HTTP status code, logging the failure.
fn results_err_to_status(e: ResultsError) -> StatusCode {
    tracing::error!(error = %e, "results query failed");
    StatusCode::INTERNAL_SERVER_ERROR
}

fn pool_err_to_status(e: r2d2::Error) -> StatusCode {
    tracing::error!(error = %e, "failed to get db connection");
    StatusCode::INTERNAL_SERVER_ERROR
}

/// GET /api/events
pub async fn list_events_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<Event>>, StatusCode> {
    let pool = state.pool.clone();
    let events = tokio::task::spawn_blocking(move || {
        let conn = pool.get().map_err(pool_err_to_status)?;
        list_events(&conn).map_err(results_err_to_status)
    })
    .await
    .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)??;

    Ok(Json(events))
}

/// GET /api/events/{eventId}/results
pub async fn event_results_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<Json<Vec<ResultRow>>, StatusCode> {
    let pool = state.pool.clone();
    let table = tokio::task::spawn_blocking(move || {
        let conn = pool.get().map_err(pool_err_to_status)?;
        load_table_data(&conn, &event_id).map_err(results_err_to_status)
    })
    .await
    .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)??;

    Ok(Json(table))
}
