//! Handlers for the fantasy-draft endpoints.

use crate::AppState;
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::json;
use songfest_fantasy::{
    advance_turn, available_participants, create_prediction, current_round_details,
    fantasy_results, list_fantasy_users, predictions_by_user, CreatePredictionParams,
    DraftParticipant, FantasyError, FantasyPrediction, FantasyUser, RoundDetails, UserScores,
};
use std::sync::Arc;

/// Maps a [`FantasyError`] to the correct HTTP status code, logging non-404
/// errors.
///
/// `NotFound` maps to 404, everything else to 500 (with the error logged).
fn fantasy_err_to_status(e: FantasyError) -> StatusCode {
    match e {
        FantasyError::NotFound(_) => StatusCode::NOT_FOUND,
        ref err => {
            tracing::error!(error = %err, "fantasy operation failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn pool_err_to_status(e: r2d2::Error) -> StatusCode {
    tracing::error!(error = %e, "failed to get db connection");
    StatusCode::INTERNAL_SERVER_ERROR
}

#[derive(Deserialize)]
pub struct CreatePredictionRequest {
    pub user_id: String,
    pub participant_id: String,
    pub position: i64,
}

/// GET /api/fantasy/{eventId}/participants/available
pub async fn available_participants_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<Json<Vec<DraftParticipant>>, StatusCode> {
    let pool = state.pool.clone();
    let available = tokio::task::spawn_blocking(move || {
        let conn = pool.get().map_err(pool_err_to_status)?;
        available_participants(&conn, &event_id).map_err(fantasy_err_to_status)
    })
    .await
    .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)??;

    Ok(Json(available))
}

/// GET /api/fantasy/{eventId}/users
pub async fn fantasy_users_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<Json<Vec<FantasyUser>>, StatusCode> {
    let pool = state.pool.clone();
    let users = tokio::task::spawn_blocking(move || {
        let conn = pool.get().map_err(pool_err_to_status)?;
        list_fantasy_users(&conn, &event_id).map_err(fantasy_err_to_status)
    })
    .await
    .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)??;

    Ok(Json(users))
}

/// GET /api/fantasy/{eventId}/round
pub async fn round_details_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<Json<RoundDetails>, StatusCode> {
    let pool = state.pool.clone();
    let details = tokio::task::spawn_blocking(move || {
        let conn = pool.get().map_err(pool_err_to_status)?;
        current_round_details(&conn, &event_id).map_err(fantasy_err_to_status)
    })
    .await
    .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)??;

    Ok(Json(details))
}

/// POST /api/fantasy/{eventId}/advance
pub async fn advance_turn_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let pool = state.pool.clone();
    tokio::task::spawn_blocking(move || {
        let conn = pool.get().map_err(pool_err_to_status)?;
        advance_turn(&conn, &event_id).map_err(fantasy_err_to_status)
    })
    .await
    .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)??;

    Ok(Json(json!({"status": "ok"})))
}

/// POST /api/fantasy/{eventId}/predictions
pub async fn create_prediction_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(event_id): Path<String>,
    Json(payload): Json<CreatePredictionRequest>,
) -> Result<Json<FantasyPrediction>, StatusCode> {
    let params = CreatePredictionParams {
        event_id,
        user_id: payload.user_id,
        participant_id: payload.participant_id,
        position: payload.position,
    };

    let pool = state.pool.clone();
    let prediction = tokio::task::spawn_blocking(move || {
        let conn = pool.get().map_err(pool_err_to_status)?;
        create_prediction(&conn, &params).map_err(|e| {
            // A participant drafted twice violates the unique pick
            // constraint; report it as a conflict.
            if let FantasyError::Database(rusqlite::Error::SqliteFailure(error_code, _)) = &e {
                if error_code.code == rusqlite::ffi::ErrorCode::ConstraintViolation {
                    return StatusCode::CONFLICT;
                }
            }
            fantasy_err_to_status(e)
        })
    })
    .await
    .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)??;

    Ok(Json(prediction))
}

/// GET /api/fantasy/{eventId}/results
pub async fn fantasy_results_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<Json<UserScores>, StatusCode> {
    let pool = state.pool.clone();
    let scores = tokio::task::spawn_blocking(move || {
        let conn = pool.get().map_err(pool_err_to_status)?;
        let picks = predictions_by_user(&conn, &event_id).map_err(fantasy_err_to_status)?;
        fantasy_results(&conn, &event_id, &picks).map_err(fantasy_err_to_status)
    })
    .await
    .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)??;

    Ok(Json(scores))
}
