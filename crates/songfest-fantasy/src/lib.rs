//! Fantasy draft engine for the Songfest platform.
//!
//! Implements the snake-draft turn engine, the draft roster and round
//! summary queries, per-turn prediction persistence, and the fantasy
//! scoring engine that compares predicted against actual final positions.
//!
//! All durable state is owned by the record store (`songfest-db`); every
//! function here is a plain request/response wrapper over a borrowed
//! connection. The turn transition itself is a pure function
//! ([`draft::next_state`]) so the race-prone read-modify-write is isolated
//! in a single persistence site ([`draft::advance_turn`]).

use thiserror::Error;

pub mod draft;
pub mod scoring;

pub use draft::{
    advance_turn, available_participants, create_prediction, current_round_details,
    get_fantasy_event, get_rules, list_fantasy_users, next_state, predictions_by_user,
    CreatePredictionParams, CurrentTurn, DraftParticipant, DraftState, DraftTransition,
    FantasyEvent, FantasyPrediction, FantasyRules, FantasyUser, RoundDetails, TurnUser,
};
pub use scoring::{
    fantasy_results, list_results, score_pick, FantasyResult, FinalPosition, PickScore, UserScores,
};

/// Errors that can occur during fantasy draft operations.
#[derive(Debug, Error)]
pub enum FantasyError {
    /// The underlying store reported an error. Propagated verbatim.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    /// A required row (fantasy event or rules singleton) is absent.
    #[error("not found: {0}")]
    NotFound(String),
    /// A JSON column could not be encoded or decoded.
    #[error("json serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
