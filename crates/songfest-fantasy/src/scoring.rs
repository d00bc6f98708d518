//! Fantasy scoring: predicted versus actual final positions.
//!
//! Once final results are published, each pick earns the participant's raw
//! awarded points plus a prediction-accuracy bonus. The bonus is a fixed
//! piecewise-linear decay: an exact position match earns the full 50, each
//! off-by-one costs 10, floored at 0 from an offset of 5 upwards.

use crate::draft::FantasyPrediction;
use crate::FantasyError;
use rusqlite::{Connection, Row};
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// Full bonus for predicting the exact final position.
const ACCURACY_BONUS_MAX: i64 = 50;
/// Bonus lost per position of prediction offset.
const ACCURACY_BONUS_STEP: i64 = 10;

/// A published final result for a participant in a fantasy event.
#[derive(Debug, Clone, PartialEq)]
pub struct FantasyResult {
    pub id: String,
    pub event_id: String,
    pub participant_id: String,
    /// Actual final position; `0` is the did-not-qualify sentinel.
    pub position: i64,
    /// Raw points awarded in the final, if recorded.
    pub points: Option<i64>,
    pub created_at: String,
}

/// A participant's actual final position, or elimination before the final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalPosition {
    /// Did not qualify for the final.
    DidNotQualify,
    /// Placed at this position in the final.
    Placed(i64),
}

impl Serialize for FinalPosition {
    /// Serializes as the literal string `"DNQ"` or the numeric position.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FinalPosition::DidNotQualify => serializer.serialize_str("DNQ"),
            FinalPosition::Placed(position) => serializer.serialize_i64(*position),
        }
    }
}

/// The score earned by one pick.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct PickScore {
    pub final_position: FinalPosition,
    /// Raw points the participant was awarded in the final.
    pub final_points: i64,
    /// Raw points plus the prediction-accuracy bonus.
    pub total_points: i64,
}

/// Per-user, per-participant scores.
pub type UserScores = HashMap<String, HashMap<String, PickScore>>;

/// Scores a single pick against a published result.
///
/// A stored position of `0` means the participant did not qualify: no
/// points, regardless of the prediction. Otherwise the accuracy bonus is
/// `max(50 - |actual - predicted| * 10, 0)` on top of the raw points.
pub fn score_pick(predicted_position: i64, result_position: i64, result_points: i64) -> PickScore {
    if result_position == 0 {
        return PickScore {
            final_position: FinalPosition::DidNotQualify,
            final_points: 0,
            total_points: 0,
        };
    }

    let offset = (result_position - predicted_position).abs();
    let bonus = (ACCURACY_BONUS_MAX - offset * ACCURACY_BONUS_STEP).max(0);

    PickScore {
        final_position: FinalPosition::Placed(result_position),
        final_points: result_points,
        total_points: result_points + bonus,
    }
}

/// Lists the published results for a fantasy event.
pub fn list_results(conn: &Connection, event_id: &str) -> Result<Vec<FantasyResult>, FantasyError> {
    let mut stmt = conn.prepare(
        "SELECT id, event_id, participant_id, position, points, created_at
         FROM fantasy_results WHERE event_id = ?1",
    )?;

    let rows = stmt.query_map([event_id], map_row_to_result)?;
    let mut results = Vec::new();
    for row in rows {
        results.push(row?);
    }
    Ok(results)
}

/// Computes every user's per-pick scores for a fantasy event.
///
/// `picks` maps each user to their ordered predictions (see
/// [`crate::draft::predictions_by_user`]). With no published results at all
/// the result is an empty map, independent of how many picks exist. A pick
/// whose participant has no result row yet is omitted from the output, not
/// zero-filled.
pub fn fantasy_results(
    conn: &Connection,
    event_id: &str,
    picks: &HashMap<String, Vec<FantasyPrediction>>,
) -> Result<UserScores, FantasyError> {
    let results = list_results(conn, event_id)?;
    if results.is_empty() {
        return Ok(HashMap::new());
    }

    let by_participant: HashMap<&str, &FantasyResult> = results
        .iter()
        .map(|r| (r.participant_id.as_str(), r))
        .collect();

    let mut scores: UserScores = HashMap::new();
    for (user_id, predictions) in picks {
        for prediction in predictions {
            let Some(result) = by_participant.get(prediction.participant_id.as_str()) else {
                // Result not yet published for this participant.
                continue;
            };
            scores.entry(user_id.clone()).or_default().insert(
                prediction.participant_id.clone(),
                score_pick(
                    prediction.position,
                    result.position,
                    result.points.unwrap_or(0),
                ),
            );
        }
    }

    Ok(scores)
}

fn map_row_to_result(row: &Row) -> rusqlite::Result<FantasyResult> {
    Ok(FantasyResult {
        id: row.get(0)?,
        event_id: row.get(1)?,
        participant_id: row.get(2)?,
        position: row.get(3)?,
        points: row.get(4)?,
        created_at: row.get(5)?,
    })
}
