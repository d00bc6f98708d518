//! Snake-draft turn management and draft queries.
//!
//! A fantasy event runs a snake draft: users pick participants in
//! `turn_order` sequence, and the traversal direction reverses at every
//! round boundary so the first pick of round one becomes the last pick of
//! round two. The seat that closes a round also opens the next one.

use crate::FantasyError;
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A fantasy draft event row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FantasyEvent {
    /// Unique public ID for the event (UUID).
    pub id: String,
    /// Display title.
    pub title: String,
    /// Whether the fantasy event is active.
    pub active: bool,
    /// Whether the draft is still running. Never reopens once false.
    pub draft_open: bool,
    /// Zero-based index into `turn_order` of the seat whose turn it is.
    pub current_turn: i64,
    /// One-based draft round, monotonically non-decreasing.
    pub round: i64,
    /// True while traversing `turn_order` in ascending index order.
    pub forward_direction: bool,
    /// The fixed sequence of participating user ids.
    pub turn_order: Vec<String>,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
}

/// The scoring-rules singleton. Read-only from the engine's perspective.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FantasyRules {
    pub id: String,
    /// Number of rounds (= picks per user) in a draft.
    pub team_size: i64,
    pub position_points: i64,
    pub position_reduction: i64,
    pub point_multiplier: i64,
}

/// One user's pick of a participant with a predicted final position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FantasyPrediction {
    pub id: String,
    pub event_id: String,
    pub user_id: String,
    pub participant_id: String,
    /// The predicted final position.
    pub position: i64,
    pub created_at: String,
}

/// A user registered for a fantasy event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FantasyUser {
    pub id: String,
    pub event_id: String,
    pub user_id: String,
    pub created_at: String,
}

/// The mutable draft-position fields of a fantasy event, passed by value
/// into the pure transition function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftState {
    /// Zero-based index into the turn order.
    pub current_turn: i64,
    /// One-based round counter.
    pub round: i64,
    /// Traversal direction.
    pub forward_direction: bool,
    /// Number of seats, i.e. the turn order length.
    pub seats: i64,
}

/// The outcome of advancing a draft by one completed pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftTransition {
    /// The turn moves to the next seat within the current round.
    Advance { current_turn: i64 },
    /// Round boundary: the same seat opens the next round and the
    /// direction flips.
    NextRound {
        current_turn: i64,
        round: i64,
        forward_direction: bool,
    },
    /// The final round just finished; the draft closes.
    Close,
}

/// Computes the draft state following one completed pick.
///
/// Pure: persistence is the caller's concern. The candidate next index is
/// `current_turn + 1` (or `- 1` when traversing backwards); stepping out of
/// `[0, seats)` is the snake reversal point, where the turn index stays put,
/// the round increments, and the direction flips, unless the incremented
/// round exceeds `team_size`, which closes the draft.
pub fn next_state(state: DraftState, team_size: i64) -> DraftTransition {
    let candidate = if state.forward_direction {
        state.current_turn + 1
    } else {
        state.current_turn - 1
    };

    if candidate >= 0 && candidate < state.seats {
        return DraftTransition::Advance {
            current_turn: candidate,
        };
    }

    let round = state.round + 1;
    if round > team_size {
        return DraftTransition::Close;
    }

    DraftTransition::NextRound {
        current_turn: state.current_turn,
        round,
        forward_direction: !state.forward_direction,
    }
}

/// Retrieves a fantasy event by its public ID.
pub fn get_fantasy_event(conn: &Connection, event_id: &str) -> Result<FantasyEvent, FantasyError> {
    conn.query_row(
        "SELECT id, title, active, draft_open, current_turn, round,
                forward_direction, turn_order, created_at
         FROM fantasy_events WHERE id = ?1",
        [event_id],
        map_row_to_fantasy_event,
    )
    .optional()?
    .ok_or_else(|| FantasyError::NotFound(format!("fantasy event {event_id}")))
}

/// Retrieves the scoring-rules singleton.
pub fn get_rules(conn: &Connection) -> Result<FantasyRules, FantasyError> {
    conn.query_row(
        "SELECT id, team_size, position_points, position_reduction, point_multiplier
         FROM fantasy_rules LIMIT 1",
        [],
        |row| {
            Ok(FantasyRules {
                id: row.get(0)?,
                team_size: row.get(1)?,
                position_points: row.get(2)?,
                position_reduction: row.get(3)?,
                point_multiplier: row.get(4)?,
            })
        },
    )
    .optional()?
    .ok_or_else(|| FantasyError::NotFound("fantasy rules".to_string()))
}

/// Advances the draft turn after a user completes a pick.
///
/// Loads the fantasy event and the rules singleton, computes the successor
/// state via [`next_state`], and persists it with exactly one UPDATE:
/// either the new turn index, or (at a round boundary) the unchanged index
/// plus the flipped direction and incremented round, or (past the final
/// round) `draft_open = false` alone.
///
/// The read-then-write sequence is not transactional; concurrent calls for
/// the same event can race.
///
/// # Errors
///
/// Returns `FantasyError::NotFound` if the event or the rules singleton is
/// absent; store failures propagate unchanged.
pub fn advance_turn(conn: &Connection, event_id: &str) -> Result<(), FantasyError> {
    let event = get_fantasy_event(conn, event_id)?;
    let rules = get_rules(conn)?;

    let state = DraftState {
        current_turn: event.current_turn,
        round: event.round,
        forward_direction: event.forward_direction,
        seats: event.turn_order.len() as i64,
    };

    match next_state(state, rules.team_size) {
        DraftTransition::Advance { current_turn } => {
            conn.execute(
                "UPDATE fantasy_events SET current_turn = ?1 WHERE id = ?2",
                params![current_turn, event_id],
            )?;
        }
        DraftTransition::NextRound {
            current_turn,
            round,
            forward_direction,
        } => {
            conn.execute(
                "UPDATE fantasy_events
                 SET current_turn = ?1, forward_direction = ?2, round = ?3
                 WHERE id = ?4",
                params![current_turn, forward_direction, round, event_id],
            )?;
        }
        DraftTransition::Close => {
            tracing::info!(event = event_id, "draft finished, closing");
            conn.execute(
                "UPDATE fantasy_events SET draft_open = 0 WHERE id = ?1",
                [event_id],
            )?;
        }
    }

    Ok(())
}

/// A participant still available to draft, enriched with detail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DraftParticipant {
    pub participant_id: String,
    pub country: Option<String>,
    pub artist: Option<String>,
    pub song: Option<String>,
}

/// Lists the participants registered for a fantasy event that no user has
/// drafted yet.
///
/// Set-difference semantics: with zero predictions the exclusion set is
/// empty and every registered participant is returned.
pub fn available_participants(
    conn: &Connection,
    event_id: &str,
) -> Result<Vec<DraftParticipant>, FantasyError> {
    let mut stmt = conn.prepare(
        "SELECT fep.participant_id, p.country, p.artist, p.song
         FROM fantasy_event_participants fep
         JOIN participants p ON p.id = fep.participant_id
         WHERE fep.event_id = ?1
           AND fep.participant_id NOT IN (
               SELECT participant_id FROM fantasy_predictions WHERE event_id = ?1
           )
         ORDER BY fep.created_at ASC, fep.rowid ASC",
    )?;

    let rows = stmt.query_map([event_id], |row| {
        Ok(DraftParticipant {
            participant_id: row.get(0)?,
            country: row.get(1)?,
            artist: row.get(2)?,
            song: row.get(3)?,
        })
    })?;

    let mut participants = Vec::new();
    for row in rows {
        participants.push(row?);
    }
    Ok(participants)
}

/// A turn-order entry resolved to a username.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TurnUser {
    pub id: String,
    pub username: String,
}

/// The seat whose turn it currently is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentTurn {
    pub id: String,
    pub name: String,
}

/// Display-ready snapshot of the draft state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoundDetails {
    pub round: i64,
    pub users: Vec<TurnUser>,
    pub current_turn: CurrentTurn,
}

/// Produces a display-ready snapshot of the draft: the current round, the
/// full turn order resolved to usernames (in turn-order sequence), and the
/// current seat.
///
/// Best-effort display policy: a user id that cannot be resolved gets an
/// empty username instead of failing. Only a missing fantasy event is fatal.
pub fn current_round_details(
    conn: &Connection,
    event_id: &str,
) -> Result<RoundDetails, FantasyError> {
    let event = get_fantasy_event(conn, event_id)?;

    let mut stmt = conn.prepare("SELECT username FROM public_users WHERE id = ?1")?;
    let mut lookup = |id: &str| -> Result<Option<String>, rusqlite::Error> {
        stmt.query_row([id], |row| row.get(0)).optional()
    };

    let mut users = Vec::with_capacity(event.turn_order.len());
    for user_id in &event.turn_order {
        users.push(TurnUser {
            id: user_id.clone(),
            username: lookup(user_id)?.unwrap_or_default(),
        });
    }

    let current_id = event
        .turn_order
        .get(event.current_turn as usize)
        .cloned()
        .unwrap_or_default();
    let current_name = lookup(&current_id)?.unwrap_or_default();

    Ok(RoundDetails {
        round: event.round,
        users,
        current_turn: CurrentTurn {
            id: current_id,
            name: current_name,
        },
    })
}

/// Parameters for recording a pick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePredictionParams {
    pub event_id: String,
    pub user_id: String,
    pub participant_id: String,
    /// The predicted final position.
    pub position: i64,
}

/// Records one pick: a (user, event, participant) prediction.
///
/// The store enforces uniqueness per (event, participant); drafting the same
/// participant twice surfaces the constraint violation unchanged.
pub fn create_prediction(
    conn: &Connection,
    params: &CreatePredictionParams,
) -> Result<FantasyPrediction, FantasyError> {
    let id = uuid::Uuid::new_v4().to_string();

    let prediction = conn.query_row(
        "INSERT INTO fantasy_predictions (id, event_id, user_id, participant_id, position)
         VALUES (?1, ?2, ?3, ?4, ?5)
         RETURNING id, event_id, user_id, participant_id, position, created_at",
        params![
            id,
            params.event_id,
            params.user_id,
            params.participant_id,
            params.position,
        ],
        map_row_to_prediction,
    )?;

    Ok(prediction)
}

/// Lists the users registered for a fantasy event.
pub fn list_fantasy_users(
    conn: &Connection,
    event_id: &str,
) -> Result<Vec<FantasyUser>, FantasyError> {
    let mut stmt = conn.prepare(
        "SELECT id, event_id, user_id, created_at
         FROM fantasy_users WHERE event_id = ?1 ORDER BY created_at ASC, rowid ASC",
    )?;

    let rows = stmt.query_map([event_id], |row| {
        Ok(FantasyUser {
            id: row.get(0)?,
            event_id: row.get(1)?,
            user_id: row.get(2)?,
            created_at: row.get(3)?,
        })
    })?;

    let mut users = Vec::new();
    for row in rows {
        users.push(row?);
    }
    Ok(users)
}

/// Groups an event's stored predictions by user, each user's picks in
/// creation order. This is the scoring engine's input shape.
pub fn predictions_by_user(
    conn: &Connection,
    event_id: &str,
) -> Result<HashMap<String, Vec<FantasyPrediction>>, FantasyError> {
    let mut stmt = conn.prepare(
        "SELECT id, event_id, user_id, participant_id, position, created_at
         FROM fantasy_predictions WHERE event_id = ?1 ORDER BY created_at ASC, rowid ASC",
    )?;

    let rows = stmt.query_map([event_id], map_row_to_prediction)?;

    let mut by_user: HashMap<String, Vec<FantasyPrediction>> = HashMap::new();
    for row in rows {
        let prediction = row?;
        by_user
            .entry(prediction.user_id.clone())
            .or_default()
            .push(prediction);
    }
    Ok(by_user)
}

fn map_row_to_fantasy_event(row: &Row) -> rusqlite::Result<FantasyEvent> {
    let turn_order_json: String = row.get(7)?;
    let turn_order: Vec<String> = serde_json::from_str(&turn_order_json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(7, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(FantasyEvent {
        id: row.get(0)?,
        title: row.get(1)?,
        active: row.get(2)?,
        draft_open: row.get(3)?,
        current_turn: row.get(4)?,
        round: row.get(5)?,
        forward_direction: row.get(6)?,
        turn_order,
        created_at: row.get(8)?,
    })
}

fn map_row_to_prediction(row: &Row) -> rusqlite::Result<FantasyPrediction> {
    Ok(FantasyPrediction {
        id: row.get(0)?,
        event_id: row.get(1)?,
        user_id: row.get(2)?,
        participant_id: row.get(3)?,
        position: row.get(4)?,
        created_at: row.get(5)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use songfest_db::run_migrations;

    fn setup_db() -> Connection {
        let conn = Connection::open_in_memory().expect("failed to open in-memory db");
        run_migrations(&conn).expect("failed to run migrations");

        conn.execute_batch(
            "INSERT INTO public_users (id, username) VALUES ('u-a', 'alice');
             INSERT INTO public_users (id, username) VALUES ('u-b', 'bob');
             INSERT INTO public_users (id, username) VALUES ('u-c', 'carol');
             INSERT INTO participants (id, country, artist, song)
                 VALUES ('p-1', 'Sweden', 'Astra', 'Norrsken');
             INSERT INTO participants (id, country, artist, song)
                 VALUES ('p-2', 'Italy', 'Volta', 'Fiamma');
             INSERT INTO participants (id, country, artist, song)
                 VALUES ('p-3', 'Finland', 'Kuura', 'Routa');",
        )
        .expect("failed to seed base rows");
        conn
    }

    fn seed_draft(conn: &Connection, team_size: i64) {
        conn.execute(
            "INSERT INTO fantasy_events (id, title, active, draft_open, turn_order)
             VALUES ('fe-1', 'Grand Final Draft', 1, 1, '[\"u-a\",\"u-b\",\"u-c\"]')",
            [],
        )
        .expect("failed to seed fantasy event");
        conn.execute(
            "UPDATE fantasy_rules SET team_size = ?1",
            [team_size],
        )
        .expect("failed to set team size");
        for (row_id, participant) in [("fep-1", "p-1"), ("fep-2", "p-2"), ("fep-3", "p-3")] {
            conn.execute(
                "INSERT INTO fantasy_event_participants (id, event_id, participant_id)
                 VALUES (?1, 'fe-1', ?2)",
                params![row_id, participant],
            )
            .expect("failed to register draft participant");
        }
    }

    fn draft_fields(conn: &Connection) -> (i64, i64, bool, bool) {
        conn.query_row(
            "SELECT current_turn, round, forward_direction, draft_open
             FROM fantasy_events WHERE id = 'fe-1'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
        )
        .expect("failed to read draft fields")
    }

    #[test]
    fn next_state_advances_within_round() {
        let state = DraftState {
            current_turn: 0,
            round: 1,
            forward_direction: true,
            seats: 3,
        };
        assert_eq!(
            next_state(state, 2),
            DraftTransition::Advance { current_turn: 1 }
        );

        let backwards = DraftState {
            current_turn: 2,
            round: 2,
            forward_direction: false,
            seats: 3,
        };
        assert_eq!(
            next_state(backwards, 2),
            DraftTransition::Advance { current_turn: 1 }
        );
    }

    #[test]
    fn next_state_snake_boundary_keeps_seat_and_flips() {
        let state = DraftState {
            current_turn: 2,
            round: 1,
            forward_direction: true,
            seats: 3,
        };
        assert_eq!(
            next_state(state, 2),
            DraftTransition::NextRound {
                current_turn: 2,
                round: 2,
                forward_direction: false,
            }
        );
    }

    #[test]
    fn next_state_closes_after_last_round() {
        let state = DraftState {
            current_turn: 0,
            round: 2,
            forward_direction: false,
            seats: 3,
        };
        assert_eq!(next_state(state, 2), DraftTransition::Close);
    }

    #[test]
    fn snake_sequence_repeats_boundary_index_exactly_once() {
        // For 3 seats and 2 rounds the turn sequence is 0,1,2,2,1,0 and the
        // draft closes on the next advance.
        let mut state = DraftState {
            current_turn: 0,
            round: 1,
            forward_direction: true,
            seats: 3,
        };
        let mut seen = vec![state.current_turn];

        loop {
            match next_state(state, 2) {
                DraftTransition::Advance { current_turn } => {
                    state.current_turn = current_turn;
                }
                DraftTransition::NextRound {
                    current_turn,
                    round,
                    forward_direction,
                } => {
                    state.current_turn = current_turn;
                    state.round = round;
                    state.forward_direction = forward_direction;
                }
                DraftTransition::Close => break,
            }
            seen.push(state.current_turn);
        }

        assert_eq!(seen, vec![0, 1, 2, 2, 1, 0]);
    }

    #[test]
    fn advance_turn_persists_single_step() {
        let conn = setup_db();
        seed_draft(&conn, 2);

        advance_turn(&conn, "fe-1").expect("advance failed");
        assert_eq!(draft_fields(&conn), (1, 1, true, true));
    }

    #[test]
    fn advance_turn_round_boundary_worked_example() {
        let conn = setup_db();
        seed_draft(&conn, 2);

        // Three advances from the start of a 3-seat draft land on the snake
        // pivot: turn index unchanged at 2, round 2, direction reversed.
        for _ in 0..3 {
            advance_turn(&conn, "fe-1").expect("advance failed");
        }
        assert_eq!(draft_fields(&conn), (2, 2, false, true));
    }

    #[test]
    fn advance_turn_terminates_draft_and_never_mutates_again() {
        let conn = setup_db();
        seed_draft(&conn, 2);

        // team_size * seats advances complete the draft.
        for _ in 0..6 {
            advance_turn(&conn, "fe-1").expect("advance failed");
        }
        let closed = draft_fields(&conn);
        assert!(!closed.3, "draft should be closed");

        // Termination persists draft_open alone; round stays at team_size.
        assert_eq!(closed, (0, 2, false, false));

        // Further calls take the terminate branch again and change nothing.
        advance_turn(&conn, "fe-1").expect("advance after close failed");
        assert_eq!(draft_fields(&conn), closed);
    }

    #[test]
    fn advance_turn_missing_event_is_not_found() {
        let conn = setup_db();
        seed_draft(&conn, 2);

        let err = advance_turn(&conn, "fe-missing").unwrap_err();
        match err {
            FantasyError::NotFound(msg) => assert!(msg.contains("fe-missing")),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn advance_turn_missing_rules_is_not_found() {
        let conn = setup_db();
        seed_draft(&conn, 2);
        conn.execute("DELETE FROM fantasy_rules", [])
            .expect("failed to delete rules");

        let err = advance_turn(&conn, "fe-1").unwrap_err();
        match err {
            FantasyError::NotFound(msg) => assert!(msg.contains("rules")),
            other => panic!("expected NotFound, got {other:?}"),
        }

        // The operation fails before any write.
        let (current_turn, round, _, _) = draft_fields(&conn);
        assert_eq!((current_turn, round), (0, 1));
    }

    #[test]
    fn available_participants_with_no_predictions_returns_all() {
        let conn = setup_db();
        seed_draft(&conn, 2);

        let available = available_participants(&conn, "fe-1").expect("query failed");
        assert_eq!(available.len(), 3);
        assert_eq!(available[0].participant_id, "p-1");
        assert_eq!(available[0].country.as_deref(), Some("Sweden"));
    }

    #[test]
    fn available_participants_excludes_drafted() {
        let conn = setup_db();
        seed_draft(&conn, 2);

        create_prediction(
            &conn,
            &CreatePredictionParams {
                event_id: "fe-1".to_string(),
                user_id: "u-a".to_string(),
                participant_id: "p-2".to_string(),
                position: 1,
            },
        )
        .expect("pick failed");

        let available = available_participants(&conn, "fe-1").expect("query failed");
        let ids: Vec<&str> = available
            .iter()
            .map(|p| p.participant_id.as_str())
            .collect();
        assert_eq!(ids, vec!["p-1", "p-3"]);
    }

    #[test]
    fn create_prediction_rejects_double_draft() {
        let conn = setup_db();
        seed_draft(&conn, 2);

        let params = CreatePredictionParams {
            event_id: "fe-1".to_string(),
            user_id: "u-a".to_string(),
            participant_id: "p-1".to_string(),
            position: 4,
        };
        create_prediction(&conn, &params).expect("first pick failed");

        let second = CreatePredictionParams {
            user_id: "u-b".to_string(),
            position: 9,
            ..params
        };
        let err = create_prediction(&conn, &second).unwrap_err();
        match err {
            FantasyError::Database(rusqlite::Error::SqliteFailure(code, _)) => {
                assert_eq!(code.code, rusqlite::ffi::ErrorCode::ConstraintViolation)
            }
            other => panic!("expected constraint violation, got {other:?}"),
        }
    }

    #[test]
    fn round_details_resolves_turn_order_in_sequence() {
        let conn = setup_db();
        seed_draft(&conn, 2);
        advance_turn(&conn, "fe-1").expect("advance failed");

        let details = current_round_details(&conn, "fe-1").expect("query failed");
        assert_eq!(details.round, 1);
        let names: Vec<&str> = details.users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["alice", "bob", "carol"]);
        assert_eq!(details.current_turn.id, "u-b");
        assert_eq!(details.current_turn.name, "bob");
    }

    #[test]
    fn round_details_tolerates_unknown_user() {
        let conn = setup_db();
        conn.execute(
            "INSERT INTO fantasy_events (id, title, draft_open, turn_order)
             VALUES ('fe-1', 'Draft', 1, '[\"u-a\",\"u-ghost\"]')",
            [],
        )
        .expect("failed to seed event");

        let details = current_round_details(&conn, "fe-1").expect("query failed");
        assert_eq!(details.users[0].username, "alice");
        assert_eq!(details.users[1].username, "");
        assert_eq!(details.current_turn.name, "alice");
    }

    #[test]
    fn round_details_missing_event_is_fatal() {
        let conn = setup_db();

        let err = current_round_details(&conn, "fe-none").unwrap_err();
        match err {
            FantasyError::NotFound(_) => {}
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn list_fantasy_users_returns_event_roster() {
        let conn = setup_db();
        seed_draft(&conn, 2);

        for (row_id, user) in [("fu-1", "u-b"), ("fu-2", "u-a")] {
            conn.execute(
                "INSERT INTO fantasy_users (id, event_id, user_id) VALUES (?1, 'fe-1', ?2)",
                params![row_id, user],
            )
            .expect("failed to register fantasy user");
        }

        let roster = list_fantasy_users(&conn, "fe-1").expect("query failed");
        let user_ids: Vec<&str> = roster.iter().map(|u| u.user_id.as_str()).collect();
        assert_eq!(user_ids, vec!["u-b", "u-a"]);

        assert!(list_fantasy_users(&conn, "fe-other")
            .expect("query failed")
            .is_empty());
    }

    #[test]
    fn predictions_by_user_groups_in_creation_order() {
        let conn = setup_db();
        seed_draft(&conn, 2);

        for (participant, user, position) in
            [("p-1", "u-a", 3), ("p-2", "u-b", 1), ("p-3", "u-a", 7)]
        {
            create_prediction(
                &conn,
                &CreatePredictionParams {
                    event_id: "fe-1".to_string(),
                    user_id: user.to_string(),
                    participant_id: participant.to_string(),
                    position,
                },
            )
            .expect("pick failed");
        }

        let by_user = predictions_by_user(&conn, "fe-1").expect("query failed");
        assert_eq!(by_user.len(), 2);
        let alice: Vec<&str> = by_user["u-a"]
            .iter()
            .map(|p| p.participant_id.as_str())
            .collect();
        assert_eq!(alice, vec!["p-1", "p-3"]);
        assert_eq!(by_user["u-b"][0].position, 1);
    }
}
