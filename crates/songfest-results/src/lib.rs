//! Voting results queries for the Songfest platform.
//!
//! Aggregates the append-only vote rows into a per-participant leaderboard
//! and lists the voting events themselves. These are read-only display
//! queries: a referenced row that is missing yields a default value (zero
//! points, empty flag) rather than an error.

use rusqlite::{Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use songfest_types::Event;
use std::collections::HashMap;
use thiserror::Error;

mod flags;

pub use flags::flag_emoji;

/// Errors that can occur during results queries.
#[derive(Debug, Error)]
pub enum ResultsError {
    /// The underlying store reported an error. Propagated verbatim.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// One leaderboard row of the results table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResultRow {
    /// Flag emoji for the participant's country, empty if unresolved.
    pub flag: String,
    pub country: String,
    pub artist: String,
    pub song: String,
    /// Sum of all vote points for the participant in this event.
    pub points: i64,
}

/// Lists all voting events.
pub fn list_events(conn: &Connection) -> Result<Vec<Event>, ResultsError> {
    let mut stmt = conn.prepare("SELECT id, title, year, active, created_at FROM events")?;

    let rows = stmt.query_map([], |row| {
        Ok(Event {
            id: row.get(0)?,
            title: row.get(1)?,
            year: row.get(2)?,
            active: row.get(3)?,
            created_at: row.get(4)?,
        })
    })?;

    let mut events = Vec::new();
    for row in rows {
        events.push(row?);
    }
    Ok(events)
}

/// Builds the leaderboard for a voting event.
///
/// Loads the event's registered participants, their detail rows, and every
/// vote for the event; sums each participant's vote points (zero when no
/// vote references them) and sorts strictly descending by points. The sort
/// is stable, so ties keep their registration order. An event with no
/// registered participants short-circuits to an empty list.
pub fn load_table_data(conn: &Connection, event_id: &str) -> Result<Vec<ResultRow>, ResultsError> {
    // 1. Participants registered for this event.
    let mut stmt = conn.prepare(
        "SELECT participant_id FROM event_participants
         WHERE event_id = ?1 ORDER BY running_order ASC, rowid ASC",
    )?;
    let ids: Vec<String> = stmt
        .query_map([event_id], |row| row.get(0))?
        .collect::<Result<_, _>>()?;
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    // 2. Vote totals, keyed by participant.
    let mut stmt = conn.prepare(
        "SELECT participant_id, points FROM votes
         WHERE event_id = ?1 AND participant_id IS NOT NULL",
    )?;
    let mut totals: HashMap<String, i64> = HashMap::new();
    let vote_rows = stmt.query_map([event_id], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;
    for row in vote_rows {
        let (participant_id, points) = row?;
        *totals.entry(participant_id).or_insert(0) += points;
    }

    // 3. Detail per participant; a registration without a detail row is
    // dropped from the table.
    let mut stmt =
        conn.prepare("SELECT country, artist, song FROM participants WHERE id = ?1")?;
    let mut table = Vec::with_capacity(ids.len());
    for id in &ids {
        let detail: Option<(Option<String>, Option<String>, Option<String>)> = stmt
            .query_row([id], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))
            .optional()?;
        let Some((country, artist, song)) = detail else {
            continue;
        };

        let country = country.unwrap_or_default();
        table.push(ResultRow {
            flag: flag_emoji(&country).to_string(),
            country,
            artist: artist.unwrap_or_default(),
            song: song.unwrap_or_default(),
            points: totals.get(id).copied().unwrap_or(0),
        });
    }

    // Stable sort: ties keep their relative order, no secondary key.
    table.sort_by(|a, b| b.points.cmp(&a.points));

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::params;
    use songfest_db::run_migrations;

    fn setup_db() -> Connection {
        let conn = Connection::open_in_memory().expect("failed to open in-memory db");
        run_migrations(&conn).expect("failed to run migrations");

        conn.execute_batch(
            "INSERT INTO events (id, title, year, active) VALUES ('e-1', 'Grand Final', 2025, 1);
             INSERT INTO public_users (id, username) VALUES ('u-1', 'alice');
             INSERT INTO participants (id, country, artist, song)
                 VALUES ('p-1', 'Sweden', 'Astra', 'Norrsken');
             INSERT INTO participants (id, country, artist, song)
                 VALUES ('p-2', 'Italy', 'Volta', 'Fiamma');
             INSERT INTO participants (id, country, artist, song)
                 VALUES ('p-3', 'Finland', 'Kuura', 'Routa');
             INSERT INTO event_participants (id, event_id, participant_id, running_order)
                 VALUES ('ep-1', 'e-1', 'p-1', 1);
             INSERT INTO event_participants (id, event_id, participant_id, running_order)
                 VALUES ('ep-2', 'e-1', 'p-2', 2);
             INSERT INTO event_participants (id, event_id, participant_id, running_order)
                 VALUES ('ep-3', 'e-1', 'p-3', 3);",
        )
        .expect("failed to seed base rows");
        conn
    }

    fn seed_vote(conn: &Connection, id: &str, participant: &str, points: i64) {
        conn.execute(
            "INSERT INTO votes (id, user_id, event_id, participant_id, points)
             VALUES (?1, 'u-1', 'e-1', ?2, ?3)",
            params![id, participant, points],
        )
        .expect("failed to seed vote");
    }

    #[test]
    fn list_events_returns_seeded_event() {
        let conn = setup_db();

        let events = list_events(&conn).expect("query failed");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Grand Final");
        assert_eq!(events[0].year, 2025);
        assert!(events[0].active);
    }

    #[test]
    fn leaderboard_sorted_descending_with_zero_fill() {
        let conn = setup_db();
        seed_vote(&conn, "v-1", "p-2", 12);
        seed_vote(&conn, "v-2", "p-1", 8);
        seed_vote(&conn, "v-3", "p-2", 10);

        let table = load_table_data(&conn, "e-1").expect("query failed");
        let summary: Vec<(&str, i64)> = table
            .iter()
            .map(|r| (r.country.as_str(), r.points))
            .collect();

        // p-3 got no votes but still appears, with zero points.
        assert_eq!(
            summary,
            vec![("Italy", 22), ("Sweden", 8), ("Finland", 0)]
        );
        assert_eq!(table[0].flag, "🇮🇹");
        assert_eq!(table[0].artist, "Volta");
        assert_eq!(table[0].song, "Fiamma");
    }

    #[test]
    fn ties_keep_running_order() {
        let conn = setup_db();
        seed_vote(&conn, "v-1", "p-1", 5);
        seed_vote(&conn, "v-2", "p-3", 5);

        let table = load_table_data(&conn, "e-1").expect("query failed");
        let countries: Vec<&str> = table.iter().map(|r| r.country.as_str()).collect();
        assert_eq!(countries, vec!["Sweden", "Finland", "Italy"]);
    }

    #[test]
    fn no_registered_participants_short_circuits_to_empty() {
        let conn = setup_db();
        conn.execute(
            "INSERT INTO events (id, title, year) VALUES ('e-2', 'Semi Final', 2025)",
            [],
        )
        .expect("failed to seed second event");

        let table = load_table_data(&conn, "e-2").expect("query failed");
        assert!(table.is_empty());
    }

    #[test]
    fn unresolved_country_gets_empty_flag() {
        let conn = setup_db();
        conn.execute_batch(
            "INSERT INTO participants (id, country, artist, song)
                 VALUES ('p-4', 'Atlantis', 'Nyx', 'Deep');
             INSERT INTO event_participants (id, event_id, participant_id, running_order)
                 VALUES ('ep-4', 'e-1', 'p-4', 4);",
        )
        .expect("failed to seed participant");

        let table = load_table_data(&conn, "e-1").expect("query failed");
        let atlantis = table
            .iter()
            .find(|r| r.country == "Atlantis")
            .expect("row missing");
        assert_eq!(atlantis.flag, "");
    }
}
