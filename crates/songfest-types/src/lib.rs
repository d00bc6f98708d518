//! Shared domain types for the Songfest platform.
//!
//! This crate provides the row types used across the Songfest crates: voting
//! events, participants, their per-event registration, users, and votes.
//!
//! No crate in the workspace depends on anything *except* `songfest-types`
//! for cross-cutting type definitions. This keeps the dependency graph clean
//! and prevents circular dependencies.

use serde::{Deserialize, Serialize};

/// A voting event (one contest edition).
///
/// Immutable after creation except for the `active` flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    /// Unique public ID for the event (UUID).
    pub id: String,
    /// Display title of the event.
    pub title: String,
    /// The contest year.
    pub year: i64,
    /// Whether the event is currently open for voting.
    pub active: bool,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
}

/// An act competing in one or more events.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Participant {
    /// Unique public ID for the participant (UUID).
    pub id: String,
    /// Country the act represents.
    pub country: Option<String>,
    /// Performing artist.
    pub artist: Option<String>,
    /// Song title.
    pub song: Option<String>,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
}

/// Registration of a participant in a specific event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventParticipant {
    /// Internal row ID (UUID).
    pub id: String,
    /// ID of the event.
    pub event_id: String,
    /// ID of the registered participant.
    pub participant_id: String,
    /// Stage running order within the event, if assigned.
    pub running_order: Option<i64>,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
}

/// A registered user visible to other users.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PublicUser {
    /// Unique public ID for the user (UUID).
    pub id: String,
    /// Display username.
    pub username: String,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
}

/// A scored vote cast by a user for a participant in an event.
///
/// Votes are append-only; they are aggregated, never mutated after insertion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vote {
    /// Internal row ID (UUID).
    pub id: String,
    /// ID of the voting user, if recorded.
    pub user_id: Option<String>,
    /// ID of the event the vote belongs to.
    pub event_id: Option<String>,
    /// ID of the participant the vote is for.
    pub participant_id: Option<String>,
    /// Points awarded by this vote.
    pub points: i64,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
}
