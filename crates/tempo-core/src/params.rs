//! Parameter structures for tempo operations.
//!
//! These are the interface-agnostic inputs the coordinator accepts. The
//! CLI builds them from clap arguments; any future interface would build
//! the same structs from its own framework types, keeping framework
//! derives out of the core.

use jiff::{civil, Timestamp};
use serde::{Deserialize, Serialize};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the event to operate on
    pub id: u64,
}

/// Parameters for creating a new event.
///
/// Date, time, and zone are optional here so that absence reaches the
/// workflow as a `MissingField` error rather than being swallowed by the
/// interface layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateEvent {
    /// Title of the event (required)
    pub title: String,

    /// Calendar date of the event
    pub date: Option<civil::Date>,

    /// Wall-clock time of the event
    pub time: Option<civil::Time>,

    /// IANA zone name the date and time were entered in
    pub zone: Option<String>,
}

/// Parameters for updating an existing event.
///
/// Unset fields keep their stored values. Any change re-runs the full
/// reconciliation pipeline and re-derives the UTC instant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEvent {
    /// The ID of the event to update
    pub id: u64,

    /// New title, if changing
    pub title: Option<String>,

    /// New calendar date, if changing
    pub date: Option<civil::Date>,

    /// New wall-clock time, if changing
    pub time: Option<civil::Time>,

    /// New zone name, if changing
    pub zone: Option<String>,
}

/// Parameters for listing events, optionally bounded by UTC instants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListEvents {
    /// Only events at or after this instant
    pub from: Option<Timestamp>,

    /// Only events strictly before this instant
    pub to: Option<Timestamp>,
}

/// Parameters for viewing an event's time in a different zone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShiftEvent {
    /// The ID of the event to shift
    pub id: u64,

    /// Target zone name
    pub zone: String,
}
