//! Data models for zoned event records.
//!
//! The central idea: an event is stored as the wall-clock time its author
//! typed ([`CivilTimestamp`]) together with the IANA zone it was typed in
//! ([`ZoneId`]). A UTC instant is derived from that pair at write time and
//! kept alongside as a sort/range index, but it is never the source of
//! truth: if the zone's rules change under a tzdata update, the civil
//! timestamp and zone name still mean exactly what the author meant.
//!
//! [`ZonedEventRecord`] is the aggregate of those three fields and always
//! travels as a unit. [`Event`] wraps a record with the persistence
//! bookkeeping (ID, title, created/updated stamps) in the shape the
//! database hands out.
//!
//! # Examples
//!
//! ```rust
//! use tempo_core::models::{CivilTimestamp, ZonedEventRecord};
//! use jiff::civil;
//!
//! let civil = CivilTimestamp::new(civil::date(2025, 2, 7), civil::time(19, 0, 0, 0));
//! assert_eq!(civil.to_string(), "2025-02-07 19:00:00");
//! ```

use std::fmt;

use jiff::{civil, Timestamp};
use serde::{Deserialize, Serialize};

/// A calendar date and time-of-day with no attached offset or zone.
///
/// This is the value exactly as the author entered it. It is created once
/// from input and never mutated by conversion logic; in particular it is
/// never recomputed from a UTC instant, since that would bake the zone
/// rules in effect at recomputation time into the stored wall-clock value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CivilTimestamp(civil::DateTime);

impl CivilTimestamp {
    /// Builds a civil timestamp from a calendar date and a time-of-day.
    pub fn new(date: civil::Date, time: civil::Time) -> Self {
        Self(civil::DateTime::from_parts(date, time))
    }

    /// The underlying civil datetime.
    pub fn datetime(&self) -> civil::DateTime {
        self.0
    }

    /// The calendar date component.
    pub fn date(&self) -> civil::Date {
        self.0.date()
    }

    /// The time-of-day component.
    pub fn time(&self) -> civil::Time {
        self.0.time()
    }
}

impl From<civil::DateTime> for CivilTimestamp {
    fn from(datetime: civil::DateTime) -> Self {
        Self(datetime)
    }
}

impl fmt::Display for CivilTimestamp {
    /// Formats as `YYYY-MM-DD HH:MM:SS`, with fractional seconds appended
    /// only when present.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%Y-%m-%d %H:%M:%S%.f"))
    }
}

/// A validated IANA time zone name, e.g. `Europe/Berlin`.
///
/// The *name* of the region is stored rather than a numeric offset: the
/// offset for a named zone changes over time (DST, legal redefinitions),
/// and freezing one at write time would silently misplace the event when
/// the rules move. Values are produced by zone validation at the input
/// boundary; rows read back from the store are trusted as previously
/// validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneId(String);

impl ZoneId {
    /// Wraps a name that has already been resolved against the rule
    /// provider (or read back from trusted storage).
    pub(crate) fn from_validated(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The zone name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The persisted aggregate: civil timestamp, zone, and derived UTC instant.
///
/// All three fields travel together. `utc` is functionally derived from
/// `(civil, zone)` at write time and serves as the comparison and range
/// index; it must never be used to reconstruct the civil timestamp under a
/// *different* zone than the one stored. Explicit updates to `civil` or
/// `zone` re-derive `utc` through the full workflow, never patch it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZonedEventRecord {
    /// Wall-clock time exactly as entered
    pub civil: CivilTimestamp,

    /// Zone the wall-clock time was entered in
    pub zone: ZoneId,

    /// Derived UTC instant, consistent with `(civil, zone)` as of the
    /// rule snapshot at derivation time
    pub utc: Timestamp,
}

impl ZonedEventRecord {
    /// The zone-aware display value: the stored civil timestamp labeled
    /// with the stored zone.
    ///
    /// By construction this ignores the UTC field entirely, so the
    /// displayed wall-clock time equals what the author entered even if
    /// the zone's rules have changed since storage.
    pub fn view(&self) -> ZonedView {
        ZonedView {
            civil: self.civil,
            zone: self.zone.clone(),
        }
    }
}

/// A zone-aware view of a stored record, suitable for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZonedView {
    /// Wall-clock time as originally entered
    pub civil: CivilTimestamp,

    /// Zone label the wall-clock time belongs to
    pub zone: ZoneId,
}

impl fmt::Display for ZonedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.civil, self.zone)
    }
}

/// An event's local time shifted into a zone other than the stored one.
///
/// This is lossy with respect to the author's intent: it is computed from
/// the derived UTC instant, and the display marks it as converted so it is
/// never mistaken for the entered wall-clock time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftedView {
    /// Wall-clock time in the target zone
    pub civil: CivilTimestamp,

    /// The target zone the UTC instant was shifted into
    pub zone: ZoneId,
}

impl fmt::Display for ShiftedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} (converted)", self.civil, self.zone)
    }
}

/// A persisted event row: a titled [`ZonedEventRecord`] with bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier for the event
    pub id: u64,

    /// Title of the event
    pub title: String,

    /// The reconciled record: civil timestamp, zone, derived UTC instant
    #[serde(flatten)]
    pub record: ZonedEventRecord,

    /// Timestamp when the row was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the row was last modified (UTC)
    pub updated_at: Timestamp,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;
        writeln!(f, "- When: {}", self.record.view())?;
        writeln!(f, "- UTC: {}", self.record.utc)?;
        writeln!(f, "- Created: {}", crate::display::LocalStamp(&self.created_at))?;
        writeln!(f, "- Updated: {}", crate::display::LocalStamp(&self.updated_at))?;
        Ok(())
    }
}

/// Filter options for querying events.
///
/// Range bounds compare against the derived UTC index, which is exactly
/// what that field exists for.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Only events at or after this instant
    pub starts_after: Option<Timestamp>,

    /// Only events strictly before this instant
    pub starts_before: Option<Timestamp>,
}
