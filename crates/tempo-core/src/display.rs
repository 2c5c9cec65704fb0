//! Display wrapper types for formatting output.
//!
//! Domain models implement `Display` for their own markdown rendering;
//! the wrappers here add context around them: collection formatting with
//! empty-collection handling, operation confirmations, and a system-zone
//! formatter for bookkeeping timestamps.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

use crate::models::Event;

/// A wrapper around `Timestamp` that formats in the system time zone.
///
/// Used for row bookkeeping stamps (`created_at`/`updated_at`), which are
/// instants rather than authored wall-clock values and so are fair game
/// to render in whatever zone the terminal lives in. Format:
/// `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalStamp<'a>(pub &'a Timestamp);

impl fmt::Display for LocalStamp<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Newtype wrapper for displaying collections of events.
///
/// Formats each event in a compact one-line form, ordered as given
/// (callers list by the UTC index), and handles the empty collection
/// gracefully.
pub struct EventList(pub Vec<Event>);

impl EventList {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of events in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for EventList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No events found.");
        }

        writeln!(f, "# Events")?;
        writeln!(f)?;
        for event in &self.0 {
            writeln!(
                f,
                "- {}. **{}**: {}",
                event.id,
                event.title,
                event.record.view()
            )?;
        }
        Ok(())
    }
}

/// Wrapper type for displaying operation confirmation messages.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Error:" },
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil;

    use super::*;
    use crate::models::{CivilTimestamp, ZoneId, ZonedEventRecord};

    fn sample_event(id: u64, title: &str) -> Event {
        Event {
            id,
            title: title.to_string(),
            record: ZonedEventRecord {
                civil: CivilTimestamp::new(civil::date(2025, 2, 7), civil::time(19, 0, 0, 0)),
                zone: ZoneId::from_validated("Europe/Berlin"),
                utc: "2025-02-07T18:00:00Z".parse().unwrap(),
            },
            created_at: Timestamp::from_second(1640995200).unwrap(),
            updated_at: Timestamp::from_second(1640995200).unwrap(),
        }
    }

    #[test]
    fn test_event_list_empty() {
        let list = EventList(vec![]);
        assert!(list.is_empty());
        assert!(format!("{list}").contains("No events found."));
    }

    #[test]
    fn test_event_list_with_entries() {
        let list = EventList(vec![sample_event(1, "Team sync"), sample_event(2, "Review")]);
        let output = format!("{list}");

        assert_eq!(list.len(), 2);
        assert!(output.contains("# Events"));
        assert!(output.contains("- 1. **Team sync**: 2025-02-07 19:00:00 Europe/Berlin"));
        assert!(output.contains("- 2. **Review**"));
    }

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Event deleted".to_string());
        assert!(format!("{success}").contains("Success:"));

        let failure = OperationStatus::failure("Event not found".to_string());
        assert!(format!("{failure}").contains("Error:"));
    }

    #[test]
    fn test_local_stamp_shape() {
        let ts = Timestamp::from_second(1640995200).unwrap();
        let output = format!("{}", LocalStamp(&ts));

        let parts: Vec<&str> = output.split_whitespace().collect();
        assert_eq!(parts.len(), 3); // date, time, zone abbreviation
        assert!(parts[1].contains(':'));
    }
}
