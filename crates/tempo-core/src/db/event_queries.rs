//! Event CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result, TempoError},
    models::{CivilTimestamp, Event, EventFilter, ZoneId, ZonedEventRecord},
    workflow::ReconciledEvent,
};

const INSERT_EVENT_SQL: &str = "INSERT INTO events (title, civil_datetime, zone, utc_micros, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_EVENT_SQL: &str = "SELECT id, title, civil_datetime, zone, utc_micros, created_at, updated_at FROM events WHERE id = ?1";
const SELECT_EVENTS_SQL: &str =
    "SELECT id, title, civil_datetime, zone, utc_micros, created_at, updated_at FROM events";
const UPDATE_EVENT_SQL: &str = "UPDATE events SET title = ?1, civil_datetime = ?2, zone = ?3, utc_micros = ?4, updated_at = ?5 WHERE id = ?6";
const DELETE_EVENT_SQL: &str = "DELETE FROM events WHERE id = ?1";

impl super::Database {
    /// Helper function to construct an Event from a database row.
    fn build_event_from_row(row: &rusqlite::Row) -> rusqlite::Result<Event> {
        let civil: CivilTimestamp = row
            .get::<_, String>(2)?
            .parse::<jiff::civil::DateTime>()
            .map(Into::into)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;

        let utc = Timestamp::from_microsecond(row.get::<_, i64>(4)?)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Integer, Box::new(e)))?;

        Ok(Event {
            id: row.get::<_, i64>(0)? as u64,
            title: row.get(1)?,
            record: ZonedEventRecord {
                civil,
                zone: ZoneId::from_validated(row.get::<_, String>(3)?),
                utc,
            },
            created_at: row.get::<_, String>(5)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
            })?,
            updated_at: row.get::<_, String>(6)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
            })?,
        })
    }

    /// Persists a reconciled event and returns the stored row.
    pub fn create_event(&mut self, event: &ReconciledEvent) -> Result<Event> {
        let now = Timestamp::now();
        self.connection
            .execute(
                INSERT_EVENT_SQL,
                params![
                    event.title,
                    event.record.civil.datetime().to_string(),
                    event.record.zone.as_str(),
                    event.record.utc.as_microsecond(),
                    now.to_string(),
                    now.to_string(),
                ],
            )
            .db_context("Failed to insert event")?;

        let id = self.connection.last_insert_rowid() as u64;
        Ok(Event {
            id,
            title: event.title.clone(),
            record: event.record.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves an event by its ID.
    pub fn get_event(&self, id: u64) -> Result<Option<Event>> {
        self.connection
            .query_row(SELECT_EVENT_SQL, params![id as i64], Self::build_event_from_row)
            .optional()
            .db_context("Failed to query event")
    }

    /// Lists events ordered by the derived UTC index, optionally bounded.
    pub fn list_events(&self, filter: Option<&EventFilter>) -> Result<Vec<Event>> {
        let mut sql = String::from(SELECT_EVENTS_SQL);
        let mut clauses: Vec<&str> = Vec::new();
        let mut args: Vec<i64> = Vec::new();

        if let Some(filter) = filter {
            if let Some(after) = filter.starts_after {
                clauses.push("utc_micros >= ?");
                args.push(after.as_microsecond());
            }
            if let Some(before) = filter.starts_before {
                clauses.push("utc_micros < ?");
                args.push(before.as_microsecond());
            }
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY utc_micros, id");

        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare event list query")?;
        let events = stmt
            .query_map(rusqlite::params_from_iter(args), Self::build_event_from_row)
            .db_context("Failed to query events")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read event rows")?;

        Ok(events)
    }

    /// Replaces an event with a freshly reconciled one.
    ///
    /// The whole triple is written together; there is no path that
    /// patches the UTC instant independently of the civil timestamp and
    /// zone it was derived from.
    pub fn update_event(&mut self, id: u64, event: &ReconciledEvent) -> Result<Event> {
        let now = Timestamp::now();
        let changed = self
            .connection
            .execute(
                UPDATE_EVENT_SQL,
                params![
                    event.title,
                    event.record.civil.datetime().to_string(),
                    event.record.zone.as_str(),
                    event.record.utc.as_microsecond(),
                    now.to_string(),
                    id as i64,
                ],
            )
            .db_context("Failed to update event")?;

        if changed == 0 {
            return Err(TempoError::EventNotFound { id });
        }
        self.get_event(id)?.ok_or(TempoError::EventNotFound { id })
    }

    /// Deletes an event by its ID.
    pub fn delete_event(&mut self, id: u64) -> Result<()> {
        let changed = self
            .connection
            .execute(DELETE_EVENT_SQL, params![id as i64])
            .db_context("Failed to delete event")?;

        if changed == 0 {
            return Err(TempoError::EventNotFound { id });
        }
        Ok(())
    }
}
