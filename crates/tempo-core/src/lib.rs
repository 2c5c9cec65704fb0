//! Core library for the Tempo zoned-event tool.
//!
//! Tempo records calendar events as the wall-clock time the author
//! entered together with the IANA zone it was entered in, and derives a
//! UTC instant for sorting and range queries. The civil timestamp and
//! zone name are the source of truth; the UTC instant is an index that a
//! fresh conversion may legally disagree with after a zone-rule update.
//!
//! The crate is organized around that rule:
//!
//! - [`models`]: the record triple ([`models::ZonedEventRecord`]) and its
//!   display-facing views
//! - [`provider`]: the injected time-zone rule lookup seam
//! - [`reconciler`]: zone validation and civil↔UTC conversion, with
//!   explicit gap/fold tie-break policies
//! - [`workflow`]: the staged create/update pipeline that only ever hands
//!   persistence a consistent triple
//! - [`db`]: SQLite storage that reads and writes the triple verbatim
//! - [`tempo`]: the async coordinator tying it all together
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil;
//! use tempo_core::{params::CreateEvent, TempoBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tempo = TempoBuilder::new()
//!     .with_database_path(Some("events.db"))
//!     .build()
//!     .await?;
//!
//! let event = tempo
//!     .create_event(&CreateEvent {
//!         title: "Team sync".to_string(),
//!         date: Some(civil::date(2025, 2, 7)),
//!         time: Some(civil::time(19, 0, 0, 0)),
//!         zone: Some("Europe/Berlin".to_string()),
//!     })
//!     .await?;
//!
//! // The stored wall-clock value is exactly what was entered.
//! assert_eq!(event.record.view().to_string(), "2025-02-07 19:00:00 Europe/Berlin");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod provider;
pub mod reconciler;
pub mod tempo;
pub mod workflow;

// Re-export commonly used types
pub use db::Database;
pub use display::{EventList, LocalStamp, OperationStatus};
pub use error::{AmbiguityKind, Result, TempoError};
pub use models::{
    CivilTimestamp, Event, EventFilter, ShiftedView, ZoneId, ZonedEventRecord, ZonedView,
};
pub use provider::{RuleProvider, StaticRuleProvider, SystemRuleProvider};
pub use reconciler::{DisambiguationPolicy, FoldPolicy, GapPolicy, Reconciler};
pub use tempo::{Tempo, TempoBuilder};
pub use workflow::{RawEventInput, ReconciledEvent};
