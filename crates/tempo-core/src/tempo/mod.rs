//! High-level coordinator API for managing zoned events.
//!
//! [`Tempo`] wires the pieces together: every write goes through the
//! reconciliation workflow (zone validation, then UTC derivation) before
//! anything touches the database, and every read hands back stored fields
//! verbatim. The coordinator holds a database path and a disambiguation
//! policy; each operation opens its own connection inside
//! `spawn_blocking`, so the coordinator itself stays `Send + Sync` and
//! trivially shareable.
//!
//! # Usage
//!
//! ```rust,no_run
//! use jiff::civil;
//! use tempo_core::{params::CreateEvent, TempoBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tempo = TempoBuilder::new().build().await?;
//!
//! let event = tempo
//!     .create_event(&CreateEvent {
//!         title: "Team sync".to_string(),
//!         date: Some(civil::date(2025, 2, 7)),
//!         time: Some(civil::time(19, 0, 0, 0)),
//!         zone: Some("Europe/Berlin".to_string()),
//!     })
//!     .await?;
//! println!("{event}");
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use crate::reconciler::DisambiguationPolicy;

pub mod builder;
pub mod ops;

pub use builder::TempoBuilder;

/// Main coordinator for creating, querying, and updating zoned events.
pub struct Tempo {
    pub(crate) db_path: PathBuf,
    pub(crate) policy: DisambiguationPolicy,
}

impl Tempo {
    /// Creates a new coordinator over the given database path and policy.
    pub(crate) fn new(db_path: PathBuf, policy: DisambiguationPolicy) -> Self {
        Self { db_path, policy }
    }
}
