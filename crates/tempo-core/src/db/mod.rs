//! SQLite persistence for zoned event records.
//!
//! The store is a deliberately thin collaborator: it writes the record
//! triple verbatim and reads it back verbatim. It never derives or
//! overwrites individual fields; updates replace a whole reconciled
//! event produced by the workflow.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod event_queries;
pub mod migrations;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
