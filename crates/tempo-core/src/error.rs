//! Error types for the event reconciliation library.

use std::path::PathBuf;

use jiff::tz::Offset;
use thiserror::Error;

use crate::models::{CivilTimestamp, ZoneId};

/// How a civil timestamp failed to map uniquely onto the UTC axis.
///
/// Near a daylight-saving transition the civil-to-UTC mapping is not a
/// bijection: a forward jump removes a range of wall-clock values and a
/// backward jump repeats one. Callers branch on the kind to apply distinct
/// policy (or prompt the user), so this is a tagged value rather than a
/// message string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmbiguityKind {
    /// The wall-clock value was skipped entirely by a forward transition.
    ///
    /// `before` and `after` are the offsets in effect on either side of
    /// the gap.
    Nonexistent { before: Offset, after: Offset },

    /// The wall-clock value occurs twice due to a backward transition.
    ///
    /// `earlier` is the offset of the first occurrence, `later` of the
    /// second.
    DoubleMapped { earlier: Offset, later: Offset },
}

impl AmbiguityKind {
    /// Short label used in error messages and CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            AmbiguityKind::Nonexistent { .. } => "nonexistent",
            AmbiguityKind::DoubleMapped { .. } => "double-mapped",
        }
    }
}

/// Comprehensive error type for all tempo operations.
#[derive(Error, Debug)]
pub enum TempoError {
    /// Zone name is empty or does not resolve in the rule provider
    #[error("Unknown time zone identifier: '{name}'")]
    InvalidZoneIdentifier { name: String },

    /// Required civil date/time or zone field absent from input
    #[error("Missing required field '{field}'")]
    MissingField { field: &'static str },

    /// Civil timestamp does not map uniquely to UTC in the given zone
    #[error("Civil time {civil} is {} in zone {zone}", kind.as_str())]
    AmbiguousCivilTime {
        civil: CivilTimestamp,
        zone: ZoneId,
        kind: AmbiguityKind,
    },

    /// The zone database could not be consulted at all; retryable,
    /// distinct from an unknown identifier
    #[error("Time zone rule provider unavailable: {message}")]
    RuleProviderUnavailable { message: String },

    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    /// Event not found for the given ID
    #[error("Event with ID {id} not found")]
    EventNotFound { id: u64 },

    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },

    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },

    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl TempoError {
    /// Creates a database error with additional context.
    pub fn database(message: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Creates an input validation error for a field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TempoError::database(message, e))
    }
}

/// Result type alias for tempo operations
pub type Result<T> = std::result::Result<T, TempoError>;
