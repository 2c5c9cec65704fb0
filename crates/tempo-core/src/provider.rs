//! The time zone rule provider seam.
//!
//! Offset rules are global mutable state in most processes (the system
//! tzdata snapshot), so the lookup is modeled as an injected dependency
//! rather than an implicit global. Production code uses
//! [`SystemRuleProvider`]; tests substitute [`StaticRuleProvider`] with a
//! deterministic rule set, including swapped rule sets to simulate a
//! tzdata update.

use std::collections::HashMap;

use jiff::tz::TimeZone;
use thiserror::Error;

/// Why a zone name could not be resolved.
///
/// An unknown name and an unusable database are different failures: the
/// first is a validation error to surface to the user, the second is a
/// retryable environment problem. The two must never be conflated.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The name does not exist in the rule database
    #[error("time zone name not found")]
    NotFound,

    /// The rule database itself could not be consulted
    #[error("rule database unavailable: {message}")]
    Unavailable { message: String },
}

/// Resolves IANA zone names to their rule sets.
///
/// Implementations must not cache resolutions across calls: if the host
/// swaps in an updated tzdata snapshot, the next conversion has to see
/// it. Each `resolve` call is a fresh query.
pub trait RuleProvider: Send + Sync {
    /// Looks up the rules for a zone name.
    fn resolve(&self, name: &str) -> Result<TimeZone, ProviderError>;
}

/// Rule provider backed by jiff's process-wide zone database.
///
/// jiff manages the underlying snapshot; this type re-queries it on every
/// call and holds no state of its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRuleProvider;

impl RuleProvider for SystemRuleProvider {
    fn resolve(&self, name: &str) -> Result<TimeZone, ProviderError> {
        let db = jiff::tz::db();
        db.get(name).map_err(|e| {
            if db.is_definitively_empty() {
                ProviderError::Unavailable {
                    message: e.to_string(),
                }
            } else {
                ProviderError::NotFound
            }
        })
    }
}

/// Deterministic rule provider over a fixed name→zone map.
///
/// Intended for tests: rules never change underneath a given instance,
/// and constructing a second instance with different zones for the same
/// names simulates a rule database update.
#[derive(Debug, Clone, Default)]
pub struct StaticRuleProvider {
    zones: HashMap<String, TimeZone>,
}

impl StaticRuleProvider {
    /// Creates an empty provider; every lookup fails with `NotFound`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a zone under the given name.
    pub fn with(mut self, name: impl Into<String>, tz: TimeZone) -> Self {
        self.zones.insert(name.into(), tz);
        self
    }
}

impl RuleProvider for StaticRuleProvider {
    fn resolve(&self, name: &str) -> Result<TimeZone, ProviderError> {
        self.zones.get(name).cloned().ok_or(ProviderError::NotFound)
    }
}
