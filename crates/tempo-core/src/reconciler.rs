//! Civil-time/UTC reconciliation.
//!
//! The [`Reconciler`] owns the three conversions the rest of the system
//! is built on:
//!
//! 1. **Zone validation**: a raw string either resolves in the rule
//!    provider or is rejected at the input boundary.
//! 2. **Forward conversion** (civil → UTC): interpret a wall-clock value
//!    in a zone and derive the instant it denotes. Near DST transitions
//!    this mapping is not a bijection, so gaps and folds are surfaced as
//!    typed errors unless the caller passes an explicit
//!    [`DisambiguationPolicy`].
//! 3. **Reverse reconstruction**: the display value for a stored record
//!    is the stored civil timestamp relabeled with the stored zone,
//!    never the UTC instant shifted through some other zone. Shifting
//!    into a different zone is its own, explicitly lossy operation.
//!
//! The reconciler is pure over its inputs and the provider's current rule
//! snapshot. It holds no mutable state and caches nothing, so concurrent
//! callers need no coordination and a swapped tzdata snapshot takes
//! effect on the next call.

use jiff::tz::AmbiguousOffset;
use jiff::Timestamp;

use crate::{
    error::{AmbiguityKind, Result, TempoError},
    models::{CivilTimestamp, ZoneId, ZonedEventRecord, ZonedView},
    provider::{ProviderError, RuleProvider},
};

/// What to do with a civil time that falls in a spring-forward gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GapPolicy {
    /// Surface `AmbiguousCivilTime { kind: Nonexistent }` to the caller
    #[default]
    Reject,

    /// Shift forward past the gap by its length, keeping the pre-gap
    /// offset (02:30 in a 02:00..03:00 gap becomes 03:30 local)
    RoundForward,

    /// Shift backward before the gap by its length, keeping the
    /// post-gap offset
    RoundBackward,
}

/// What to do with a civil time repeated by a fall-back fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FoldPolicy {
    /// Surface `AmbiguousCivilTime { kind: DoubleMapped }` to the caller
    #[default]
    Reject,

    /// Pick the first occurrence (the pre-transition offset)
    Earlier,

    /// Pick the second occurrence (the post-transition offset)
    Later,
}

/// Tie-break policy for civil times that do not map uniquely onto UTC.
///
/// The default is strict on both axes: ambiguity is an error for the
/// caller to resolve. [`DisambiguationPolicy::recommended`] returns the
/// documented lenient choice (round gaps forward, take the earlier fold
/// occurrence); nothing in the core ever applies it implicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisambiguationPolicy {
    /// Handling for nonexistent (skipped) wall-clock values
    pub gap: GapPolicy,

    /// Handling for double-mapped (repeated) wall-clock values
    pub fold: FoldPolicy,
}

impl DisambiguationPolicy {
    /// Strict on both axes; identical to `Default`.
    pub const STRICT: Self = Self {
        gap: GapPolicy::Reject,
        fold: FoldPolicy::Reject,
    };

    /// The documented lenient defaults: gaps shift forward by their
    /// length, folds resolve to the earlier occurrence.
    pub const fn recommended() -> Self {
        Self {
            gap: GapPolicy::RoundForward,
            fold: FoldPolicy::Earlier,
        }
    }
}

/// Validates zone names and converts between civil and absolute time.
///
/// Generic over the [`RuleProvider`] so tests can pin a deterministic
/// rule set while production resolves against the live zone database.
#[derive(Debug, Clone)]
pub struct Reconciler<P> {
    provider: P,
}

impl<P: RuleProvider> Reconciler<P> {
    /// Creates a reconciler over the given rule provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Validates a raw zone name against the rule provider.
    ///
    /// # Errors
    ///
    /// Returns `TempoError::InvalidZoneIdentifier` for an empty or
    /// unresolvable name, and `TempoError::RuleProviderUnavailable` when
    /// the zone database itself cannot be consulted. The two are distinct
    /// on purpose: the first is the user's problem, the second is
    /// retryable.
    pub fn validate_zone(&self, raw: &str) -> Result<ZoneId> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(TempoError::InvalidZoneIdentifier {
                name: raw.to_string(),
            });
        }
        self.resolve(name)?;
        Ok(ZoneId::from_validated(name))
    }

    /// Converts a civil timestamp interpreted in `zone` to a UTC instant,
    /// strictly.
    ///
    /// A wall-clock value skipped or repeated by a DST transition fails
    /// with `TempoError::AmbiguousCivilTime` carrying the kind and both
    /// candidate offsets; nothing is rounded or picked silently. Use
    /// [`Reconciler::to_utc_with`] to apply an explicit policy.
    pub fn to_utc(&self, civil: CivilTimestamp, zone: &ZoneId) -> Result<Timestamp> {
        self.to_utc_with(civil, zone, DisambiguationPolicy::STRICT)
    }

    /// Converts a civil timestamp to a UTC instant under an explicit
    /// tie-break policy.
    ///
    /// The conversion is a pure function of its inputs and the provider's
    /// current rule snapshot; the provider is re-queried on every call.
    pub fn to_utc_with(
        &self,
        civil: CivilTimestamp,
        zone: &ZoneId,
        policy: DisambiguationPolicy,
    ) -> Result<Timestamp> {
        let tz = self.resolve(zone.as_str())?;
        let dt = civil.datetime();

        let offset = match tz.to_ambiguous_timestamp(dt).offset() {
            AmbiguousOffset::Unambiguous { offset } => offset,
            AmbiguousOffset::Gap { before, after } => match policy.gap {
                GapPolicy::Reject => {
                    return Err(TempoError::AmbiguousCivilTime {
                        civil,
                        zone: zone.clone(),
                        kind: AmbiguityKind::Nonexistent { before, after },
                    })
                }
                // Interpreting the skipped value with the pre-gap offset
                // lands on the first instant after the gap.
                GapPolicy::RoundForward => before,
                GapPolicy::RoundBackward => after,
            },
            AmbiguousOffset::Fold { before, after } => match policy.fold {
                FoldPolicy::Reject => {
                    return Err(TempoError::AmbiguousCivilTime {
                        civil,
                        zone: zone.clone(),
                        kind: AmbiguityKind::DoubleMapped {
                            earlier: before,
                            later: after,
                        },
                    })
                }
                FoldPolicy::Earlier => before,
                FoldPolicy::Later => after,
            },
        };

        offset.to_timestamp(dt).map_err(|e| {
            TempoError::invalid_input("datetime", format!("Out of range: {e}"))
        })
    }

    /// Reconstructs the zone-aware display value of a stored record.
    ///
    /// This reapplies the stored zone label to the stored civil timestamp
    /// directly. The derived UTC instant plays no part, which is what
    /// guarantees the displayed wall-clock time equals what the author
    /// entered even after the zone's rules change.
    pub fn to_zoned_view(&self, record: &ZonedEventRecord) -> ZonedView {
        record.view()
    }

    /// Shifts a UTC instant into a target zone's wall-clock time.
    ///
    /// This answers "what time is this event for me in `target`" and is
    /// lossy with respect to the author's intent; render it only with a
    /// converted label, never as the stored civil timestamp.
    pub fn shift_to_zone(&self, utc: Timestamp, target: &ZoneId) -> Result<CivilTimestamp> {
        let tz = self.resolve(target.as_str())?;
        Ok(CivilTimestamp::from(tz.to_datetime(utc)))
    }

    fn resolve(&self, name: &str) -> Result<jiff::tz::TimeZone> {
        self.provider.resolve(name).map_err(|e| match e {
            ProviderError::NotFound => TempoError::InvalidZoneIdentifier {
                name: name.to_string(),
            },
            ProviderError::Unavailable { message } => {
                TempoError::RuleProviderUnavailable { message }
            }
        })
    }
}
