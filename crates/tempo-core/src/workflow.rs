//! The create/update pipeline: `RawInput -> ZoneValidated -> UtcDerived`.
//!
//! Each stage is its own type, so a [`ReconciledEvent`] can only exist
//! once the zone resolved and the UTC instant was derived from the civil
//! timestamp and zone together. Persistence receives the finished value
//! or nothing; there is no state in which a stored UTC instant is stale
//! relative to the pair it was derived from.
//!
//! Updates go through the same pipeline: the stored event's fields merge
//! with the requested changes into a fresh [`RawEventInput`], and the UTC
//! instant is always re-derived, never patched on its own.

use crate::{
    error::{Result, TempoError},
    models::{CivilTimestamp, Event, ZoneId, ZonedEventRecord},
    params::UpdateEvent,
    provider::RuleProvider,
    reconciler::{DisambiguationPolicy, Reconciler},
};

use jiff::civil;

/// Unvalidated input fields, as collected by a caller.
///
/// Parsing user-facing date formats is the presentation layer's concern;
/// by the time input reaches this type, date and time are already civil
/// structures and only presence and the zone name remain to be checked.
#[derive(Debug, Clone, Default)]
pub struct RawEventInput {
    /// Event title
    pub title: Option<String>,

    /// Calendar date of the event
    pub date: Option<civil::Date>,

    /// Wall-clock time of the event
    pub time: Option<civil::Time>,

    /// Raw zone name as supplied
    pub zone: Option<String>,
}

impl RawEventInput {
    /// Builds the input for an update by merging requested changes over a
    /// stored event's current fields.
    ///
    /// Every field is re-validated and the UTC instant re-derived even
    /// when only the title changed; re-running the pipeline is what keeps
    /// the record triple consistent.
    pub fn merged(event: &Event, params: &UpdateEvent) -> Self {
        Self {
            title: params.title.clone().or_else(|| Some(event.title.clone())),
            date: Some(params.date.unwrap_or_else(|| event.record.civil.date())),
            time: Some(params.time.unwrap_or_else(|| event.record.civil.time())),
            zone: Some(
                params
                    .zone
                    .clone()
                    .unwrap_or_else(|| event.record.zone.as_str().to_string()),
            ),
        }
    }

    /// First transition: presence checks and zone validation.
    ///
    /// # Errors
    ///
    /// `TempoError::MissingField` for an absent title, date, time, or
    /// zone; `TempoError::InvalidZoneIdentifier` or
    /// `TempoError::RuleProviderUnavailable` from zone validation.
    pub fn validate<P: RuleProvider>(self, reconciler: &Reconciler<P>) -> Result<ZoneValidated> {
        let title = self.title.ok_or(TempoError::MissingField { field: "title" })?;
        let date = self.date.ok_or(TempoError::MissingField { field: "date" })?;
        let time = self.time.ok_or(TempoError::MissingField { field: "time" })?;
        let zone = self.zone.ok_or(TempoError::MissingField { field: "zone" })?;

        let zone = reconciler.validate_zone(&zone)?;
        Ok(ZoneValidated {
            title,
            civil: CivilTimestamp::new(date, time),
            zone,
        })
    }
}

/// Input whose zone resolved and whose civil timestamp is fully
/// specified; only the UTC derivation remains.
#[derive(Debug, Clone)]
pub struct ZoneValidated {
    /// Event title
    pub title: String,

    /// Wall-clock time as entered
    pub civil: CivilTimestamp,

    /// Validated zone identifier
    pub zone: ZoneId,
}

impl ZoneValidated {
    /// Second transition: derive the UTC instant under the given policy.
    ///
    /// # Errors
    ///
    /// `TempoError::AmbiguousCivilTime` when the civil timestamp falls in
    /// a gap or fold the policy does not resolve.
    pub fn derive_utc<P: RuleProvider>(
        self,
        reconciler: &Reconciler<P>,
        policy: DisambiguationPolicy,
    ) -> Result<ReconciledEvent> {
        let utc = reconciler.to_utc_with(self.civil, &self.zone, policy)?;
        Ok(ReconciledEvent {
            title: self.title,
            record: ZonedEventRecord {
                civil: self.civil,
                zone: self.zone,
                utc,
            },
        })
    }
}

/// A fully reconciled event, ready to hand to persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciledEvent {
    /// Event title
    pub title: String,

    /// The consistent (civil, zone, utc) triple
    pub record: ZonedEventRecord,
}

/// Runs the whole pipeline in one call.
pub fn reconcile<P: RuleProvider>(
    input: RawEventInput,
    reconciler: &Reconciler<P>,
    policy: DisambiguationPolicy,
) -> Result<ReconciledEvent> {
    input.validate(reconciler)?.derive_utc(reconciler, policy)
}

#[cfg(test)]
mod tests {
    use jiff::civil;
    use jiff::Timestamp;

    use super::*;
    use crate::provider::SystemRuleProvider;

    fn berlin_input() -> RawEventInput {
        RawEventInput {
            title: Some("Team sync".to_string()),
            date: Some(civil::date(2025, 2, 7)),
            time: Some(civil::time(19, 0, 0, 0)),
            zone: Some("Europe/Berlin".to_string()),
        }
    }

    fn reconciler() -> Reconciler<SystemRuleProvider> {
        Reconciler::new(SystemRuleProvider)
    }

    #[test]
    fn test_reconcile_produces_consistent_record() {
        let event = reconcile(berlin_input(), &reconciler(), DisambiguationPolicy::STRICT)
            .expect("unambiguous winter time");

        assert_eq!(event.title, "Team sync");
        assert_eq!(event.record.civil.to_string(), "2025-02-07 19:00:00");
        assert_eq!(event.record.zone.as_str(), "Europe/Berlin");
        assert_eq!(
            event.record.utc,
            "2025-02-07T18:00:00Z".parse::<Timestamp>().unwrap()
        );
    }

    #[test]
    fn test_missing_fields_are_reported_by_name() {
        for (field, input) in [
            ("title", RawEventInput { title: None, ..berlin_input() }),
            ("date", RawEventInput { date: None, ..berlin_input() }),
            ("time", RawEventInput { time: None, ..berlin_input() }),
            ("zone", RawEventInput { zone: None, ..berlin_input() }),
        ] {
            let err = reconcile(input, &reconciler(), DisambiguationPolicy::STRICT).unwrap_err();
            assert!(
                matches!(err, TempoError::MissingField { field: f } if f == field),
                "expected missing {field}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_invalid_zone_rejects_before_derivation() {
        let input = RawEventInput {
            zone: Some("Not/AZone".to_string()),
            ..berlin_input()
        };
        let err = reconcile(input, &reconciler(), DisambiguationPolicy::STRICT).unwrap_err();
        assert!(matches!(err, TempoError::InvalidZoneIdentifier { .. }));
    }

    #[test]
    fn test_gap_rejected_under_strict_policy() {
        let input = RawEventInput {
            date: Some(civil::date(2025, 3, 30)),
            time: Some(civil::time(2, 30, 0, 0)),
            ..berlin_input()
        };
        let err = reconcile(input, &reconciler(), DisambiguationPolicy::STRICT).unwrap_err();
        assert!(matches!(err, TempoError::AmbiguousCivilTime { .. }));
    }

    #[test]
    fn test_gap_resolved_under_recommended_policy() {
        let input = RawEventInput {
            date: Some(civil::date(2025, 3, 30)),
            time: Some(civil::time(2, 30, 0, 0)),
            ..berlin_input()
        };
        let event = reconcile(input, &reconciler(), DisambiguationPolicy::recommended())
            .expect("gap rounds forward");
        assert_eq!(
            event.record.utc,
            "2025-03-30T01:30:00Z".parse::<Timestamp>().unwrap()
        );
        // The civil timestamp stays exactly as entered; only the derived
        // instant reflects the rounding.
        assert_eq!(event.record.civil.to_string(), "2025-03-30 02:30:00");
    }

    #[test]
    fn test_merged_update_rederives_utc() {
        let reconciler = reconciler();
        let created = reconcile(berlin_input(), &reconciler, DisambiguationPolicy::STRICT).unwrap();
        let event = Event {
            id: 1,
            title: created.title,
            record: created.record,
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        };

        // Move the event into summer; the zone and time keep their stored
        // values, the instant must shift with the rules.
        let params = UpdateEvent {
            id: 1,
            title: None,
            date: Some(civil::date(2025, 7, 7)),
            time: None,
            zone: None,
        };
        let merged = RawEventInput::merged(&event, &params);
        let updated = reconcile(merged, &reconciler, DisambiguationPolicy::STRICT).unwrap();

        assert_eq!(updated.title, "Team sync");
        assert_eq!(updated.record.zone.as_str(), "Europe/Berlin");
        assert_eq!(
            updated.record.utc,
            "2025-07-07T17:00:00Z".parse::<Timestamp>().unwrap()
        );
    }
}
