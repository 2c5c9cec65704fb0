//! Event operations for the Tempo coordinator.

use tokio::task;

use super::Tempo;
use crate::{
    db::Database,
    error::{Result, TempoError},
    models::{Event, EventFilter, ShiftedView, ZoneId, ZonedView},
    params::{CreateEvent, Id, ListEvents, ShiftEvent, UpdateEvent},
    provider::SystemRuleProvider,
    reconciler::Reconciler,
    workflow::{self, RawEventInput},
};

impl Tempo {
    /// Creates a new event by running the full reconciliation pipeline
    /// and persisting the result.
    ///
    /// Nothing is written unless zone validation and UTC derivation both
    /// succeed; a rejected input leaves the store untouched.
    pub async fn create_event(&self, params: &CreateEvent) -> Result<Event> {
        let db_path = self.db_path.clone();
        let policy = self.policy;
        let input = RawEventInput {
            title: Some(params.title.clone()),
            date: params.date,
            time: params.time,
            zone: params.zone.clone(),
        };

        task::spawn_blocking(move || {
            let reconciler = Reconciler::new(SystemRuleProvider);
            let reconciled = workflow::reconcile(input, &reconciler, policy)?;
            let mut db = Database::new(&db_path)?;
            db.create_event(&reconciled)
        })
        .await
        .map_err(|e| TempoError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves an event by its ID.
    pub async fn get_event(&self, params: &Id) -> Result<Option<Event>> {
        let db_path = self.db_path.clone();
        let event_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_event(event_id)
        })
        .await
        .map_err(|e| TempoError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists events ordered by the derived UTC index.
    pub async fn list_events(&self, params: &ListEvents) -> Result<Vec<Event>> {
        let db_path = self.db_path.clone();
        let filter = EventFilter {
            starts_after: params.from,
            starts_before: params.to,
        };

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_events(Some(&filter))
        })
        .await
        .map_err(|e| TempoError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Updates an event by merging changes over its stored fields and
    /// re-running the full pipeline.
    ///
    /// The UTC instant is always re-derived from the merged civil
    /// timestamp and zone; it is never patched on its own.
    pub async fn update_event(&self, params: &UpdateEvent) -> Result<Event> {
        let db_path = self.db_path.clone();
        let policy = self.policy;
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let existing = db
                .get_event(params.id)?
                .ok_or(TempoError::EventNotFound { id: params.id })?;

            let reconciler = Reconciler::new(SystemRuleProvider);
            let input = RawEventInput::merged(&existing, &params);
            let reconciled = workflow::reconcile(input, &reconciler, policy)?;
            db.update_event(params.id, &reconciled)
        })
        .await
        .map_err(|e| TempoError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Deletes an event by its ID.
    pub async fn delete_event(&self, params: &Id) -> Result<()> {
        let db_path = self.db_path.clone();
        let event_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_event(event_id)
        })
        .await
        .map_err(|e| TempoError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Reconstructs the zone-aware display value of a stored event.
    ///
    /// This reapplies the stored zone to the stored civil timestamp and
    /// deliberately ignores the UTC field.
    pub async fn view_event(&self, params: &Id) -> Result<Option<ZonedView>> {
        let event = self.get_event(params).await?;
        Ok(event.map(|e| e.record.view()))
    }

    /// Shifts an event's derived UTC instant into another zone.
    ///
    /// The result is lossy with respect to the author's intent and is
    /// rendered with a converted label.
    pub async fn shift_event(&self, params: &ShiftEvent) -> Result<ShiftedView> {
        let event = self
            .get_event(&Id { id: params.id })
            .await?
            .ok_or(TempoError::EventNotFound { id: params.id })?;

        let reconciler = Reconciler::new(SystemRuleProvider);
        let target = reconciler.validate_zone(&params.zone)?;
        let civil = reconciler.shift_to_zone(event.record.utc, &target)?;
        Ok(ShiftedView { civil, zone: target })
    }

    /// Validates a zone name against the live rule database.
    pub fn check_zone(&self, name: &str) -> Result<ZoneId> {
        Reconciler::new(SystemRuleProvider).validate_zone(name)
    }
}
