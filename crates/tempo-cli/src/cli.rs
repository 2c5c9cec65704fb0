//! Command handlers bridging clap arguments and the core coordinator.

use anyhow::{Context, Result};
use log::debug;
use tempo_core::{
    params::{CreateEvent, Id, ListEvents, ShiftEvent, UpdateEvent},
    EventList, OperationStatus, Tempo,
};

use crate::args::{AddArgs, IdArgs, ListArgs, ShiftArgs, ShowArgs, UpdateArgs, ZoneArgs};
use crate::renderer::TerminalRenderer;

/// CLI handler holding the coordinator and the output renderer.
pub struct Cli {
    tempo: Tempo,
    renderer: TerminalRenderer,
}

impl Cli {
    /// Creates a new CLI handler.
    pub fn new(tempo: Tempo, renderer: TerminalRenderer) -> Self {
        Self { tempo, renderer }
    }

    /// Records a new event: validation, UTC derivation, persistence.
    pub async fn add(&self, args: AddArgs) -> Result<()> {
        let params = CreateEvent {
            title: args.title,
            date: args.date,
            time: args.time,
            zone: args.zone,
        };
        let event = self
            .tempo
            .create_event(&params)
            .await
            .context("Failed to create event")?;

        debug!("created event {}", event.id);
        self.renderer
            .render(&format!("Created event with ID: {}\n\n{event}", event.id))
    }

    /// Lists events, optionally bounded by UTC instants.
    pub async fn list(&self, args: ListArgs) -> Result<()> {
        let params = ListEvents {
            from: args.from,
            to: args.to,
        };
        let events = self
            .tempo
            .list_events(&params)
            .await
            .context("Failed to list events")?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&events)?);
            return Ok(());
        }
        self.renderer.render(&EventList(events).to_string())
    }

    /// Shows a single event.
    pub async fn show(&self, args: ShowArgs) -> Result<()> {
        let event = self
            .tempo
            .get_event(&Id { id: args.id })
            .await
            .context("Failed to load event")?;

        match event {
            Some(event) if args.json => {
                println!("{}", serde_json::to_string_pretty(&event)?);
                Ok(())
            }
            Some(event) => self.renderer.render(&event.to_string()),
            None => {
                let status = OperationStatus::failure(format!("Event {} not found", args.id));
                self.renderer.render(&status.to_string())
            }
        }
    }

    /// Updates an event through the full reconciliation pipeline.
    pub async fn update(&self, args: UpdateArgs) -> Result<()> {
        let params = UpdateEvent {
            id: args.id,
            title: args.title,
            date: args.date,
            time: args.time,
            zone: args.zone,
        };
        let event = self
            .tempo
            .update_event(&params)
            .await
            .context("Failed to update event")?;

        self.renderer
            .render(&format!("Updated event {}\n\n{event}", event.id))
    }

    /// Deletes an event.
    pub async fn delete(&self, args: IdArgs) -> Result<()> {
        self.tempo
            .delete_event(&Id { id: args.id })
            .await
            .context("Failed to delete event")?;

        let status = OperationStatus::success(format!("Deleted event {}", args.id));
        self.renderer.render(&status.to_string())
    }

    /// Shows an event's local time in another zone, labeled as converted.
    pub async fn shift(&self, args: ShiftArgs) -> Result<()> {
        let shifted = self
            .tempo
            .shift_event(&ShiftEvent {
                id: args.id,
                zone: args.zone,
            })
            .await
            .context("Failed to shift event")?;

        self.renderer.render(&format!("{shifted}\n"))
    }

    /// Checks whether a zone name resolves.
    pub async fn zone(&self, args: ZoneArgs) -> Result<()> {
        let zone = self
            .tempo
            .check_zone(&args.name)
            .context("Zone check failed")?;

        let status = OperationStatus::success(format!("Zone '{zone}' is valid"));
        self.renderer.render(&status.to_string())
    }
}
