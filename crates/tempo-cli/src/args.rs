//! Command-line argument definitions using clap's derive API.
//!
//! The argument structs stay framework-facing: each handler converts them
//! into the core's parameter types, so clap attributes never leak into
//! `tempo-core`. The `--on-gap`/`--on-fold` flags surface the
//! disambiguation policy with the documented defaults (round gaps
//! forward, take the earlier fold occurrence); `reject` turns either back
//! into a hard error.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use jiff::{civil, Timestamp};
use tempo_core::{DisambiguationPolicy, FoldPolicy, GapPolicy};

/// Main command-line interface for the tempo event tool
///
/// Tempo records events as the wall-clock time you typed plus the IANA
/// time zone you typed it in, deriving a UTC instant for sorting. The
/// stored wall-clock value is what you always get back, no matter how
/// the zone's rules change later.
#[derive(Parser)]
#[command(version, about, name = "tempo")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/tempo/tempo.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the tempo CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Record a new event
    #[command(alias = "a")]
    Add(AddArgs),
    /// List events, ordered by their UTC instant
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show a single event
    Show(ShowArgs),
    /// Change an event's title, date, time, or zone
    Update(UpdateArgs),
    /// Delete an event
    Delete(IdArgs),
    /// Show an event's local time in a different zone (converted view)
    Shift(ShiftArgs),
    /// Check whether a zone name resolves in the rule database
    Zone(ZoneArgs),
}

/// How to treat a wall-clock time skipped by a forward DST transition.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GapArg {
    /// Shift forward past the gap by its length
    Forward,
    /// Shift backward before the gap by its length
    Backward,
    /// Fail with an error
    Reject,
}

/// How to treat a wall-clock time repeated by a backward DST transition.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FoldArg {
    /// Use the first occurrence
    Earlier,
    /// Use the second occurrence
    Later,
    /// Fail with an error
    Reject,
}

/// Shared policy flags for commands that derive a UTC instant.
#[derive(Debug, Clone, Copy, ClapArgs)]
pub struct PolicyArgs {
    /// Handling for times skipped by a DST transition
    #[arg(long, value_enum, default_value_t = GapArg::Forward)]
    pub on_gap: GapArg,

    /// Handling for times repeated by a DST transition
    #[arg(long, value_enum, default_value_t = FoldArg::Earlier)]
    pub on_fold: FoldArg,
}

impl PolicyArgs {
    /// Converts the flags into the core policy type.
    pub fn to_policy(self) -> DisambiguationPolicy {
        DisambiguationPolicy {
            gap: match self.on_gap {
                GapArg::Forward => GapPolicy::RoundForward,
                GapArg::Backward => GapPolicy::RoundBackward,
                GapArg::Reject => GapPolicy::Reject,
            },
            fold: match self.on_fold {
                FoldArg::Earlier => FoldPolicy::Earlier,
                FoldArg::Later => FoldPolicy::Later,
                FoldArg::Reject => FoldPolicy::Reject,
            },
        }
    }
}

/// Arguments for recording a new event.
#[derive(ClapArgs)]
pub struct AddArgs {
    /// Title of the event
    pub title: String,

    /// Calendar date, e.g. 2025-02-07
    #[arg(long)]
    pub date: Option<civil::Date>,

    /// Wall-clock time, e.g. 19:00:00
    #[arg(long)]
    pub time: Option<civil::Time>,

    /// IANA zone name the date and time are written in, e.g. Europe/Berlin
    #[arg(long)]
    pub zone: Option<String>,

    #[command(flatten)]
    pub policy: PolicyArgs,
}

/// Arguments for listing events.
#[derive(ClapArgs)]
pub struct ListArgs {
    /// Only events at or after this UTC instant (RFC 3339)
    #[arg(long)]
    pub from: Option<Timestamp>,

    /// Only events strictly before this UTC instant (RFC 3339)
    #[arg(long)]
    pub to: Option<Timestamp>,

    /// Emit JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

/// Arguments for showing a single event.
#[derive(ClapArgs)]
pub struct ShowArgs {
    /// The ID of the event
    pub id: u64,

    /// Emit JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

/// Arguments for operations that only need an event ID.
#[derive(ClapArgs)]
pub struct IdArgs {
    /// The ID of the event
    pub id: u64,
}

/// Arguments for updating an event.
#[derive(ClapArgs)]
pub struct UpdateArgs {
    /// The ID of the event
    pub id: u64,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New calendar date
    #[arg(long)]
    pub date: Option<civil::Date>,

    /// New wall-clock time
    #[arg(long)]
    pub time: Option<civil::Time>,

    /// New IANA zone name
    #[arg(long)]
    pub zone: Option<String>,

    #[command(flatten)]
    pub policy: PolicyArgs,
}

/// Arguments for the converted cross-zone view.
#[derive(ClapArgs)]
pub struct ShiftArgs {
    /// The ID of the event
    pub id: u64,

    /// Target IANA zone name
    pub zone: String,
}

/// Arguments for checking a zone name.
#[derive(ClapArgs)]
pub struct ZoneArgs {
    /// IANA zone name to check
    pub name: String,
}
