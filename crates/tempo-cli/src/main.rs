//! Tempo CLI application.
//!
//! Thin binary wiring: parse arguments, build the coordinator with the
//! policy the subcommand asked for, dispatch to the handlers in [`cli`].

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use tempo_core::{DisambiguationPolicy, TempoBuilder};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    // Only commands that derive a UTC instant carry policy flags; every
    // other command runs strict, which for them is a no-op.
    let policy = match &command {
        Some(Commands::Add(args)) => args.policy.to_policy(),
        Some(Commands::Update(args)) => args.policy.to_policy(),
        _ => DisambiguationPolicy::STRICT,
    };

    let tempo = TempoBuilder::new()
        .with_database_path(database_file)
        .with_policy(policy)
        .build()
        .await
        .context("Failed to initialize tempo")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(tempo, renderer);

    info!("tempo started");

    match command {
        Some(Commands::Add(args)) => cli.add(args).await,
        Some(Commands::List(args)) => cli.list(args).await,
        Some(Commands::Show(args)) => cli.show(args).await,
        Some(Commands::Update(args)) => cli.update(args).await,
        Some(Commands::Delete(args)) => cli.delete(args).await,
        Some(Commands::Shift(args)) => cli.shift(args).await,
        Some(Commands::Zone(args)) => cli.zone(args).await,
        None => cli.list(args::ListArgs { from: None, to: None, json: false }).await,
    }
}
