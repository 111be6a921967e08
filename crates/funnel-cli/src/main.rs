//! Funnel CLI Application
//!
//! Command-line interface for the Funnel CRM pipeline tool. Every
//! invocation seeds the in-memory backend, signs in as the requested user,
//! and runs one command against the role-filtered data.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use funnel_core::service::InMemoryBackend;
use log::info;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        user,
        no_color,
        command,
    } = Args::parse();

    let backend = InMemoryBackend::seeded();
    let session = backend
        .login(&user)
        .await
        .with_context(|| format!("Failed to sign in as {user}"))?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Funnel started as {}", session.user.name);

    let cli = Cli::new(backend, session, renderer);
    match command {
        Commands::Lead { command } => cli.handle_lead_command(command).await,
        Commands::Opportunity { command } => cli.handle_opportunity_command(command).await,
        Commands::Task { command } => cli.handle_task_command(command).await,
        Commands::Agent { command } => cli.handle_agent_command(command).await,
    }
}
