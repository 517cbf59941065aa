//! MileSync CLI Application
//!
//! Command-line interface and MCP server for the MileSync goal tracker.

mod args;
mod cli;
mod mcp;
mod renderer;

use std::time::Duration;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, MileSyncMcpServer};
use milesync_core::{params::ListGoals, AiConfig, TrackerBuilder};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        offline,
        ai_timeout,
        command,
    } = Args::parse();

    let mut ai_config = AiConfig::from_env();
    if offline {
        ai_config = ai_config.offline();
    }
    if let Some(secs) = ai_timeout {
        ai_config = ai_config.with_timeout(Duration::from_secs(secs));
    }

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .with_ai_config(ai_config)
        .build()
        .await
        .context("Failed to initialize tracker")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("MileSync started with {} generator", tracker.provider());

    match command {
        Some(Goal { command }) => {
            Cli::new(tracker, renderer)
                .handle_goal_command(command)
                .await
        }
        Some(Clarify { command }) => {
            Cli::new(tracker, renderer)
                .handle_clarify_command(command)
                .await
        }
        Some(Plan { command }) => {
            Cli::new(tracker, renderer)
                .handle_plan_command(command)
                .await
        }
        Some(Today(args)) => Cli::new(tracker, renderer).daily_guidance(args).await,
        Some(Progress { command }) => {
            Cli::new(tracker, renderer)
                .handle_progress_command(command)
                .await
        }
        Some(Serve) => {
            info!("Starting MileSync MCP server");
            run_stdio_server(MileSyncMcpServer::new(tracker))
                .await
                .context("MCP server failed")
        }
        None => {
            Cli::new(tracker, renderer)
                .list_goals(&ListGoals::default())
                .await
        }
    }
}
