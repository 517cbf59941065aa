use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ClarifyCommands, GoalCommands, GuidanceArgs, PlanCommands, ProgressCommands};

/// Turn long-term goals into daily plans and track progress against them
///
/// MileSync breaks a goal into months, weeks and days of concrete tasks,
/// records which tasks are done, and keeps a daily progress log. Plans are
/// outlined by Gemini when `GEMINI_API_KEY` is set; otherwise, or whenever
/// the service fails, a built-in curriculum for the goal's type is used.
#[derive(Parser)]
#[command(version, about, name = "ms")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/milesync/milesync.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Never call the generative text service; always use built-in plans
    #[arg(long, global = true)]
    pub offline: bool,

    /// Seconds to wait for the generative text service before falling back
    #[arg(long, global = true, value_name = "SECS")]
    pub ai_timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the MileSync CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage goals
    #[command(alias = "g")]
    Goal {
        #[command(subcommand)]
        command: GoalCommands,
    },
    /// Ask and answer clarification questions before planning
    #[command(alias = "c")]
    Clarify {
        #[command(subcommand)]
        command: ClarifyCommands,
    },
    /// Generate and work through a goal's plan
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Show today's tasks across all active goals
    #[command(alias = "t")]
    Today(GuidanceArgs),
    /// Log and review daily progress
    #[command(alias = "l")]
    Progress {
        #[command(subcommand)]
        command: ProgressCommands,
    },
    /// Start the MCP server
    Serve,
}
