//! Core library for the MileSync goal tracker.
//!
//! MileSync turns a long-term goal (a title, a type, a date range and a daily
//! time budget) into a dated month → week → day → task plan, then tracks
//! task completion and daily progress against it.
//!
//! - [`decompose`]: the plan generation pipeline. A generative text service
//!   proposes a month/topic outline; a canned per-type outline replaces it
//!   whenever that fails, so generation always succeeds for valid input.
//! - [`tracker`]: the async facade used by the CLI and MCP server, backed
//!   by SQLite ([`db`]).
//! - [`display`]: markdown rendering for models and operation results.
//!
//! # Quick Start
//!
//! ```rust
//! use milesync_core::{params::{CreateGoal, DayQuery}, AiConfig, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("goals.db"))
//!     .with_ai_config(AiConfig::from_env())
//!     .build()
//!     .await?;
//!
//! let goal = tracker
//!     .create_goal(&CreateGoal {
//!         title: "Run a half marathon".to_string(),
//!         goal_type: Some("FITNESS".to_string()),
//!         target_date: Some("2030-06-01".to_string()),
//!         hours_per_day: Some(1.0),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let plan = tracker.generate_plan(goal.id).await?;
//! println!("{plan}");
//!
//! let today = tracker
//!     .tasks_for_day(&DayQuery { goal_id: goal.id, date: None })
//!     .await?;
//! println!("{today}");
//! # Ok(())
//! # }
//! ```

pub mod ai;
pub mod clarify;
pub mod config;
pub mod db;
pub mod decompose;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod templates;
pub mod tracker;

pub use ai::{AiError, GeminiClient, OfflineGenerator, TextGenerator};
pub use config::AiConfig;
pub use db::Database;
pub use decompose::{Decomposer, DecompositionInput, Timeline};
pub use display::{
    CreateResult, DeleteResult, Goals, ProgressLogs, SavedAnswers, Templates, UpdateResult,
};
pub use error::{Result, TrackerError};
pub use models::{
    ClarificationQuestion, ClarificationResponse, DailyTask, DayPlan, GeneratedVia, Goal,
    GoalPlan, GoalStatus, GoalType, MonthPlan, ProgressLog, WeekPlan,
};
pub use params::{
    CompleteTask, CreateGoal, DayQuery, GuidanceQuery, Id, ListGoals, ListTemplates, LogProgress,
    ProgressRange, SaveClarification, UpdateGoalStatus,
};
pub use templates::{list_templates, template_by_id, templates_by_type, GoalTemplate, TEMPLATES};
pub use tracker::{
    plan_ops::{DailyGuidance, DayTasks, GoalGuidance},
    Tracker, TrackerBuilder,
};
