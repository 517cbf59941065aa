//! High-level tracker API for goals, plans and progress.
//!
//! [`Tracker`] is the entry point used by the CLI and the MCP server. Each
//! operation opens the SQLite database on a blocking thread, so the async
//! callers never block on disk I/O. Plan generation runs the
//! [`Decomposer`](crate::decompose::Decomposer) on the async side first and
//! only touches the database to load inputs and store the result.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │  CLI / MCP   │───▶│   Tracker    │───▶│   Database   │
//! └──────────────┘    └──────┬───────┘    └──────────────┘
//!                            │
//!                            ▼
//!                     ┌──────────────┐    ┌──────────────┐
//!                     │  Decomposer  │───▶│ TextGenerator│
//!                     └──────────────┘    └──────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use milesync_core::{params::CreateGoal, TrackerBuilder, AiConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("goals.db"))
//!     .with_ai_config(AiConfig::default().offline())
//!     .build()
//!     .await?;
//!
//! let goal = tracker
//!     .create_goal(&CreateGoal {
//!         title: "Learn Rust".to_string(),
//!         target_date: Some("2030-01-01".to_string()),
//!         hours_per_day: Some(1.0),
//!         ..Default::default()
//!     })
//!     .await?;
//! let plan = tracker.generate_plan(goal.id).await?;
//! println!("{} days planned", plan.total_days);
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, sync::Arc, time::Duration};

use tokio::task;

use crate::{
    ai::TextGenerator,
    db::Database,
    decompose::Decomposer,
    error::{Result, TrackerError},
};

pub mod builder;
pub mod clarify_ops;
pub mod goal_ops;
pub mod plan_ops;
pub mod progress_ops;

#[cfg(test)]
mod tests;

pub use builder::TrackerBuilder;

/// Main tracker interface.
pub struct Tracker {
    pub(crate) db_path: PathBuf,
    pub(crate) generator: Arc<dyn TextGenerator>,
    pub(crate) decomposer: Decomposer,
    pub(crate) ai_timeout: Duration,
}

impl Tracker {
    pub(crate) fn new(db_path: PathBuf, generator: Arc<dyn TextGenerator>, ai_timeout: Duration) -> Self {
        let decomposer = Decomposer::new(generator.clone()).with_timeout(ai_timeout);
        Self {
            db_path,
            generator,
            decomposer,
            ai_timeout,
        }
    }

    /// Path of the SQLite database backing this tracker.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Provider name of the configured text generator.
    pub fn provider(&self) -> &str {
        self.generator.provider()
    }

    /// Run `f` against a fresh connection on the blocking pool.
    pub(crate) async fn with_db<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            f(&mut db)
        })
        .await
        .map_err(TrackerError::join)?
    }
}
