//! Daily progress log model.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

/// What was achieved on one day of a goal. One row per goal and date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressLog {
    pub id: u64,
    pub goal_id: u64,
    pub log_date: Date,
    pub tasks_completed: u32,
    pub total_tasks: u32,
    pub hours_logged: f64,
    /// `tasks_completed / total_tasks * 100`
    pub completion_rate: f64,
    pub notes: Option<String>,
    pub blockers: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
