//! Goal model and the clarification exchange attached to it.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{GoalStatus, GoalType};

/// A long-term objective with a date range and a daily time budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Unique identifier for the goal
    pub id: u64,

    /// Short title, e.g. "Learn full-stack development"
    pub title: String,

    /// Optional free-text description
    pub description: Option<String>,

    pub goal_type: GoalType,

    #[serde(default)]
    pub status: GoalStatus,

    /// First day of the goal
    pub start_date: Date,

    /// Day the goal should be reached by
    pub target_date: Date,

    /// Number of days between start and target
    pub total_duration: u32,

    /// Daily commitment in hours
    pub hours_per_day: f64,

    /// Mean completion rate of logged days, 0-100
    #[serde(default)]
    pub current_progress: f64,

    /// Timestamp when the goal was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the goal was last modified (UTC)
    pub updated_at: Timestamp,
}

/// One answered clarification question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct ClarificationResponse {
    pub question: String,
    pub answer: String,
}

/// Expected shape of the answer to a clarification question.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnswerKind {
    #[default]
    Text,
    Choice,
    Number,
}

/// A question asked before plan generation to personalize the plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClarificationQuestion {
    pub id: String,
    pub question: String,
    /// Why the question helps
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub expected_answer_type: AnswerKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
}
