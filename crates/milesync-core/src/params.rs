//! Parameter structures for tracker operations.
//!
//! These structs are shared by every interface (CLI, MCP) and carry no
//! framework derives beyond serde. Dates, goal types and statuses arrive as
//! strings; each struct's `validate` turns them into typed values and reports
//! problems as [`TrackerError::InvalidInput`].
//!
//! Interface layers wrap or convert into these:
//!
//! ```ignore
//! // CLI
//! impl From<CreateGoalArgs> for CreateGoal { ... }
//!
//! // MCP (with the `schema` feature)
//! async fn create_goal(&self, Parameters(params): Parameters<CreateGoal>) { ... }
//! ```

use jiff::{civil::Date, ToSpan, Zoned};
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TrackerError},
    models::{ClarificationResponse, GoalStatus, GoalType},
    templates::template_by_id,
};

/// Upper bound on a daily commitment.
pub const MAX_HOURS_PER_DAY: f64 = 24.0;

/// Today's date in the system time zone.
pub fn today() -> Date {
    Zoned::now().date()
}

fn parse_date(field: &str, value: &str) -> Result<Date> {
    value.trim().parse::<Date>().map_err(|e| {
        TrackerError::invalid_input(field)
            .with_reason(format!("Expected a YYYY-MM-DD date, got '{value}': {e}"))
    })
}

fn parse_optional_date(field: &str, value: Option<&str>) -> Result<Option<Date>> {
    value.map(|v| parse_date(field, v)).transpose()
}

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the goal to operate on
    pub id: u64,
}

/// Parameters for creating a goal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateGoal {
    /// Title of the goal (required)
    pub title: String,
    /// Optional detailed description
    pub description: Option<String>,
    /// Template to take defaults from, e.g. skill-development
    pub template: Option<String>,
    /// ACADEMIC, SKILL, FITNESS, CAREER, CREATIVE or CUSTOM (default: the
    /// template's type, else CUSTOM)
    pub goal_type: Option<String>,
    /// First day, YYYY-MM-DD (default today)
    pub start_date: Option<String>,
    /// Day the goal should be reached by, YYYY-MM-DD. Required unless a
    /// template supplies a default duration
    pub target_date: Option<String>,
    /// Daily commitment in hours, greater than 0 and at most 24. Required
    /// unless a template supplies a default
    pub hours_per_day: Option<f64>,
}

/// A goal that passed validation and is ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGoal {
    pub title: String,
    pub description: Option<String>,
    pub goal_type: GoalType,
    pub start_date: Date,
    pub target_date: Date,
    pub total_duration: u32,
    pub hours_per_day: f64,
}

impl CreateGoal {
    /// Parse and check the request.
    ///
    /// The duration is the number of days from start to target and must be
    /// positive. A template fills in the type, target date and hours per day
    /// when they are not given.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use milesync_core::params::CreateGoal;
    ///
    /// let params = CreateGoal {
    ///     title: "Run a 10k".to_string(),
    ///     goal_type: Some("fitness".to_string()),
    ///     start_date: Some("2025-01-01".to_string()),
    ///     target_date: Some("2025-03-02".to_string()),
    ///     hours_per_day: Some(1.0),
    ///     ..Default::default()
    /// };
    /// let goal = params.validate()?;
    /// assert_eq!(goal.total_duration, 60);
    /// # Ok::<(), milesync_core::TrackerError>(())
    /// ```
    pub fn validate(&self) -> Result<NewGoal> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TrackerError::invalid_input("title").with_reason("Title cannot be empty"));
        }

        let template = match self.template.as_deref() {
            Some(id) => Some(template_by_id(id).ok_or_else(|| {
                TrackerError::invalid_input("template").with_reason(format!("Unknown template '{id}'"))
            })?),
            None => None,
        };

        let goal_type = match (self.goal_type.as_deref(), template) {
            (Some(label), _) => label
                .parse::<GoalType>()
                .map_err(|e| TrackerError::invalid_input("goal_type").with_reason(e))?,
            (None, Some(t)) => t.goal_type,
            (None, None) => GoalType::default(),
        };

        let start_date = parse_optional_date("start_date", self.start_date.as_deref())?
            .unwrap_or_else(today);
        let target_date = match (self.target_date.as_deref(), template) {
            (Some(value), _) => parse_date("target_date", value)?,
            (None, Some(t)) => start_date.checked_add(i64::from(t.default_duration).days())?,
            (None, None) => {
                return Err(TrackerError::invalid_input("target_date")
                    .with_reason("A target date is required unless a template is given"))
            }
        };

        let hours_per_day = match (self.hours_per_day, template) {
            (Some(hours), _) => hours,
            (None, Some(t)) => t.default_hours_per_day,
            (None, None) => {
                return Err(TrackerError::invalid_input("hours_per_day")
                    .with_reason("Hours per day are required unless a template is given"))
            }
        };

        let days = start_date.until(target_date)?.get_days();
        if days <= 0 {
            return Err(TrackerError::invalid_input("target_date")
                .with_reason("Target date must be after the start date"));
        }

        if !hours_per_day.is_finite() || hours_per_day <= 0.0 || hours_per_day > MAX_HOURS_PER_DAY {
            return Err(TrackerError::invalid_input("hours_per_day")
                .with_reason("Hours per day must be greater than 0 and at most 24"));
        }

        Ok(NewGoal {
            title: title.to_string(),
            description: self
                .description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string),
            goal_type,
            start_date,
            target_date,
            total_duration: days as u32,
            hours_per_day,
        })
    }
}

/// Parameters for listing goals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListGoals {
    /// Only list goals with this status (ACTIVE, PAUSED, COMPLETED, CANCELLED)
    pub status: Option<String>,
}

impl ListGoals {
    pub fn validate(&self) -> Result<Option<GoalStatus>> {
        self.status
            .as_deref()
            .map(|s| {
                s.parse::<GoalStatus>()
                    .map_err(|e| TrackerError::invalid_input("status").with_reason(e))
            })
            .transpose()
    }
}

/// Parameters for changing a goal's status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateGoalStatus {
    /// Goal ID
    pub id: u64,
    /// ACTIVE, PAUSED, COMPLETED or CANCELLED
    pub status: String,
}

impl UpdateGoalStatus {
    pub fn validate(&self) -> Result<GoalStatus> {
        self.status
            .parse::<GoalStatus>()
            .map_err(|e| TrackerError::invalid_input("status").with_reason(e))
    }
}

/// Parameters for recording clarification answers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SaveClarification {
    /// Goal ID
    pub goal_id: u64,
    /// Question/answer pairs in the order they were asked
    pub responses: Vec<ClarificationResponse>,
}

impl SaveClarification {
    pub fn validate(&self) -> Result<()> {
        if self.responses.is_empty() {
            return Err(TrackerError::invalid_input("responses")
                .with_reason("At least one answer is required"));
        }
        if let Some(index) = self
            .responses
            .iter()
            .position(|r| r.question.trim().is_empty() || r.answer.trim().is_empty())
        {
            return Err(TrackerError::invalid_input("responses")
                .with_reason(format!("Response {} has an empty question or answer", index + 1)));
        }
        Ok(())
    }
}

/// Parameters for looking up one day of a goal's plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct DayQuery {
    /// Goal ID
    pub goal_id: u64,
    /// Day to show, YYYY-MM-DD (default today)
    pub date: Option<String>,
}

impl DayQuery {
    pub fn validate(&self) -> Result<Date> {
        Ok(parse_optional_date("date", self.date.as_deref())?.unwrap_or_else(today))
    }
}

/// Parameters for listing goal templates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListTemplates {
    /// Only list templates of this type (ACADEMIC, SKILL, FITNESS, CAREER, CREATIVE)
    pub goal_type: Option<String>,
}

impl ListTemplates {
    pub fn validate(&self) -> Result<Option<GoalType>> {
        self.goal_type
            .as_deref()
            .map(|t| {
                t.parse::<GoalType>()
                    .map_err(|e| TrackerError::invalid_input("goal_type").with_reason(e))
            })
            .transpose()
    }
}

/// Parameters for the cross-goal guidance of one day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct GuidanceQuery {
    /// Day to show, YYYY-MM-DD (default today)
    pub date: Option<String>,
}

impl GuidanceQuery {
    pub fn validate(&self) -> Result<Date> {
        Ok(parse_optional_date("date", self.date.as_deref())?.unwrap_or_else(today))
    }
}

fn default_completed() -> bool {
    true
}

/// Parameters for marking a plan task done or not done.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CompleteTask {
    /// Goal ID
    pub goal_id: u64,
    /// Task ID from the plan, e.g. m1w2d3t1
    pub task_id: String,
    /// New completion state (default true)
    #[serde(default = "default_completed")]
    pub completed: bool,
}

/// Parameters for logging a day's progress.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct LogProgress {
    /// Goal ID
    pub goal_id: u64,
    /// Day being logged, YYYY-MM-DD (default today)
    pub date: Option<String>,
    /// Tasks finished that day
    pub tasks_completed: u32,
    /// Tasks scheduled that day, must be greater than 0
    pub total_tasks: u32,
    /// Hours actually spent
    #[serde(default)]
    pub hours_logged: f64,
    /// Free-form notes
    pub notes: Option<String>,
    /// Anything that got in the way
    pub blockers: Option<String>,
}

impl LogProgress {
    /// Check counts and hours, returning the resolved log date.
    pub fn validate(&self) -> Result<Date> {
        if self.total_tasks == 0 {
            return Err(TrackerError::invalid_input("total_tasks")
                .with_reason("Total tasks must be greater than 0"));
        }
        if self.tasks_completed > self.total_tasks {
            return Err(TrackerError::invalid_input("tasks_completed")
                .with_reason("Completed tasks cannot exceed total tasks"));
        }
        if !self.hours_logged.is_finite() || self.hours_logged < 0.0 {
            return Err(TrackerError::invalid_input("hours_logged")
                .with_reason("Hours logged must be zero or more"));
        }
        Ok(parse_optional_date("date", self.date.as_deref())?.unwrap_or_else(today))
    }

    /// `tasks_completed / total_tasks * 100`.
    pub fn completion_rate(&self) -> f64 {
        f64::from(self.tasks_completed) / f64::from(self.total_tasks) * 100.0
    }
}

/// Parameters for listing progress logs in an inclusive date range.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ProgressRange {
    /// Goal ID
    pub goal_id: u64,
    /// Earliest day, YYYY-MM-DD
    pub from: Option<String>,
    /// Latest day, YYYY-MM-DD
    pub to: Option<String>,
}

impl ProgressRange {
    pub fn validate(&self) -> Result<(Option<Date>, Option<Date>)> {
        let from = parse_optional_date("from", self.from.as_deref())?;
        let to = parse_optional_date("to", self.to.as_deref())?;
        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                return Err(TrackerError::invalid_input("from")
                    .with_reason("Range start is after range end"));
            }
        }
        Ok((from, to))
    }
}
