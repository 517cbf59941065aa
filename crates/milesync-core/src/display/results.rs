//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::{
    models::{ClarificationResponse, Goal, GoalPlan, ProgressLog},
    tracker::plan_ops::{DailyGuidance, DayTasks},
};

/// Wrapper type for displaying the result of create operations.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Goal> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created goal with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<ProgressLog> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Logged progress for goal {}", self.resource.goal_id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<GoalPlan> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plan = &self.resource;
        writeln!(
            f,
            "Generated plan v{} for goal {}: {} days across {} months",
            plan.version, plan.goal_id, plan.total_days, plan.total_months
        )?;
        writeln!(f)?;
        write!(f, "{plan}")
    }
}

/// Wrapper type for displaying the result of update operations.
pub struct UpdateResult<T> {
    pub resource: T,
    pub message: String,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T, message: impl Into<String>) -> Self {
        Self {
            resource,
            message: message.into(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for UpdateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.message)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Goal> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deleted goal {}: {}", self.resource.id, self.resource.title)
    }
}

/// Saved clarification answers for a goal.
pub struct SavedAnswers {
    pub goal_id: u64,
    pub responses: Vec<ClarificationResponse>,
}

impl fmt::Display for SavedAnswers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Saved {} answers for goal {}",
            self.responses.len(),
            self.goal_id
        )?;
        writeln!(f)?;
        for response in &self.responses {
            writeln!(f, "- **{}** {}", response.question, response.answer)?;
        }
        Ok(())
    }
}

impl fmt::Display for DayTasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.day {
            Some(day) => write!(f, "{day}"),
            None => writeln!(
                f,
                "Nothing scheduled for goal {} on {}.",
                self.goal_id, self.date
            ),
        }
    }
}

impl fmt::Display for DailyGuidance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total_goals == 0 {
            return writeln!(f, "No active goals found. Create a goal to get started!");
        }

        writeln!(f, "# Today's guidance ({})", self.date)?;
        writeln!(f)?;
        writeln!(
            f,
            "{}/{} active goals have tasks today.",
            self.goals_with_tasks(),
            self.total_goals
        )?;
        for entry in &self.goals {
            writeln!(f)?;
            writeln!(
                f,
                "## Goal {}: {} ({})",
                entry.goal_id, entry.goal_title, entry.goal_type
            )?;
            writeln!(f)?;
            write!(f, "{}", entry.day)?;
        }
        Ok(())
    }
}
