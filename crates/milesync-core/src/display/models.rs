//! Display implementations for domain models.
//!
//! Everything renders as markdown so the CLI can style it with termimad and
//! MCP clients can show it as-is.

use std::fmt;

use super::datetime::{Hours, LocalDateTime};
use crate::models::{
    ClarificationQuestion, DailyTask, DayPlan, GeneratedVia, Goal, GoalPlan, GoalStatus, GoalType,
    MonthPlan, ProgressLog, WeekPlan,
};

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for GeneratedVia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;
        writeln!(f, "- Type: {}", self.goal_type)?;
        writeln!(f, "- Status: {}", self.status)?;
        writeln!(
            f,
            "- Dates: {} → {} ({} days)",
            self.start_date, self.target_date, self.total_duration
        )?;
        writeln!(f, "- Daily commitment: {}", Hours(self.hours_per_day))?;
        writeln!(f, "- Progress: {:.1}%", self.current_progress)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }
        Ok(())
    }
}

impl fmt::Display for DailyTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.completed { "x" } else { " " };
        writeln!(
            f,
            "- [{mark}] **{}** `{}` ({})",
            self.title,
            self.id,
            Hours(self.duration)
        )?;
        if !self.description.is_empty() {
            writeln!(f, "  {}", self.description)?;
        }
        Ok(())
    }
}

impl fmt::Display for DayPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let done = if self.completed { " ✓" } else { "" };
        writeln!(f, "### {} ({}){done}", self.title, self.date)?;
        writeln!(f)?;
        writeln!(f, "Focus: {} · {}", self.focus, Hours(self.total_hours))?;
        writeln!(f)?;
        for task in &self.tasks {
            write!(f, "{task}")?;
        }
        Ok(())
    }
}

impl fmt::Display for WeekPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}** ({} → {}): {} · {}/{} days done",
            self.title,
            self.start_date,
            self.end_date,
            self.objective,
            self.completed_days,
            self.days.len()
        )
    }
}

impl fmt::Display for MonthPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Month {}: {}", self.month_number, self.title)?;
        writeln!(f)?;
        writeln!(
            f,
            "{} → {} · {} · Milestone: {}",
            self.start_date,
            self.end_date,
            Hours(self.total_hours),
            self.milestone
        )?;
        writeln!(f)?;
        for week in &self.weeks {
            write!(f, "{week}")?;
        }
        Ok(())
    }
}

impl fmt::Display for GoalPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Plan for goal {} (v{})", self.goal_id, self.version)?;
        writeln!(f)?;
        writeln!(
            f,
            "- Length: {} months, {} weeks, {} days",
            self.total_months, self.total_weeks, self.total_days
        )?;
        writeln!(f, "- Total effort: {}", Hours(self.total_hours))?;

        let total = self.tasks().count();
        let done = self.tasks().filter(|t| t.completed).count();
        writeln!(f, "- Tasks done: {done}/{total}")?;
        writeln!(f, "- Generated: {} via {}", LocalDateTime(&self.generated_at), self.generated_via)?;
        if let Some(reason) = &self.fallback_reason {
            writeln!(f, "- Fallback reason: {reason}")?;
        }

        for month in &self.months {
            writeln!(f)?;
            write!(f, "{month}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ProgressLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}: {}/{} tasks ({:.0}%), {}",
            self.log_date,
            self.tasks_completed,
            self.total_tasks,
            self.completion_rate,
            Hours(self.hours_logged)
        )?;
        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }
        if let Some(blockers) = &self.blockers {
            writeln!(f)?;
            writeln!(f, "**Blockers:** {blockers}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ClarificationQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}. **{}**", self.id, self.question)?;
        if !self.context.is_empty() {
            writeln!(f, "   _{}_", self.context)?;
        }
        if let Some(choices) = &self.choices {
            writeln!(f, "   Choices: {}", choices.join(", "))?;
        }
        Ok(())
    }
}
