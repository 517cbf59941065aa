//! Display wrappers for lists.

use std::fmt;

use crate::{
    clarify::Questions,
    display::Hours,
    models::{Goal, GeneratedVia, ProgressLog},
    templates::GoalTemplate,
};

/// A list of goals rendered as a markdown table.
pub struct Goals(pub Vec<Goal>);

impl fmt::Display for Goals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No goals found.");
        }

        writeln!(f, "| ID | Title | Type | Status | Target | Progress |")?;
        writeln!(f, "|---:|---|---|---|---|---:|")?;
        for goal in &self.0 {
            writeln!(
                f,
                "| {} | {} | {} | {} | {} | {:.0}% |",
                goal.id,
                goal.title.replace('|', "\\|"),
                goal.goal_type,
                goal.status,
                goal.target_date,
                goal.current_progress
            )?;
        }
        Ok(())
    }
}

/// Goal templates rendered as a markdown table.
pub struct Templates<'a>(pub Vec<&'a GoalTemplate>);

impl fmt::Display for Templates<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No templates found.");
        }

        writeln!(f, "| ID | Name | Type | Days | Per day |")?;
        writeln!(f, "|---|---|---|---:|---:|")?;
        for template in &self.0 {
            writeln!(
                f,
                "| {} | {} | {} | {} | {} |",
                template.id,
                template.name,
                template.goal_type,
                template.default_duration,
                Hours(template.default_hours_per_day)
            )?;
        }
        Ok(())
    }
}

/// Progress logs, newest first.
pub struct ProgressLogs(pub Vec<ProgressLog>);

impl fmt::Display for ProgressLogs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No progress logged.");
        }
        for (i, log) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{log}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Questions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Clarification questions")?;
        writeln!(f)?;
        for question in &self.questions {
            write!(f, "{question}")?;
        }
        if self.generated_via == GeneratedVia::Fallback {
            writeln!(f)?;
            writeln!(f, "_Standard questions for this goal type._")?;
        }
        Ok(())
    }
}
