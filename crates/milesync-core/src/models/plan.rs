//! The generated plan tree: goal → months → weeks → days → tasks.
//!
//! The tree is persisted as one JSON document per goal and replaced as a unit
//! on regeneration. Field names serialize in camelCase so the stored document
//! matches what plan viewers consume.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::GeneratedVia;

/// A single unit of work inside a day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyTask {
    /// `m{month}w{week}d{day}t{task}`, positions local to month/week/day
    pub id: String,
    pub title: String,
    pub description: String,
    /// Hours, fractional
    pub duration: f64,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_block: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_criteria: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    /// Global 1-based position across the whole plan
    pub day_number: u32,
    pub date: Date,
    pub title: String,
    /// Topic label
    pub focus: String,
    pub tasks: Vec<DailyTask>,
    pub total_hours: f64,
    #[serde(default)]
    pub completed: bool,
}

impl DayPlan {
    /// Number of tasks marked completed.
    pub fn completed_tasks(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeekPlan {
    /// 1-based position within the month
    pub week_number: u32,
    pub start_date: Date,
    pub end_date: Date,
    pub title: String,
    pub objective: String,
    pub days: Vec<DayPlan>,
    pub total_hours: f64,
    #[serde(default)]
    pub completed_days: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthPlan {
    pub month_number: u32,
    pub start_date: Date,
    pub end_date: Date,
    pub title: String,
    pub milestone: String,
    pub weeks: Vec<WeekPlan>,
    pub total_hours: f64,
    #[serde(default)]
    pub completed_weeks: u32,
}

/// The persisted plan envelope for one goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalPlan {
    pub goal_id: u64,
    pub months: Vec<MonthPlan>,
    pub total_months: u32,
    pub total_weeks: u32,
    pub total_days: u32,
    pub total_hours: f64,
    pub generated_at: Timestamp,
    /// 1 for a fresh generation; bumped by storage on every regeneration
    pub version: u32,
    pub generated_via: GeneratedVia,
    /// Why the generative path was bypassed, when it was
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
}

impl GoalPlan {
    /// Iterate over every day in plan order.
    pub fn days(&self) -> impl Iterator<Item = &DayPlan> {
        self.months
            .iter()
            .flat_map(|m| m.weeks.iter())
            .flat_map(|w| w.days.iter())
    }

    /// Iterate over every task in plan order.
    pub fn tasks(&self) -> impl Iterator<Item = &DailyTask> {
        self.days().flat_map(|d| d.tasks.iter())
    }

    /// Find the day scheduled on `date`.
    pub fn day_on(&self, date: Date) -> Option<&DayPlan> {
        self.days().find(|d| d.date == date)
    }

    /// Set a task's completion flag and refresh the day/week/month counters.
    ///
    /// Returns `false` when no task carries `task_id`.
    pub fn set_task_completed(&mut self, task_id: &str, completed: bool) -> bool {
        let mut found = false;
        for month in &mut self.months {
            for week in &mut month.weeks {
                for day in &mut week.days {
                    if let Some(task) = day.tasks.iter_mut().find(|t| t.id == task_id) {
                        task.completed = completed;
                        found = true;
                    }
                    day.completed = !day.tasks.is_empty() && day.tasks.iter().all(|t| t.completed);
                }
                week.completed_days = week.days.iter().filter(|d| d.completed).count() as u32;
            }
            month.completed_weeks = month
                .weeks
                .iter()
                .filter(|w| w.completed_days as usize == w.days.len())
                .count() as u32;
        }
        found
    }
}
