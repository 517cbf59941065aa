//! Plan generation, lookup and task completion for the Tracker.

use jiff::civil::Date;
use log::info;

use super::{goal_ops::require_goal, Tracker};
use crate::{
    decompose::DecompositionInput,
    error::{Result, TrackerError},
    models::{DayPlan, GoalPlan, GoalStatus, GoalType},
    params::{CompleteTask, DayQuery, GuidanceQuery, Id},
};

/// One day of a plan, as returned by [`Tracker::tasks_for_day`].
#[derive(Debug, Clone, PartialEq)]
pub struct DayTasks {
    pub goal_id: u64,
    pub date: Date,
    /// `None` when the date falls outside the plan
    pub day: Option<DayPlan>,
}

/// One active goal's scheduled day within [`DailyGuidance`].
#[derive(Debug, Clone, PartialEq)]
pub struct GoalGuidance {
    pub goal_id: u64,
    pub goal_title: String,
    pub goal_type: GoalType,
    pub day: DayPlan,
}

/// What every active goal asks for on one date.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyGuidance {
    pub date: Date,
    /// Number of active goals considered
    pub total_goals: usize,
    /// Active goals with a plan day on `date`, newest goal first
    pub goals: Vec<GoalGuidance>,
}

impl DailyGuidance {
    pub fn goals_with_tasks(&self) -> usize {
        self.goals.len()
    }
}

impl Tracker {
    /// Decomposes the goal into a plan and stores it.
    ///
    /// The first plan for a goal is version 1; every regeneration replaces
    /// the whole tree and bumps the version.
    pub async fn generate_plan(&self, goal_id: u64) -> Result<GoalPlan> {
        let (goal, responses) = self
            .with_db(move |db| {
                let goal = require_goal(db, goal_id)?;
                let responses = db.get_clarification(goal_id)?;
                Ok((goal, responses))
            })
            .await?;

        let input = DecompositionInput::from_goal(&goal, responses);
        let plan = self.decomposer.decompose(&input).await?;

        let stored = self.with_db(move |db| db.upsert_plan(&plan)).await?;
        info!(
            "Stored plan v{} for goal {goal_id} via {}",
            stored.version,
            stored.generated_via.as_str()
        );
        Ok(stored)
    }

    /// The stored plan for a goal.
    pub async fn get_plan(&self, params: &Id) -> Result<GoalPlan> {
        let goal_id = params.id;
        self.with_db(move |db| {
            require_goal(db, goal_id)?;
            db.get_plan(goal_id)?
                .ok_or(TrackerError::PlanNotFound { goal_id })
        })
        .await
    }

    /// The plan day scheduled on the requested date (today by default).
    pub async fn tasks_for_day(&self, params: &DayQuery) -> Result<DayTasks> {
        let date = params.validate()?;
        let plan = self.get_plan(&Id { id: params.goal_id }).await?;

        Ok(DayTasks {
            goal_id: params.goal_id,
            date,
            day: plan.day_on(date).cloned(),
        })
    }

    /// The plan days scheduled on the requested date (today by default)
    /// across all active goals. Goals without a plan, or whose plan does not
    /// cover the date, are counted but not listed.
    pub async fn daily_guidance(&self, params: &GuidanceQuery) -> Result<DailyGuidance> {
        let date = params.validate()?;

        self.with_db(move |db| {
            let active = db.list_goals(Some(GoalStatus::Active))?;
            let total_goals = active.len();

            let mut goals = Vec::new();
            for goal in active {
                let Some(plan) = db.get_plan(goal.id)? else {
                    continue;
                };
                if let Some(day) = plan.day_on(date) {
                    goals.push(GoalGuidance {
                        goal_id: goal.id,
                        goal_title: goal.title,
                        goal_type: goal.goal_type,
                        day: day.clone(),
                    });
                }
            }

            Ok(DailyGuidance {
                date,
                total_goals,
                goals,
            })
        })
        .await
    }

    /// Marks one task done or not done and stores the tree. The plan
    /// version is left unchanged.
    pub async fn set_task_completion(&self, params: &CompleteTask) -> Result<GoalPlan> {
        let goal_id = params.goal_id;
        let task_id = params.task_id.clone();
        let completed = params.completed;

        self.with_db(move |db| {
            require_goal(db, goal_id)?;
            let mut plan = db
                .get_plan(goal_id)?
                .ok_or(TrackerError::PlanNotFound { goal_id })?;

            if !plan.set_task_completed(&task_id, completed) {
                return Err(TrackerError::TaskNotFound { goal_id, task_id });
            }
            db.update_plan_structure(&plan)?;
            Ok(plan)
        })
        .await
    }
}
