//! Goal operations for the Tracker.

use log::info;

use super::Tracker;
use crate::{
    db::Database,
    error::{Result, TrackerError},
    models::Goal,
    params::{CreateGoal, Id, ListGoals, UpdateGoalStatus},
};

/// Load a goal or fail with `GoalNotFound`.
pub(crate) fn require_goal(db: &Database, id: u64) -> Result<Goal> {
    db.get_goal(id)?.ok_or(TrackerError::GoalNotFound { id })
}

impl Tracker {
    /// Creates a goal. The duration is derived from the start and target
    /// dates.
    pub async fn create_goal(&self, params: &CreateGoal) -> Result<Goal> {
        let new_goal = params.validate()?;

        let goal = self.with_db(move |db| db.create_goal(&new_goal)).await?;
        info!("Created goal {} ({} days)", goal.id, goal.total_duration);
        Ok(goal)
    }

    /// Retrieves a goal by its ID.
    pub async fn get_goal(&self, params: &Id) -> Result<Option<Goal>> {
        let id = params.id;
        self.with_db(move |db| db.get_goal(id)).await
    }

    /// Lists goals, newest first, optionally filtered by status.
    pub async fn list_goals(&self, params: &ListGoals) -> Result<Vec<Goal>> {
        let status = params.validate()?;
        self.with_db(move |db| db.list_goals(status)).await
    }

    /// Changes a goal's status and returns the updated goal.
    pub async fn update_goal_status(&self, params: &UpdateGoalStatus) -> Result<Goal> {
        let status = params.validate()?;
        let id = params.id;

        self.with_db(move |db| {
            if !db.update_goal_status(id, status)? {
                return Err(TrackerError::GoalNotFound { id });
            }
            require_goal(db, id)
        })
        .await
    }

    /// Soft-deletes a goal, returning the goal as it was before deletion.
    pub async fn delete_goal(&self, params: &Id) -> Result<Goal> {
        let id = params.id;

        let goal = self
            .with_db(move |db| {
                let goal = require_goal(db, id)?;
                db.delete_goal(id)?;
                Ok(goal)
            })
            .await?;
        info!("Deleted goal {id}");
        Ok(goal)
    }
}
