//! Progress logging for the Tracker.

use super::{goal_ops::require_goal, Tracker};
use crate::{
    error::Result,
    models::ProgressLog,
    params::{LogProgress, ProgressRange},
};

impl Tracker {
    /// Records a day's progress and refreshes the goal's overall progress
    /// to the mean completion rate of all its logs.
    pub async fn log_progress(&self, params: &LogProgress) -> Result<ProgressLog> {
        let log_date = params.validate()?;
        let params = params.clone();

        self.with_db(move |db| {
            require_goal(db, params.goal_id)?;
            let log = db.upsert_progress(&params, log_date)?;
            let average = db.average_completion_rate(params.goal_id)?;
            db.update_goal_progress(params.goal_id, average)?;
            Ok(log)
        })
        .await
    }

    /// Logs for a goal, newest first, within an optional date range.
    pub async fn progress_logs(&self, params: &ProgressRange) -> Result<Vec<ProgressLog>> {
        let (from, to) = params.validate()?;
        let goal_id = params.goal_id;

        self.with_db(move |db| {
            require_goal(db, goal_id)?;
            db.list_progress(goal_id, from, to)
        })
        .await
    }
}
