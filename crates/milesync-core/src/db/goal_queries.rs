//! Goal CRUD operations and queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension, Row};

use super::parse_column;
use crate::{
    error::{DatabaseResultExt, Result},
    models::{Goal, GoalStatus},
    params::NewGoal,
};

const INSERT_GOAL_SQL: &str = "INSERT INTO goals (title, description, goal_type, status, start_date, target_date, total_duration, hours_per_day, current_progress, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, 0, ?9, ?9)";
const GOAL_COLUMNS: &str = "id, title, description, goal_type, status, start_date, target_date, total_duration, hours_per_day, current_progress, created_at, updated_at";
const UPDATE_GOAL_STATUS_SQL: &str =
    "UPDATE goals SET status = ?1, updated_at = ?2 WHERE id = ?3 AND deleted_at IS NULL";
const UPDATE_GOAL_PROGRESS_SQL: &str =
    "UPDATE goals SET current_progress = ?1, updated_at = ?2 WHERE id = ?3 AND deleted_at IS NULL";
const SOFT_DELETE_GOAL_SQL: &str =
    "UPDATE goals SET deleted_at = ?1, updated_at = ?1 WHERE id = ?2 AND deleted_at IS NULL";

fn goal_from_row(row: &Row<'_>) -> rusqlite::Result<Goal> {
    Ok(Goal {
        id: row.get::<_, i64>(0)? as u64,
        title: row.get(1)?,
        description: row.get(2)?,
        goal_type: parse_column(row, 3)?,
        status: parse_column(row, 4)?,
        start_date: parse_column(row, 5)?,
        target_date: parse_column(row, 6)?,
        total_duration: row.get(7)?,
        hours_per_day: row.get(8)?,
        current_progress: row.get(9)?,
        created_at: parse_column(row, 10)?,
        updated_at: parse_column(row, 11)?,
    })
}

impl super::Database {
    /// Inserts a validated goal and returns the stored record.
    pub fn create_goal(&mut self, goal: &NewGoal) -> Result<Goal> {
        let now = Timestamp::now();

        self.connection
            .execute(
                INSERT_GOAL_SQL,
                params![
                    goal.title,
                    goal.description,
                    goal.goal_type.as_str(),
                    GoalStatus::Active.as_str(),
                    goal.start_date.to_string(),
                    goal.target_date.to_string(),
                    goal.total_duration,
                    goal.hours_per_day,
                    now.to_string(),
                ],
            )
            .db_context("Failed to insert goal")?;

        Ok(Goal {
            id: self.connection.last_insert_rowid() as u64,
            title: goal.title.clone(),
            description: goal.description.clone(),
            goal_type: goal.goal_type,
            status: GoalStatus::Active,
            start_date: goal.start_date,
            target_date: goal.target_date,
            total_duration: goal.total_duration,
            hours_per_day: goal.hours_per_day,
            current_progress: 0.0,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a goal by ID. Deleted goals are not returned.
    pub fn get_goal(&self, id: u64) -> Result<Option<Goal>> {
        let sql = format!("SELECT {GOAL_COLUMNS} FROM goals WHERE id = ?1 AND deleted_at IS NULL");
        self.connection
            .query_row(&sql, params![id as i64], goal_from_row)
            .optional()
            .db_context("Failed to query goal")
    }

    /// Lists non-deleted goals, newest first.
    pub fn list_goals(&self, status: Option<GoalStatus>) -> Result<Vec<Goal>> {
        let mut sql = format!("SELECT {GOAL_COLUMNS} FROM goals WHERE deleted_at IS NULL");
        if status.is_some() {
            sql.push_str(" AND status = ?1");
        }
        sql.push_str(" ORDER BY id DESC");

        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare goal query")?;

        let rows = match status {
            Some(status) => stmt.query_map(params![status.as_str()], goal_from_row),
            None => stmt.query_map([], goal_from_row),
        }
        .db_context("Failed to query goals")?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read goal rows")
    }

    /// Sets a goal's status. Returns `false` if the goal does not exist.
    pub fn update_goal_status(&self, id: u64, status: GoalStatus) -> Result<bool> {
        let changed = self
            .connection
            .execute(
                UPDATE_GOAL_STATUS_SQL,
                params![status.as_str(), Timestamp::now().to_string(), id as i64],
            )
            .db_context("Failed to update goal status")?;
        Ok(changed > 0)
    }

    /// Stores a goal's aggregate progress percentage.
    pub fn update_goal_progress(&self, id: u64, progress: f64) -> Result<bool> {
        let changed = self
            .connection
            .execute(
                UPDATE_GOAL_PROGRESS_SQL,
                params![progress, Timestamp::now().to_string(), id as i64],
            )
            .db_context("Failed to update goal progress")?;
        Ok(changed > 0)
    }

    /// Soft-deletes a goal. Returns `false` if it was missing or already
    /// deleted.
    pub fn delete_goal(&self, id: u64) -> Result<bool> {
        let changed = self
            .connection
            .execute(
                SOFT_DELETE_GOAL_SQL,
                params![Timestamp::now().to_string(), id as i64],
            )
            .db_context("Failed to delete goal")?;
        Ok(changed > 0)
    }
}
