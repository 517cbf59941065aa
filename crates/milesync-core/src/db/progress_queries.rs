//! Daily progress logs.

use jiff::{civil::Date, Timestamp};
use rusqlite::{params, Row, ToSql};

use super::parse_column;
use crate::{
    error::{DatabaseResultExt, Result},
    models::ProgressLog,
    params::LogProgress,
};

const UPSERT_PROGRESS_SQL: &str = "INSERT INTO progress_logs (goal_id, log_date, tasks_completed, total_tasks, hours_logged, completion_rate, notes, blockers, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9) \
    ON CONFLICT(goal_id, log_date) DO UPDATE SET tasks_completed = excluded.tasks_completed, total_tasks = excluded.total_tasks, hours_logged = excluded.hours_logged, completion_rate = excluded.completion_rate, notes = excluded.notes, blockers = excluded.blockers, updated_at = excluded.updated_at";
const PROGRESS_COLUMNS: &str = "id, goal_id, log_date, tasks_completed, total_tasks, hours_logged, completion_rate, notes, blockers, created_at, updated_at";
const AVERAGE_COMPLETION_SQL: &str =
    "SELECT AVG(completion_rate) FROM progress_logs WHERE goal_id = ?1";

fn progress_from_row(row: &Row<'_>) -> rusqlite::Result<ProgressLog> {
    Ok(ProgressLog {
        id: row.get::<_, i64>(0)? as u64,
        goal_id: row.get::<_, i64>(1)? as u64,
        log_date: parse_column(row, 2)?,
        tasks_completed: row.get(3)?,
        total_tasks: row.get(4)?,
        hours_logged: row.get(5)?,
        completion_rate: row.get(6)?,
        notes: row.get(7)?,
        blockers: row.get(8)?,
        created_at: parse_column(row, 9)?,
        updated_at: parse_column(row, 10)?,
    })
}

impl super::Database {
    /// Records the log for `(goal, log_date)`, replacing any earlier entry
    /// for that day, and returns the stored row.
    pub fn upsert_progress(&mut self, log: &LogProgress, log_date: Date) -> Result<ProgressLog> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            UPSERT_PROGRESS_SQL,
            params![
                log.goal_id as i64,
                log_date.to_string(),
                log.tasks_completed,
                log.total_tasks,
                log.hours_logged,
                log.completion_rate(),
                log.notes,
                log.blockers,
                Timestamp::now().to_string(),
            ],
        )
        .db_context("Failed to store progress log")?;

        let sql = format!(
            "SELECT {PROGRESS_COLUMNS} FROM progress_logs WHERE goal_id = ?1 AND log_date = ?2"
        );
        let stored = tx
            .query_row(
                &sql,
                params![log.goal_id as i64, log_date.to_string()],
                progress_from_row,
            )
            .db_context("Failed to read progress log")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(stored)
    }

    /// Logs for a goal within an optional inclusive date range, newest first.
    pub fn list_progress(
        &self,
        goal_id: u64,
        from: Option<Date>,
        to: Option<Date>,
    ) -> Result<Vec<ProgressLog>> {
        let mut sql = format!("SELECT {PROGRESS_COLUMNS} FROM progress_logs WHERE goal_id = ?");
        let mut values: Vec<Box<dyn ToSql>> = vec![Box::new(goal_id as i64)];

        if let Some(from) = from {
            sql.push_str(" AND log_date >= ?");
            values.push(Box::new(from.to_string()));
        }
        if let Some(to) = to {
            sql.push_str(" AND log_date <= ?");
            values.push(Box::new(to.to_string()));
        }
        sql.push_str(" ORDER BY log_date DESC");

        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare progress query")?;

        let refs: Vec<&dyn ToSql> = values.iter().map(|b| &**b).collect();
        let rows = stmt
            .query_map(&refs[..], progress_from_row)
            .db_context("Failed to query progress logs")?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read progress rows")
    }

    /// Mean completion rate over all of a goal's logs, 0 when there are none.
    pub fn average_completion_rate(&self, goal_id: u64) -> Result<f64> {
        let average: Option<f64> = self
            .connection
            .query_row(AVERAGE_COMPLETION_SQL, params![goal_id as i64], |row| row.get(0))
            .db_context("Failed to compute completion rate")?;
        Ok(average.unwrap_or(0.0))
    }
}
