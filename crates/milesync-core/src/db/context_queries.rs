//! Clarification answers attached to a goal.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    models::ClarificationResponse,
};

const UPSERT_CONTEXT_SQL: &str = "INSERT INTO goal_contexts (goal_id, responses, created_at, updated_at) VALUES (?1, ?2, ?3, ?3) ON CONFLICT(goal_id) DO UPDATE SET responses = excluded.responses, updated_at = excluded.updated_at";
const SELECT_CONTEXT_SQL: &str = "SELECT responses FROM goal_contexts WHERE goal_id = ?1";

impl super::Database {
    /// Replaces the stored answers for a goal.
    pub fn save_clarification(&self, goal_id: u64, responses: &[ClarificationResponse]) -> Result<()> {
        let json = serde_json::to_string(responses)?;
        self.connection
            .execute(
                UPSERT_CONTEXT_SQL,
                params![goal_id as i64, json, Timestamp::now().to_string()],
            )
            .db_context("Failed to save clarification answers")?;
        Ok(())
    }

    /// Stored answers for a goal, empty when none were saved.
    pub fn get_clarification(&self, goal_id: u64) -> Result<Vec<ClarificationResponse>> {
        let json: Option<String> = self
            .connection
            .query_row(SELECT_CONTEXT_SQL, params![goal_id as i64], |row| row.get(0))
            .optional()
            .db_context("Failed to query clarification answers")?;

        match json {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }
}
