//! Plan storage: one JSON tree per goal, replaced as a unit.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    models::GoalPlan,
};

const SELECT_PLAN_VERSION_SQL: &str = "SELECT version FROM goal_plans WHERE goal_id = ?1";
const INSERT_PLAN_SQL: &str = "INSERT INTO goal_plans (goal_id, structure, version, generated_via, generated_at, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)";
const REPLACE_PLAN_SQL: &str = "UPDATE goal_plans SET structure = ?2, version = ?3, generated_via = ?4, generated_at = ?5, updated_at = ?6 WHERE goal_id = ?1";
const UPDATE_PLAN_STRUCTURE_SQL: &str =
    "UPDATE goal_plans SET structure = ?2, updated_at = ?3 WHERE goal_id = ?1";
const SELECT_PLAN_SQL: &str = "SELECT structure FROM goal_plans WHERE goal_id = ?1";

impl super::Database {
    /// Stores a freshly generated plan for its goal.
    ///
    /// The first plan for a goal is stored as version 1; each later call
    /// replaces the tree and bumps the version by one. The stored plan is
    /// returned with its final version.
    pub fn upsert_plan(&mut self, plan: &GoalPlan) -> Result<GoalPlan> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let previous: Option<u32> = tx
            .query_row(SELECT_PLAN_VERSION_SQL, params![plan.goal_id as i64], |row| {
                row.get(0)
            })
            .optional()
            .db_context("Failed to query plan version")?;

        let mut stored = plan.clone();
        stored.version = previous.map_or(1, |v| v + 1);
        let json = serde_json::to_string(&stored)?;
        let now = Timestamp::now().to_string();

        let sql = if previous.is_some() {
            REPLACE_PLAN_SQL
        } else {
            INSERT_PLAN_SQL
        };
        tx.execute(
            sql,
            params![
                stored.goal_id as i64,
                json,
                stored.version,
                stored.generated_via.as_str(),
                stored.generated_at.to_string(),
                now,
            ],
        )
        .db_context("Failed to store plan")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(stored)
    }

    /// Overwrites the stored tree without touching the version. Used for
    /// task completion updates.
    pub fn update_plan_structure(&self, plan: &GoalPlan) -> Result<bool> {
        let json = serde_json::to_string(plan)?;
        let changed = self
            .connection
            .execute(
                UPDATE_PLAN_STRUCTURE_SQL,
                params![plan.goal_id as i64, json, Timestamp::now().to_string()],
            )
            .db_context("Failed to update plan")?;
        Ok(changed > 0)
    }

    /// The stored plan for a goal, if one has been generated.
    pub fn get_plan(&self, goal_id: u64) -> Result<Option<GoalPlan>> {
        let json: Option<String> = self
            .connection
            .query_row(SELECT_PLAN_SQL, params![goal_id as i64], |row| row.get(0))
            .optional()
            .db_context("Failed to query plan")?;

        json.map(|json| serde_json::from_str(&json).map_err(Into::into))
            .transpose()
    }
}
