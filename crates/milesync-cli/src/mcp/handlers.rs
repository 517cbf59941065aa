//! MCP tool handler implementations

use std::sync::Arc;

use log::debug;
use milesync_core::{
    display::{CreateResult, Goals, ProgressLogs, SavedAnswers, Templates, UpdateResult},
    params as core,
    templates::list_templates,
    Tracker,
};
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

/// Transparent serde wrapper giving a core parameter type the derives the
/// MCP layer needs, without the core crate depending on rmcp.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type CreateGoal = McpParams<core::CreateGoal>;
pub type ListGoals = McpParams<core::ListGoals>;
pub type UpdateGoalStatus = McpParams<core::UpdateGoalStatus>;
pub type SaveClarification = McpParams<core::SaveClarification>;
pub type DayQuery = McpParams<core::DayQuery>;
pub type CompleteTask = McpParams<core::CompleteTask>;
pub type LogProgress = McpParams<core::LogProgress>;
pub type ProgressRange = McpParams<core::ProgressRange>;
pub type GuidanceQuery = McpParams<core::GuidanceQuery>;
pub type ListTemplates = McpParams<core::ListTemplates>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(body: impl ToString) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(body.to_string())]))
}

/// Tool bodies shared by the server's router.
pub struct McpHandlers {
    tracker: Arc<Tracker>,
}

impl McpHandlers {
    pub fn new(tracker: Arc<Tracker>) -> Self {
        Self { tracker }
    }

    pub async fn create_goal(&self, Parameters(params): Parameters<CreateGoal>) -> McpResult {
        debug!("create_goal: {params:?}");
        let goal = self
            .tracker
            .create_goal(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create goal", &e))?;
        text(CreateResult::new(goal))
    }

    pub async fn list_templates(&self, Parameters(params): Parameters<ListTemplates>) -> McpResult {
        debug!("list_templates: {params:?}");
        let templates = list_templates(params.as_ref())
            .map_err(|e| to_mcp_error("Failed to list templates", &e))?;
        text(Templates(templates))
    }

    pub async fn list_goals(&self, Parameters(params): Parameters<ListGoals>) -> McpResult {
        debug!("list_goals: {params:?}");
        let goals = self
            .tracker
            .list_goals(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list goals", &e))?;
        text(Goals(goals))
    }

    pub async fn show_goal(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_goal: {params:?}");
        let id = params.as_ref().id;
        match self
            .tracker
            .get_goal(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to show goal", &e))?
        {
            Some(goal) => text(goal),
            None => text(format!("Goal {id} not found.")),
        }
    }

    pub async fn update_goal_status(
        &self,
        Parameters(params): Parameters<UpdateGoalStatus>,
    ) -> McpResult {
        debug!("update_goal_status: {params:?}");
        let goal = self
            .tracker
            .update_goal_status(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update goal status", &e))?;
        let message = format!("Goal {} is now {}", goal.id, goal.status);
        text(UpdateResult::new(goal, message))
    }

    pub async fn clarification_questions(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("clarification_questions: {params:?}");
        let questions = self
            .tracker
            .clarification_questions(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get clarification questions", &e))?;
        text(questions)
    }

    pub async fn save_clarification(
        &self,
        Parameters(params): Parameters<SaveClarification>,
    ) -> McpResult {
        debug!("save_clarification: {params:?}");
        let responses = self
            .tracker
            .save_clarification(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to save answers", &e))?;
        text(SavedAnswers {
            goal_id: params.as_ref().goal_id,
            responses,
        })
    }

    pub async fn generate_plan(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("generate_plan: {params:?}");
        let plan = self
            .tracker
            .generate_plan(params.as_ref().id)
            .await
            .map_err(|e| to_mcp_error("Failed to generate plan", &e))?;
        text(CreateResult::new(plan))
    }

    pub async fn show_plan(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_plan: {params:?}");
        let plan = self
            .tracker
            .get_plan(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to show plan", &e))?;
        text(plan)
    }

    pub async fn todays_tasks(&self, Parameters(params): Parameters<DayQuery>) -> McpResult {
        debug!("todays_tasks: {params:?}");
        let day = self
            .tracker
            .tasks_for_day(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get tasks", &e))?;
        text(day)
    }

    pub async fn daily_guidance(&self, Parameters(params): Parameters<GuidanceQuery>) -> McpResult {
        debug!("daily_guidance: {params:?}");
        let guidance = self
            .tracker
            .daily_guidance(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to collect today's tasks", &e))?;
        text(guidance)
    }

    pub async fn complete_task(&self, Parameters(params): Parameters<CompleteTask>) -> McpResult {
        debug!("complete_task: {params:?}");
        let params = params.as_ref();
        let plan = self
            .tracker
            .set_task_completion(params)
            .await
            .map_err(|e| to_mcp_error("Failed to update task", &e))?;

        let state = if params.completed { "done" } else { "not done" };
        let message = format!("Marked task {} as {state}", params.task_id);
        let result = match plan
            .days()
            .find(|d| d.tasks.iter().any(|t| t.id == params.task_id))
        {
            Some(day) => text(UpdateResult::new(day, message)),
            None => text(message),
        };
        result
    }

    pub async fn log_progress(&self, Parameters(params): Parameters<LogProgress>) -> McpResult {
        debug!("log_progress: {params:?}");
        let log = self
            .tracker
            .log_progress(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to log progress", &e))?;
        text(CreateResult::new(log))
    }

    pub async fn progress_logs(&self, Parameters(params): Parameters<ProgressRange>) -> McpResult {
        debug!("progress_logs: {params:?}");
        let logs = self
            .tracker
            .progress_logs(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list progress", &e))?;
        text(ProgressLogs(logs))
    }
}
