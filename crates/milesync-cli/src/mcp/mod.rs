//! MCP server for MileSync
//!
//! Exposes goal, plan and progress operations as Model Context Protocol
//! tools over stdio so assistants can manage goals on a user's behalf.

use std::{future::Future, sync::Arc};

use anyhow::Result;
use log::{debug, error, info};
use milesync_core::Tracker;
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{
    CompleteTask, CreateGoal, DayQuery, GuidanceQuery, Id, ListGoals, ListTemplates, LogProgress,
    McpHandlers, McpResult, ProgressRange, SaveClarification, UpdateGoalStatus,
};

const INSTRUCTIONS: &str = r#"MileSync turns long-term goals into dated daily plans and tracks progress against them.

## Core Concepts
- **Goal**: title, type (ACADEMIC, SKILL, FITNESS, CAREER, CREATIVE, CUSTOM), start and target dates, hours per day
- **Plan**: months → weeks → days → tasks covering every day from start to target. Each day has a learning task and a practice task
- **Progress log**: one entry per goal and day with tasks completed, hours and notes

## Workflow
1. `create_goal` with a title, type, target_date (YYYY-MM-DD) and hours_per_day, or with a `template` from `list_templates` that supplies them
2. Optionally `clarification_questions`, then `save_clarification` with the user's answers to personalize the plan
3. `generate_plan` to build the plan. It always succeeds; if the generative service is unavailable a built-in plan for the goal type is used
4. Each day: `daily_guidance` for every active goal (or `todays_tasks` for one), then `complete_task` with the task ID (e.g. m1w2d3t1) and `log_progress`

Regenerating a plan replaces it and bumps its version. Completed task marks are not carried over."#;

/// MCP server for MileSync
#[derive(Clone)]
pub struct MileSyncMcpServer {
    tracker: Arc<Tracker>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl MileSyncMcpServer {
    pub fn new(tracker: Tracker) -> Self {
        Self {
            tracker: Arc::new(tracker),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> McpHandlers {
        McpHandlers::new(self.tracker.clone())
    }

    #[tool(
        name = "create_goal",
        description = "Create a goal. Requires title, plus target_date (YYYY-MM-DD) and hours_per_day (0 < h <= 24) unless a template is given. Optional: template (an ID from list_templates; supplies type, duration and hours), description, goal_type (ACADEMIC, SKILL, FITNESS, CAREER, CREATIVE, CUSTOM; default the template's, else CUSTOM) and start_date (default today). Returns the new goal ID."
    )]
    async fn create_goal(&self, params: Parameters<CreateGoal>) -> McpResult {
        self.handlers().create_goal(params).await
    }

    #[tool(
        name = "list_templates",
        description = "List goal templates with their default duration in days and hours per day. Optionally filter by goal_type."
    )]
    async fn list_templates(&self, params: Parameters<ListTemplates>) -> McpResult {
        self.handlers().list_templates(params).await
    }

    #[tool(
        name = "list_goals",
        description = "List goals newest first. Optionally filter by status (ACTIVE, PAUSED, COMPLETED, CANCELLED)."
    )]
    async fn list_goals(&self, params: Parameters<ListGoals>) -> McpResult {
        self.handlers().list_goals(params).await
    }

    #[tool(
        name = "show_goal",
        description = "Show a goal's details: type, status, dates, daily commitment and overall progress."
    )]
    async fn show_goal(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_goal(params).await
    }

    #[tool(
        name = "update_goal_status",
        description = "Set a goal's status to ACTIVE, PAUSED, COMPLETED or CANCELLED."
    )]
    async fn update_goal_status(&self, params: Parameters<UpdateGoalStatus>) -> McpResult {
        self.handlers().update_goal_status(params).await
    }

    #[tool(
        name = "clarification_questions",
        description = "Get three questions whose answers help personalize a goal's plan. Ask the user, then pass the answers to save_clarification."
    )]
    async fn clarification_questions(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().clarification_questions(params).await
    }

    #[tool(
        name = "save_clarification",
        description = "Save the user's answers to clarification questions as a list of {question, answer} pairs. Replaces earlier answers. Used the next time the plan is generated."
    )]
    async fn save_clarification(&self, params: Parameters<SaveClarification>) -> McpResult {
        self.handlers().save_clarification(params).await
    }

    #[tool(
        name = "generate_plan",
        description = "Generate the goal's full month/week/day plan. Replaces any existing plan and bumps its version. Always succeeds for a valid goal; reports whether the plan came from the generative service or the built-in fallback."
    )]
    async fn generate_plan(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().generate_plan(params).await
    }

    #[tool(
        name = "show_plan",
        description = "Show a goal's stored plan with every month, week, day and task, including task IDs and completion marks."
    )]
    async fn show_plan(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_plan(params).await
    }

    #[tool(
        name = "todays_tasks",
        description = "Show the tasks scheduled for one day of a goal's plan. date is YYYY-MM-DD and defaults to today."
    )]
    async fn todays_tasks(&self, params: Parameters<DayQuery>) -> McpResult {
        self.handlers().todays_tasks(params).await
    }

    #[tool(
        name = "daily_guidance",
        description = "Show the tasks scheduled on one day across every ACTIVE goal, with counts of active goals and of goals that have tasks that day. date is YYYY-MM-DD and defaults to today."
    )]
    async fn daily_guidance(&self, params: Parameters<GuidanceQuery>) -> McpResult {
        self.handlers().daily_guidance(params).await
    }

    #[tool(
        name = "complete_task",
        description = "Mark a plan task as done (completed=true, the default) or not done. task_id is the ID shown in the plan, e.g. m1w2d3t1."
    )]
    async fn complete_task(&self, params: Parameters<CompleteTask>) -> McpResult {
        self.handlers().complete_task(params).await
    }

    #[tool(
        name = "log_progress",
        description = "Log a day's progress: tasks_completed, total_tasks (> 0), optional hours_logged, notes and blockers. date defaults to today; logging the same day again replaces the entry. Updates the goal's overall progress."
    )]
    async fn log_progress(&self, params: Parameters<LogProgress>) -> McpResult {
        self.handlers().log_progress(params).await
    }

    #[tool(
        name = "progress_logs",
        description = "List a goal's progress logs newest first, optionally limited to an inclusive from/to date range (YYYY-MM-DD)."
    )]
    async fn progress_logs(&self, params: Parameters<ProgressRange>) -> McpResult {
        self.handlers().progress_logs(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for MileSyncMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "milesync".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport until the client disconnects or
/// the process receives SIGINT/SIGTERM.
pub async fn run_stdio_server(server: MileSyncMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting MileSync MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use milesync_core::{AiConfig, TrackerBuilder};
    use tempfile::TempDir;

    use super::*;

    async fn server() -> (TempDir, MileSyncMcpServer) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let tracker = TrackerBuilder::new()
            .with_database_path(Some(temp_dir.path().join("mcp.db")))
            .with_ai_config(AiConfig::default().offline())
            .build()
            .await
            .expect("Failed to create tracker");
        (temp_dir, MileSyncMcpServer::new(tracker))
    }

    #[tokio::test]
    async fn test_all_tools_registered() {
        let (_temp_dir, server) = server().await;
        let mut names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "clarification_questions",
                "complete_task",
                "create_goal",
                "daily_guidance",
                "generate_plan",
                "list_goals",
                "list_templates",
                "log_progress",
                "progress_logs",
                "save_clarification",
                "show_goal",
                "show_plan",
                "todays_tasks",
                "update_goal_status",
            ]
        );
    }

    #[tokio::test]
    async fn test_server_info() {
        let (_temp_dir, server) = server().await;
        let info = server.get_info();
        assert_eq!(info.server_info.name, "milesync");
        assert!(info.instructions.unwrap().contains("generate_plan"));
    }
}
